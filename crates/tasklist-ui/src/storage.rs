use tasklist_shared::TaskListConfig;

pub const API_BASE_URL_STORAGE_KEY: &str =
  "tasklist.api_base_url";

/// Config for this page: the base URL saved in local storage when it is
/// usable, the default otherwise.
pub fn load_config() -> TaskListConfig {
  let stored = web_sys::window()
    .and_then(|window| {
      window
        .local_storage()
        .ok()
        .flatten()
    })
    .and_then(|storage| {
      storage
        .get_item(
          API_BASE_URL_STORAGE_KEY
        )
        .ok()
        .flatten()
    });

  config_from_stored(stored.as_deref())
}

fn config_from_stored(
  stored: Option<&str>
) -> TaskListConfig {
  let Some(raw) = stored
    .map(str::trim)
    .filter(|raw| !raw.is_empty())
  else {
    return TaskListConfig::default();
  };

  let config =
    TaskListConfig::with_base_url(raw);
  match config.validate() {
    | Ok(()) => {
      tracing::info!(
        base = %config.api_base_url,
        "using stored api base url"
      );
      config
    }
    | Err(error) => {
      tracing::error!(
        %error,
        "ignoring stored api base url"
      );
      TaskListConfig::default()
    }
  }
}

#[cfg(test)]
mod tests {
  use tasklist_shared::DEFAULT_API_BASE_URL;

  use super::*;

  #[test]
  fn stored_url_wins_when_valid() {
    assert_eq!(
      config_from_stored(Some(
        " /api/tasks "
      ))
      .api_base_url,
      "/api/tasks"
    );
  }

  #[test]
  fn missing_or_bad_url_falls_back() {
    assert_eq!(
      config_from_stored(None)
        .api_base_url,
      DEFAULT_API_BASE_URL
    );
    assert_eq!(
      config_from_stored(Some("  "))
        .api_base_url,
      DEFAULT_API_BASE_URL
    );
    assert_eq!(
      config_from_stored(Some(
        "javascript:alert(1)"
      ))
      .api_base_url,
      DEFAULT_API_BASE_URL
    );
  }
}
