use std::fs;
use std::path::{
  Path,
  PathBuf
};

use anyhow::Context;
use serde::Deserialize;
use tasklist_shared::TaskListConfig;
use tracing::{
  debug,
  info,
  warn
};

pub const CONFIG_ENV: &str =
  "TASKLIST_CONFIG";
pub const BASE_URL_ENV: &str =
  "TASKLIST_API_BASE_URL";

#[derive(Debug, Clone)]
pub struct Config {
  pub settings:     TaskListConfig,
  pub loaded_files: Vec<PathBuf>
}

/// On-disk shape; every key is optional so a partial file only overrides
/// what it names.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
  api_base_url: Option<String>,
  timeout_secs: Option<u64>
}

impl Config {
  /// Defaults, then the config file, then `TASKLIST_API_BASE_URL`.
  #[tracing::instrument(skip(
    config_override
  ))]
  pub fn load(
    config_override: Option<&Path>
  ) -> anyhow::Result<Self> {
    Self::load_with_env(
      config_override,
      |key| std::env::var(key).ok()
    )
  }

  pub fn load_with_env<F>(
    config_override: Option<&Path>,
    env: F
  ) -> anyhow::Result<Self>
  where
    F: Fn(&str) -> Option<String>
  {
    let mut cfg = Config {
      settings:     TaskListConfig::default(),
      loaded_files: vec![]
    };

    match resolve_config_path(
      config_override,
      &env
    ) {
      | Some(path) => {
        info!(config = %path.display(), "loading config file");
        cfg.load_file(&path)?;
      }
      | None => {
        debug!(
          "no config file found; using \
           defaults"
        );
      }
    }

    if let Some(url) = env(BASE_URL_ENV)
      .filter(|value| {
        !value.trim().is_empty()
      })
    {
      debug!(url = %url, "api base url from environment");
      cfg.settings.api_base_url = url;
    }

    Ok(cfg)
  }

  #[tracing::instrument(skip(self))]
  pub fn apply_base_url_override(
    &mut self,
    url: Option<&str>
  ) {
    if let Some(url) = url {
      debug!(url = %url, "applying base url override");
      self.settings.api_base_url =
        url.to_string();
    }
  }

  pub fn validated(
    self
  ) -> anyhow::Result<TaskListConfig> {
    self.settings.validate().with_context(
      || {
        match self.loaded_files.last() {
          | Some(path) => format!(
            "invalid configuration (last \
             loaded from {})",
            path.display()
          ),
          | None => {
            "invalid configuration"
              .to_string()
          }
        }
      }
    )?;
    Ok(self.settings)
  }

  #[tracing::instrument(skip(self))]
  fn load_file(
    &mut self,
    path: &Path
  ) -> anyhow::Result<()> {
    let path = expand_tilde(path);
    let text =
      fs::read_to_string(&path)
        .with_context(|| {
          format!(
            "failed to read {}",
            path.display()
          )
        })?;

    let file: ConfigFile =
      toml::from_str(&text)
        .with_context(|| {
          format!(
            "invalid config file {}",
            path.display()
          )
        })?;

    if let Some(url) = file.api_base_url
    {
      self.settings.api_base_url = url;
    }
    if let Some(secs) = file.timeout_secs
    {
      self.settings.timeout_secs =
        Some(secs);
    }

    self.loaded_files.push(path);
    Ok(())
  }
}

fn resolve_config_path<F>(
  override_path: Option<&Path>,
  env: &F
) -> Option<PathBuf>
where
  F: Fn(&str) -> Option<String>
{
  if let Some(path) = override_path {
    return Some(path.to_path_buf());
  }

  if let Some(path) = env(CONFIG_ENV)
    .filter(|value| {
      !value.trim().is_empty()
    })
  {
    return Some(PathBuf::from(path));
  }

  let Some(dir) = dirs::config_dir()
  else {
    warn!(
      "cannot determine config \
       directory"
    );
    return None;
  };
  let candidate = dir
    .join("tasklist")
    .join("config.toml");
  if candidate.exists() {
    return Some(candidate);
  }

  None
}

fn expand_tilde(
  path: &Path
) -> PathBuf {
  let text = path.to_string_lossy();
  if let Some(rest) =
    text.strip_prefix("~/")
    && let Some(home) = dirs::home_dir()
  {
    return home.join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use tasklist_shared::DEFAULT_API_BASE_URL;
  use tempfile::NamedTempFile;

  use super::*;

  fn no_env(_: &str) -> Option<String> {
    None
  }

  #[test]
  fn file_values_override_defaults() {
    let mut file = NamedTempFile::new()
      .expect("temp config");
    writeln!(
      file,
      "api_base_url = \"https://tasks.example.com/api/tasks\"\ntimeout_secs = 5"
    )
    .expect("write config");

    let cfg = Config::load_with_env(
      Some(file.path()),
      no_env
    )
    .expect("load config");

    assert_eq!(
      cfg.settings.api_base_url,
      "https://tasks.example.com/api/tasks"
    );
    assert_eq!(
      cfg.settings.timeout_secs,
      Some(5)
    );
    assert_eq!(cfg.loaded_files, vec![
      file.path().to_path_buf()
    ]);
  }

  #[test]
  fn env_beats_file_and_flag_beats_env() {
    let mut file = NamedTempFile::new()
      .expect("temp config");
    writeln!(
      file,
      "api_base_url = \"http://file/api/tasks\""
    )
    .expect("write config");

    let mut cfg = Config::load_with_env(
      Some(file.path()),
      |key| {
        (key == BASE_URL_ENV).then(|| {
          "http://env/api/tasks"
            .to_string()
        })
      }
    )
    .expect("load config");
    assert_eq!(
      cfg.settings.api_base_url,
      "http://env/api/tasks"
    );

    cfg.apply_base_url_override(Some(
      "http://flag/api/tasks"
    ));
    let settings =
      cfg.validated().expect("valid");
    assert_eq!(
      settings.api_base_url,
      "http://flag/api/tasks"
    );
  }

  #[test]
  fn env_config_path_is_used_without_flag()
  {
    let mut file = NamedTempFile::new()
      .expect("temp config");
    writeln!(file, "timeout_secs = 9")
      .expect("write config");
    let path = file
      .path()
      .to_string_lossy()
      .to_string();

    let cfg = Config::load_with_env(
      None,
      |key| {
        (key == CONFIG_ENV)
          .then(|| path.clone())
      }
    )
    .expect("load config");
    assert_eq!(
      cfg.settings.api_base_url,
      DEFAULT_API_BASE_URL
    );
    assert_eq!(
      cfg.settings.timeout_secs,
      Some(9)
    );
  }

  #[test]
  fn unknown_keys_are_rejected() {
    let mut file = NamedTempFile::new()
      .expect("temp config");
    writeln!(file, "base = \"x\"")
      .expect("write config");

    let err = Config::load_with_env(
      Some(file.path()),
      no_env
    )
    .expect_err("unknown key");
    assert!(
      format!("{err:#}")
        .contains("invalid config file")
    );
  }

  #[test]
  fn unreadable_or_invalid_config_fails() {
    let err = Config::load_with_env(
      Some(Path::new(
        "/definitely/not/here.toml"
      )),
      no_env
    )
    .expect_err("missing file");
    assert!(
      format!("{err:#}")
        .contains("failed to read")
    );

    let empty = NamedTempFile::new()
      .expect("temp config");
    let mut cfg = Config::load_with_env(
      Some(empty.path()),
      no_env
    )
    .expect("empty file parses");
    cfg.apply_base_url_override(Some(
      "ftp://nope"
    ));
    assert!(cfg.validated().is_err());
  }
}
