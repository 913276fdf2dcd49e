use serde::{
  Deserialize,
  Serialize
};

use crate::error::ConfigError;
use crate::task::TaskId;

pub const DEFAULT_API_BASE_URL: &str =
  "http://localhost:8080/api/tasks";

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TaskListConfig {
  #[serde(default = "default_api_base_url")]
  pub api_base_url: String,
  #[serde(default)]
  pub timeout_secs: Option<u64>
}

fn default_api_base_url() -> String {
  DEFAULT_API_BASE_URL.to_string()
}

impl Default for TaskListConfig {
  fn default() -> Self {
    Self {
      api_base_url: default_api_base_url(),
      timeout_secs: None
    }
  }
}

impl TaskListConfig {
  pub fn with_base_url(
    api_base_url: impl Into<String>
  ) -> Self {
    Self {
      api_base_url: api_base_url.into(),
      ..Self::default()
    }
  }

  pub fn validate(
    &self
  ) -> Result<(), ConfigError> {
    let base = self.api_base_url.trim();
    if base.is_empty() {
      return Err(
        ConfigError::EmptyBaseUrl
      );
    }
    if !(base.starts_with("http://")
      || base.starts_with("https://")
      || base.starts_with('/'))
    {
      return Err(
        ConfigError::UnsupportedBaseUrl(
          base.to_string()
        )
      );
    }
    if self.timeout_secs == Some(0) {
      return Err(
        ConfigError::ZeroTimeout
      );
    }
    Ok(())
  }

  pub fn endpoints(
    &self
  ) -> TaskEndpoints {
    TaskEndpoints::new(
      &self.api_base_url
    )
  }
}

/// URL builder for the task collection and its members.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct TaskEndpoints {
  collection: String
}

impl TaskEndpoints {
  pub fn new(base: &str) -> Self {
    let trimmed = base.trim();
    let collection = trimmed
      .strip_suffix('/')
      .unwrap_or(trimmed)
      .to_string();
    Self { collection }
  }

  pub fn collection(&self) -> &str {
    &self.collection
  }

  pub fn item(
    &self,
    id: &TaskId
  ) -> String {
    format!("{}/{id}", self.collection)
  }
}
