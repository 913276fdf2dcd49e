use std::fmt;

use thiserror::Error;

/// What went wrong talking to the task API.
///
/// The controller does not branch on the variant: every one of them is a
/// failed request as far as the user is concerned. The detail only feeds
/// the diagnostic log.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
  #[error("request failed: {0}")]
  Transport(String),

  #[error("HTTP error! status: {0}")]
  Status(u16),

  #[error("failed to decode response: {0}")]
  Decode(String),

  #[error("failed to encode request: {0}")]
  Encode(String)
}

impl ApiError {
  /// Maps a response status onto the uniform failure rule: anything
  /// outside 2xx is an error.
  pub fn check_status(
    status: u16
  ) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
      Ok(())
    } else {
      Err(ApiError::Status(status))
    }
  }
}

/// The user-visible action a request belonged to.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum TaskAction {
  Fetch,
  Add,
  FetchDetails,
  Update,
  Delete
}

impl TaskAction {
  pub fn alert_message(
    self
  ) -> &'static str {
    match self {
      | TaskAction::Fetch => {
        "Failed to fetch tasks."
      }
      | TaskAction::Add => {
        "Failed to add task."
      }
      | TaskAction::FetchDetails => {
        "Failed to fetch task details."
      }
      | TaskAction::Update => {
        "Failed to update task."
      }
      | TaskAction::Delete => {
        "Failed to delete task."
      }
    }
  }

  fn label(self) -> &'static str {
    match self {
      | TaskAction::Fetch => {
        "fetching tasks"
      }
      | TaskAction::Add => "adding task",
      | TaskAction::FetchDetails => {
        "fetching task for edit"
      }
      | TaskAction::Update => {
        "updating task"
      }
      | TaskAction::Delete => {
        "deleting task"
      }
    }
  }
}

impl fmt::Display for TaskAction {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.label())
  }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskListError {
  #[error("task title cannot be empty")]
  EmptyTitle,

  #[error("error {action}: {source}")]
  RequestFailed {
    action: TaskAction,
    #[source]
    source: ApiError
  }
}

impl TaskListError {
  pub fn action(
    &self
  ) -> Option<TaskAction> {
    match self {
      | TaskListError::EmptyTitle => None,
      | TaskListError::RequestFailed {
        action,
        ..
      } => Some(*action)
    }
  }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
  #[error("api base url cannot be empty")]
  EmptyBaseUrl,

  #[error(
    "api base url must start with http://, https:// or /, got: {0}"
  )]
  UnsupportedBaseUrl(String),

  #[error("request timeout must be greater than zero")]
  ZeroTimeout
}
