pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod state;
pub mod task;

pub use api::{
  Prompter,
  TaskApi
};
pub use config::{
  DEFAULT_API_BASE_URL,
  TaskEndpoints,
  TaskListConfig
};
pub use controller::{
  DELETE_CONFIRMATION,
  DeleteOutcome,
  Dispatch,
  EMPTY_TITLE_ALERT,
  TaskListController
};
pub use error::{
  ApiError,
  ConfigError,
  TaskAction,
  TaskListError
};
pub use state::{
  EditForm,
  ListStatus,
  TaskDraft,
  TaskListAction,
  TaskListState
};
pub use task::{
  COMPLETED_MARKER,
  Task,
  TaskCreate,
  TaskId
};
