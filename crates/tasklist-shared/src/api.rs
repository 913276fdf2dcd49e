use crate::error::ApiError;
use crate::task::{
  Task,
  TaskCreate,
  TaskId
};

/// Transport for the task REST API.
///
/// Implementations run on a single-threaded executor (the browser event
/// loop or a current-thread runtime), so the futures carry no `Send`
/// bound.
#[allow(async_fn_in_trait)]
pub trait TaskApi {
  /// `GET {base}`
  async fn list_tasks(
    &self
  ) -> Result<Vec<Task>, ApiError>;

  /// `GET {base}/{id}`
  async fn get_task(
    &self,
    id: &TaskId
  ) -> Result<Task, ApiError>;

  /// `POST {base}` with `{title, description}`
  async fn create_task(
    &self,
    task: &TaskCreate
  ) -> Result<Task, ApiError>;

  /// `PUT {base}/{id}` with the full task. The response body is not read.
  async fn update_task(
    &self,
    task: &Task
  ) -> Result<(), ApiError>;

  /// `DELETE {base}/{id}`
  async fn delete_task(
    &self,
    id: &TaskId
  ) -> Result<(), ApiError>;
}

/// Blocking user prompts.
pub trait Prompter {
  fn alert(&self, message: &str);

  fn confirm(&self, message: &str) -> bool;
}

impl<T: TaskApi + ?Sized> TaskApi for &T {
  async fn list_tasks(
    &self
  ) -> Result<Vec<Task>, ApiError> {
    (**self).list_tasks().await
  }

  async fn get_task(
    &self,
    id: &TaskId
  ) -> Result<Task, ApiError> {
    (**self).get_task(id).await
  }

  async fn create_task(
    &self,
    task: &TaskCreate
  ) -> Result<Task, ApiError> {
    (**self).create_task(task).await
  }

  async fn update_task(
    &self,
    task: &Task
  ) -> Result<(), ApiError> {
    (**self).update_task(task).await
  }

  async fn delete_task(
    &self,
    id: &TaskId
  ) -> Result<(), ApiError> {
    (**self).delete_task(id).await
  }
}

impl<T: Prompter + ?Sized> Prompter for &T {
  fn alert(&self, message: &str) {
    (**self).alert(message);
  }

  fn confirm(&self, message: &str) -> bool {
    (**self).confirm(message)
  }
}
