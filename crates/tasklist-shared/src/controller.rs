use tracing::{
  debug,
  error,
  info,
  warn
};

use crate::api::{
  Prompter,
  TaskApi
};
use crate::error::{
  ApiError,
  TaskAction,
  TaskListError
};
use crate::state::{
  EditForm,
  TaskDraft,
  TaskListAction
};
use crate::task::{
  Task,
  TaskId
};

pub const EMPTY_TITLE_ALERT: &str =
  "Task title cannot be empty.";

pub const DELETE_CONFIRMATION: &str =
  "Are you sure you want to delete \
   this task?";

/// Receiver for state changes produced by the controller.
pub trait Dispatch {
  fn dispatch(
    &self,
    action: TaskListAction
  );
}

impl<F> Dispatch for F
where
  F: Fn(TaskListAction)
{
  fn dispatch(
    &self,
    action: TaskListAction
  ) {
    self(action);
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum DeleteOutcome {
  Deleted,
  Cancelled
}

/// Request flows behind every list interaction.
///
/// Each flow is one round trip. Mutations that succeed are followed by a
/// full reload of the list; failures are logged, alerted through the
/// [`Prompter`] and then returned so the caller can stop. Nothing guards
/// against overlapping flows.
pub struct TaskListController<A, P> {
  api:      A,
  prompter: P
}

impl<A, P> TaskListController<A, P>
where
  A: TaskApi,
  P: Prompter
{
  pub fn new(
    api: A,
    prompter: P
  ) -> Self {
    Self { api, prompter }
  }

  /// List: replaces the rendered tasks, or clears them and marks the list
  /// failed.
  pub async fn refresh(
    &self,
    dispatch: &impl Dispatch
  ) -> Result<usize, TaskListError> {
    debug!("fetching tasks");
    match self.api.list_tasks().await {
      | Ok(tasks) => {
        let total = tasks.len();
        info!(total, "fetched tasks");
        dispatch.dispatch(
          TaskListAction::TasksLoaded(
            tasks
          )
        );
        Ok(total)
      }
      | Err(source) => {
        dispatch.dispatch(
          TaskListAction::LoadFailed
        );
        Err(self.report(
          TaskAction::Fetch,
          source
        ))
      }
    }
  }

  pub async fn create(
    &self,
    draft: &TaskDraft,
    dispatch: &impl Dispatch
  ) -> Result<Task, TaskListError> {
    let Some(body) = draft.to_create()
    else {
      warn!(
        "rejected new task with empty \
         title"
      );
      self
        .prompter
        .alert(EMPTY_TITLE_ALERT);
      return Err(
        TaskListError::EmptyTitle
      );
    };

    let created = self
      .api
      .create_task(&body)
      .await
      .map_err(|source| {
        self.report(
          TaskAction::Add,
          source
        )
      })?;
    info!(
      id = %created.id,
      title = %created.title,
      "created task"
    );

    dispatch.dispatch(
      TaskListAction::DraftCleared
    );
    self.reload_after(dispatch).await;
    Ok(created)
  }

  pub async fn open_edit(
    &self,
    id: &TaskId,
    dispatch: &impl Dispatch
  ) -> Result<EditForm, TaskListError> {
    debug!(id = %id, "fetching task for edit");
    let task = self
      .api
      .get_task(id)
      .await
      .map_err(|source| {
        self.report(
          TaskAction::FetchDetails,
          source
        )
      })?;

    let form = EditForm::from(task);
    dispatch.dispatch(
      TaskListAction::EditorOpened(
        form.clone()
      )
    );
    Ok(form)
  }

  /// Save-Edit: PUTs the whole task, then hides the modal and reloads. A
  /// failed save leaves the modal open with the user's edits.
  pub async fn save_edit(
    &self,
    form: &EditForm,
    dispatch: &impl Dispatch
  ) -> Result<Task, TaskListError> {
    let task = form.to_task();
    if task.title.is_empty() {
      warn!(
        id = %task.id,
        "rejected edit with empty title"
      );
      self
        .prompter
        .alert(EMPTY_TITLE_ALERT);
      return Err(
        TaskListError::EmptyTitle
      );
    }

    self
      .api
      .update_task(&task)
      .await
      .map_err(|source| {
        self.report(
          TaskAction::Update,
          source
        )
      })?;
    info!(
      id = %task.id,
      completed = task.completed,
      "updated task"
    );

    dispatch.dispatch(
      TaskListAction::EditorClosed
    );
    self.reload_after(dispatch).await;
    Ok(task)
  }

  pub async fn delete(
    &self,
    id: &TaskId,
    dispatch: &impl Dispatch
  ) -> Result<DeleteOutcome, TaskListError>
  {
    if !self
      .prompter
      .confirm(DELETE_CONFIRMATION)
    {
      info!(id = %id, "delete cancelled");
      return Ok(DeleteOutcome::Cancelled);
    }

    self
      .api
      .delete_task(id)
      .await
      .map_err(|source| {
        self.report(
          TaskAction::Delete,
          source
        )
      })?;
    info!(id = %id, "deleted task");

    self.reload_after(dispatch).await;
    Ok(DeleteOutcome::Deleted)
  }

  pub fn close_edit(
    &self,
    dispatch: &impl Dispatch
  ) {
    debug!("closing edit modal");
    dispatch.dispatch(
      TaskListAction::EditorClosed
    );
  }

  async fn reload_after(
    &self,
    dispatch: &impl Dispatch
  ) {
    // The reload alerts on its own; the mutation itself already succeeded.
    if let Err(err) =
      self.refresh(dispatch).await
    {
      debug!(
        error = %err,
        "reload after mutation failed"
      );
    }
  }

  fn report(
    &self,
    action: TaskAction,
    source: ApiError
  ) -> TaskListError {
    error!(
      action = %action,
      error = %source,
      "task request failed"
    );
    self
      .prompter
      .alert(action.alert_message());
    TaskListError::RequestFailed {
      action,
      source
    }
  }
}
