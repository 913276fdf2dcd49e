use crate::task::{
  Task,
  TaskCreate,
  TaskId
};

/// Contents of the add-task inputs.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct TaskDraft {
  pub title:       String,
  pub description: String
}

impl TaskDraft {
  /// Trimmed request body, or `None` when the title is blank.
  pub fn to_create(
    &self
  ) -> Option<TaskCreate> {
    let title = self.title.trim();
    if title.is_empty() {
      return None;
    }
    Some(TaskCreate {
      title:       title.to_string(),
      description: self
        .description
        .trim()
        .to_string()
    })
  }
}

/// The edit modal's fields.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct EditForm {
  pub id:          TaskId,
  pub title:       String,
  pub description: String,
  pub completed:   bool
}

impl From<Task> for EditForm {
  fn from(task: Task) -> Self {
    Self {
      id:          task.id,
      title:       task.title,
      description: task.description,
      completed:   task.completed
    }
  }
}

impl EditForm {
  /// Full task for the PUT body, with text fields trimmed.
  pub fn to_task(&self) -> Task {
    Task {
      id:          self.id.clone(),
      title:       self
        .title
        .trim()
        .to_string(),
      description: self
        .description
        .trim()
        .to_string(),
      completed:   self.completed
    }
  }
}

#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq,
)]
pub enum ListStatus {
  #[default]
  NotLoaded,
  Loaded,
  Failed
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum TaskListAction {
  TasksLoaded(Vec<Task>),
  LoadFailed,
  DraftTitleChanged(String),
  DraftDescriptionChanged(String),
  DraftCleared,
  EditorOpened(EditForm),
  EditorTitleChanged(String),
  EditorDescriptionChanged(String),
  EditorCompletedChanged(bool),
  EditorClosed
}

/// Everything the list view renders from.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct TaskListState {
  pub tasks:       Vec<Task>,
  pub list_status: ListStatus,
  pub draft:       TaskDraft,
  pub editor:      Option<EditForm>
}

impl TaskListState {
  pub fn is_modal_open(&self) -> bool {
    self.editor.is_some()
  }

  pub fn task(
    &self,
    id: &TaskId
  ) -> Option<&Task> {
    self
      .tasks
      .iter()
      .find(|task| &task.id == id)
  }

  pub fn apply(
    &mut self,
    action: TaskListAction
  ) {
    match action {
      | TaskListAction::TasksLoaded(
        tasks
      ) => {
        self.tasks = tasks;
        self.list_status =
          ListStatus::Loaded;
      }
      // A failed reload never keeps rows from an earlier fetch.
      | TaskListAction::LoadFailed => {
        self.tasks.clear();
        self.list_status =
          ListStatus::Failed;
      }
      | TaskListAction::DraftTitleChanged(
        title
      ) => {
        self.draft.title = title;
      }
      | TaskListAction::DraftDescriptionChanged(
        description
      ) => {
        self.draft.description =
          description;
      }
      | TaskListAction::DraftCleared => {
        self.draft = TaskDraft::default();
      }
      | TaskListAction::EditorOpened(
        form
      ) => {
        self.editor = Some(form);
      }
      | TaskListAction::EditorTitleChanged(
        title
      ) => {
        if let Some(form) =
          self.editor.as_mut()
        {
          form.title = title;
        }
      }
      | TaskListAction::EditorDescriptionChanged(
        description
      ) => {
        if let Some(form) =
          self.editor.as_mut()
        {
          form.description = description;
        }
      }
      | TaskListAction::EditorCompletedChanged(
        completed
      ) => {
        if let Some(form) =
          self.editor.as_mut()
        {
          form.completed = completed;
        }
      }
      | TaskListAction::EditorClosed => {
        self.editor = None;
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn task(id: i64, title: &str) -> Task {
    Task {
      id:          TaskId::Number(id),
      title:       title.to_string(),
      description: String::new(),
      completed:   false
    }
  }

  #[test]
  fn draft_requires_non_blank_title() {
    let draft = TaskDraft {
      title:       "   ".to_string(),
      description: "ignored".to_string()
    };
    assert_eq!(draft.to_create(), None);

    let draft = TaskDraft {
      title:       "  Buy milk ".to_string(),
      description: " 2% ".to_string()
    };
    assert_eq!(
      draft.to_create(),
      Some(TaskCreate {
        title:       "Buy milk".to_string(),
        description: "2%".to_string()
      })
    );
  }

  #[test]
  fn load_failure_drops_stale_rows() {
    let mut state =
      TaskListState::default();
    state.apply(
      TaskListAction::TasksLoaded(vec![
        task(1, "one"),
      ])
    );
    assert_eq!(
      state.list_status,
      ListStatus::Loaded
    );

    state.apply(
      TaskListAction::LoadFailed
    );
    assert!(state.tasks.is_empty());
    assert_eq!(
      state.list_status,
      ListStatus::Failed
    );
  }

  #[test]
  fn editor_edits_are_ignored_when_closed()
  {
    let mut state =
      TaskListState::default();
    state.apply(
      TaskListAction::EditorTitleChanged(
        "x".to_string()
      )
    );
    assert!(!state.is_modal_open());

    state.apply(
      TaskListAction::EditorOpened(
        EditForm::from(task(4, "four"))
      )
    );
    state.apply(
      TaskListAction::EditorCompletedChanged(
        true
      )
    );
    let form = state
      .editor
      .clone()
      .expect("editor open");
    assert!(form.completed);
    assert_eq!(form.title, "four");

    state.apply(
      TaskListAction::EditorClosed
    );
    assert!(!state.is_modal_open());
  }

  #[test]
  fn edit_form_trims_text_for_put() {
    let form = EditForm {
      id:          TaskId::Number(9),
      title:       " t ".to_string(),
      description: " d ".to_string(),
      completed:   true
    };
    assert_eq!(form.to_task(), Task {
      id:          TaskId::Number(9),
      title:       "t".to_string(),
      description: "d".to_string(),
      completed:   true
    });
  }
}
