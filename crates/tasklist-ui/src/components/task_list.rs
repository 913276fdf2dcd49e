use tasklist_shared::{
  ListStatus,
  Task,
  TaskId
};
use web_sys::Element;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html
};

use super::TaskListRow;

pub const ACTION_ATTR: &str =
  "data-action";
pub const ID_ATTR: &str = "data-id";

/// What a row control asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
  Edit(TaskId),
  Delete(TaskId)
}

impl RowAction {
  /// Maps a clicked control back onto the rendered task it belongs to.
  /// The id is the row's own `TaskId`; `data-id` is only matched, never
  /// parsed.
  pub fn resolve(
    action: &str,
    raw_id: &str,
    tasks: &[Task]
  ) -> Option<Self> {
    let id = tasks
      .iter()
      .find(|task| {
        task.id.to_string() == raw_id
      })
      .map(|task| task.id.clone())?;
    match action {
      | "edit" => Some(RowAction::Edit(id)),
      | "delete" => {
        Some(RowAction::Delete(id))
      }
      | _ => None
    }
  }
}

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub tasks:     Vec<Task>,
  pub status:    ListStatus,
  pub on_action: Callback<RowAction>
}

/// The task rows. One click listener on the container serves every row's
/// buttons through their `data-action` / `data-id` attributes.
#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  let onclick = {
    let on_action =
      props.on_action.clone();
    let tasks = props.tasks.clone();
    Callback::from(
      move |event: MouseEvent| {
        let Some(target) = event
          .target_dyn_into::<Element>()
        else {
          return;
        };
        let Ok(Some(control)) = target
          .closest("button[data-action]")
        else {
          return;
        };
        let action = control
          .get_attribute(ACTION_ATTR)
          .unwrap_or_default();
        let id = control
          .get_attribute(ID_ATTR)
          .unwrap_or_default();
        if let Some(row_action) =
          RowAction::resolve(
            &action, &id, &tasks
          )
        {
          on_action.emit(row_action);
        }
      }
    )
  };

  let notice = match props.status {
    | ListStatus::NotLoaded => {
      Some("Loading tasks…")
    }
    | ListStatus::Failed => {
      Some("Tasks could not be loaded.")
    }
    | ListStatus::Loaded
      if props.tasks.is_empty() =>
    {
      Some("No tasks yet.")
    }
    | ListStatus::Loaded => None
  };

  html! {
      <div class="panel list">
          {
              if let Some(text) = notice {
                  html! { <p class={if props.status == ListStatus::Failed { "notice error" } else { "notice" }}>{ text }</p> }
              } else {
                  html! {}
              }
          }
          <ul id="task-list" {onclick}>
              {
                  for props.tasks.iter().cloned().map(|task| html! {
                      <TaskListRow key={task.id.to_string()} task={task.clone()} />
                  })
              }
          </ul>
      </div>
  }
}
