use tasklist_shared::{
  COMPLETED_MARKER,
  Task
};
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub task: Task
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let id = props.task.id.to_string();
  let class = if props.task.completed {
    "row done"
  } else {
    "row"
  };

  html! {
      <li class={class}>
          <span>
              { props.task.summary() }
              {
                  if props.task.completed {
                      html! { <>{ " " }<span class="completed">{ COMPLETED_MARKER }</span></> }
                  } else {
                      html! {}
                  }
              }
          </span>
          <div class="task-actions">
              <button class="edit-btn" data-action="edit" data-id={id.clone()}>{ "Edit" }</button>
              <button class="delete-btn" data-action="delete" data-id={id}>{ "Delete" }</button>
          </div>
      </li>
  }
}
