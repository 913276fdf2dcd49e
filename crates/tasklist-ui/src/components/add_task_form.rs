use tasklist_shared::TaskDraft;
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  InputEvent,
  Properties,
  SubmitEvent,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct AddTaskFormProps {
  pub draft:          TaskDraft,
  pub on_title:       Callback<String>,
  pub on_description: Callback<String>,
  pub on_submit:      Callback<()>
}

#[function_component(AddTaskForm)]
pub fn add_task_form(
  props: &AddTaskFormProps
) -> Html {
  let on_title_input = {
    let on_title = props.on_title.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      on_title.emit(input.value());
    })
  };
  let on_description_input = {
    let on_description =
      props.on_description.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      on_description.emit(input.value());
    })
  };
  let onsubmit = {
    let on_submit =
      props.on_submit.clone();
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      on_submit.emit(());
    })
  };

  html! {
      <form class="panel add-task" {onsubmit}>
          <input
              id="new-task-title"
              type="text"
              placeholder="Task title"
              value={props.draft.title.clone()}
              oninput={on_title_input}
          />
          <input
              id="new-task-description"
              type="text"
              placeholder="Description"
              value={props.draft.description.clone()}
              oninput={on_description_input}
          />
          <button id="add-task-btn" type="submit">{ "Add Task" }</button>
      </form>
  }
}
