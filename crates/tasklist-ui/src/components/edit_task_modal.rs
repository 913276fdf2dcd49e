use tasklist_shared::EditForm;
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Event,
  Html,
  InputEvent,
  MouseEvent,
  Properties,
  SubmitEvent,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct EditTaskModalProps {
  pub form:           Option<EditForm>,
  pub on_title:       Callback<String>,
  pub on_description: Callback<String>,
  pub on_completed:   Callback<bool>,
  pub on_save:        Callback<()>,
  pub on_close:       Callback<()>
}

/// Overlay form for one existing task; hidden while `form` is `None`.
#[function_component(EditTaskModal)]
pub fn edit_task_modal(
  props: &EditTaskModalProps
) -> Html {
  let Some(form) = &props.form else {
    return html! {};
  };

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
  let on_completed_change = {
    let on_completed =
      props.on_completed.clone();
    Callback::from(move |e: Event| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      on_completed.emit(input.checked());
    })
  };
  let onsubmit = {
    let on_save = props.on_save.clone();
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      on_save.emit(());
    })
  };
  let on_close_click = {
    let on_close = props.on_close.clone();
    Callback::from(move |_: MouseEvent| {
      on_close.emit(());
    })
  };

  html! {
      <div id="edit-modal" class="modal-backdrop">
          <div class="modal">
              <div class="header">
                  <span>{ "Edit Task" }</span>
                  <button type="button" class="close-button" onclick={on_close_click}>{ "×" }</button>
              </div>
              <form {onsubmit}>
                  <input id="edit-task-id" type="hidden" value={form.id.to_string()} />
                  <label for="edit-task-title">{ "Title" }</label>
                  <input
                      id="edit-task-title"
                      type="text"
                      value={form.title.clone()}
                      oninput={on_title_input}
                  />
                  <label for="edit-task-description">{ "Description" }</label>
                  <input
                      id="edit-task-description"
                      type="text"
                      value={form.description.clone()}
                      oninput={on_description_input}
                  />
                  <label class="checkbox">
                      <input
                          id="edit-task-completed"
                          type="checkbox"
                          checked={form.completed}
                          onchange={on_completed_change}
                      />
                      { "Completed" }
                  </label>
                  <button id="save-task-btn" type="submit">{ "Save Changes" }</button>
              </form>
          </div>
      </div>
  }
}
