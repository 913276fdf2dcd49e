use std::ops::Deref;
use std::rc::Rc;

use gloo::console::log;
use tasklist_shared::{
  TaskListAction,
  TaskListController,
  TaskListError,
  TaskListState
};
use yew::{
  Callback,
  Html,
  Reducible,
  UseReducerDispatcher,
  function_component,
  html,
  use_effect_with,
  use_memo,
  use_reducer
};

use crate::api::{
  BrowserPrompter,
  HttpTaskApi
};
use crate::components::{
  AddTaskForm,
  EditTaskModal,
  RowAction,
  TaskList
};
use crate::storage::load_config;

type Controller = TaskListController<
  HttpTaskApi,
  BrowserPrompter
>;

#[derive(Debug, Clone, Default, PartialEq)]
struct ListStore(TaskListState);

impl Deref for ListStore {
  type Target = TaskListState;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl Reducible for ListStore {
  type Action = TaskListAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next = (*self).clone();
    next.0.apply(action);
    Rc::new(next)
  }
}

fn sink(
  dispatcher: UseReducerDispatcher<
    ListStore
  >
) -> impl Fn(TaskListAction) {
  move |action| dispatcher.dispatch(action)
}

/// Spawns one controller flow. The controller has already alerted on
/// failure; the result only feeds the debug log.
fn spawn_flow<F, Fut, T>(
  flow: &'static str,
  controller: Rc<Controller>,
  dispatcher: UseReducerDispatcher<
    ListStore
  >,
  run: F
) where
  F: FnOnce(
      Rc<Controller>,
      UseReducerDispatcher<ListStore>
    ) -> Fut
    + 'static,
  Fut: Future<
      Output = Result<T, TaskListError>
    > + 'static
{
  ui_debug(flow, "started");
  wasm_bindgen_futures::spawn_local(
    async move {
      match run(controller, dispatcher)
        .await
      {
        | Ok(_) => {
          ui_debug(flow, "finished")
        }
        | Err(err) => {
          ui_debug(flow, &err.to_string())
        }
      }
    }
  );
}

#[function_component(App)]
pub fn app() -> Html {
  let controller: Rc<Controller> =
    use_memo((), |_| {
      let config = load_config();
      TaskListController::new(
        HttpTaskApi::new(&config),
        BrowserPrompter
      )
    });
  let store =
    use_reducer(ListStore::default);

  {
    let controller = controller.clone();
    let dispatcher = store.dispatcher();
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "fetching initial task list"
      );
      spawn_flow(
        "tasks.refresh",
        controller,
        dispatcher,
        move |controller, dispatcher| async move {
          let sink = sink(dispatcher);
          controller
            .refresh(&sink)
            .await
        }
      );
      || ()
    });
  }

  let on_draft_title = {
    let dispatcher = store.dispatcher();
    Callback::from(
      move |title: String| {
        dispatcher.dispatch(
          TaskListAction::DraftTitleChanged(
            title
          )
        );
      }
    )
  };

  let on_draft_description = {
    let dispatcher = store.dispatcher();
    Callback::from(
      move |description: String| {
        dispatcher.dispatch(
          TaskListAction::DraftDescriptionChanged(
            description
          )
        );
      }
    )
  };

  let on_add = {
    let controller = controller.clone();
    let dispatcher = store.dispatcher();
    let draft = store.draft.clone();
    Callback::from(move |_: ()| {
      let draft = draft.clone();
      spawn_flow(
        "tasks.create",
        controller.clone(),
        dispatcher.clone(),
        move |controller, dispatcher| async move {
          let sink = sink(dispatcher);
          controller
            .create(&draft, &sink)
            .await
        }
      );
    })
  };

  let on_row_action = {
    let controller = controller.clone();
    let dispatcher = store.dispatcher();
    Callback::from(
      move |action: RowAction| {
        tracing::debug!(
          ?action,
          "row action"
        );
        match action {
          | RowAction::Edit(id) => {
            spawn_flow(
              "tasks.open_edit",
              controller.clone(),
              dispatcher.clone(),
              move |controller, dispatcher| async move {
                let sink = sink(dispatcher);
                controller
                  .open_edit(&id, &sink)
                  .await
              }
            );
          }
          | RowAction::Delete(id) => {
            spawn_flow(
              "tasks.delete",
              controller.clone(),
              dispatcher.clone(),
              move |controller, dispatcher| async move {
                let sink = sink(dispatcher);
                controller
                  .delete(&id, &sink)
                  .await
              }
            );
          }
        }
      }
    )
  };

  let on_edit_title = {
    let dispatcher = store.dispatcher();
    Callback::from(
      move |title: String| {
        dispatcher.dispatch(
          TaskListAction::EditorTitleChanged(
            title
          )
        );
      }
    )
  };

  let on_edit_description = {
    let dispatcher = store.dispatcher();
    Callback::from(
      move |description: String| {
        dispatcher.dispatch(
          TaskListAction::EditorDescriptionChanged(
            description
          )
        );
      }
    )
  };

  let on_edit_completed = {
    let dispatcher = store.dispatcher();
    Callback::from(
      move |completed: bool| {
        dispatcher.dispatch(
          TaskListAction::EditorCompletedChanged(
            completed
          )
        );
      }
    )
  };

  let on_save = {
    let controller = controller.clone();
    let dispatcher = store.dispatcher();
    let editor = store.editor.clone();
    Callback::from(move |_: ()| {
      let Some(form) = editor.clone()
      else {
        return;
      };
      spawn_flow(
        "tasks.save_edit",
        controller.clone(),
        dispatcher.clone(),
        move |controller, dispatcher| async move {
          let sink = sink(dispatcher);
          controller
            .save_edit(&form, &sink)
            .await
        }
      );
    })
  };

  let on_close = {
    let controller = controller.clone();
    let dispatcher = store.dispatcher();
    Callback::from(move |_: ()| {
      controller.close_edit(&sink(
        dispatcher.clone()
      ));
    })
  };

  html! {
      <div class="container">
          <h1>{ "Task List" }</h1>
          <AddTaskForm
              draft={store.draft.clone()}
              on_title={on_draft_title}
              on_description={on_draft_description}
              on_submit={on_add}
          />
          <TaskList
              tasks={store.tasks.clone()}
              status={store.list_status}
              on_action={on_row_action}
          />
          <EditTaskModal
              form={store.editor.clone()}
              on_title={on_edit_title}
              on_description={on_edit_description}
              on_completed={on_edit_completed}
              on_save={on_save}
              on_close={on_close}
          />
      </div>
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
