use std::cell::RefCell;

use anyhow::anyhow;
use tasklist_shared::{
    DeleteOutcome, ListStatus, Prompter, TaskApi, TaskDraft, TaskListAction, TaskListController,
    TaskListState,
};
use tracing::{debug, info, instrument};

use crate::cli::{Command, EditArgs};
use crate::render::Renderer;

/// Runs one command through the controller, rendering the list it leaves
/// behind.
#[instrument(skip(controller, renderer))]
pub async fn dispatch<A, P>(
    controller: &TaskListController<A, P>,
    renderer: &Renderer,
    command: Command,
) -> anyhow::Result<TaskListState>
where
    A: TaskApi,
    P: Prompter,
{
    let state = RefCell::new(TaskListState::default());
    let sink = |action: TaskListAction| state.borrow_mut().apply(action);

    match command {
        Command::List => {
            controller.refresh(&sink).await?;
            print_list(renderer, &state)?;
        }
        Command::Add { title, description } => {
            let draft = TaskDraft { title, description };
            let created = controller.create(&draft, &sink).await?;
            info!(id = %created.id, "task added");
            println!("Created task {}.", created.id);
            print_list(renderer, &state)?;
        }
        Command::Show { id } => {
            let form = controller.open_edit(&id, &sink).await?;
            renderer.print_edit_form(&form)?;
        }
        Command::Edit(args) => {
            edit(controller, &sink, &state, args).await?;
            print_list(renderer, &state)?;
        }
        Command::Delete { id, .. } => match controller.delete(&id, &sink).await? {
            DeleteOutcome::Deleted => {
                println!("Deleted task {id}.");
                print_list(renderer, &state)?;
            }
            DeleteOutcome::Cancelled => {
                println!("Delete cancelled.");
            }
        },
    }

    Ok(state.into_inner())
}

async fn edit<A, P>(
    controller: &TaskListController<A, P>,
    sink: &impl Fn(TaskListAction),
    state: &RefCell<TaskListState>,
    args: EditArgs,
) -> anyhow::Result<()>
where
    A: TaskApi,
    P: Prompter,
{
    controller.open_edit(&args.id, sink).await?;

    let completed = args.completed_change();
    if let Some(title) = args.title {
        sink(TaskListAction::EditorTitleChanged(title));
    }
    if let Some(description) = args.description {
        sink(TaskListAction::EditorDescriptionChanged(description));
    }
    if let Some(completed) = completed {
        sink(TaskListAction::EditorCompletedChanged(completed));
    }

    let form = state
        .borrow()
        .editor
        .clone()
        .ok_or_else(|| anyhow!("edit form for task {} is not open", args.id))?;
    debug!(?form, "saving edited task");

    let saved = controller.save_edit(&form, sink).await?;
    println!("Updated task {}.", saved.id);
    Ok(())
}

fn print_list(renderer: &Renderer, state: &RefCell<TaskListState>) -> anyhow::Result<()> {
    let state = state.borrow();
    // A reload that failed has already been reported.
    if state.list_status == ListStatus::Loaded {
        renderer.print_task_table(&state.tasks)?;
    }
    Ok(())
}
