mod add_task_form;
mod edit_task_modal;
mod task_list;
mod task_list_row;

pub use add_task_form::AddTaskForm;
pub use edit_task_modal::EditTaskModal;
pub use task_list::{
  RowAction,
  TaskList
};
pub use task_list_row::TaskListRow;
