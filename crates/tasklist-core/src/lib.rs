pub mod cli;
pub mod commands;
pub mod config;
pub mod http;
pub mod render;
pub mod terminal;

use std::ffi::OsString;

use anyhow::Context;
use clap::Parser;
use tasklist_shared::{
  TaskListController,
  TaskListError
};
use tracing::{
  debug,
  info
};

#[tracing::instrument(skip_all)]
pub fn run(
  raw_args: Vec<OsString>
) -> anyhow::Result<()> {
  let cli =
    cli::GlobalCli::parse_from(raw_args);

  cli::init_tracing(
    cli.verbose,
    cli.quiet
  )?;

  info!(
    verbose = cli.verbose,
    quiet = cli.quiet,
    "starting tasklist CLI"
  );

  let mut cfg = config::Config::load(
    cli.config.as_deref()
  )?;
  cfg.apply_base_url_override(
    cli.api_base_url.as_deref()
  );
  debug!(loaded = ?cfg.loaded_files, "configuration resolved");
  let settings = cfg.validated()?;

  let command = cli
    .command
    .unwrap_or(cli::Command::List);
  let assume_yes = matches!(
    command,
    cli::Command::Delete {
      yes: true,
      ..
    }
  );

  let api =
    http::HttpTaskApi::new(&settings)?;
  info!(
    base = %api.endpoints().collection(),
    "using task API"
  );
  let controller =
    TaskListController::new(
      api,
      terminal::TerminalPrompter::stdio(
        assume_yes
      )
    );
  let renderer = render::Renderer::new();

  let runtime =
    tokio::runtime::Builder::new_current_thread()
      .enable_all()
      .build()
      .context(
        "failed to start async runtime"
      )?;
  runtime.block_on(commands::dispatch(
    &controller,
    &renderer,
    command
  ))?;

  info!("done");
  Ok(())
}

/// True when the failure came out of a task flow, which has already
/// alerted the user on the terminal.
pub fn already_alerted(
  err: &anyhow::Error
) -> bool {
  err.downcast_ref::<TaskListError>()
    .is_some()
}

#[cfg(test)]
mod tests {
  use anyhow::anyhow;
  use tasklist_shared::{
    ApiError,
    TaskAction
  };

  use super::*;

  #[test]
  fn task_flow_failures_count_as_alerted() {
    let err = anyhow::Error::new(
      TaskListError::RequestFailed {
        action: TaskAction::Delete,
        source: ApiError::Status(500)
      }
    );
    assert!(already_alerted(&err));
    assert!(already_alerted(
      &anyhow::Error::new(
        TaskListError::EmptyTitle
      )
    ));
  }

  #[test]
  fn setup_failures_are_not_alerted() {
    assert!(!already_alerted(&anyhow!(
      "failed to read config"
    )));
  }
}
