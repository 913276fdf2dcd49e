use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::anyhow;
use clap::{ArgAction, Args, Parser, Subcommand};
use tasklist_shared::TaskId;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "tasklist",
    version,
    about = "Terminal client for the task list REST API",
    disable_help_subcommand = true
)]
pub struct GlobalCli {
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[arg(short = 'q', long = "quiet", action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Path to a TOML config file.
    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Task collection URL, e.g. http://localhost:8080/api/tasks
    #[arg(long = "api-base-url", global = true)]
    pub api_base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show every task.
    List,

    /// Create a task.
    Add {
        title: String,

        #[arg(short = 'd', long = "description", default_value = "")]
        description: String,
    },

    /// Show one task's fields.
    Show {
        #[arg(value_parser = parse_task_id)]
        id: TaskId,
    },

    /// Fetch a task, change the given fields and save it.
    Edit(EditArgs),

    /// Delete a task after confirmation.
    Delete {
        #[arg(value_parser = parse_task_id)]
        id: TaskId,

        /// Skip the confirmation prompt.
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct EditArgs {
    #[arg(value_parser = parse_task_id)]
    pub id: TaskId,

    #[arg(long = "title")]
    pub title: Option<String>,

    #[arg(long = "description")]
    pub description: Option<String>,

    #[arg(long = "completed", conflicts_with = "pending")]
    pub completed: bool,

    #[arg(long = "pending")]
    pub pending: bool,
}

impl EditArgs {
    pub fn completed_change(&self) -> Option<bool> {
        match (self.completed, self.pending) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

fn parse_task_id(raw: &str) -> Result<TaskId, String> {
    if raw.trim().is_empty() {
        return Err("task id cannot be empty".to_string());
    }
    raw.parse::<TaskId>().map_err(|err| err.to_string())
}

pub fn init_tracing(verbose: u8, quiet: u8) -> anyhow::Result<()> {
    let default_level = if quiet >= 2 {
        "error"
    } else if quiet == 1 {
        "warn"
    } else if verbose >= 3 {
        "trace"
    } else if verbose == 2 {
        "debug"
    } else if verbose == 1 {
        "info"
    } else {
        "warn"
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(())
}
