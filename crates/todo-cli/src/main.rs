//! todo-cli - todo-core を叩く CLI
//!
//! 1 回の起動が 1 セッション：open（load）→ 操作 1 つ → 終了。
//! 空タイトルや存在しない ID は元実装と同じく silent no-op で、
//! 終了コードも 0 のまま。非 0 で終わるのはストレージエラーだけ。

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use todo_core::app::{Session, SessionBuilder};
use todo_core::domain::{TaskId, TodoError};
use todo_core::impls::FileSlot;
use todo_core::ports::{IdGenerator, StorageSlot};

/// A single-user task list, persisted as JSON on disk.
#[derive(Parser)]
#[command(name = "todo", version, about)]
struct Cli {
    /// Storage directory for the task list.
    #[arg(long, global = true, default_value = ".todo")]
    dir: PathBuf,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task.
    Add {
        /// Title of the task (stored verbatim).
        title: String,
    },

    /// List all tasks in insertion order.
    List,

    /// Toggle a task's completed flag.
    Done {
        /// Id of the task.
        id: u64,
    },

    /// Rename a task.
    Edit {
        /// Id of the task.
        id: u64,
        /// New title.
        title: String,
    },

    /// Delete a task.
    Rm {
        /// Id of the task.
        id: u64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), TodoError> {
    let mut session = SessionBuilder::new(FileSlot::new(cli.dir)).open()?;

    match cli.command {
        Commands::Add { title } => {
            if let Some(id) = session.add(&title)? {
                println!("added {id}");
            }
        }
        Commands::List => print_list(&session),
        Commands::Done { id } => {
            session.toggle_completed(TaskId::new(id))?;
        }
        Commands::Edit { id, title } => {
            session.rename(TaskId::new(id), &title)?;
        }
        Commands::Rm { id } => {
            session.remove(TaskId::new(id))?;
        }
    }

    Ok(())
}

fn print_list<S: StorageSlot, G: IdGenerator>(session: &Session<S, G>) {
    if session.is_empty() {
        println!("No todos yet. Add a task to get started!");
        return;
    }

    for task in session.tasks() {
        let mark = if task.completed() { "x" } else { " " };
        println!("[{mark}] {:>4}  {}", task.id(), task.title());
    }

    let counts = session.counts();
    println!("{} done, {} pending", counts.completed, counts.pending);
}
