//! taskgen-cli
//!
//! Interactive driver for the task engine. Plays the role of the host
//! game client: it delivers session boundary events and user actions to
//! the engine, and renders the engine's notifications as console output.
//!
//! Commands:
//! - `login <player>` / `logout`: session boundaries
//! - `roll`: generate a task
//! - `done`: complete the active task
//! - `list`: catalog with completion status
//! - `quit`

use std::io::{self, BufRead, Write as _};
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use taskgen_core::TaskEngine;
use taskgen_core::domain::TaskCatalog;
use taskgen_core::impls::FileSaveStore;
use taskgen_core::ports::{Notifier, ThreadRandom};

/// Default catalog bundled with the binary, used when no path is given.
const BUNDLED_TASKS: &[u8] = include_bytes!("../tasks.json");

/// Renders engine notifications as console lines.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn on_task_assigned(&mut self, description: &str, item_icon_id: i32) {
        println!("Current task: {description} (icon {item_icon_id})");
    }

    fn on_no_task(&mut self) {
        println!("No task.");
    }

    fn on_generation_disabled(&mut self) {
        println!("(finish your task before rolling again)");
    }

    fn on_generation_enabled(&mut self) {
        println!("(roll when ready)");
    }

    fn on_tasks_exhausted(&mut self) {
        println!("No more tasks left. Looks like you win?");
    }

    fn on_acknowledge(&mut self) {
        // *Boop*
        println!("*boop*");
    }
}

fn save_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("taskgen"))
        .unwrap_or_else(|| PathBuf::from(".taskgen"))
}

fn load_catalog() -> Result<TaskCatalog, taskgen_core::CatalogError> {
    match std::env::args().nth(1) {
        Some(path) => TaskCatalog::load(path.as_ref()),
        None => TaskCatalog::from_json(BUNDLED_TASKS),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // A missing or malformed catalog is fatal: nothing can be generated
    // without one.
    let catalog = match load_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("cannot start: {e}");
            return ExitCode::FAILURE;
        }
    };

    let save_dir = save_dir();
    tracing::info!(dir = %save_dir.display(), "save records live here");

    let store = FileSaveStore::new(save_dir);
    let mut engine = TaskEngine::new(catalog, store, ConsoleNotifier, ThreadRandom);

    println!("taskgen: login <player>, roll, done, list, logout, quit");

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("stdin error: {e}");
                break;
            }
        }

        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("login"), Some(player)) => engine.on_session_start(player),
            (Some("login"), None) => println!("usage: login <player>"),
            (Some("logout"), _) => engine.on_session_end(),
            (Some("roll"), _) => engine.generate(),
            (Some("done"), _) => engine.complete(),
            (Some("list"), _) => {
                let statuses = engine.task_statuses();
                if statuses.is_empty() {
                    println!("log in first");
                    continue;
                }
                for (task, completed) in statuses {
                    let mark = if completed { 'x' } else { ' ' };
                    println!("[{mark}] {}: {}", task.id, task.description);
                }
            }
            (Some("quit"), _) | (Some("exit"), _) => break,
            (None, _) => {}
            (Some(other), _) => println!("unknown command: {other}"),
        }
    }

    // Persist whatever session is still open before exiting.
    engine.on_session_end();
    ExitCode::SUCCESS
}
