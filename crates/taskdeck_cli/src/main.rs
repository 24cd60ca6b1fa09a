//! Interactive front end for the grouped to-do list.
//!
//! # Responsibility
//! - Select and open a persistence backend.
//! - Run the stdin command loop: parse, apply to the session, re-render.

mod commands;

use clap::{Parser, ValueEnum};
use commands::{parse, Command, HELP_TEXT};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use taskdeck_core::{
    default_log_level, init_logging, render_group_selector, render_task_list, JsonFileStore,
    PersistenceAdapter, SqliteDocumentStore, TodoSession,
};

/// Storage backend choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Backend {
    /// SQLite document store (one JSON payload per document row).
    Sqlite,
    /// Single JSON file with atomic replace.
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "taskdeck", version, about = "Grouped to-do list")]
struct Cli {
    /// Storage backend.
    #[arg(long, value_enum, default_value = "sqlite")]
    backend: Backend,

    /// Store location: database file for sqlite, document file for json.
    #[arg(long, default_value = "taskdeck.db")]
    path: PathBuf,

    /// Directory for rolling log files. File logging is disabled when
    /// unset.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli
            .log_level
            .as_deref()
            .unwrap_or_else(|| default_log_level())
            .to_string();
        let log_dir = absolutize(log_dir);
        if let Err(err) = init_logging(&level, &log_dir.to_string_lossy()) {
            eprintln!("logging setup failed: {err}");
            return ExitCode::FAILURE;
        }
    }

    let adapter: Box<dyn PersistenceAdapter> = match cli.backend {
        Backend::Sqlite => match SqliteDocumentStore::open(&cli.path) {
            Ok(store) => Box::new(store),
            Err(err) => {
                eprintln!("failed to open store at `{}`: {err}", cli.path.display());
                return ExitCode::FAILURE;
            }
        },
        Backend::Json => Box::new(JsonFileStore::new(&cli.path)),
    };

    let mut session = TodoSession::open(adapter);
    println!(
        "taskdeck {} — type `help` for commands",
        taskdeck_core::core_version()
    );
    render(&session);

    let stdin = io::stdin();
    loop {
        print!("{}> ", session.current_group());
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("stdin read failed: {err}");
                return ExitCode::FAILURE;
            }
        }

        match parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => dispatch(&mut session, command),
            Err(err) => eprintln!("{err}"),
        }
    }

    ExitCode::SUCCESS
}

fn dispatch(session: &mut TodoSession<Box<dyn PersistenceAdapter>>, command: Command) {
    let outcome = match command {
        Command::Nothing => Ok(false),
        Command::List => Ok(true),
        Command::Help => {
            println!("{HELP_TEXT}");
            Ok(false)
        }
        Command::Groups => {
            println!(
                "{}",
                render_group_selector(session.board(), session.current_group())
            );
            Ok(false)
        }
        Command::Add(text) => session.add_task(&text).map(|_| true),
        Command::Toggle(index) => session.toggle_task(index).map(|_| true),
        Command::Edit(index, text) => session.edit_task(index, &text).map(|_| true),
        Command::Remove(index) => session.delete_task(index).map(|_| true),
        Command::GroupAdd(name) => session.add_group(&name).map(|_| true),
        Command::GroupRemove => session.delete_group().map(|_| true),
        Command::GroupUse(name) => session.switch_group(&name).map(|_| true),
        Command::Quit => Ok(false),
    };

    match outcome {
        Ok(true) => render(session),
        Ok(false) => {}
        Err(err) => eprintln!("{err}"),
    }
}

fn render(session: &TodoSession<Box<dyn PersistenceAdapter>>) {
    println!("-- {} --", session.current_group());
    println!("{}", render_task_list(session.current_tasks()));
}

fn absolutize(path: &std::path::Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
