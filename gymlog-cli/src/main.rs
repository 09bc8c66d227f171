mod console;
mod form;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::io;

use gymlog::WorkoutLog;
use gymlog::logging::{init_logger, parse_level};

use console::Console;
use form::run_workout_form;

#[derive(Parser, Debug)]
#[command(version, about = "Gymlog - in-memory workout logger", long_about = None)]
struct Args {
    /// Log level written to stderr (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", value_parser = level_filter)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Numbered text menu (default)
    Console,
    /// Full-screen form with a history pane
    Form,
}

fn level_filter(s: &str) -> Result<LevelFilter, String> {
    parse_level(s).ok_or_else(|| format!("unknown log level '{}'", s))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level);

    let mut log = WorkoutLog::new();

    match args.command.unwrap_or(Commands::Console) {
        Commands::Console => {
            let stdin = io::stdin();
            Console::new(&mut log, stdin.lock(), io::stdout()).run()
        }
        Commands::Form => {
            let terminal = ratatui::init();
            let result = run_workout_form(terminal, &mut log);
            ratatui::restore();
            result
        }
    }
}
