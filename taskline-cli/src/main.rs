//! Taskline CLI - your task list in the terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{logs, shell, signup};

/// Taskline - your task list in the terminal
#[derive(Parser)]
#[command(name = "tsk", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive client (the default)
    Shell,

    /// Create a new account
    Signup {
        /// Email address (prompted when omitted)
        email: Option<String>,
    },

    /// View and manage application logs
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Shell) | None => shell::run(),
        Some(Commands::Signup { email }) => signup::run(email),
        Some(Commands::Logs { command }) => logs::run(command),
    }
}
