//! Shell command - the interactive Taskline client
//!
//! The session lives for the duration of the shell process; nothing about
//! it is persisted.

use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Input, Password, Select};
use indicatif::ProgressBar;

use taskline_core::{EntryPoint, LogEvent, LoggingService, TasklineContext};

use super::{get_context, get_logger, log_event};
use crate::output;

pub fn run() -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger(EntryPoint::Shell);
    log_event(&logger, LogEvent::new("shell_started"));

    println!("{}", "Taskline".bold());
    println!();

    loop {
        if !ctx.is_authenticated() {
            let choice = Select::new()
                .with_prompt("Account")
                .items(&["Login", "Sign up", "Quit"])
                .default(0)
                .interact()?;

            match choice {
                0 => login(&ctx, &logger)?,
                1 => signup(&ctx, &logger)?,
                _ => break,
            }
        } else {
            let choice = Select::new()
                .with_prompt(format!("Tasks ({})", ctx.tasks().len()))
                .items(&["List tasks", "Add task", "Refresh", "Logout", "Quit"])
                .default(0)
                .interact()?;

            match choice {
                0 => render_tasks(&ctx),
                1 => add_task(&ctx, &logger)?,
                2 => refresh(&ctx, &logger)?,
                3 => {
                    ctx.logout();
                    log_event(&logger, LogEvent::new("logged_out"));
                    output::info("Logged out.");
                }
                _ => break,
            }
        }
    }

    log_event(&logger, LogEvent::new("shell_exited"));
    Ok(())
}

fn login(ctx: &TasklineContext, logger: &Option<LoggingService>) -> Result<()> {
    let email: String = Input::new().with_prompt("Email").interact_text()?;
    let password = Password::new().with_prompt("Password").interact()?;

    let spinner = start_spinner("Logging in...");
    let result = ctx.submit_login(email, password);
    spinner.finish_and_clear();

    match result {
        Ok(()) => {
            output::success("Logged in.");
            log_event(logger, LogEvent::new("login_succeeded").with_operation("login"));

            // The initial fetch can fail independently of the login
            match ctx.last_error() {
                Some(message) => {
                    output::error(&message);
                    log_event(
                        logger,
                        LogEvent::new("initial_fetch_failed")
                            .with_operation("load")
                            .with_error(message),
                    );
                }
                None => render_tasks(ctx),
            }
        }
        Err(e) => {
            output::error(&e.to_string());
            log_event(
                logger,
                LogEvent::new("login_failed")
                    .with_operation("login")
                    .with_error(e.to_string()),
            );
        }
    }

    Ok(())
}

fn signup(ctx: &TasklineContext, logger: &Option<LoggingService>) -> Result<()> {
    let email: String = Input::new().with_prompt("Email").interact_text()?;
    let password = Password::new().with_prompt("Password").interact()?;

    let spinner = start_spinner("Signing up...");
    let result = ctx.submit_signup(email, password);
    spinner.finish_and_clear();

    match result {
        Ok(()) => {
            output::success("Account created successfully, please log in.");
            log_event(logger, LogEvent::new("signup_succeeded").with_operation("signup"));
        }
        Err(e) => {
            output::error(&e.to_string());
            log_event(
                logger,
                LogEvent::new("signup_failed")
                    .with_operation("signup")
                    .with_error(e.to_string()),
            );
        }
    }

    Ok(())
}

fn add_task(ctx: &TasklineContext, logger: &Option<LoggingService>) -> Result<()> {
    // Empty titles and contents are valid; the server decides
    let title: String = Input::new()
        .with_prompt("Title")
        .allow_empty(true)
        .interact_text()?;
    let content: String = Input::new()
        .with_prompt("Content")
        .allow_empty(true)
        .interact_text()?;

    let spinner = start_spinner("Adding task...");
    let result = ctx.submit_create(title, content);
    spinner.finish_and_clear();

    match result {
        Ok(_) => {
            output::success("Task added.");
            log_event(logger, LogEvent::new("task_created").with_operation("create"));
            render_tasks(ctx);
        }
        Err(e) => {
            output::error(&e.to_string());
            log_event(
                logger,
                LogEvent::new("create_failed")
                    .with_operation("create")
                    .with_error(e.to_string()),
            );
        }
    }

    Ok(())
}

fn refresh(ctx: &TasklineContext, logger: &Option<LoggingService>) -> Result<()> {
    let spinner = start_spinner("Fetching tasks...");
    let result = ctx.load_tasks();
    spinner.finish_and_clear();

    match result {
        Ok(_) => {
            log_event(logger, LogEvent::new("tasks_loaded").with_operation("load"));
            render_tasks(ctx);
        }
        Err(e) => {
            output::error(&e.to_string());
            log_event(
                logger,
                LogEvent::new("load_failed")
                    .with_operation("load")
                    .with_error(e.to_string()),
            );
        }
    }

    Ok(())
}

fn render_tasks(ctx: &TasklineContext) {
    let tasks = ctx.tasks();
    if tasks.is_empty() {
        println!("No tasks yet.");
        return;
    }

    let mut table = output::create_table();
    table.set_header(vec!["#", "Title", "Content"]);
    for (index, task) in tasks.iter().enumerate() {
        table.add_row(vec![
            task.id.clone().unwrap_or_else(|| (index + 1).to_string()),
            task.title.clone(),
            task.content.clone(),
        ]);
    }
    println!("{}", table);
}

fn start_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
