//! Signup command - create a new account

use anyhow::Result;
use dialoguer::{Input, Password};

use taskline_core::{EntryPoint, LogEvent};

use super::{get_context, get_logger, log_event};
use crate::output;

pub fn run(email: Option<String>) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger(EntryPoint::Cli);

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let password = Password::new().with_prompt("Password").interact()?;

    match ctx.submit_signup(email, password) {
        Ok(()) => {
            output::success("Account created successfully, please log in.");
            println!("Run 'tsk' to log in and manage your tasks.");
            log_event(&logger, LogEvent::new("signup_succeeded").with_command("signup"));
            Ok(())
        }
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("signup_failed")
                    .with_command("signup")
                    .with_error(e.to_string()),
            );
            Err(e.into())
        }
    }
}
