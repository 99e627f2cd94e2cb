// src/application/commands/mod.rs
//
// Menu command handlers
//
// RULES:
// - One handler per menu option
// - Read answers, coerce types, call one service operation, print the result
// - Never contain business logic
// - Closed input ends the session (Flow::Quit), never an error

use crate::application::console::Console;
use crate::application::error_handling::{error_message, outcome_message, Action};
use crate::application::input::non_blank;
use crate::error::AppResult;
use crate::repositories::MutationOutcome;

/// What the menu loop does after a handler returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Read one answer or leave the handler with `Flow::Quit` on closed input
macro_rules! read_or_quit {
    ($console:expr, $prompt:expr) => {
        match $console.read_line(&$prompt)? {
            Some(line) => line,
            None => return Ok($crate::application::commands::Flow::Quit),
        }
    };
}

pub mod room_commands;
pub mod service_commands;

pub use room_commands::*;
pub use service_commands::*;

fn report(console: &mut dyn Console, action: Action, result: AppResult<MutationOutcome>) {
    let message = match result {
        Ok(outcome) => outcome_message(action, &outcome),
        Err(e) => error_message(action, &e),
    };
    console.write_line("");
    console.write_line(&message);
}

/// Blank → None. Unparseable → None plus a warning on screen.
fn keep_on_invalid<T>(
    console: &mut dyn Console,
    raw: &str,
    parse: fn(&str) -> Option<T>,
    field: &str,
) -> Option<T> {
    let value = non_blank(raw)?;
    let parsed = parse(&value);
    if parsed.is_none() {
        console.write_line(&format!(
            "Valor inválido para {}. Se mantendrá el valor anterior.",
            field
        ));
    }
    parsed
}
