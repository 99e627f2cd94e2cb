// src/application/console.rs
//
// Line-oriented console the menus talk to

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::AppResult;

pub trait Console {
    /// Show `prompt` and read one line. `None` means the input is closed.
    fn read_line(&mut self, prompt: &str) -> AppResult<Option<String>>;

    fn write_line(&mut self, line: &str);
}

/// Interactive console backed by rustyline (history, line editing)
pub struct RustylineConsole {
    editor: DefaultEditor,
}

impl RustylineConsole {
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Console for RustylineConsole {
    fn read_line(&mut self, prompt: &str) -> AppResult<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        log::debug!("History entry not recorded: {}", e);
                    }
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_line(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Console fed from a fixed script, capturing everything written
#[cfg(test)]
pub(crate) struct ScriptedConsole {
    input: std::collections::VecDeque<String>,
    pub output: Vec<String>,
}

#[cfg(test)]
impl ScriptedConsole {
    pub(crate) fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|l| l.to_string()).collect(),
            output: Vec::new(),
        }
    }

    pub(crate) fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> AppResult<Option<String>> {
        self.output.push(prompt.to_string());
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, line: &str) {
        self.output.push(line.to_string());
    }
}
