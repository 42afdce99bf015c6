//! Handlers for the `process` and `view` subcommands.

mod process;
mod view;

pub use process::process;
pub use view::{chart_json, view};

use std::fmt::Display;

/// What a command hands back to `main` for printing.
#[derive(Debug, Clone, PartialEq)]
pub struct Out {
    message: String,
}

impl Out {
    pub fn new(message: impl Display) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    pub fn empty() -> Self {
        Self {
            message: String::new(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Print to stdout, if there is anything to say.
    pub fn print(&self) {
        if !self.message.is_empty() {
            println!("{}", self.message);
        }
    }
}
