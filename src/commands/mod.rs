//! Command implementations for the `kanban` binary

mod board;
mod config;
mod show;

pub use board::cmd_board;
pub use config::{cmd_config_get, cmd_config_path, cmd_config_set, cmd_config_show};
pub use show::{cmd_show, should_color};

use serde_json::Value;

use crate::error::Result;

/// Output of a command that can print either JSON or text
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Print as JSON when requested, otherwise the text form (falling back to JSON)
    pub fn print(self, json: bool) -> Result<()> {
        match (json, self.text) {
            (false, Some(text)) => println!("{text}"),
            _ => println!("{}", serde_json::to_string_pretty(&self.json)?),
        }
        Ok(())
    }
}
