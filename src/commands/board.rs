//! Kanban board command (`kanban board`)

use iocraft::prelude::*;

use crate::error::{KanbanError, Result};
use crate::source::Source;
use crate::tui::KanbanBoard;

/// Launch the kanban board TUI
pub async fn cmd_board(source: Source) -> Result<()> {
    tracing::info!(source = %source.describe(), "opening board");

    element!(KanbanBoard(source: Some(source)))
        .fullscreen()
        .await
        .map_err(|e| KanbanError::Other(format!("TUI error: {e}")))
}
