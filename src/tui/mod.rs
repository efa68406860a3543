//! Interactive terminal board
//!
//! `board` holds the KanbanBoard component and its testable model;
//! `components` holds the pieces it is built from.

pub mod board;
pub mod components;
pub mod theme;

pub use board::{KanbanBoard, KanbanBoardProps};
pub use theme::Theme;
