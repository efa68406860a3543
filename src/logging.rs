//! Tracing subscriber setup.
//!
//! The filter comes from `KANBAN_LOG`, then `RUST_LOG`, then a per-target
//! default. The board logs to a file so the fullscreen UI stays intact.

use std::env;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::default_log_path;
use crate::error::{KanbanError, Result};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "KANBAN_LOG";

/// Where log lines go
#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    fn default_filter(&self) -> &'static str {
        match self {
            LogTarget::Stderr => "kanban=warn",
            LogTarget::File(_) => "kanban=info",
        }
    }
}

/// Build the filter, ignoring unparsable overrides
pub fn env_filter(default: &str) -> EnvFilter {
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(default))
}

/// Open `path` for appending, creating missing parent directories
pub fn open_log_file(path: &Path) -> Result<File> {
    let with_path = |e: io::Error| {
        KanbanError::Io(io::Error::new(
            e.kind(),
            format!("cannot open log file {}: {e}", path.display()),
        ))
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(with_path)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(with_path)
}

/// Install the global subscriber
pub fn init_logging(target: LogTarget) -> Result<()> {
    let filter = env_filter(target.default_filter());

    let result = match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            let file = open_log_file(&path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    result.map_err(|e| KanbanError::Other(format!("failed to initialize logging: {e}")))
}

/// Log files tried for the board, in order: the requested one, the cache
/// directory default, then the system temp directory.
pub fn log_file_candidates(requested: Option<PathBuf>) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = requested.into_iter().collect();
    for fallback in [default_log_path(), env::temp_dir().join("kanban.log")] {
        if !candidates.contains(&fallback) {
            candidates.push(fallback);
        }
    }
    candidates
}

/// File logging for the fullscreen board.
///
/// Stderr cannot be used once the UI owns the terminal, so each unusable
/// location is reported before moving to the next. Returns the file in use.
pub fn init_board_logging(requested: Option<PathBuf>) -> Result<PathBuf> {
    let mut last_error = None;
    for path in log_file_candidates(requested) {
        match init_logging(LogTarget::File(path.clone())) {
            Ok(()) => return Ok(path),
            Err(e) => {
                eprintln!("warning: {e}");
                last_error = Some(e);
            }
        }
    }
    Err(last_error.unwrap_or_else(|| KanbanError::Other("no log file location".to_string())))
}
