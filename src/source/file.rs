//! Local file ticket source, reading the same payload the endpoint serves.

use std::path::{Path, PathBuf};

use super::TicketSource;
use super::payload::parse_payload;
use crate::error::{KanbanError, Result};
use crate::types::Ticket;

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TicketSource for FileSource {
    async fn fetch_tickets(&self) -> Result<Vec<Ticket>> {
        tracing::debug!(path = %self.path.display(), "reading tickets");

        let body = tokio::fs::read(&self.path).await.map_err(|e| {
            KanbanError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", self.path.display(), e),
            ))
        })?;
        parse_payload(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reads_payload_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tickets.json");
        fs::write(&path, r#"{"tickets": [{"id": 7, "status": "Done", "priority": 1}]}"#).unwrap();

        let tickets = FileSource::new(&path).fetch_tickets().await.unwrap();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].id.to_string(), "7");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = FileSource::new(dir.path().join("absent.json"))
            .fetch_tickets()
            .await
            .unwrap_err();
        assert!(matches!(err, KanbanError::Io(_)));
        assert!(err.to_string().contains("absent.json"));
    }
}
