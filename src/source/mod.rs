//! Ticket sources.
//!
//! A source produces the ticket collection once per session. Callers go
//! through [`load_tickets`], which turns every failure into an empty
//! collection and logs it.

pub mod file;
pub mod http;
pub mod payload;

use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::types::Ticket;

pub use file::FileSource;
pub use http::HttpSource;
pub use payload::{parse_payload, tickets_from_value};

/// Something that can produce the ticket collection
pub trait TicketSource: Send + Sync {
    /// Fetch every ticket. Errors cover transport, status and payload failures.
    fn fetch_tickets(&self) -> impl std::future::Future<Output = Result<Vec<Ticket>>> + Send;
}

/// The configured ticket source
#[derive(Debug, Clone)]
pub enum Source {
    Http(HttpSource),
    File(FileSource),
}

impl Source {
    /// Build the source for this invocation: a local file when `file` is
    /// given, otherwise the endpoint (explicit override first, then config).
    pub fn resolve(config: &Config, endpoint: Option<&str>, file: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = file {
            return Ok(Source::File(FileSource::new(path)));
        }
        let endpoint = endpoint.map(str::to_string).unwrap_or_else(|| config.endpoint());
        Ok(Source::Http(HttpSource::new(&endpoint, config.request_timeout())?))
    }

    /// Short description for logs and headers
    pub fn describe(&self) -> String {
        match self {
            Source::Http(http) => http.endpoint().to_string(),
            Source::File(file) => file.path().display().to_string(),
        }
    }
}

impl TicketSource for Source {
    async fn fetch_tickets(&self) -> Result<Vec<Ticket>> {
        match self {
            Source::Http(http) => http.fetch_tickets().await,
            Source::File(file) => file.fetch_tickets().await,
        }
    }
}

/// Fetch tickets, normalising any failure to an empty collection.
///
/// Failures are logged and never retried.
pub async fn load_tickets<S: TicketSource>(source: &S) -> Vec<Ticket> {
    match source.fetch_tickets().await {
        Ok(tickets) => {
            tracing::info!(count = tickets.len(), "fetched tickets");
            tickets
        }
        Err(e) => {
            tracing::error!("failed to fetch tickets: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KanbanError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticSource(Vec<Ticket>);

    impl TicketSource for StaticSource {
        async fn fetch_tickets(&self) -> Result<Vec<Ticket>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource {
        calls: AtomicUsize,
    }

    impl TicketSource for FailingSource {
        async fn fetch_tickets(&self) -> Result<Vec<Ticket>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(KanbanError::Api {
                status: 500,
                reason: "Internal Server Error".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_load_tickets_success() {
        let source = StaticSource(vec![Ticket::new(1), Ticket::new(2)]);
        assert_eq!(load_tickets(&source).await.len(), 2);
    }

    #[tokio::test]
    async fn test_load_tickets_failure_is_empty_without_retry() {
        let source = FailingSource {
            calls: AtomicUsize::new(0),
        };
        assert!(load_tickets(&source).await.is_empty());
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_resolve_prefers_file() {
        let config = Config::default();
        let source = Source::resolve(&config, None, Some(PathBuf::from("tickets.json"))).unwrap();
        assert!(matches!(source, Source::File(_)));
        assert_eq!(source.describe(), "tickets.json");
    }

    #[test]
    fn test_resolve_endpoint_override() {
        let config = Config::default();
        let source = Source::resolve(&config, Some("http://localhost:9000/t"), None).unwrap();
        assert_eq!(source.describe(), "http://localhost:9000/t");
    }

    #[test]
    fn test_resolve_invalid_endpoint() {
        let config = Config::default();
        let err = Source::resolve(&config, Some("localhost"), None).unwrap_err();
        assert!(matches!(err, KanbanError::InvalidEndpoint(..)));
    }
}
