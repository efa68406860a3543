//! HTTP ticket source.

use std::time::Duration;

use reqwest::{Client, header};
use url::Url;

use super::TicketSource;
use super::payload::parse_payload;
use crate::error::{KanbanError, Result};
use crate::types::Ticket;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches the ticket payload with a single GET request
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    endpoint: Url,
}

impl HttpSource {
    /// Create a source for `endpoint`, failing on anything but an http(s) URL.
    ///
    /// `timeout` bounds the whole request, including reading the body.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = parse_endpoint(endpoint)?;

        let client = Client::builder()
            .user_agent(concat!("kanban/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .build()?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Parse and validate an endpoint URL
pub fn parse_endpoint(endpoint: &str) -> Result<Url> {
    let url = Url::parse(endpoint)
        .map_err(|e| KanbanError::InvalidEndpoint(endpoint.to_string(), e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(KanbanError::InvalidEndpoint(
            endpoint.to_string(),
            format!("unsupported scheme '{scheme}', expected http or https"),
        )),
    }
}

impl TicketSource for HttpSource {
    async fn fetch_tickets(&self) -> Result<Vec<Ticket>> {
        tracing::debug!(endpoint = %self.endpoint, "requesting tickets");

        let response = self
            .client
            .get(self.endpoint.clone())
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(KanbanError::Api {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.bytes().await?;
        parse_payload(&body)
    }
}
