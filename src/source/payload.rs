//! Decoding of the `{ "tickets": [...] }` payload.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{KanbanError, Result};
use crate::types::Ticket;

/// Decode a response body into tickets.
///
/// Fails when the body is not JSON or has no `tickets` array. Array entries
/// that are not valid tickets are skipped.
pub fn parse_payload(body: &[u8]) -> Result<Vec<Ticket>> {
    let value: Value = serde_json::from_slice(body)?;
    tickets_from_value(&value)
}

/// Extract tickets from an already parsed payload
pub fn tickets_from_value(value: &Value) -> Result<Vec<Ticket>> {
    let entries = match value.get("tickets") {
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            return Err(KanbanError::MalformedPayload(format!(
                "`tickets` is {} instead of an array",
                json_kind(other)
            )));
        }
        None => {
            return Err(KanbanError::MalformedPayload(
                "missing `tickets` field".to_string(),
            ));
        }
    };

    let mut tickets = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match Ticket::deserialize(entry) {
            Ok(ticket) => tickets.push(ticket),
            Err(e) => tracing::warn!(index, "skipping malformed ticket: {e}"),
        }
    }
    Ok(tickets)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
