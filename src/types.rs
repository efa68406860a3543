use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::error::KanbanError;

/// Endpoint serving the `{ "tickets": [...] }` payload
pub const DEFAULT_ENDPOINT: &str = "https://api.quicksell.co/v1/internal/frontend-assignment";

/// Tickets at or above this priority count as high priority.
pub const HIGH_PRIORITY_THRESHOLD: i64 = 3;

/// Group label used when the grouping attribute is absent or falsy
pub const UNGROUPED_LABEL: &str = "Ungrouped";

/// Assignee text shown on cards without a `name`
pub const UNASSIGNED_LABEL: &str = "Unassigned";

/// Ticket identifier as delivered by the API (string or integer)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum TicketId {
    Text(String),
    Number(i64),
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketId::Text(s) => write!(f, "{s}"),
            TicketId::Number(n) => write!(f, "{n}"),
        }
    }
}

impl<'de> Deserialize<'de> for TicketId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(TicketId::Text(s)),
            Value::Number(n) => Ok(match integral_number(&n) {
                Some(i) => TicketId::Number(i),
                None => TicketId::Text(n.to_string()),
            }),
            Value::Bool(b) => Ok(TicketId::Text(b.to_string())),
            other => Err(de::Error::custom(format!(
                "ticket id must be a string or a number, got {other}"
            ))),
        }
    }
}

impl From<&str> for TicketId {
    fn from(value: &str) -> Self {
        TicketId::Text(value.to_string())
    }
}

impl From<i64> for TicketId {
    fn from(value: i64) -> Self {
        TicketId::Number(value)
    }
}

/// A support ticket. Read-only once received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,

    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,

    /// A present `null` decodes as 0; a missing field stays `None`
    #[serde(
        default,
        deserialize_with = "lenient_priority",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority: Option<i64>,

    /// Assignee display name
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
}

/// An integer, or a float with no fractional part
fn integral_number(n: &Number) -> Option<i64> {
    n.as_i64().or_else(|| n.as_f64().and_then(integral_float))
}

fn integral_float(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64).then_some(f as i64)
}

/// Text attribute from any scalar. `false` and `0` are falsy and decode
/// as absent, like `null`; arrays and objects are ignored.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

/// Priority from an integer, an integral float or a numeric string.
///
/// `null` and the empty string compare as 0 against the threshold, so they
/// decode as 0. Values with no integer reading decode as absent.
fn lenient_priority<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => Some(0),
        Value::Number(n) => integral_number(&n),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                Some(0)
            } else {
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(integral_float))
            }
        }
        Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    })
}

impl Ticket {
    pub fn new(id: impl Into<TicketId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            status: None,
            priority: None,
            name: None,
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn assignee(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => UNASSIGNED_LABEL,
        }
    }
}

/// Human name for a priority level
pub fn priority_name(priority: i64) -> Option<&'static str> {
    match priority {
        4 => Some("Urgent"),
        3 => Some("High"),
        2 => Some("Medium"),
        1 => Some("Low"),
        0 => Some("No priority"),
        _ => None,
    }
}

/// Ticket attribute used to bucket tickets into columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKey {
    #[default]
    Status,
    Name,
    Priority,
}

impl GroupKey {
    pub const ALL: [GroupKey; 3] = [GroupKey::Status, GroupKey::Name, GroupKey::Priority];

    /// Name of the ticket attribute this key reads
    pub fn attribute(&self) -> &'static str {
        match self {
            GroupKey::Status => "status",
            GroupKey::Name => "name",
            GroupKey::Priority => "priority",
        }
    }

    /// Label shown in the group-by selector
    pub fn label(&self) -> &'static str {
        match self {
            GroupKey::Status => "Status",
            GroupKey::Name => "User",
            GroupKey::Priority => "Priority",
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Status => write!(f, "status"),
            GroupKey::Name => write!(f, "user"),
            GroupKey::Priority => write!(f, "priority"),
        }
    }
}

impl FromStr for GroupKey {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "status" => Ok(GroupKey::Status),
            "user" | "name" => Ok(GroupKey::Name),
            "priority" => Ok(GroupKey::Priority),
            _ => Err(KanbanError::Other(format!(
                "invalid group key '{s}', expected status, user or priority"
            ))),
        }
    }
}

pub const VALID_GROUP_KEYS: &[&str] = &["status", "user", "priority"];

/// Priority predicate applied before grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayFilter {
    #[default]
    All,
    HighPriority,
    LowPriority,
}

impl DisplayFilter {
    pub const ALL: [DisplayFilter; 3] = [
        DisplayFilter::All,
        DisplayFilter::HighPriority,
        DisplayFilter::LowPriority,
    ];

    /// Label shown in the display selector
    pub fn label(&self) -> &'static str {
        match self {
            DisplayFilter::All => "All",
            DisplayFilter::HighPriority => "High Priority",
            DisplayFilter::LowPriority => "Low Priority",
        }
    }

    /// Whether a ticket passes this filter. A ticket without a priority
    /// is neither high nor low.
    pub fn matches(&self, ticket: &Ticket) -> bool {
        match self {
            DisplayFilter::All => true,
            DisplayFilter::HighPriority => ticket
                .priority
                .is_some_and(|p| p >= HIGH_PRIORITY_THRESHOLD),
            DisplayFilter::LowPriority => ticket
                .priority
                .is_some_and(|p| p < HIGH_PRIORITY_THRESHOLD),
        }
    }
}

impl fmt::Display for DisplayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayFilter::All => write!(f, "all"),
            DisplayFilter::HighPriority => write!(f, "high-priority"),
            DisplayFilter::LowPriority => write!(f, "low-priority"),
        }
    }
}

impl FromStr for DisplayFilter {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(DisplayFilter::All),
            "high-priority" | "high" => Ok(DisplayFilter::HighPriority),
            "low-priority" | "low" => Ok(DisplayFilter::LowPriority),
            _ => Err(KanbanError::Other(format!(
                "invalid display filter '{s}', expected all, high-priority or low-priority"
            ))),
        }
    }
}

pub const VALID_DISPLAY_FILTERS: &[&str] = &["all", "high-priority", "low-priority"];
