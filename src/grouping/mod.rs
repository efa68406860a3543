//! Grouping and filtering of tickets into board columns.
//!
//! `group_tickets` is a pure function of the ticket collection and the two
//! selections. It never fails: empty input yields an empty view.

use std::collections::HashMap;

use serde::Serialize;

use crate::types::{DisplayFilter, GroupKey, Ticket, UNGROUPED_LABEL};

/// One board column: a label and its tickets in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketGroup {
    #[serde(rename = "group")]
    pub label: String,
    pub tickets: Vec<Ticket>,
}

impl TicketGroup {
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

/// Groups in first-occurrence order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GroupedView {
    pub groups: Vec<TicketGroup>,
}

impl GroupedView {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TicketGroup> {
        self.groups.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TicketGroup> {
        self.groups.iter()
    }

    /// Number of tickets across all groups
    pub fn ticket_count(&self) -> usize {
        self.groups.iter().map(TicketGroup::len).sum()
    }

    /// Labels in column order
    pub fn labels(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.label.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a GroupedView {
    type Item = &'a TicketGroup;
    type IntoIter = std::slice::Iter<'a, TicketGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Keep the tickets that pass `filter`, preserving order
pub fn filter_tickets(tickets: &[Ticket], filter: DisplayFilter) -> Vec<&Ticket> {
    tickets.iter().filter(|t| filter.matches(t)).collect()
}

/// Column label for a ticket under `group_by`.
///
/// Absent and falsy values (empty string, priority `0`) all map to the
/// ungrouped label, so priority 0 lands in "Ungrouped" when grouping by priority.
pub fn group_label(ticket: &Ticket, group_by: GroupKey) -> String {
    let value = match group_by {
        GroupKey::Status => ticket.status.clone().filter(|s| !s.is_empty()),
        GroupKey::Name => ticket.name.clone().filter(|s| !s.is_empty()),
        GroupKey::Priority => ticket.priority.filter(|&p| p != 0).map(|p| p.to_string()),
    };
    value.unwrap_or_else(|| UNGROUPED_LABEL.to_string())
}

/// Filter `tickets` and bucket them by `group_by`.
///
/// Buckets are created the first time their label is seen; tickets keep their
/// relative input order inside each bucket.
pub fn group_tickets(tickets: &[Ticket], group_by: GroupKey, filter: DisplayFilter) -> GroupedView {
    let mut groups: Vec<TicketGroup> = Vec::new();
    let mut index_by_label: HashMap<String, usize> = HashMap::new();

    for ticket in filter_tickets(tickets, filter) {
        let label = group_label(ticket, group_by);
        let idx = match index_by_label.get(&label) {
            Some(&idx) => idx,
            None => {
                groups.push(TicketGroup {
                    label: label.clone(),
                    tickets: Vec::new(),
                });
                index_by_label.insert(label, groups.len() - 1);
                groups.len() - 1
            }
        };
        groups[idx].tickets.push(ticket.clone());
    }

    GroupedView { groups }
}
