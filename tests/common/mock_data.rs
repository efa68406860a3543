//! Builders for test tickets.

use kanban::types::{Ticket, TicketId};

/// Builder for creating test tickets
pub struct TicketBuilder {
    ticket: Ticket,
}

impl TicketBuilder {
    pub fn new(id: impl Into<TicketId>) -> Self {
        Self {
            ticket: Ticket::new(id),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.ticket.title = Some(title.to_string());
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.ticket.status = Some(status.to_string());
        self
    }

    pub fn priority(mut self, priority: i64) -> Self {
        self.ticket.priority = Some(priority);
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.ticket.name = Some(name.to_string());
        self
    }

    pub fn build(self) -> Ticket {
        self.ticket
    }
}

/// Shorthand for a ticket with status and priority
pub fn mock_ticket(id: i64, status: &str, priority: i64) -> Ticket {
    TicketBuilder::new(id)
        .title(&format!("Ticket {id}"))
        .status(status)
        .priority(priority)
        .build()
}

/// The three-ticket collection used across the grouping tests
pub fn sample_tickets() -> Vec<Ticket> {
    vec![
        TicketBuilder::new(1)
            .status("Todo")
            .priority(4)
            .name("Alice")
            .build(),
        TicketBuilder::new(2).status("Todo").priority(1).name("").build(),
        TicketBuilder::new(3).status("Done").priority(3).build(),
    ]
}

/// A mixed collection spanning every status, priority and a few assignees
pub fn mixed_tickets() -> Vec<Ticket> {
    let statuses = ["Todo", "In progress", "Backlog", "Done", "Canceled"];
    let names = ["Anoop", "Yogesh", "Shankar", "Ramesh"];
    (0..20)
        .map(|i| {
            TicketBuilder::new(format!("CAM-{i}").as_str())
                .title(&format!("Task {i}"))
                .status(statuses[i % statuses.len()])
                .priority((i % 5) as i64)
                .name(names[i % names.len()])
                .build()
        })
        .collect()
}
