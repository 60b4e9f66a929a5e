//! Dashboard aggregates for operational reporting
//!
//! A full scan over all tickets, acceptable at this system's scale; no
//! pagination and no owner filter by design.

use crate::core::{Status, Ticket};
use serde::Serialize;
use std::collections::BTreeMap;

/// Summary counts and a category histogram over all tickets
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardStats {
    pub total_tickets: usize,
    pub open_tickets: usize,
    pub resolved_tickets: usize,
    /// Tickets per category; entries with no category are excluded
    pub tickets_by_category: BTreeMap<String, usize>,
}

/// Compute dashboard statistics over the full ticket set
#[must_use]
pub fn aggregate(tickets: &[Ticket]) -> DashboardStats {
    let mut stats = DashboardStats {
        total_tickets: tickets.len(),
        ..DashboardStats::default()
    };

    for ticket in tickets {
        match ticket.status {
            Status::Opened => stats.open_tickets += 1,
            Status::Resolved => stats.resolved_tickets += 1,
            _ => {}
        }

        if let Some(category) = ticket.category.as_deref() {
            if !category.is_empty() {
                *stats
                    .tickets_by_category
                    .entry(category.to_string())
                    .or_insert(0) += 1;
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TicketBuilder;

    fn ticket(status: Status, category: Option<&str>) -> Ticket {
        let mut builder = TicketBuilder::new()
            .title("Some ticket title")
            .description("Some nonempty description")
            .status(status)
            .submitter("alice");
        if let Some(category) = category {
            builder = builder.category(category);
        }
        builder.build()
    }

    #[test]
    fn test_category_histogram_excludes_empty_and_missing() {
        let tickets = vec![
            ticket(Status::Opened, Some("Hardware")),
            ticket(Status::Closed, Some("Hardware")),
            ticket(Status::Opened, Some("")),
            ticket(Status::Resolved, None),
            ticket(Status::Opened, Some("Network")),
            ticket(Status::Assigned, Some("Network")),
            ticket(Status::Resolved, Some("Network")),
        ];

        let stats = aggregate(&tickets);

        assert_eq!(stats.total_tickets, 7);
        assert_eq!(stats.open_tickets, 3);
        assert_eq!(stats.resolved_tickets, 2);
        assert_eq!(stats.tickets_by_category.len(), 2);
        assert_eq!(stats.tickets_by_category["Hardware"], 2);
        assert_eq!(stats.tickets_by_category["Network"], 3);
    }

    #[test]
    fn test_empty_dataset() {
        let stats = aggregate(&[]);
        assert_eq!(stats.total_tickets, 0);
        assert!(stats.tickets_by_category.is_empty());
    }
}
