//! Ticket dashboard filtering and stat counts.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::store::models::{Priority, Status, Ticket, UnknownLabel};

/// A select-box filter: either the `all` sentinel or one exact value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::All
    }
}

impl<T: PartialEq> Choice<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => wanted == value,
        }
    }
}

impl<T> FromStr for Choice<T>
where
    T: FromStr<Err = UnknownLabel>,
{
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Choice::All)
        } else {
            s.parse().map(Choice::Only)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => f.write_str("all"),
            Choice::Only(value) => value.fmt(f),
        }
    }
}

/// Criteria entered on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketQuery {
    /// Matched case-insensitively against subject and id.
    pub search: String,
    pub status: Choice<Status>,
    pub priority: Choice<Priority>,
}

impl TicketQuery {
    pub fn matches(&self, ticket: &Ticket) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = ticket.subject.to_lowercase().contains(&needle)
            || ticket.id.to_lowercase().contains(&needle);

        matches_search
            && self.status.admits(&ticket.status)
            && self.priority.admits(&ticket.priority)
    }
}

/// Tickets satisfying every predicate of `query`, in store order.
pub fn filter_tickets<'a>(tickets: &'a [Ticket], query: &TicketQuery) -> Vec<&'a Ticket> {
    tickets.iter().filter(|t| query.matches(t)).collect()
}

/// Stat card counts over the whole store, independent of any filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TicketStats {
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub total: usize,
}

impl TicketStats {
    pub fn from_tickets(tickets: &[Ticket]) -> Self {
        let count = |status: Status| tickets.iter().filter(|t| t.status == status).count();
        Self {
            open: count(Status::Open),
            in_progress: count(Status::InProgress),
            resolved: count(Status::Resolved),
            total: tickets.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TicketStore;

    fn tickets() -> Vec<Ticket> {
        TicketStore::seeded().unwrap().all().to_vec()
    }

    fn ids(found: &[&Ticket]) -> Vec<String> {
        found.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let all = tickets();
        let found = filter_tickets(&all, &TicketQuery::default());
        assert_eq!(found.len(), all.len());
        assert!(found.iter().zip(all.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_search_matches_subject_case_insensitively() {
        let all = tickets();
        let query = TicketQuery {
            search: "vpn".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_tickets(&all, &query)), vec!["TKT-2024-002"]);
    }

    #[test]
    fn test_search_matches_identifier() {
        let all = tickets();
        let query = TicketQuery {
            search: "tkt-2024-00".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_tickets(&all, &query).len(), 5);

        let query = TicketQuery {
            search: "004".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_tickets(&all, &query)), vec!["TKT-2024-004"]);
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let all = tickets();
        let query = TicketQuery {
            search: "request".to_string(),
            status: Choice::Only(Status::Open),
            priority: Choice::All,
        };
        assert_eq!(ids(&filter_tickets(&all, &query)), vec!["TKT-2024-001"]);

        let query = TicketQuery {
            search: String::new(),
            status: Choice::Only(Status::InProgress),
            priority: Choice::Only(Priority::Medium),
        };
        assert_eq!(ids(&filter_tickets(&all, &query)), vec!["TKT-2024-005"]);
    }

    #[test]
    fn test_every_result_satisfies_query() {
        let all = tickets();
        for search in ["", "VPN", "tkt", "zzz", "2024-003", "re"] {
            for status in Status::ALL {
                for priority in Priority::ALL {
                    let query = TicketQuery {
                        search: search.to_string(),
                        status: Choice::Only(status),
                        priority: Choice::Only(priority),
                    };
                    let needle = search.to_lowercase();
                    for ticket in filter_tickets(&all, &query) {
                        assert!(
                            ticket.subject.to_lowercase().contains(&needle)
                                || ticket.id.to_lowercase().contains(&needle)
                        );
                        assert_eq!(ticket.status, status);
                        assert_eq!(ticket.priority, priority);
                        assert!(all.contains(ticket));
                    }
                }
            }
        }
    }

    #[test]
    fn test_no_match_is_empty() {
        let all = tickets();
        let query = TicketQuery {
            search: "printer".to_string(),
            status: Choice::Only(Status::Resolved),
            priority: Choice::All,
        };
        assert!(filter_tickets(&all, &query).is_empty());
    }

    #[test]
    fn test_stats_count_whole_store() {
        let stats = TicketStats::from_tickets(&tickets());
        assert_eq!(
            stats,
            TicketStats {
                open: 2,
                in_progress: 2,
                resolved: 1,
                total: 5
            }
        );
    }

    #[test]
    fn test_choice_parsing() {
        assert_eq!("all".parse::<Choice<Status>>().unwrap(), Choice::All);
        assert_eq!("ALL".parse::<Choice<Priority>>().unwrap(), Choice::All);
        assert_eq!(
            "In Progress".parse::<Choice<Status>>().unwrap(),
            Choice::Only(Status::InProgress)
        );
        assert!("Pending".parse::<Choice<Status>>().is_err());
        assert_eq!(Choice::Only(Priority::High).to_string(), "High");
    }
}
