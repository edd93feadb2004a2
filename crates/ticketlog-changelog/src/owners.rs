//! Grouping pending tickets by reporter

use std::collections::HashMap;

use tracing::debug;

use crate::types::{ReporterGroup, TicketEntry};

/// Group pending tickets by their reporter's email.
///
/// Groups appear in the order their first ticket was seen and each group
/// keeps its tickets in input order. No further sorting is applied.
pub fn group_by_owner<'a>(pending: &[TicketEntry<'a>]) -> Vec<ReporterGroup<'a>> {
    let mut groups: Vec<ReporterGroup<'a>> = Vec::new();
    let mut positions: HashMap<&'a str, usize> = HashMap::new();

    for entry in pending {
        let email: &'a str = &entry.ticket.reporter().email_address;
        match positions.get(email) {
            Some(&i) => groups[i].tickets.push(entry.clone()),
            None => {
                positions.insert(email, groups.len());
                groups.push(ReporterGroup::new(entry.clone()));
            }
        }
    }

    debug!(
        owner_count = groups.len(),
        ticket_count = pending.len(),
        "pending tickets grouped by owner"
    );
    groups
}
