//! Dashboard metrics - Headline counts drawn from the live collections.

use crate::{
    core::{store::EntityStore, vendor::VendorAccounts},
    entities::{Event, EventStatus},
};

/// Counter shown on a fresh dashboard before anyone edits it.
pub const DEFAULT_SATISFIED_CUSTOMERS: u32 = 247;

/// Headline metrics of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DashboardSummary {
    /// Number of events on file
    pub total_events: usize,
    /// Events with status `upcoming`
    pub upcoming: usize,
    /// Events with status `in-progress`
    pub in_progress: usize,
    /// Events with status `completed`
    pub completed: usize,
    /// Number of vendors on file
    pub active_vendors: usize,
    /// Sum of every recorded payment
    pub total_payments: f64,
    /// Hand-maintained satisfied customers counter
    pub satisfied_customers: u32,
}

/// Computes the dashboard metrics.
#[must_use]
pub fn dashboard_summary(
    events: &EntityStore<Event>,
    accounts: &VendorAccounts,
    satisfied_customers: u32,
) -> DashboardSummary {
    let mut summary = DashboardSummary {
        total_events: events.len(),
        active_vendors: accounts.vendors().len(),
        total_payments: accounts.payment_stats().total_payments,
        satisfied_customers,
        ..DashboardSummary::default()
    };
    for event in events.iter() {
        match event.status {
            EventStatus::Upcoming => summary.upcoming += 1,
            EventStatus::InProgress => summary.in_progress += 1,
            EventStatus::Completed => summary.completed += 1,
        }
    }
    summary
}

/// Parses the satisfied customers input.
///
/// Leading digits are taken and anything after them ignored, so `"12 more"`
/// reads as 12. Input without leading digits, or with a minus sign, reads
/// as 0. Values past `u32::MAX` saturate.
#[must_use]
pub fn parse_customer_count(input: &str) -> u32 {
    let trimmed = input.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];
    if digits.is_empty() {
        return 0;
    }
    digits.parse::<u32>().unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::event::{create_event, set_event_status};
    use crate::test_utils::*;

    #[test]
    fn test_parse_customer_count() {
        assert_eq!(parse_customer_count("250"), 250);
        assert_eq!(parse_customer_count("  31 "), 31);
        assert_eq!(parse_customer_count("12 more"), 12);
        assert_eq!(parse_customer_count("7.9"), 7);
        assert_eq!(parse_customer_count("+5"), 5);
        assert_eq!(parse_customer_count("-5"), 0);
        assert_eq!(parse_customer_count("lots"), 0);
        assert_eq!(parse_customer_count(""), 0);
        assert_eq!(parse_customer_count("99999999999"), u32::MAX);
    }

    #[test]
    fn test_empty_dashboard() {
        let summary = dashboard_summary(
            &EntityStore::new(),
            &VendorAccounts::new(),
            DEFAULT_SATISFIED_CUSTOMERS,
        );
        assert_eq!(summary.total_events, 0);
        assert_eq!(summary.total_payments, 0.0);
        assert_eq!(summary.satisfied_customers, 247);
    }

    #[test]
    fn test_counts_events_by_status() {
        let mut events = EntityStore::new();
        create_event(&mut events, &wedding_draft("Sarah Johnson")).unwrap();
        create_event(&mut events, &wedding_draft("Tech Corp Inc")).unwrap();
        create_event(&mut events, &wedding_draft("Mike & Anna")).unwrap();
        set_event_status(&mut events, "EVT001", EventStatus::Completed).unwrap();
        set_event_status(&mut events, "EVT003", EventStatus::InProgress).unwrap();

        let mut accounts = VendorAccounts::new();
        accounts.create_vendor(&vendor_draft("Elite Decorations")).unwrap();
        accounts.create_vendor(&vendor_draft("Premium Catering")).unwrap();
        accounts.record_payment(&payment_draft("VND001", "2500")).unwrap();
        accounts.record_payment(&payment_draft("VND002", "1800")).unwrap();

        let summary = dashboard_summary(&events, &accounts, 12);
        assert_eq!(summary.total_events, 3);
        assert_eq!(summary.upcoming, 1);
        assert_eq!(summary.in_progress, 1);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.active_vendors, 2);
        assert_eq!(summary.total_payments, 4300.0);
        assert_eq!(summary.satisfied_customers, 12);
    }
}
