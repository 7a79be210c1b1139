//! Shared test utilities for `event_desk`.
//!
//! This module provides form drafts with sensible defaults and a seeded
//! session, so tests only spell out the fields they care about.

use crate::{
    config::AppConfig,
    core::Session,
    entities::{DecorDraft, EventDraft, ExpenseDraft, PaymentDraft, VendorDraft},
};
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output through the test harness. Safe to call from every
/// test; only the first call installs the subscriber.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// A wedding booking in the Grand Hall on the evening of 2024-01-20.
///
/// # Defaults
/// * `guest_count`: "150"
/// * `menu`: "Premium buffet with continental cuisine"
pub fn wedding_draft(client_name: &str) -> EventDraft {
    EventDraft {
        client_name: client_name.to_string(),
        hall: "Grand Hall".to_string(),
        time: "Evening (6-11 PM)".to_string(),
        event_type: "Wedding".to_string(),
        guest_count: "150".to_string(),
        menu: "Premium buffet with continental cuisine".to_string(),
        date: "2024-01-20".to_string(),
    }
}

/// The reference decor package: 9900.00 in charges at 70%, so 6930.00
/// received.
pub fn scenario_decor_draft(event_id: &str) -> DecorDraft {
    DecorDraft {
        event_id: event_id.to_string(),
        decor_amount: "5000".to_string(),
        dj_amount: "2000".to_string(),
        spotlight_amount: "800".to_string(),
        cool_fire_count: "4".to_string(),
        cool_fire_amount: "1200".to_string(),
        ice_pot_count: "2".to_string(),
        ice_pot_amount: "600".to_string(),
        confetti_amount: "300".to_string(),
        percentage: "70".to_string(),
        comment: "Premium wedding decoration package".to_string(),
    }
}

/// A cash book line dated 2024-01-15 for a sound system rental.
pub fn expense_draft(cash_in_hand: &str, amount: &str, kind: &str) -> ExpenseDraft {
    ExpenseDraft {
        date: "2024-01-15".to_string(),
        cash_in_hand: cash_in_hand.to_string(),
        purpose: "Sound System Rental".to_string(),
        amount: amount.to_string(),
        kind: kind.to_string(),
        comment: String::new(),
    }
}

/// A vendor with contact number `+1-555-0123`.
pub fn vendor_draft(name: &str) -> VendorDraft {
    VendorDraft {
        name: name.to_string(),
        contact_number: "+1-555-0123".to_string(),
    }
}

/// A bank transfer dated 2024-01-15.
pub fn payment_draft(vendor_id: &str, amount: &str) -> PaymentDraft {
    PaymentDraft {
        vendor_id: vendor_id.to_string(),
        date: "2024-01-15".to_string(),
        amount: amount.to_string(),
        purpose: "Wedding decoration setup".to_string(),
        payment_channel: "Bank Transfer".to_string(),
    }
}

/// A session seeded with the sample records under the default config.
#[allow(clippy::expect_used)]
pub fn seeded_session() -> Session {
    Session::seeded(&AppConfig::default()).expect("sample records are valid")
}
