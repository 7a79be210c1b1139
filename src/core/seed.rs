//! Sample records a new session starts with.
//!
//! Everything goes through the regular create operations, so the seeded
//! vendor totals are exactly the sums of the seeded payments and every id
//! comes from the id generator.

use crate::{
    core::{
        decor::create_decor_record,
        event::{create_event, set_event_status},
        ledger::ExpenseLedger,
        store::EntityStore,
        vendor::VendorAccounts,
    },
    entities::{
        DecorDraft, DecorRecord, Event, EventDraft, EventStatus, ExpenseDraft, PaymentDraft,
        VendorDraft,
    },
    errors::Result,
};
use tracing::debug;

fn event(
    client_name: &str,
    hall: &str,
    time: &str,
    event_type: &str,
    guest_count: &str,
    menu: &str,
    date: &str,
) -> EventDraft {
    EventDraft {
        client_name: client_name.to_string(),
        hall: hall.to_string(),
        time: time.to_string(),
        event_type: event_type.to_string(),
        guest_count: guest_count.to_string(),
        menu: menu.to_string(),
        date: date.to_string(),
    }
}

/// Adds the three sample bookings.
///
/// # Errors
/// Propagates a validation error if a sample record is rejected.
pub fn seed_events(events: &mut EntityStore<Event>) -> Result<()> {
    let sarah = create_event(
        events,
        &event(
            "Sarah Johnson",
            "Grand Hall",
            "Evening (6-11 PM)",
            "Wedding",
            "150",
            "Premium buffet with continental cuisine",
            "2024-01-20",
        ),
    )?;
    set_event_status(events, &sarah.id, EventStatus::Completed)?;
    create_event(
        events,
        &event(
            "Tech Corp Inc",
            "Conference Room A",
            "Morning (9-1 PM)",
            "Corporate",
            "80",
            "Business lunch with appetizers",
            "2024-01-22",
        ),
    )?;
    let anniversary = create_event(
        events,
        &event(
            "Mike & Anna",
            "Garden Venue",
            "Afternoon (1-6 PM)",
            "Anniversary",
            "60",
            "",
            "2024-01-25",
        ),
    )?;
    set_event_status(events, &anniversary.id, EventStatus::InProgress)?;
    debug!(count = events.len(), "Seeded events");
    Ok(())
}

/// Adds the sample wedding decoration package for `EVT001`.
///
/// # Errors
/// Propagates a validation error if the sample record is rejected.
pub fn seed_decor(
    records: &mut EntityStore<DecorRecord>,
    events: &EntityStore<Event>,
) -> Result<()> {
    let draft = DecorDraft {
        event_id: "EVT001".to_string(),
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
    };
    create_decor_record(records, events, &draft)?;
    debug!(count = records.len(), "Seeded decor records");
    Ok(())
}

/// Adds the three sample cash book lines.
///
/// # Errors
/// Propagates a validation error if a sample record is rejected.
pub fn seed_ledger(ledger: &mut ExpenseLedger) -> Result<()> {
    let lines = [
        (
            "2024-01-15",
            "5000",
            "Sound System Rental",
            "800",
            "expense",
            "Premium sound system for wedding event",
        ),
        (
            "2024-01-18",
            "4200",
            "LED Lights Purchase",
            "1200",
            "asset",
            "Investment in new LED lighting equipment",
        ),
        (
            "2024-01-20",
            "3000",
            "Decoration Supplies",
            "450",
            "expense",
            "Flowers and fabric for Sarah's wedding",
        ),
    ];
    for (date, cash_in_hand, purpose, amount, kind, comment) in lines {
        ledger.create(&ExpenseDraft {
            date: date.to_string(),
            cash_in_hand: cash_in_hand.to_string(),
            purpose: purpose.to_string(),
            amount: amount.to_string(),
            kind: kind.to_string(),
            comment: comment.to_string(),
        })?;
    }
    debug!(count = ledger.entries().len(), "Seeded expenses");
    Ok(())
}

/// Adds the three sample vendors and their two payments.
///
/// # Errors
/// Propagates a validation or not-found error if a sample record is rejected.
pub fn seed_vendors(accounts: &mut VendorAccounts) -> Result<()> {
    let vendors = [
        ("Elite Decorations", "+1-555-0123"),
        ("Premium Catering", "+1-555-0456"),
        ("Sound & Lights Pro", "+1-555-0789"),
    ];
    for (name, contact_number) in vendors {
        accounts.create_vendor(&VendorDraft {
            name: name.to_string(),
            contact_number: contact_number.to_string(),
        })?;
    }

    let payments = [
        ("VND001", "2024-01-15", "2500", "Wedding decoration setup", "Bank Transfer"),
        ("VND002", "2024-01-18", "1800", "Corporate event catering", "Credit Card"),
    ];
    for (vendor_id, date, amount, purpose, payment_channel) in payments {
        accounts.record_payment(&PaymentDraft {
            vendor_id: vendor_id.to_string(),
            date: date.to_string(),
            amount: amount.to_string(),
            purpose: purpose.to_string(),
            payment_channel: payment_channel.to_string(),
        })?;
    }
    debug!(
        vendors = accounts.vendors().len(),
        payments = accounts.payments().len(),
        "Seeded vendors"
    );
    Ok(())
}
