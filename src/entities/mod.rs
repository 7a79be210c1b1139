//! Entity module - Contains the record types held by a session.
//! Each entity file defines the stored record, the draft a caller submits to
//! create one, the patch used to edit one, and any choice enums it needs.

/// Implements `Display` by writing the [`Choice::label`] of the value.
macro_rules! display_by_label {
    ($($ty:ty),*) => {
        $(impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

pub mod decor;
pub mod event;
pub mod expense;
pub mod payment;
pub mod vendor;

pub use decor::{DecorAmounts, DecorDraft, DecorPatch, DecorRecord, EventSnapshot};
pub use event::{Event, EventDraft, EventPatch, EventStatus, EventType, Hall, TimeSlot};
pub use expense::{Expense, ExpenseDraft, ExpenseKind, ExpensePatch};
pub use payment::{Payment, PaymentChannel, PaymentDraft};
pub use vendor::{Vendor, VendorDraft, VendorPatch};

/// A closed set of options chosen from a form drop-down.
///
/// Parsing accepts either the display label or the short name, ignoring
/// ASCII case and surrounding whitespace.
pub trait Choice: Copy + Sized + 'static {
    /// Every option, in display order
    const ALL: &'static [Self];

    /// Label shown to the user and stored in denormalized copies
    fn label(self) -> &'static str;

    /// Compact alias accepted by [`Choice::parse_choice`]
    fn short_name(self) -> &'static str;

    /// Looks up the option matching `input`.
    fn parse_choice(input: &str) -> Option<Self> {
        let needle = input.trim();
        Self::ALL.iter().copied().find(|option| {
            option.label().eq_ignore_ascii_case(needle)
                || option.short_name().eq_ignore_ascii_case(needle)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice_by_label_and_short_name() {
        assert_eq!(Hall::parse_choice("grand hall"), Some(Hall::GrandHall));
        assert_eq!(Hall::parse_choice(" garden "), Some(Hall::GardenVenue));
        assert_eq!(
            TimeSlot::parse_choice("Evening (6-11 PM)"),
            Some(TimeSlot::Evening)
        );
        assert_eq!(
            PaymentChannel::parse_choice("bank transfer"),
            Some(PaymentChannel::BankTransfer)
        );
        assert_eq!(
            EventStatus::parse_choice("in-progress"),
            Some(EventStatus::InProgress)
        );
        assert_eq!(ExpenseKind::parse_choice("ASSET"), Some(ExpenseKind::Asset));
    }

    #[test]
    fn test_parse_choice_rejects_unknown() {
        assert_eq!(Hall::parse_choice("Ballroom"), None);
        assert_eq!(EventType::parse_choice(""), None);
    }
}
