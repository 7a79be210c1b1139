//! Decor business logic - Itemized decoration charges and their headline figures.
//!
//! [`compute_decor_totals`] is cheap and pure so a form can call it on every
//! keystroke. The figure it yields is frozen into the record at creation time;
//! what an edit does to it depends on [`ReceivedAmountPolicy`].

use crate::{
    config::ReceivedAmountPolicy,
    core::{
        parse::{lenient_amount, lenient_count, non_negative, required_text},
        store::EntityStore,
    },
    entities::{Choice, DecorAmounts, DecorDraft, DecorPatch, DecorRecord, Event, EventSnapshot},
    errors::{Error, Result},
};
use tracing::{info, warn};

/// The two headline figures of a decor form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecorTotals {
    /// Sum of the six charges
    pub total: f64,
    /// `total * percentage / 100`, unrounded
    pub received_amount: f64,
}

/// Sums the six itemized charges.
#[must_use]
pub fn total(amounts: &DecorAmounts) -> f64 {
    amounts.as_array().iter().sum()
}

/// The share of `total` expected to be received, at full precision.
#[must_use]
pub fn received_amount(total: f64, percentage: f64) -> f64 {
    total * percentage / 100.0
}

/// Computes both headline figures at once.
#[must_use]
pub fn compute_decor_totals(amounts: &DecorAmounts, percentage: f64) -> DecorTotals {
    let total = total(amounts);
    DecorTotals {
        total,
        received_amount: received_amount(total, percentage),
    }
}

/// Live figures for a half-filled form; unparseable fields count as 0.
#[must_use]
pub fn preview_draft(draft: &DecorDraft) -> DecorTotals {
    compute_decor_totals(&draft_amounts(draft), lenient_amount(&draft.percentage))
}

fn draft_amounts(draft: &DecorDraft) -> DecorAmounts {
    DecorAmounts {
        decor: lenient_amount(&draft.decor_amount),
        dj: lenient_amount(&draft.dj_amount),
        spotlight: lenient_amount(&draft.spotlight_amount),
        confetti: lenient_amount(&draft.confetti_amount),
        cool_fire: lenient_amount(&draft.cool_fire_amount),
        ice_pot: lenient_amount(&draft.ice_pot_amount),
    }
}

fn validate_amounts(amounts: &DecorAmounts) -> Result<()> {
    non_negative("decor_amount", amounts.decor)?;
    non_negative("dj_amount", amounts.dj)?;
    non_negative("spotlight_amount", amounts.spotlight)?;
    non_negative("confetti_amount", amounts.confetti)?;
    non_negative("cool_fire_amount", amounts.cool_fire)?;
    non_negative("ice_pot_amount", amounts.ice_pot)?;
    Ok(())
}

fn validate_percentage(percentage: f64) -> Result<f64> {
    if !(0.0..=100.0).contains(&percentage) {
        return Err(Error::invalid(
            "percentage",
            format!("{percentage} is outside 0 to 100"),
        ));
    }
    Ok(percentage)
}

/// Copies the fields a decor record keeps from its event.
///
/// An unknown event yields empty fields rather than an error.
#[must_use]
pub fn snapshot_event(events: &EntityStore<Event>, event_id: &str) -> EventSnapshot {
    events.get(event_id).map_or_else(
        || {
            warn!(%event_id, "Decor record references an unknown event");
            EventSnapshot::default()
        },
        |event| EventSnapshot {
            client_name: event.client_name.clone(),
            hall: event.hall.label().to_string(),
            time: event.time.label().to_string(),
        },
    )
}

/// Validates a draft, snapshots its event and appends the new record with its
/// received amount derived once.
///
/// # Errors
/// Returns a validation error if the event id is blank, any amount is
/// negative, or the percentage is outside 0 to 100.
pub fn create_decor_record(
    records: &mut EntityStore<DecorRecord>,
    events: &EntityStore<Event>,
    draft: &DecorDraft,
) -> Result<DecorRecord> {
    let event_id = required_text("event_id", &draft.event_id)?;
    let amounts = draft_amounts(draft);
    validate_amounts(&amounts)?;
    let percentage = validate_percentage(lenient_amount(&draft.percentage))?;
    let totals = compute_decor_totals(&amounts, percentage);
    let event = snapshot_event(events, &event_id);

    let record = records
        .insert_with(|id| DecorRecord {
            id,
            event_id,
            event,
            amounts,
            cool_fire_count: lenient_count(&draft.cool_fire_count),
            ice_pot_count: lenient_count(&draft.ice_pot_count),
            percentage,
            received_amount: totals.received_amount,
            comment: draft.comment.trim().to_string(),
        })
        .clone();
    info!(
        id = %record.id,
        event_id = %record.event_id,
        total = totals.total,
        received = record.received_amount,
        "Decor record created"
    );
    Ok(record)
}

/// Applies the provided patch fields to every decor record with the id.
///
/// Each record keeps its own values for the fields the patch leaves out.
/// With [`ReceivedAmountPolicy::Frozen`] the stored received amount is kept
/// as it was; with [`ReceivedAmountPolicy::Recompute`] it is re-derived from
/// the patched record.
///
/// # Errors
/// Returns a not-found error if the id is unknown, or a validation error if
/// the patch would store a negative amount or an out-of-range percentage on
/// any matching record. Either way no record is changed.
pub fn update_decor_record(
    records: &mut EntityStore<DecorRecord>,
    id: &str,
    patch: &DecorPatch,
    policy: ReceivedAmountPolicy,
) -> Result<DecorRecord> {
    records.require(id)?;
    for record in records.iter().filter(|record| record.id == id) {
        let mut amounts = record.amounts;
        apply_amounts(&mut amounts, patch);
        validate_amounts(&amounts)?;
        validate_percentage(patch.percentage.unwrap_or(record.percentage))?;
    }

    let updated = records.update(id, |record| {
        apply_amounts(&mut record.amounts, patch);
        if let Some(percentage) = patch.percentage {
            record.percentage = percentage;
        }
        if let Some(count) = patch.cool_fire_count {
            record.cool_fire_count = count;
        }
        if let Some(count) = patch.ice_pot_count {
            record.ice_pot_count = count;
        }
        if let Some(comment) = &patch.comment {
            record.comment.clone_from(comment);
        }
        if policy == ReceivedAmountPolicy::Recompute {
            record.received_amount =
                compute_decor_totals(&record.amounts, record.percentage).received_amount;
        }
    })?;
    info!(%id, ?policy, "Decor record updated");
    Ok(updated.clone())
}

fn apply_amounts(amounts: &mut DecorAmounts, patch: &DecorPatch) {
    if let Some(decor) = patch.decor {
        amounts.decor = decor;
    }
    if let Some(dj) = patch.dj {
        amounts.dj = dj;
    }
    if let Some(spotlight) = patch.spotlight {
        amounts.spotlight = spotlight;
    }
    if let Some(confetti) = patch.confetti {
        amounts.confetti = confetti;
    }
    if let Some(cool_fire) = patch.cool_fire {
        amounts.cool_fire = cool_fire;
    }
    if let Some(ice_pot) = patch.ice_pot {
        amounts.ice_pot = ice_pot;
    }
}

/// Removes a decor record.
///
/// # Errors
/// Returns a not-found error if the id is unknown.
pub fn delete_decor_record(
    records: &mut EntityStore<DecorRecord>,
    id: &str,
) -> Result<Vec<DecorRecord>> {
    let removed = records.remove(id)?;
    info!(%id, "Decor record deleted");
    Ok(removed)
}
