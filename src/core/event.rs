//! Event business logic - Handles creating, editing and removing bookings.

use crate::{
    core::{
        parse::{lenient_count, required_choice, required_date, required_text},
        store::EntityStore,
    },
    entities::{Event, EventDraft, EventPatch, EventStatus},
    errors::Result,
};
use tracing::info;

/// Validates a draft and appends the new event with status `upcoming`.
///
/// # Errors
/// Returns a validation error if client name, hall, time, event type or date
/// is missing or unrecognised. A non-numeric guest count is stored as 0.
pub fn create_event(events: &mut EntityStore<Event>, draft: &EventDraft) -> Result<Event> {
    let client_name = required_text("client_name", &draft.client_name)?;
    let hall = required_choice("hall", &draft.hall)?;
    let time = required_choice("time", &draft.time)?;
    let event_type = required_choice("event_type", &draft.event_type)?;
    let date = required_date("date", &draft.date)?;
    let guest_count = lenient_count(&draft.guest_count);
    let menu = draft.menu.trim().to_string();

    let event = events
        .insert_with(|id| Event {
            id,
            client_name,
            hall,
            time,
            event_type,
            guest_count,
            menu,
            date,
            status: EventStatus::Upcoming,
        })
        .clone();
    info!(id = %event.id, client = %event.client_name, "Event created");
    Ok(event)
}

/// Applies the provided patch fields to an event.
///
/// # Errors
/// Returns a not-found error, with nothing changed, if the id is unknown.
pub fn update_event(
    events: &mut EntityStore<Event>,
    id: &str,
    patch: &EventPatch,
) -> Result<Event> {
    let updated = events.update(id, |event| {
        if let Some(client_name) = &patch.client_name {
            event.client_name.clone_from(client_name);
        }
        if let Some(hall) = patch.hall {
            event.hall = hall;
        }
        if let Some(time) = patch.time {
            event.time = time;
        }
        if let Some(event_type) = patch.event_type {
            event.event_type = event_type;
        }
        if let Some(guest_count) = patch.guest_count {
            event.guest_count = guest_count;
        }
        if let Some(menu) = &patch.menu {
            event.menu.clone_from(menu);
        }
        if let Some(date) = patch.date {
            event.date = date;
        }
        if let Some(status) = patch.status {
            event.status = status;
        }
    })?;
    info!(%id, "Event updated");
    Ok(updated.clone())
}

/// Moves an event to a new status.
///
/// # Errors
/// Returns a not-found error if the id is unknown.
pub fn set_event_status(
    events: &mut EntityStore<Event>,
    id: &str,
    status: EventStatus,
) -> Result<Event> {
    update_event(
        events,
        id,
        &EventPatch {
            status: Some(status),
            ..EventPatch::default()
        },
    )
}

/// Removes an event. Decor records referencing it are left in place.
///
/// # Errors
/// Returns a not-found error if the id is unknown.
pub fn delete_event(events: &mut EntityStore<Event>, id: &str) -> Result<Vec<Event>> {
    let removed = events.remove(id)?;
    info!(%id, "Event deleted");
    Ok(removed)
}
