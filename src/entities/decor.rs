//! Decor entity - Itemized decoration charges billed against an event.
//!
//! The client name, hall and time are copied from the event when the record is
//! created and are not refreshed afterwards. `received_amount` is a cached
//! derived value; whether edits refresh it is governed by
//! [`ReceivedAmountPolicy`](crate::config::ReceivedAmountPolicy).
use crate::core::store::Record;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// The six itemized charges of a decor record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorAmounts {
    /// Base decoration charge
    pub decor: f64,
    /// DJ charge
    pub dj: f64,
    /// Spotlight charge
    pub spotlight: f64,
    /// Confetti charge
    pub confetti: f64,
    /// Cold-pyro ("cool fire") charge
    pub cool_fire: f64,
    /// Ice-pot fog charge
    pub ice_pot: f64,
}

impl DecorAmounts {
    /// All six charges, in form order.
    #[must_use]
    pub const fn as_array(&self) -> [f64; 6] {
        [
            self.decor,
            self.dj,
            self.spotlight,
            self.cool_fire,
            self.ice_pot,
            self.confetti,
        ]
    }
}

/// Event fields copied into a decor record at creation time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSnapshot {
    /// Client name at the time of copying
    pub client_name: String,
    /// Hall label at the time of copying
    pub hall: String,
    /// Time slot label at the time of copying
    pub time: String,
}

/// Stored decor record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorRecord {
    /// `DCR###`
    pub id: String,
    /// Referenced event; not checked after creation
    pub event_id: String,
    /// Denormalized copy of the event
    #[serde(flatten)]
    pub event: EventSnapshot,
    /// Itemized charges
    #[serde(flatten)]
    pub amounts: DecorAmounts,
    /// Number of cool fire units
    pub cool_fire_count: u32,
    /// Number of ice pot units
    pub ice_pot_count: u32,
    /// Expected share of the total to be received, 0 to 100
    pub percentage: f64,
    /// Cached `total * percentage / 100`
    pub received_amount: f64,
    /// Free text
    pub comment: String,
}

impl Record for DecorRecord {
    const PREFIX: &'static str = "DCR";
    const ENTITY: &'static str = "DecorRecord";

    fn id(&self) -> &str {
        &self.id
    }

    fn search_keys(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.id.as_str()),
            Cow::Borrowed(self.event_id.as_str()),
            Cow::Borrowed(self.event.client_name.as_str()),
        ]
    }
}

/// Raw form input for a new decor record.
///
/// Every numeric field is free text; anything that does not parse counts as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct DecorDraft {
    /// Required
    pub event_id: String,
    pub decor_amount: String,
    pub dj_amount: String,
    pub spotlight_amount: String,
    pub cool_fire_count: String,
    pub cool_fire_amount: String,
    pub ice_pot_count: String,
    pub ice_pot_amount: String,
    pub confetti_amount: String,
    pub percentage: String,
    pub comment: String,
}

/// Fields to replace on an existing decor record; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
#[allow(missing_docs)]
pub struct DecorPatch {
    pub decor: Option<f64>,
    pub dj: Option<f64>,
    pub spotlight: Option<f64>,
    pub confetti: Option<f64>,
    pub cool_fire: Option<f64>,
    pub ice_pot: Option<f64>,
    pub cool_fire_count: Option<u32>,
    pub ice_pot_count: Option<u32>,
    pub percentage: Option<f64>,
    pub comment: Option<String>,
}
