//! Search & reports - Date-bounded lookups over payments and decor records.
//!
//! The lookups themselves are pure filters. [`LatestSearch`] wraps them in the
//! artificial delay a real backend call would have, and guarantees that only
//! the most recently started request ever replaces the displayed results.

use crate::{
    core::store::EntityStore,
    entities::{DecorRecord, Event, Payment},
};
use chrono::NaiveDate;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Inclusive date bounds; a missing bound does not restrict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    /// Earliest date included
    pub from: Option<NaiveDate>,
    /// Latest date included
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Whether any bound is set.
    #[must_use]
    pub const fn is_bounded(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Whether `date` lies within the bounds.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

/// Criteria of the vendor payment search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorSearchCriteria {
    /// Vendor whose payments are wanted
    pub vendor_id: String,
    /// Payment date bounds
    pub dates: DateRange,
}

/// Criteria of the decor search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecorSearchCriteria {
    /// Event date bounds
    pub dates: DateRange,
}

/// A decor record with the date of the event it references.
#[derive(Debug, Clone, PartialEq)]
pub struct DecorSearchHit {
    /// The matching record
    pub record: DecorRecord,
    /// Date of the referenced event, `None` if the event no longer exists
    pub event_date: Option<NaiveDate>,
}

/// Payments to `criteria.vendor_id` within the date bounds. An unknown vendor
/// yields no results.
#[must_use]
pub fn search_vendor_payments(
    payments: &[Payment],
    criteria: &VendorSearchCriteria,
) -> Vec<Payment> {
    payments
        .iter()
        .filter(|payment| payment.vendor_id == criteria.vendor_id)
        .filter(|payment| criteria.dates.contains(payment.date))
        .cloned()
        .collect()
}

/// Decor records whose event date lies within the bounds. Records whose event
/// cannot be found only match an unbounded search.
#[must_use]
pub fn search_decor(
    records: &[DecorRecord],
    events: &EntityStore<Event>,
    criteria: &DecorSearchCriteria,
) -> Vec<DecorSearchHit> {
    records
        .iter()
        .map(|record| DecorSearchHit {
            record: record.clone(),
            event_date: events.get(&record.event_id).map(|event| event.date),
        })
        .filter(|hit| match hit.event_date {
            Some(date) => criteria.dates.contains(date),
            None => !criteria.dates.is_bounded(),
        })
        .collect()
}

#[derive(Debug)]
struct SearchState<R> {
    results: Vec<R>,
    applied: u64,
}

/// Displayed state of a search slot.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSnapshot<R> {
    /// Results of the last request that landed
    pub results: Vec<R>,
    /// Whether the latest request has yet to land
    pub is_searching: bool,
}

/// One search screen's result set and its single in-flight request.
///
/// Starting a request aborts the previous one and bumps a generation counter.
/// A finished request replaces the results only when its generation is still
/// the latest, so overlapping searches resolve last-request-wins.
#[derive(Debug)]
pub struct LatestSearch<R> {
    delay: Duration,
    latest: Arc<AtomicU64>,
    state: Arc<RwLock<SearchState<R>>>,
    in_flight: Mutex<Option<JoinHandle<()>>>,
}

impl<R> LatestSearch<R>
where
    R: Clone + Send + Sync + 'static,
{
    /// Creates an idle slot whose requests resolve after `delay`.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            latest: Arc::new(AtomicU64::new(0)),
            state: Arc::new(RwLock::new(SearchState {
                results: Vec::new(),
                applied: 0,
            })),
            in_flight: Mutex::new(None),
        }
    }

    /// Starts a request that runs `compute` once the delay has elapsed and
    /// returns its generation. Must be called from within a Tokio runtime.
    pub fn start<F>(&self, compute: F) -> u64
    where
        F: FnOnce() -> Vec<R> + Send + 'static,
    {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let latest = Arc::clone(&self.latest);
        let state = Arc::clone(&self.state);
        let delay = self.delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let results = compute();
            let mut guard = state.write().await;
            if latest.load(Ordering::SeqCst) != generation {
                debug!(generation, "Discarding results of a superseded search");
                return;
            }
            debug!(generation, count = results.len(), "Search results applied");
            guard.results = results;
            guard.applied = generation;
        });

        let previous = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(handle);
        if let Some(previous) = previous {
            previous.abort();
        }
        generation
    }

    /// Waits for the current in-flight request, if any, to finish or be aborted.
    pub async fn wait(&self) {
        let handle = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                debug!("Search task ended without applying: {e}");
            }
        }
    }

    /// Results of the last request that landed.
    pub async fn results(&self) -> Vec<R> {
        self.state.read().await.results.clone()
    }

    /// Whether the most recent request has not landed yet.
    pub async fn is_searching(&self) -> bool {
        let applied = self.state.read().await.applied;
        applied != self.latest.load(Ordering::SeqCst)
    }

    /// Results and searching flag read together.
    pub async fn snapshot(&self) -> SearchSnapshot<R> {
        let guard = self.state.read().await;
        SearchSnapshot {
            results: guard.results.clone(),
            is_searching: guard.applied != self.latest.load(Ordering::SeqCst),
        }
    }

    /// Edits the displayed results in place. The collections the results
    /// were drawn from are not touched; the next search replaces the edit.
    pub async fn edit_results(&self, edit: impl FnOnce(&mut Vec<R>)) {
        let mut guard = self.state.write().await;
        edit(&mut guard.results);
        info!(count = guard.results.len(), "Search results edited");
    }
}

impl<R> Drop for LatestSearch<R> {
    fn drop(&mut self) {
        let handle = self
            .in_flight
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            handle.abort();
        }
    }
}
