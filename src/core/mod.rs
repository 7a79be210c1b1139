//! Core business logic - Framework-agnostic operations over the session's
//! collections. Nothing here performs I/O; the only async code is the search
//! slot in [`search`].

/// Dashboard headline metrics
pub mod dashboard;
/// Decor totals and decor record operations
pub mod decor;
/// Event booking operations
pub mod event;
/// Length-based id generation
pub mod id;
/// Cash book with incrementally maintained totals
pub mod ledger;
/// Permissive form input parsing
pub mod parse;
/// Report rendering and the export stub
pub mod report;
/// Date-bounded searches and the last-request-wins search slot
pub mod search;
/// Sample records for a new session
pub mod seed;
/// Owner of every collection and search slot
pub mod session;
/// Generic ordered record collection
pub mod store;
/// Vendors and their payments
pub mod vendor;

pub use session::Session;
