//! Session - The single owner of every collection and both search slots.
//!
//! Mutations take `&mut self` and complete before returning. Searches copy the
//! data they filter at the moment they start, so edits made while a search is
//! in flight show up only in the next search.

use crate::{
    config::{AppConfig, ReceivedAmountPolicy},
    core::{
        dashboard::{self, DEFAULT_SATISFIED_CUSTOMERS, DashboardSummary},
        decor,
        event,
        ledger::ExpenseLedger,
        report::{self, ExportReceipt},
        search::{
            DecorSearchCriteria, DecorSearchHit, LatestSearch, VendorSearchCriteria,
            search_decor, search_vendor_payments,
        },
        seed,
        store::EntityStore,
        vendor::{RecordedPayment, RemovedVendor, VendorAccounts},
    },
    entities::{
        DecorDraft, DecorPatch, DecorRecord, Event, EventDraft, EventPatch, EventStatus,
        Expense, ExpenseDraft, ExpensePatch, Payment, PaymentDraft, Vendor, VendorDraft,
        VendorPatch,
    },
    errors::Result,
};
use tracing::info;

/// In-memory state of one console session.
#[derive(Debug)]
pub struct Session {
    currency_symbol: String,
    received_amount_policy: ReceivedAmountPolicy,
    events: EntityStore<Event>,
    decor_records: EntityStore<DecorRecord>,
    ledger: ExpenseLedger,
    accounts: VendorAccounts,
    satisfied_customers: u32,
    vendor_search: LatestSearch<Payment>,
    decor_search: LatestSearch<DecorSearchHit>,
}

impl Session {
    /// Creates a session with no records.
    #[must_use]
    pub fn empty(config: &AppConfig) -> Self {
        Self {
            currency_symbol: config.currency_symbol.clone(),
            received_amount_policy: config.decor.received_amount_policy,
            events: EntityStore::new(),
            decor_records: EntityStore::new(),
            ledger: ExpenseLedger::new(),
            accounts: VendorAccounts::new(),
            satisfied_customers: DEFAULT_SATISFIED_CUSTOMERS,
            vendor_search: LatestSearch::new(config.search.delay()),
            decor_search: LatestSearch::new(config.search.delay()),
        }
    }

    /// Creates a session holding the sample records.
    ///
    /// # Errors
    /// Returns an error if a sample record is rejected.
    pub fn seeded(config: &AppConfig) -> Result<Self> {
        let mut session = Self::empty(config);
        seed::seed_events(&mut session.events)?;
        seed::seed_decor(&mut session.decor_records, &session.events)?;
        seed::seed_ledger(&mut session.ledger)?;
        seed::seed_vendors(&mut session.accounts)?;
        info!(
            events = session.events.len(),
            decor = session.decor_records.len(),
            expenses = session.ledger.entries().len(),
            vendors = session.accounts.vendors().len(),
            "Session seeded with sample data"
        );
        Ok(session)
    }

    /// Creates a seeded or empty session according to `seed_sample_data`.
    ///
    /// # Errors
    /// Returns an error if seeding fails.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        if config.seed_sample_data {
            Self::seeded(config)
        } else {
            info!("Starting with an empty session");
            Ok(Self::empty(config))
        }
    }

    /// Symbol used when formatting amounts.
    #[must_use]
    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Every event in insertion order.
    #[must_use]
    pub const fn events(&self) -> &EntityStore<Event> {
        &self.events
    }

    /// Every decor record in insertion order.
    #[must_use]
    pub const fn decor_records(&self) -> &EntityStore<DecorRecord> {
        &self.decor_records
    }

    /// The cash book.
    #[must_use]
    pub const fn ledger(&self) -> &ExpenseLedger {
        &self.ledger
    }

    /// Vendors and their payments.
    #[must_use]
    pub const fn accounts(&self) -> &VendorAccounts {
        &self.accounts
    }

    // Events

    /// See [`event::create_event`].
    pub fn create_event(&mut self, draft: &EventDraft) -> Result<Event> {
        event::create_event(&mut self.events, draft)
    }

    /// See [`event::update_event`].
    pub fn update_event(&mut self, id: &str, patch: &EventPatch) -> Result<Event> {
        event::update_event(&mut self.events, id, patch)
    }

    /// See [`event::set_event_status`].
    pub fn set_event_status(&mut self, id: &str, status: EventStatus) -> Result<Event> {
        event::set_event_status(&mut self.events, id, status)
    }

    /// See [`event::delete_event`].
    pub fn delete_event(&mut self, id: &str) -> Result<Vec<Event>> {
        event::delete_event(&mut self.events, id)
    }

    /// Events whose id, client name or date contains `query`.
    pub fn list_events<'a>(
        &'a self,
        query: &str,
    ) -> impl Iterator<Item = &'a Event> + Clone + use<'a> {
        self.events.list(query)
    }

    // Decor

    /// See [`decor::create_decor_record`].
    pub fn create_decor_record(&mut self, draft: &DecorDraft) -> Result<DecorRecord> {
        decor::create_decor_record(&mut self.decor_records, &self.events, draft)
    }

    /// Edits a decor record under the configured received amount policy.
    pub fn update_decor_record(&mut self, id: &str, patch: &DecorPatch) -> Result<DecorRecord> {
        decor::update_decor_record(
            &mut self.decor_records,
            id,
            patch,
            self.received_amount_policy,
        )
    }

    /// See [`decor::delete_decor_record`].
    pub fn delete_decor_record(&mut self, id: &str) -> Result<Vec<DecorRecord>> {
        decor::delete_decor_record(&mut self.decor_records, id)
    }

    /// Decor records whose id, event id or client name contains `query`.
    pub fn list_decor_records<'a>(
        &'a self,
        query: &str,
    ) -> impl Iterator<Item = &'a DecorRecord> + Clone + use<'a> {
        self.decor_records.list(query)
    }

    // Expenses

    /// See [`ExpenseLedger::create`].
    pub fn create_expense(&mut self, draft: &ExpenseDraft) -> Result<Expense> {
        self.ledger.create(draft)
    }

    /// See [`ExpenseLedger::update`].
    pub fn update_expense(&mut self, id: &str, patch: &ExpensePatch) -> Result<Expense> {
        self.ledger.update(id, patch)
    }

    /// See [`ExpenseLedger::delete`].
    pub fn delete_expense(&mut self, id: &str) -> Result<Vec<Expense>> {
        self.ledger.delete(id)
    }

    // Vendors

    /// See [`VendorAccounts::create_vendor`].
    pub fn create_vendor(&mut self, draft: &VendorDraft) -> Result<Vendor> {
        self.accounts.create_vendor(draft)
    }

    /// See [`VendorAccounts::update_vendor`].
    pub fn update_vendor(&mut self, id: &str, patch: &VendorPatch) -> Result<Vendor> {
        self.accounts.update_vendor(id, patch)
    }

    /// See [`VendorAccounts::delete_vendor`].
    pub fn delete_vendor(&mut self, id: &str) -> Result<RemovedVendor> {
        self.accounts.delete_vendor(id)
    }

    /// See [`VendorAccounts::record_payment`].
    pub fn record_payment(&mut self, draft: &PaymentDraft) -> Result<RecordedPayment> {
        self.accounts.record_payment(draft)
    }

    // Dashboard

    /// Current dashboard metrics.
    #[must_use]
    pub fn dashboard(&self) -> DashboardSummary {
        dashboard::dashboard_summary(&self.events, &self.accounts, self.satisfied_customers)
    }

    /// Replaces the satisfied customers counter and returns the stored value.
    /// Input without leading digits stores 0.
    pub fn set_satisfied_customers(&mut self, input: &str) -> u32 {
        self.satisfied_customers = dashboard::parse_customer_count(input);
        info!(value = self.satisfied_customers, "Satisfied customers updated");
        self.satisfied_customers
    }

    // Search

    /// The vendor payment search slot.
    #[must_use]
    pub const fn vendor_search(&self) -> &LatestSearch<Payment> {
        &self.vendor_search
    }

    /// The decor search slot.
    #[must_use]
    pub const fn decor_search(&self) -> &LatestSearch<DecorSearchHit> {
        &self.decor_search
    }

    /// Starts a vendor payment search over the payments as they are now,
    /// superseding any vendor search still in flight. Must be called from
    /// within a Tokio runtime.
    pub fn start_vendor_search(&self, criteria: VendorSearchCriteria) -> u64 {
        let payments = self.accounts.payments().as_slice().to_vec();
        info!(vendor = %criteria.vendor_id, dates = ?criteria.dates, "Vendor search started");
        self.vendor_search
            .start(move || search_vendor_payments(&payments, &criteria))
    }

    /// Starts a decor search over the records and events as they are now,
    /// superseding any decor search still in flight. Must be called from
    /// within a Tokio runtime.
    pub fn start_decor_search(&self, criteria: DecorSearchCriteria) -> u64 {
        let records = self.decor_records.as_slice().to_vec();
        let events = self.events.clone();
        info!(dates = ?criteria.dates, "Decor search started");
        self.decor_search
            .start(move || search_decor(&records, &events, &criteria))
    }

    /// Renders and exports the vendor search results currently displayed.
    pub async fn export_vendor_report(&self) -> ExportReceipt {
        let results = self.vendor_search.results().await;
        let lines = report::render_vendor_report(&self.currency_symbol, &results);
        report::export_report("Vendor payments", &lines)
    }

    /// Renders and exports the decor search results currently displayed.
    pub async fn export_decor_report(&self) -> ExportReceipt {
        let results = self.decor_search.results().await;
        let lines = report::render_decor_report(&self.currency_symbol, &results);
        report::export_report("Decor records", &lines)
    }
}
