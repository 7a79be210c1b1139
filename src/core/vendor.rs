//! Vendor accounts - Vendors, their payments, and the running totals that tie
//! them together.
//!
//! `total_paid` and `payments_count` on each vendor are bumped as payments are
//! recorded and never recomputed in normal operation. Deleting a vendor takes
//! every payment made to it along.

use crate::{
    core::{
        parse::{lenient_amount, non_negative, required_choice, required_date, required_text},
        store::EntityStore,
    },
    entities::{Payment, PaymentDraft, Vendor, VendorDraft, VendorPatch},
    errors::Result,
};
use std::collections::HashMap;
use tracing::{info, warn};

/// A payment together with the vendor it was booked against, after the
/// vendor's totals were bumped.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPayment {
    /// Vendor with updated totals
    pub vendor: Vendor,
    /// The appended payment
    pub payment: Payment,
}

/// What a vendor delete removed.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedVendor {
    /// The removed vendor records
    pub vendors: Vec<Vendor>,
    /// Every payment that referenced the vendor
    pub payments: Vec<Payment>,
}

/// Totals per vendor as counted from the payment collection.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VendorTotals {
    /// Sum of payment amounts
    pub total_paid: f64,
    /// Number of payments
    pub payments_count: u32,
}

/// Payment statistics across every vendor.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaymentStats {
    /// Number of vendors on file
    pub total_vendors: usize,
    /// Sum of every payment amount
    pub total_payments: f64,
    /// Mean payment amount, 0 when there are no payments
    pub average_payment: f64,
}

/// The vendor and payment collections, kept consistent with each other.
#[derive(Debug, Clone, Default)]
pub struct VendorAccounts {
    vendors: EntityStore<Vendor>,
    payments: EntityStore<Payment>,
}

impl VendorAccounts {
    /// Creates empty collections.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Vendors in insertion order.
    #[must_use]
    pub const fn vendors(&self) -> &EntityStore<Vendor> {
        &self.vendors
    }

    /// Payments in insertion order.
    #[must_use]
    pub const fn payments(&self) -> &EntityStore<Payment> {
        &self.payments
    }

    /// Validates a draft and appends a vendor.
    ///
    /// A new vendor starts with zero totals unless its generated id is one
    /// whose payments are still on file; it then starts with their totals.
    ///
    /// # Errors
    /// Returns a validation error if the name or contact number is blank.
    pub fn create_vendor(&mut self, draft: &VendorDraft) -> Result<Vendor> {
        let name = required_text("name", &draft.name)?;
        let contact_number = required_text("contact_number", &draft.contact_number)?;
        let payments = &self.payments;
        let vendor = self
            .vendors
            .insert_with(|id| {
                let booked = payments.iter().filter(|payment| payment.vendor_id == id).fold(
                    VendorTotals::default(),
                    |mut totals, payment| {
                        totals.total_paid += payment.amount;
                        totals.payments_count += 1;
                        totals
                    },
                );
                if booked.payments_count > 0 {
                    warn!(
                        %id,
                        payments = booked.payments_count,
                        "New vendor takes over payments booked under its id"
                    );
                }
                Vendor {
                    id,
                    name,
                    contact_number,
                    total_paid: booked.total_paid,
                    payments_count: booked.payments_count,
                }
            })
            .clone();
        info!(id = %vendor.id, name = %vendor.name, "Vendor created");
        Ok(vendor)
    }

    /// Replaces a vendor's contact details. Payments already recorded keep
    /// the vendor name they were booked under.
    ///
    /// # Errors
    /// Returns a not-found error if the id is unknown, or a validation error
    /// if a patched field is blank.
    pub fn update_vendor(&mut self, id: &str, patch: &VendorPatch) -> Result<Vendor> {
        let name = patch
            .name
            .as_deref()
            .map(|name| required_text("name", name))
            .transpose()?;
        let contact_number = patch
            .contact_number
            .as_deref()
            .map(|number| required_text("contact_number", number))
            .transpose()?;
        let updated = self.vendors.update(id, |vendor| {
            if let Some(name) = &name {
                vendor.name.clone_from(name);
            }
            if let Some(number) = &contact_number {
                vendor.contact_number.clone_from(number);
            }
        })?;
        info!(%id, "Vendor updated");
        Ok(updated.clone())
    }

    /// Appends a payment and bumps the vendor's totals.
    ///
    /// # Errors
    /// Returns a not-found error if the vendor id does not resolve, or a
    /// validation error if a required field is missing or the amount is
    /// negative. Nothing is recorded in either case.
    pub fn record_payment(&mut self, draft: &PaymentDraft) -> Result<RecordedPayment> {
        let vendor_id = required_text("vendor_id", &draft.vendor_id)?;
        let vendor_name = self.vendors.require(&vendor_id)?.name.clone();
        let date = required_date("date", &draft.date)?;
        let amount = non_negative("amount", lenient_amount(&draft.amount))?;
        let purpose = required_text("purpose", &draft.purpose)?;
        let channel = required_choice("payment_channel", &draft.payment_channel)?;

        let payment = self
            .payments
            .insert_with(|id| Payment {
                id,
                vendor_id,
                vendor_name,
                date,
                amount,
                purpose,
                channel,
            })
            .clone();
        let vendor = self
            .vendors
            .update(&payment.vendor_id, |vendor| {
                vendor.total_paid += amount;
                vendor.payments_count += 1;
            })?
            .clone();
        info!(
            payment = %payment.id,
            vendor = %vendor.id,
            amount,
            total_paid = vendor.total_paid,
            "Payment recorded"
        );
        Ok(RecordedPayment { vendor, payment })
    }

    /// Removes a vendor and exactly the payments whose `vendor_id` matches it.
    ///
    /// # Errors
    /// Returns a not-found error, with nothing removed, if the id is unknown.
    pub fn delete_vendor(&mut self, id: &str) -> Result<RemovedVendor> {
        let vendors = self.vendors.remove(id)?;
        let payments = self.payments.remove_where(|payment| payment.vendor_id == id);
        info!(%id, payments = payments.len(), "Vendor deleted with its payments");
        Ok(RemovedVendor { vendors, payments })
    }

    /// Counts totals per vendor id straight from the payment collection.
    #[must_use]
    pub fn recompute_totals(&self) -> HashMap<String, VendorTotals> {
        let mut totals: HashMap<String, VendorTotals> = HashMap::new();
        for payment in self.payments.iter() {
            let entry = totals.entry(payment.vendor_id.clone()).or_default();
            entry.total_paid += payment.amount;
            entry.payments_count += 1;
        }
        totals
    }

    /// Ids of vendors whose maintained totals disagree with a recount.
    #[must_use]
    pub fn diverging_vendors(&self) -> Vec<String> {
        let recount = self.recompute_totals();
        let diverging: Vec<String> = self
            .vendors
            .iter()
            .filter(|vendor| {
                let counted = recount.get(&vendor.id).copied().unwrap_or_default();
                (vendor.total_paid - counted.total_paid).abs() > 1e-6
                    || vendor.payments_count != counted.payments_count
            })
            .map(|vendor| vendor.id.clone())
            .collect();
        if !diverging.is_empty() {
            warn!(?diverging, "Vendor totals diverge from payments");
        }
        diverging
    }

    /// Totals and average across every payment on file.
    #[must_use]
    pub fn payment_stats(&self) -> PaymentStats {
        let total_payments: f64 = self.payments.iter().map(|payment| payment.amount).sum();
        let count = self.payments.len();
        // Cast safety: payment counts are far below 2^52.
        #[allow(clippy::cast_precision_loss)]
        let average_payment = if count == 0 {
            0.0
        } else {
            total_payments / count as f64
        };
        PaymentStats {
            total_vendors: self.vendors.len(),
            total_payments,
            average_payment,
        }
    }

    /// Vendors whose id, name or contact number contains `query`.
    pub fn list_vendors<'a>(
        &'a self,
        query: &str,
    ) -> impl Iterator<Item = &'a Vendor> + Clone + use<'a> {
        self.vendors.list(query)
    }

    /// Payments whose id, vendor name or date contains `query`.
    pub fn list_payments<'a>(
        &'a self,
        query: &str,
    ) -> impl Iterator<Item = &'a Payment> + Clone + use<'a> {
        self.payments.list(query)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::errors::Error;
    use crate::test_utils::*;

    fn accounts_with_vendors(names: &[&str]) -> VendorAccounts {
        let mut accounts = VendorAccounts::new();
        for name in names {
            accounts.create_vendor(&vendor_draft(name)).unwrap();
        }
        accounts
    }

    #[test]
    fn test_scenario_vendor_payment_totals() {
        let mut accounts = accounts_with_vendors(&["Elite Decorations"]);

        let first = accounts
            .record_payment(&payment_draft("VND001", "2500"))
            .unwrap();
        assert_eq!(first.vendor.total_paid, 2500.0);
        assert_eq!(first.vendor.payments_count, 1);
        assert_eq!(first.payment.vendor_name, "Elite Decorations");

        let second = accounts
            .record_payment(&payment_draft("VND001", "1800"))
            .unwrap();
        assert_eq!(second.vendor.total_paid, 4300.0);
        assert_eq!(second.vendor.payments_count, 2);
        assert_eq!(second.payment.id, "PAY002");
    }

    #[test]
    fn test_record_payment_unknown_vendor_records_nothing() {
        let mut accounts = accounts_with_vendors(&["Elite Decorations"]);
        let result = accounts.record_payment(&payment_draft("VND404", "100"));
        assert!(matches!(
            result,
            Err(Error::NotFound {
                entity: "Vendor",
                ..
            })
        ));
        assert!(accounts.payments().is_empty());
        assert_eq!(accounts.vendors().get("VND001").unwrap().total_paid, 0.0);
    }

    #[test]
    fn test_record_payment_validation() {
        let mut accounts = accounts_with_vendors(&["Elite Decorations"]);
        let no_channel = PaymentDraft {
            payment_channel: String::new(),
            ..payment_draft("VND001", "100")
        };
        assert!(accounts.record_payment(&no_channel).is_err());
        assert!(accounts.record_payment(&payment_draft("VND001", "-5")).is_err());
        assert!(accounts.payments().is_empty());
        assert_eq!(accounts.vendors().get("VND001").unwrap().payments_count, 0);
    }

    #[test]
    fn test_cascade_delete_removes_only_matching_payments() {
        let mut accounts = accounts_with_vendors(&["Elite", "Premium", "Sound"]);
        accounts.record_payment(&payment_draft("VND001", "100")).unwrap();
        accounts.record_payment(&payment_draft("VND002", "200")).unwrap();
        accounts.record_payment(&payment_draft("VND001", "300")).unwrap();
        accounts.record_payment(&payment_draft("VND003", "400")).unwrap();

        let removed = accounts.delete_vendor("VND001").unwrap();

        let removed_ids: Vec<&str> = removed.payments.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(removed_ids, ["PAY001", "PAY003"]);
        let kept_ids: Vec<&str> = accounts.payments().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(kept_ids, ["PAY002", "PAY004"]);
        assert!(accounts.vendors().get("VND001").is_none());
        assert_eq!(accounts.vendors().get("VND002").unwrap().total_paid, 200.0);
    }

    #[test]
    fn test_delete_unknown_vendor_keeps_payments() {
        let mut accounts = accounts_with_vendors(&["Elite"]);
        accounts.record_payment(&payment_draft("VND001", "100")).unwrap();
        assert!(accounts.delete_vendor("VND009").is_err());
        assert_eq!(accounts.payments().len(), 1);
    }

    #[test]
    fn test_incremental_totals_match_recount_over_mixed_operations() {
        let mut accounts = accounts_with_vendors(&["A", "B", "C", "D"]);
        let script = [
            ("VND001", "2500"),
            ("VND002", "1800"),
            ("VND001", "19.99"),
            ("VND003", "0"),
            ("VND004", "700.5"),
            ("VND002", "42"),
        ];
        for (vendor_id, amount) in script {
            accounts
                .record_payment(&payment_draft(vendor_id, amount))
                .unwrap();
            assert!(accounts.diverging_vendors().is_empty());
        }

        let newcomer = accounts.create_vendor(&vendor_draft("E")).unwrap();
        assert_eq!(newcomer.payments_count, 0);
        accounts
            .record_payment(&payment_draft(&newcomer.id, "10"))
            .unwrap();
        assert!(accounts.diverging_vendors().is_empty());

        accounts.delete_vendor("VND002").unwrap();
        assert!(accounts.diverging_vendors().is_empty());
        accounts.delete_vendor("VND005").unwrap();
        assert!(accounts.diverging_vendors().is_empty());

        let recount = accounts.recompute_totals();
        for vendor in accounts.vendors().iter() {
            let counted = recount.get(&vendor.id).copied().unwrap_or_default();
            assert!((vendor.total_paid - counted.total_paid).abs() < 1e-6);
            assert_eq!(vendor.payments_count, counted.payments_count);
        }
    }

    #[test]
    fn test_vendor_on_reused_id_takes_over_its_payments() {
        let mut accounts = accounts_with_vendors(&["A", "B"]);
        accounts.record_payment(&payment_draft("VND002", "100")).unwrap();
        accounts.delete_vendor("VND001").unwrap();

        let reused = accounts.create_vendor(&vendor_draft("C")).unwrap();
        assert_eq!(reused.id, "VND002");
        assert_eq!(reused.total_paid, 100.0);
        assert_eq!(reused.payments_count, 1);
        assert!(accounts.diverging_vendors().is_empty());

        accounts.record_payment(&payment_draft("VND002", "50")).unwrap();
        assert!(accounts.diverging_vendors().is_empty());

        let fresh = accounts.create_vendor(&vendor_draft("D")).unwrap();
        assert_eq!(fresh.id, "VND003");
        assert_eq!(fresh.payments_count, 0);
    }

    #[test]
    fn test_rename_does_not_touch_recorded_payments() {
        let mut accounts = accounts_with_vendors(&["Elite Decorations"]);
        accounts.record_payment(&payment_draft("VND001", "100")).unwrap();

        let patch = VendorPatch {
            name: Some("Elite Events".to_string()),
            ..VendorPatch::default()
        };
        let vendor = accounts.update_vendor("VND001", &patch).unwrap();

        assert_eq!(vendor.name, "Elite Events");
        assert_eq!(
            accounts.payments().get("PAY001").unwrap().vendor_name,
            "Elite Decorations"
        );
        let blank = VendorPatch {
            contact_number: Some(" ".to_string()),
            ..VendorPatch::default()
        };
        assert!(accounts.update_vendor("VND001", &blank).is_err());
    }

    #[test]
    fn test_payment_stats() {
        let mut accounts = accounts_with_vendors(&["Elite", "Premium"]);
        assert_eq!(accounts.payment_stats().average_payment, 0.0);

        accounts.record_payment(&payment_draft("VND001", "2500")).unwrap();
        accounts.record_payment(&payment_draft("VND002", "1800")).unwrap();

        let stats = accounts.payment_stats();
        assert_eq!(stats.total_vendors, 2);
        assert_eq!(stats.total_payments, 4300.0);
        assert_eq!(stats.average_payment, 2150.0);
    }

    #[test]
    fn test_list_vendors_and_payments() {
        let mut accounts = accounts_with_vendors(&["Elite Decorations", "Premium Catering"]);
        accounts.record_payment(&payment_draft("VND002", "1800")).unwrap();

        assert_eq!(accounts.list_vendors("catering").count(), 1);
        assert_eq!(accounts.list_vendors("+1-555").count(), 2);
        assert_eq!(accounts.list_payments("premium").count(), 1);
        assert_eq!(accounts.list_payments("2024-01").count(), 1);
    }
}
