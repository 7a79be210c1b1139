//! Vendor entity - A supplier the business pays.
//!
//! `total_paid` and `payments_count` are running aggregates maintained by
//! [`VendorAccounts`](crate::core::vendor::VendorAccounts) as payments are
//! recorded.
use crate::core::store::Record;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Stored vendor record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    /// `VND###`
    pub id: String,
    /// Business name
    pub name: String,
    /// Phone number as typed
    pub contact_number: String,
    /// Sum of every payment recorded against this vendor
    pub total_paid: f64,
    /// Number of payments recorded against this vendor
    pub payments_count: u32,
}

impl Record for Vendor {
    const PREFIX: &'static str = "VND";
    const ENTITY: &'static str = "Vendor";

    fn id(&self) -> &str {
        &self.id
    }

    fn search_keys(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.id.as_str()),
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.contact_number.as_str()),
        ]
    }
}

/// Raw form input for a new vendor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorDraft {
    /// Required
    pub name: String,
    /// Required
    pub contact_number: String,
}

/// Contact details to replace on an existing vendor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct VendorPatch {
    pub name: Option<String>,
    pub contact_number: Option<String>,
}
