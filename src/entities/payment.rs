//! Payment entity - Money paid to a vendor.
//!
//! `vendor_name` is a copy taken when the payment is recorded.
use super::Choice;
use crate::core::store::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// How a payment was made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentChannel {
    #[allow(missing_docs)]
    Cash,
    #[allow(missing_docs)]
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    #[allow(missing_docs)]
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[allow(missing_docs)]
    #[serde(rename = "Debit Card")]
    DebitCard,
    #[allow(missing_docs)]
    #[serde(rename = "Digital Wallet")]
    DigitalWallet,
    #[allow(missing_docs)]
    Check,
}

impl Choice for PaymentChannel {
    const ALL: &'static [Self] = &[
        Self::Cash,
        Self::BankTransfer,
        Self::CreditCard,
        Self::DebitCard,
        Self::DigitalWallet,
        Self::Check,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::BankTransfer => "Bank Transfer",
            Self::CreditCard => "Credit Card",
            Self::DebitCard => "Debit Card",
            Self::DigitalWallet => "Digital Wallet",
            Self::Check => "Check",
        }
    }

    fn short_name(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::BankTransfer => "bank",
            Self::CreditCard => "credit",
            Self::DebitCard => "debit",
            Self::DigitalWallet => "wallet",
            Self::Check => "cheque",
        }
    }
}

display_by_label!(PaymentChannel);

/// Stored payment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// `PAY###`
    pub id: String,
    /// Vendor the payment was made to
    pub vendor_id: String,
    /// Vendor name when the payment was recorded
    pub vendor_name: String,
    /// Day of payment
    pub date: NaiveDate,
    /// Amount paid
    pub amount: f64,
    /// What the payment was for
    pub purpose: String,
    /// How it was paid
    #[serde(rename = "paymentChannel")]
    pub channel: PaymentChannel,
}

impl Record for Payment {
    const PREFIX: &'static str = "PAY";
    const ENTITY: &'static str = "Payment";

    fn id(&self) -> &str {
        &self.id
    }

    fn search_keys(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.id.as_str()),
            Cow::Borrowed(self.vendor_name.as_str()),
            Cow::Owned(self.date.to_string()),
        ]
    }
}

/// Raw form input for a new payment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentDraft {
    /// Required, must name an existing vendor
    pub vendor_id: String,
    /// Required, `YYYY-MM-DD`
    pub date: String,
    /// Non-numeric input counts as zero
    pub amount: String,
    /// Required
    pub purpose: String,
    /// Required, a [`PaymentChannel`] label
    pub payment_channel: String,
}
