//! Expense entity - One line of the cash book.
//!
//! `cash_in_hand` is whatever the user typed when the line was entered; it is
//! never derived from other lines.
use super::Choice;
use crate::core::store::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Whether money left the business or bought something it keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseKind {
    /// Consumed spending
    #[default]
    Expense,
    /// Purchase of equipment or stock
    Asset,
}

impl Choice for ExpenseKind {
    const ALL: &'static [Self] = &[Self::Expense, Self::Asset];

    fn label(self) -> &'static str {
        match self {
            Self::Expense => "Expense",
            Self::Asset => "Asset",
        }
    }

    fn short_name(self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Asset => "asset",
        }
    }
}

display_by_label!(ExpenseKind);

/// Stored expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// `EXP###`
    pub id: String,
    /// Day the money moved
    pub date: NaiveDate,
    /// Cash on hand as entered with this line
    pub cash_in_hand: f64,
    /// What the money was for
    pub purpose: String,
    /// Amount spent
    pub amount: f64,
    /// Expense or asset
    #[serde(rename = "type")]
    pub kind: ExpenseKind,
    /// Free text
    pub comment: String,
}

impl Record for Expense {
    const PREFIX: &'static str = "EXP";
    const ENTITY: &'static str = "Expense";

    fn id(&self) -> &str {
        &self.id
    }

    fn search_keys(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.id.as_str()),
            Cow::Borrowed(self.purpose.as_str()),
            Cow::Owned(self.date.to_string()),
        ]
    }
}

/// Raw form input for a new expense.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    /// Required, `YYYY-MM-DD`
    pub date: String,
    /// Non-numeric input counts as zero
    pub cash_in_hand: String,
    /// Required
    pub purpose: String,
    /// Non-numeric input counts as zero
    pub amount: String,
    /// Required, `expense` or `asset`
    pub kind: String,
    /// Optional
    pub comment: String,
}

/// Fields to replace on an existing expense; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
#[allow(missing_docs)]
pub struct ExpensePatch {
    pub date: Option<NaiveDate>,
    pub cash_in_hand: Option<f64>,
    pub purpose: Option<String>,
    pub amount: Option<f64>,
    pub kind: Option<ExpenseKind>,
    pub comment: Option<String>,
}
