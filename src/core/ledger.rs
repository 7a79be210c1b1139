//! Expense ledger - The cash book and its three headline metrics.
//!
//! Expense and asset totals are kept up to date on every mutation instead of
//! being summed on read. Current cash is a snapshot: the `cash_in_hand` typed
//! on the most recently appended line, not a running balance.

use crate::{
    core::{
        parse::{lenient_amount, non_negative, required_choice, required_date, required_text},
        store::EntityStore,
    },
    entities::{Expense, ExpenseDraft, ExpenseKind, ExpensePatch},
    errors::Result,
};
use tracing::info;

/// Headline metrics of the cash book.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LedgerSummary {
    /// Sum of `amount` over expense lines
    pub total_expenses: f64,
    /// Sum of `amount` over asset lines
    pub total_assets: f64,
    /// `cash_in_hand` of the last line, 0 when empty
    pub current_cash: f64,
}

/// Computes the ledger metrics from scratch.
#[must_use]
pub fn ledger_summary(expenses: &[Expense]) -> LedgerSummary {
    let mut summary = LedgerSummary::default();
    for expense in expenses {
        match expense.kind {
            ExpenseKind::Expense => summary.total_expenses += expense.amount,
            ExpenseKind::Asset => summary.total_assets += expense.amount,
        }
    }
    summary.current_cash = expenses.last().map_or(0.0, |expense| expense.cash_in_hand);
    summary
}

/// The cash book with incrementally maintained totals.
#[derive(Debug, Clone, Default)]
pub struct ExpenseLedger {
    entries: EntityStore<Expense>,
    total_expenses: f64,
    total_assets: f64,
}

impl ExpenseLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying collection, in insertion order.
    #[must_use]
    pub const fn entries(&self) -> &EntityStore<Expense> {
        &self.entries
    }

    /// Current headline metrics from the maintained totals.
    #[must_use]
    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary {
            total_expenses: self.total_expenses,
            total_assets: self.total_assets,
            current_cash: self
                .entries
                .last()
                .map_or(0.0, |expense| expense.cash_in_hand),
        }
    }

    /// Recomputes the metrics from the collection, ignoring the maintained
    /// totals.
    #[must_use]
    pub fn recompute(&self) -> LedgerSummary {
        ledger_summary(self.entries.as_slice())
    }

    fn apply(&mut self, kind: ExpenseKind, amount: f64) {
        match kind {
            ExpenseKind::Expense => self.total_expenses += amount,
            ExpenseKind::Asset => self.total_assets += amount,
        }
    }

    /// Validates a draft and appends the new line.
    ///
    /// # Errors
    /// Returns a validation error if date, purpose or type is missing or
    /// unparseable, or if an amount is negative. Non-numeric cash in hand or
    /// amount is stored as 0.
    pub fn create(&mut self, draft: &ExpenseDraft) -> Result<Expense> {
        let date = required_date("date", &draft.date)?;
        let purpose = required_text("purpose", &draft.purpose)?;
        let kind = required_choice("type", &draft.kind)?;
        let amount = non_negative("amount", lenient_amount(&draft.amount))?;
        let cash_in_hand = lenient_amount(&draft.cash_in_hand);

        let expense = self
            .entries
            .insert_with(|id| Expense {
                id,
                date,
                cash_in_hand,
                purpose,
                amount,
                kind,
                comment: draft.comment.trim().to_string(),
            })
            .clone();
        self.apply(expense.kind, expense.amount);
        info!(id = %expense.id, kind = %expense.kind, amount = expense.amount, "Expense recorded");
        Ok(expense)
    }

    /// Applies the provided patch fields to a line and adjusts the totals.
    ///
    /// Editing `cash_in_hand` on an earlier line does not carry forward to
    /// later lines.
    ///
    /// # Errors
    /// Returns a not-found error if the id is unknown, or a validation error
    /// if the patched amount is negative.
    pub fn update(&mut self, id: &str, patch: &ExpensePatch) -> Result<Expense> {
        if let Some(amount) = patch.amount {
            non_negative("amount", amount)?;
        }
        let before: Vec<(ExpenseKind, f64)> = self
            .entries
            .iter()
            .filter(|expense| expense.id == id)
            .map(|expense| (expense.kind, expense.amount))
            .collect();

        let updated = self
            .entries
            .update(id, |expense| {
                if let Some(date) = patch.date {
                    expense.date = date;
                }
                if let Some(cash_in_hand) = patch.cash_in_hand {
                    expense.cash_in_hand = cash_in_hand;
                }
                if let Some(purpose) = &patch.purpose {
                    expense.purpose.clone_from(purpose);
                }
                if let Some(amount) = patch.amount {
                    expense.amount = amount;
                }
                if let Some(kind) = patch.kind {
                    expense.kind = kind;
                }
                if let Some(comment) = &patch.comment {
                    expense.comment.clone_from(comment);
                }
            })?
            .clone();

        let after: Vec<(ExpenseKind, f64)> = self
            .entries
            .iter()
            .filter(|expense| expense.id == id)
            .map(|expense| (expense.kind, expense.amount))
            .collect();
        for (kind, amount) in before {
            self.apply(kind, -amount);
        }
        for (kind, amount) in after {
            self.apply(kind, amount);
        }
        info!(%id, "Expense updated");
        Ok(updated)
    }

    /// Removes a line and takes it out of the totals.
    ///
    /// # Errors
    /// Returns a not-found error if the id is unknown.
    pub fn delete(&mut self, id: &str) -> Result<Vec<Expense>> {
        let removed = self.entries.remove(id)?;
        for expense in &removed {
            self.apply(expense.kind, -expense.amount);
        }
        info!(%id, "Expense deleted");
        Ok(removed)
    }

    /// Lines whose id, purpose or date contains `query`, ignoring case.
    pub fn list<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Expense> + Clone + use<'a> {
        self.entries.list(query)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::errors::Error;
    use crate::test_utils::*;

    const TOLERANCE: f64 = 1e-6;

    fn assert_matches_recompute(ledger: &ExpenseLedger) {
        let incremental = ledger.summary();
        let scratch = ledger.recompute();
        assert!((incremental.total_expenses - scratch.total_expenses).abs() < TOLERANCE);
        assert!((incremental.total_assets - scratch.total_assets).abs() < TOLERANCE);
        assert_eq!(incremental.current_cash, scratch.current_cash);
    }

    #[test]
    fn test_empty_ledger() {
        let ledger = ExpenseLedger::new();
        assert_eq!(ledger.summary(), LedgerSummary::default());
        assert_eq!(ledger_summary(&[]).current_cash, 0.0);
    }

    #[test]
    fn test_current_cash_is_last_snapshot() {
        let mut ledger = ExpenseLedger::new();
        ledger.create(&expense_draft("5000", "800", "expense")).unwrap();
        ledger.create(&expense_draft("4200", "1200", "asset")).unwrap();
        ledger.create(&expense_draft("3000", "450", "expense")).unwrap();

        let summary = ledger.summary();
        assert_eq!(summary.current_cash, 3000.0);
        assert_eq!(summary.total_expenses, 1250.0);
        assert_eq!(summary.total_assets, 1200.0);
    }

    #[test]
    fn test_current_cash_ignores_amount_direction() {
        let mut ledger = ExpenseLedger::new();
        ledger.create(&expense_draft("5000", "99999", "asset")).unwrap();
        ledger.create(&expense_draft("4200", "1", "expense")).unwrap();
        ledger.create(&expense_draft("3000", "0", "asset")).unwrap();
        assert_eq!(ledger.summary().current_cash, 3000.0);
    }

    #[test]
    fn test_editing_earlier_cash_does_not_propagate() {
        let mut ledger = ExpenseLedger::new();
        ledger.create(&expense_draft("5000", "800", "expense")).unwrap();
        ledger.create(&expense_draft("4200", "1200", "asset")).unwrap();

        let patch = ExpensePatch {
            cash_in_hand: Some(9000.0),
            ..ExpensePatch::default()
        };
        ledger.update("EXP001", &patch).unwrap();
        assert_eq!(ledger.summary().current_cash, 4200.0);
    }

    #[test]
    fn test_incremental_totals_match_recompute_through_edits_and_deletes() {
        let mut ledger = ExpenseLedger::new();
        let amounts = ["800", "1200", "450", "75.25", "3000", "19.99", "0.01"];
        for (i, amount) in amounts.iter().enumerate() {
            let kind = if i % 3 == 0 { "asset" } else { "expense" };
            ledger.create(&expense_draft("1000", amount, kind)).unwrap();
            assert_matches_recompute(&ledger);
        }

        ledger
            .update(
                "EXP002",
                &ExpensePatch {
                    kind: Some(ExpenseKind::Asset),
                    amount: Some(1300.5),
                    ..ExpensePatch::default()
                },
            )
            .unwrap();
        assert_matches_recompute(&ledger);

        ledger
            .update(
                "EXP001",
                &ExpensePatch {
                    kind: Some(ExpenseKind::Expense),
                    ..ExpensePatch::default()
                },
            )
            .unwrap();
        assert_matches_recompute(&ledger);

        ledger.delete("EXP004").unwrap();
        assert_matches_recompute(&ledger);

        // Re-adding after a delete reuses an id; both lines must still count.
        let readded = ledger.create(&expense_draft("700", "55", "expense")).unwrap();
        assert_eq!(readded.id, "EXP007");
        assert_matches_recompute(&ledger);
        ledger
            .update(
                "EXP007",
                &ExpensePatch {
                    amount: Some(10.0),
                    ..ExpensePatch::default()
                },
            )
            .unwrap();
        assert_matches_recompute(&ledger);

        ledger.delete("EXP007").unwrap();
        assert_matches_recompute(&ledger);
    }

    #[test]
    fn test_create_validation() {
        let mut ledger = ExpenseLedger::new();
        let missing_purpose = ExpenseDraft {
            purpose: String::new(),
            ..expense_draft("5000", "800", "expense")
        };
        assert!(matches!(
            ledger.create(&missing_purpose),
            Err(Error::Validation {
                field: "purpose",
                ..
            })
        ));
        assert!(ledger.create(&expense_draft("5000", "800", "loan")).is_err());
        assert!(ledger.create(&expense_draft("5000", "-1", "expense")).is_err());
        assert!(ledger.entries().is_empty());
        assert_eq!(ledger.summary(), LedgerSummary::default());
    }

    #[test]
    fn test_non_numeric_amounts_are_zero() {
        let mut ledger = ExpenseLedger::new();
        let expense = ledger.create(&expense_draft("lots", "some", "expense")).unwrap();
        assert_eq!(expense.amount, 0.0);
        assert_eq!(expense.cash_in_hand, 0.0);
    }

    #[test]
    fn test_update_and_delete_unknown_id() {
        let mut ledger = ExpenseLedger::new();
        assert!(matches!(
            ledger.update("EXP001", &ExpensePatch::default()),
            Err(Error::NotFound { .. })
        ));
        assert!(ledger.delete("EXP001").is_err());
    }

    #[test]
    fn test_list_filters_by_purpose() {
        let mut ledger = ExpenseLedger::new();
        ledger.create(&expense_draft("5000", "800", "expense")).unwrap();
        let other = ExpenseDraft {
            purpose: "LED Lights Purchase".to_string(),
            ..expense_draft("4200", "1200", "asset")
        };
        ledger.create(&other).unwrap();
        let hits: Vec<&str> = ledger.list("led").map(|e| e.id.as_str()).collect();
        assert_eq!(hits, ["EXP002"]);
    }
}
