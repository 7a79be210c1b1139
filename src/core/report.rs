//! Report formatting and the export stub.
//!
//! Amounts are stored at full precision; rounding to two decimals happens
//! only here, when a figure is turned into text.

use crate::{
    core::{
        decor,
        ledger::LedgerSummary,
        search::DecorSearchHit,
        vendor::PaymentStats,
    },
    entities::{Payment, Vendor},
};
use tracing::info;

/// Formats an amount with two decimals, e.g. `"9900.00"`.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Formats an amount with a currency symbol, e.g. `"$9900.00"` or `"-$12.50"`.
#[must_use]
pub fn format_currency(symbol: &str, amount: f64) -> String {
    if amount < 0.0 {
        format!("-{symbol}{:.2}", amount.abs())
    } else {
        format!("{symbol}{amount:.2}")
    }
}

/// Column sums of a decor search result set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DecorReportTotals {
    /// Sum of DJ charges
    pub dj: f64,
    /// Sum of cool fire charges
    pub cool_fire: f64,
    /// Cool fire units across the rows
    pub cool_fire_units: u32,
    /// Sum of ice pot charges
    pub ice_pot: f64,
    /// Ice pot units across the rows
    pub ice_pot_units: u32,
    /// Sum of confetti charges
    pub confetti: f64,
    /// Sum of all six charges over every row
    pub grand_total: f64,
}

/// Sums the decor report columns. The grand total covers all six charges,
/// decor and spotlight included.
#[must_use]
pub fn decor_report_totals(hits: &[DecorSearchHit]) -> DecorReportTotals {
    hits.iter()
        .fold(DecorReportTotals::default(), |mut totals, hit| {
            let amounts = &hit.record.amounts;
            totals.dj += amounts.dj;
            totals.cool_fire += amounts.cool_fire;
            totals.cool_fire_units = totals
                .cool_fire_units
                .saturating_add(hit.record.cool_fire_count);
            totals.ice_pot += amounts.ice_pot;
            totals.ice_pot_units = totals.ice_pot_units.saturating_add(hit.record.ice_pot_count);
            totals.confetti += amounts.confetti;
            totals.grand_total += decor::total(amounts);
            totals
        })
}

/// Sum of amounts in a vendor search result set.
#[must_use]
pub fn vendor_report_total(payments: &[Payment]) -> f64 {
    payments.iter().map(|payment| payment.amount).sum()
}

/// Renders payment rows followed by their total.
#[must_use]
pub fn render_vendor_report(symbol: &str, payments: &[Payment]) -> Vec<String> {
    let mut lines: Vec<String> = payments
        .iter()
        .map(|payment| {
            format!(
                "{} | {} | {} | {} | {} | {}",
                payment.id,
                payment.vendor_name,
                payment.date,
                format_currency(symbol, payment.amount),
                payment.purpose,
                payment.channel
            )
        })
        .collect();
    lines.push(format!(
        "Total: {}",
        format_currency(symbol, vendor_report_total(payments))
    ));
    lines
}

/// Renders decor rows followed by the column sums.
#[must_use]
pub fn render_decor_report(symbol: &str, hits: &[DecorSearchHit]) -> Vec<String> {
    let mut lines: Vec<String> = hits
        .iter()
        .map(|hit| {
            let record = &hit.record;
            let date = hit
                .event_date
                .map_or_else(|| "-".to_string(), |date| date.to_string());
            format!(
                "{} | {} | {} | {} | total {} | received {}",
                record.id,
                record.event_id,
                record.event.client_name,
                date,
                format_currency(symbol, decor::total(&record.amounts)),
                format_currency(symbol, record.received_amount)
            )
        })
        .collect();
    let totals = decor_report_totals(hits);
    lines.push(format!(
        "DJ {} | Cool fire {} ({} units) | Ice pot {} ({} units) | Confetti {} | Total {}",
        format_currency(symbol, totals.dj),
        format_currency(symbol, totals.cool_fire),
        totals.cool_fire_units,
        format_currency(symbol, totals.ice_pot),
        totals.ice_pot_units,
        format_currency(symbol, totals.confetti),
        format_currency(symbol, totals.grand_total)
    ));
    lines
}

/// Renders the three ledger metrics.
#[must_use]
pub fn render_ledger_summary(symbol: &str, summary: &LedgerSummary) -> String {
    format!(
        "Expenses {} | Assets {} | Cash in hand {}",
        format_currency(symbol, summary.total_expenses),
        format_currency(symbol, summary.total_assets),
        format_currency(symbol, summary.current_cash)
    )
}

/// Renders one vendor line.
#[must_use]
pub fn render_vendor_line(symbol: &str, vendor: &Vendor) -> String {
    format!(
        "{} | {} | {} | paid {} over {} payment(s)",
        vendor.id,
        vendor.name,
        vendor.contact_number,
        format_currency(symbol, vendor.total_paid),
        vendor.payments_count
    )
}

/// Renders the vendor screen statistics.
#[must_use]
pub fn render_payment_stats(symbol: &str, stats: &PaymentStats) -> String {
    format!(
        "Vendors {} | Total payments {} | Average payment {}",
        stats.total_vendors,
        format_currency(symbol, stats.total_payments),
        format_currency(symbol, stats.average_payment)
    )
}

/// Outcome of an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    /// Report title
    pub title: String,
    /// Number of lines handed to the exporter
    pub lines: usize,
}

/// Hands rendered report lines to the document exporter.
///
/// There is no document backend; the export is recorded in the log and the
/// lines are otherwise dropped.
#[must_use]
pub fn export_report(title: &str, lines: &[String]) -> ExportReceipt {
    info!(%title, lines = lines.len(), "Report exported");
    ExportReceipt {
        title: title.to_string(),
        lines: lines.len(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::decor::create_decor_record;
    use crate::core::store::EntityStore;
    use crate::core::vendor::VendorAccounts;
    use crate::test_utils::*;

    #[test]
    fn test_format_amount_rounds_for_display_only() {
        assert_eq!(format_amount(6930.0), "6930.00");
        assert_eq!(format_amount(0.125 + 0.0001), "0.13");
        assert_eq!(format_amount(0.0), "0.00");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency("$", 9900.0), "$9900.00");
        assert_eq!(format_currency("$", -12.5), "-$12.50");
        assert_eq!(format_currency("Rs ", 1.0), "Rs 1.00");
    }

    #[test]
    fn test_decor_report_totals() {
        let events = EntityStore::new();
        let mut records = EntityStore::new();
        create_decor_record(&mut records, &events, &scenario_decor_draft("EVT001")).unwrap();
        create_decor_record(&mut records, &events, &scenario_decor_draft("EVT002")).unwrap();
        let hits: Vec<DecorSearchHit> = records
            .iter()
            .map(|record| DecorSearchHit {
                record: record.clone(),
                event_date: None,
            })
            .collect();

        let totals = decor_report_totals(&hits);
        assert_eq!(totals.dj, 4000.0);
        assert_eq!(totals.cool_fire, 2400.0);
        assert_eq!(totals.cool_fire_units, 8);
        assert_eq!(totals.ice_pot, 1200.0);
        assert_eq!(totals.ice_pot_units, 4);
        assert_eq!(totals.confetti, 600.0);
        assert_eq!(totals.grand_total, 19_800.0);

        let lines = render_decor_report("$", &hits);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("received $6930.00"));
        assert!(lines[2].ends_with("Total $19800.00"));
        assert!(lines[2].contains("Cool fire $2400.00 (8 units)"));
        assert!(lines[2].contains("Ice pot $1200.00 (4 units)"));
    }

    #[test]
    fn test_render_vendor_report_and_export() {
        let mut accounts = VendorAccounts::new();
        accounts.create_vendor(&vendor_draft("Elite Decorations")).unwrap();
        accounts.record_payment(&payment_draft("VND001", "2500")).unwrap();
        accounts.record_payment(&payment_draft("VND001", "1800")).unwrap();

        let lines = render_vendor_report("$", accounts.payments().as_slice());
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("PAY001 | Elite Decorations | 2024-01-15 | $2500.00"));
        assert_eq!(lines[2], "Total: $4300.00");

        let receipt = export_report("Vendor payments", &lines);
        assert_eq!(receipt.lines, 3);
        assert_eq!(receipt.title, "Vendor payments");
    }

    #[test]
    fn test_render_summaries() {
        let summary = LedgerSummary {
            total_expenses: 1250.0,
            total_assets: 1200.0,
            current_cash: 3000.0,
        };
        assert_eq!(
            render_ledger_summary("$", &summary),
            "Expenses $1250.00 | Assets $1200.00 | Cash in hand $3000.00"
        );
        let stats = PaymentStats {
            total_vendors: 3,
            total_payments: 4300.0,
            average_payment: 2150.0,
        };
        assert_eq!(
            render_payment_stats("$", &stats),
            "Vendors 3 | Total payments $4300.00 | Average payment $2150.00"
        );
    }
}
