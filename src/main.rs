use dotenvy::dotenv;
use event_desk::{
    config,
    core::{
        Session, decor,
        report::{
            format_currency, render_ledger_summary, render_payment_stats, render_vendor_line,
        },
        search::{DateRange, VendorSearchCriteria},
    },
    errors::Result,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; EVENT_DESK_CONFIG may be set there
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Failed to load application configuration: {}", e))?;

    // 4. Build the session
    let session = Session::from_config(&app_config)
        .inspect(|_| info!("Session ready."))
        .inspect_err(|e| error!("Failed to build session: {}", e))?;
    let symbol = session.currency_symbol().to_string();

    // 5. Run one vendor search through the delayed search slot
    if let Some(vendor) = session.accounts().vendors().as_slice().first() {
        session.start_vendor_search(VendorSearchCriteria {
            vendor_id: vendor.id.clone(),
            dates: DateRange::default(),
        });
        session.vendor_search().wait().await;
        let receipt = session.export_vendor_report().await;
        info!(lines = receipt.lines, "Vendor report ready for {}", vendor.name);
    }

    // 6. Print the summaries
    let dashboard = session.dashboard();
    println!("== Dashboard");
    println!(
        "Events {} (upcoming {}, in progress {}, completed {}) | Vendors {} | Payments {} | Satisfied customers {}",
        dashboard.total_events,
        dashboard.upcoming,
        dashboard.in_progress,
        dashboard.completed,
        dashboard.active_vendors,
        format_currency(&symbol, dashboard.total_payments),
        dashboard.satisfied_customers
    );

    println!("== Cash book");
    println!("{}", render_ledger_summary(&symbol, &session.ledger().summary()));

    println!("== Decor");
    for record in session.decor_records().iter() {
        println!(
            "{} | {} | total {} | received {}",
            record.id,
            record.event.client_name,
            format_currency(&symbol, decor::total(&record.amounts)),
            format_currency(&symbol, record.received_amount)
        );
    }

    println!("== Vendors");
    for vendor in session.accounts().vendors().iter() {
        println!("{}", render_vendor_line(&symbol, vendor));
    }
    println!("{}", render_payment_stats(&symbol, &session.accounts().payment_stats()));

    let results = session.vendor_search().results().await;
    println!("== Vendor search ({} payment(s))", results.len());
    for payment in &results {
        println!(
            "{} | {} | {}",
            payment.id,
            payment.date,
            format_currency(&symbol, payment.amount)
        );
    }

    Ok(())
}
