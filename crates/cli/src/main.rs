use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fareopt_core::domain::fares::FareSchedule;
use fareopt_core::domain::selection;
use fareopt_core::domain::ticket::TicketType;
use fareopt_core::optimizer;

#[derive(Debug, Parser)]
#[command(name = "fareopt_cli")]
struct Args {
    /// A travel date (YYYY-MM-DD). Repeat the flag for each selected day.
    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    dates: Vec<String>,

    /// Round-trip fare in cents; the pass prices are derived from it and
    /// override any FARE_* environment settings.
    #[arg(long)]
    fare_cents: Option<u32>,

    /// Print the raw ticket list and total as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = fareopt_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    let fares = match args.fare_cents {
        Some(cents) => FareSchedule::from_round_trip(cents),
        None => settings.fare_schedule(),
    };

    let result = run(&args, &fares);
    if let Err(ref err) = result {
        sentry_anyhow::capture_anyhow(err);
        tracing::error!(error = %err, "recommendation run failed");
    }
    result
}

fn run(args: &Args, fares: &FareSchedule) -> anyhow::Result<()> {
    let dates = selection::parse_dates(&args.dates)?;
    let recommendation = optimizer::calculate_optimal_ticket(&dates, fares);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&recommendation)?);
        return Ok(());
    }

    if recommendation.is_empty() {
        println!("No travel dates selected; nothing to buy.");
        return Ok(());
    }

    println!(
        "Recommended: {}",
        consolidate(&recommendation.tickets).join(", ")
    );
    println!("Total: {}", format_cents(recommendation.total_cents));
    Ok(())
}

/// Collapses repeated products into a count-suffixed display form, keeping
/// first-appearance order. Display only; the per-date ticket count lives in
/// the recommendation itself.
fn consolidate(tickets: &[TicketType]) -> Vec<String> {
    let mut counts: Vec<(TicketType, usize)> = Vec::new();
    for &ticket in tickets {
        match counts.iter_mut().find(|(kind, _)| *kind == ticket) {
            Some((_, count)) => *count += 1,
            None => counts.push((ticket, 1)),
        }
    }
    counts
        .into_iter()
        .map(|(ticket, count)| {
            if count > 1 {
                format!("{ticket} x{count}")
            } else {
                ticket.to_string()
            }
        })
        .collect()
}

fn format_cents(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

fn init_sentry(settings: &fareopt_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
