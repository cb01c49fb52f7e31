use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fareopt_core::domain::fares::FareSchedule;
use fareopt_core::domain::selection;
use fareopt_core::domain::ticket::TicketType;
use fareopt_core::optimizer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = fareopt_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let state = AppState {
        fares: settings.fare_schedule(),
    };

    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/fares", get(get_fares))
        .route("/recommendations", post(post_recommendation))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // The calendar UI calls this straight from the browser.
        .layer(CorsLayer::permissive());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!(%addr, "api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn healthz() -> &'static str {
    "ok"
}

#[derive(Debug, Clone)]
struct AppState {
    fares: FareSchedule,
}

#[derive(Debug, Deserialize)]
struct RecommendationRequest {
    /// Selected travel dates as `YYYY-MM-DD` strings.
    dates: Vec<String>,
}

#[derive(Debug, Serialize)]
struct RecommendationResponse {
    generated_at: DateTime<Utc>,
    tickets: Vec<TicketType>,
    total_cents: u32,
}

async fn get_fares(State(state): State<AppState>) -> Json<FareSchedule> {
    Json(state.fares)
}

async fn post_recommendation(
    State(state): State<AppState>,
    Json(req): Json<RecommendationRequest>,
) -> Result<Json<RecommendationResponse>, StatusCode> {
    let dates = selection::parse_dates(&req.dates).map_err(|e| {
        tracing::warn!(error = %e, "rejected recommendation request");
        StatusCode::BAD_REQUEST
    })?;

    let recommendation = optimizer::calculate_optimal_ticket(&dates, &state.fares);

    Ok(Json(RecommendationResponse {
        generated_at: Utc::now(),
        tickets: recommendation.tickets,
        total_cents: recommendation.total_cents,
    }))
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
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
