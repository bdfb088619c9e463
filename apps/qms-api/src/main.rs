//! QMSquare API Server
//!
//! Backend for a lightweight quality management system aimed at small
//! medical-device manufacturers. Provides REST endpoints for:
//!
//! - Controlled document and quality record CRUD (per-user, sqlite)
//! - Rule-based document quality analysis (sections + ambiguous wording)
//! - Text extraction from uploaded .txt/.docx files
//! - AI-assisted document review with demo-mode fallback

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod error;
mod handlers;
mod models;
mod repo;
mod state;

use ai_review::Reviewer;
use state::AppState;

/// Command-line arguments for the QMSquare API server
#[derive(Parser, Debug)]
#[command(name = "qms-api")]
#[command(about = "QMSquare API server for document quality management")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Rate limit: requests per second per IP
    #[arg(long, default_value = "10")]
    rate_limit: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Router over the shared state, reused by the test harness
pub fn app_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Document endpoints
        .route(
            "/api/documents",
            get(handlers::list_documents).post(handlers::create_document),
        )
        .route(
            "/api/documents/:id",
            get(handlers::get_document)
                .put(handlers::update_document)
                .delete(handlers::delete_document),
        )
        // Quality record endpoints
        .route(
            "/api/quality-records",
            get(handlers::list_quality_records).post(handlers::create_quality_record),
        )
        .route(
            "/api/quality-records/:id",
            get(handlers::get_quality_record)
                .put(handlers::update_quality_record)
                .delete(handlers::delete_quality_record),
        )
        // Analysis endpoints
        .route("/api/documents/analyze", post(handlers::analyze_document))
        .route("/api/documents/extract", post(handlers::extract_document))
        // AI review
        .route("/api/ai/review", post(handlers::review_document))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting QMSquare API on {}:{}", args.host, args.port);

    // Create rate limiter configuration
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(args.rate_limit.into())
            .burst_size(args.rate_limit * 2)
            .finish()
            .ok_or_else(|| anyhow::anyhow!("Failed to create rate limiter config"))?,
    );

    // Initialize application state
    let reviewer = Reviewer::from_env()?;
    let state = Arc::new(AppState::new(None, reviewer).await?);

    let app = app_router(state).layer(GovernorLayer {
        config: governor_conf,
    });

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Rate limit: {} requests/second per IP", args.rate_limit);

    axum::serve(listener, app).await?;

    Ok(())
}
