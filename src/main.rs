use axum::{extract::State, routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod auth;
mod config;
mod database;
mod error;
mod handlers;
mod middleware;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env()?;
    tracing::info!("Starting Club API in {:?} mode", config.environment);

    let state = AppState::new(&config)?;
    let app = app(state);

    // Allow tests or deployments to override port via env
    let port = std::env::var("CLUB_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    println!("🚀 Club API Rust server listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Club-scoped resources (reads public, writes gated per handler)
        .merge(club_routes())
        .merge(project_routes())
        // Global middleware
        .layer(axum::middleware::from_fn(
            middleware::bearer_credential_middleware,
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn club_routes() -> Router<AppState> {
    use handlers::clubs;

    Router::new().route(
        "/api/clubs/:club_id",
        get(clubs::get).post(clubs::create).put(clubs::update),
    )
}

fn project_routes() -> Router<AppState> {
    use handlers::projects;

    Router::new()
        // Collection operations
        .route(
            "/api/clubs/:club_id/projects",
            get(projects::list).post(projects::create),
        )
        // Record-level operations
        .route(
            "/api/clubs/:club_id/projects/:project_id",
            get(projects::get)
                .put(projects::update)
                .delete(projects::delete),
        )
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "Club API (Rust)",
        "version": version,
        "description": "Club and project introduction API built with Rust (Axum)",
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "club": "/api/clubs/:club_id (GET public; POST/PUT club owners only)",
            "projects": "/api/clubs/:club_id/projects (GET public; POST club owners only)",
            "project": "/api/clubs/:club_id/projects/:project_id (GET public; PUT/DELETE club owners only)",
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match database::health_check(&state.pool).await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
