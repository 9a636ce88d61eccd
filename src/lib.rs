//! Emoji decorations for a task-list app.
//!
//! Every task and list in the app is shown with an emoji picked from its name. "Buy groceries"
//! gets a bouncing 🛒, "pizza night" a wiggling 🍕, and anything unrecognized gets a static 📋
//! (lists) or 📌 (tasks).
//!
//!
//!
//! # Layout
//! - [`emoji`]: the matcher, a pure function over a static table
//! - [`keywords`]: the ordered keyword table
//! - [`animation`]: CSS behind each animation tag
//! - [`routes`]: HTTP handlers for the frontend
//!
//!
//!
//! # Endpoints
//!
//! Single label, category defaults to `task`.
//! ```sh
//! curl 'localhost:1111/emoji?text=Buy%20groceries&category=list'
//! ```
//!
//! Whole page of labels at once.
//! ```sh
//! curl -X POST localhost:1111/emoji/batch \
//!     -H 'Content-Type: application/json' \
//!     -d '{"category":"task","labels":["Write tests","Walk the dog"]}'
//! ```
//!
//! Stylesheet with the animation classes.
//! ```sh
//! curl localhost:1111/animations.css
//! ```
//!
//!
//!
//! # Environment
//! - `RUST_PORT`: listen port, default 1111
//! - `RUST_MAX_BATCH`: most labels per batch request, default 500
//! - `RUST_CORS_MAX_AGE`: preflight cache in seconds, default 3600
//! - `RUST_LOG`: tracing filter, e.g. `taskmoji=debug`
//!
//!
//!
//! # Notes
//!
//! ## Substring matching
//! Labels are matched by substring, not by word. Phrases like "ice cream" need no extra
//! pass, but short keywords also fire inside longer words ("cat" in "education"). Fix
//! bad hits by reordering [`keywords::KEYWORDS`], not by changing the matcher.
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};

use signal::ctrl_c;
#[cfg(unix)]
use signal::unix::{SignalKind, signal};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

pub mod animation;
pub mod config;
pub mod emoji;
pub mod error;
pub mod keywords;
pub mod routes;
pub mod state;

pub use emoji::{AnimationTag, Category, EmojiMatch, match_emoji, match_task_emoji};
pub use error::AppError;

use routes::{batch_handler, emoji_handler, health_handler, stylesheet_handler};
use state::State;

pub async fn start_server() -> Result<(), AppError> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new()?;

    info!("Starting server...");

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");

    Ok(())
}

pub fn router(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(state.config.cors_max_age_secs));

    Router::new()
        .route("/health", get(health_handler))
        .route("/emoji", get(emoji_handler))
        .route("/emoji/batch", post(batch_handler))
        .route("/animations.css", get(stylesheet_handler))
        .layer(cors)
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
