//! TapTheGame catalog server
//!
//! Provides:
//! - REST API over the game catalog (search, categories, tags, detail)
//! - Landing page sections
//! - Trending and recommended list views
//! - Per-game reviews persisted to a JSON file

mod config;
mod routes;
mod store;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::{Arc, Mutex};
use tapthegame_core::{Catalog, KeyValueStore, ReviewBook, SectionLayout};
use tower::ServiceBuilder;
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::store::JsonFileStore;

pub struct AppState {
    pub catalog: Catalog,
    pub reviews: Mutex<ReviewBook<Box<dyn KeyValueStore + Send>>>,
    pub section_layout: SectionLayout,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Catalog
        .route("/api/categories", get(routes::list_categories))
        .route("/api/categories/{id}", get(routes::get_category))
        .route("/api/tags", get(routes::list_tags))
        .route("/api/games", get(routes::search_games))
        .route("/api/games/{id}", get(routes::get_game))
        // Landing page and list views
        .route("/api/sections", get(routes::get_sections))
        .route("/api/trending", get(routes::get_trending))
        .route("/api/recommended", get(routes::get_recommended))
        // Reviews
        .route("/api/games/{id}/reviews", get(routes::list_reviews).post(routes::submit_review))
        .route("/api/games/{id}/reviews/{review_id}/like", post(routes::like_review))
        .with_state(state)
        .layer(ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)))
}

fn load_catalog(config: &Config) -> tapthegame_core::Result<Catalog> {
    match &config.catalog_path {
        Some(path) => {
            tracing::info!("Loading catalog from {}", path.display());
            Catalog::from_path(path)
        }
        None => Catalog::builtin(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "tapthegame_server=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load();

    let catalog = load_catalog(&config)?;
    tracing::info!(
        games = catalog.len(),
        categories = catalog.categories().len(),
        "Catalog loaded"
    );

    let store = JsonFileStore::open(&config.reviews_path)?;
    tracing::info!("Reviews stored in {}", store.path().display());
    let store: Box<dyn KeyValueStore + Send> = Box::new(store);

    let state = Arc::new(AppState {
        catalog,
        reviews: Mutex::new(ReviewBook::new(store)),
        section_layout: SectionLayout::with_cap(config.section_cap),
    });

    tracing::info!("Starting server on {}", config.bind_address);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}
