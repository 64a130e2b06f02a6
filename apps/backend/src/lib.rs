pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};
use notebook_core::{MemoryStore, Repository, RuleBasedExtractor};
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::{OcrEngine, QuestionGenerator, SemanticExtractor};

/// Deck and flashcard store shared by every request.
///
/// One lock guards both repositories, so a rename or delete rewrite is
/// atomic with respect to concurrent reads.
pub type SharedStore = Arc<RwLock<Box<dyn Repository>>>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub ocr: Option<Arc<dyn OcrEngine>>,
    pub semantic: Arc<dyn SemanticExtractor>,
    pub generator: Option<Arc<dyn QuestionGenerator>>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Fresh in-memory store, rule-based semantic extraction, no OCR engine
    /// and no question generator.
    pub fn new(config: Config) -> Self {
        Self {
            store: Arc::new(RwLock::new(Box::new(MemoryStore::new()))),
            ocr: None,
            semantic: Arc::new(RuleBasedExtractor::new()),
            generator: None,
            config: Arc::new(config),
        }
    }

    pub fn with_ocr(mut self, ocr: Arc<dyn OcrEngine>) -> Self {
        self.ocr = Some(ocr);
        self
    }

    pub fn with_semantic(mut self, semantic: Arc<dyn SemanticExtractor>) -> Self {
        self.semantic = semantic;
        self
    }

    pub fn with_generator(mut self, generator: Arc<dyn QuestionGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }
}

/// Build the full router.
pub fn app(state: AppState) -> Router {
    // One byte over the limit so oversized uploads reach the handler's own check.
    let upload_limit = state.config.max_upload_bytes.saturating_add(1);

    let upload_routes = Router::new()
        .route("/api/upload", post(routes::extract::upload))
        .route("/api/upload/semantic", post(routes::extract::upload_semantic))
        .layer(DefaultBodyLimit::max(upload_limit));

    Router::new()
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health))
        // Deck routes
        .route("/api/decks", get(routes::decks::list).post(routes::decks::create))
        .route(
            "/api/decks/:name",
            put(routes::decks::rename).delete(routes::decks::delete),
        )
        // Flashcard routes
        .route(
            "/api/flashcards",
            get(routes::flashcards::search).post(routes::flashcards::add),
        )
        .route("/api/flashcards/:id", get(routes::flashcards::get))
        .route("/api/flashcards/:id/tag", post(routes::flashcards::tag))
        .route("/api/flashcards/:id/untag", post(routes::flashcards::untag))
        .route(
            "/api/flashcards/:id/assessment",
            post(routes::flashcards::update_assessment),
        )
        // Extraction routes
        .route("/api/extract", post(routes::extract::extract))
        .route("/api/generate-questions", post(routes::extract::generate_questions))
        .merge(upload_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = config.addr();
    let state = AppState::new(config);

    if state.ocr.is_none() {
        tracing::warn!("No OCR engine configured; upload endpoints will report unavailable");
    }
    if state.generator.is_none() {
        tracing::warn!("No question generator configured; /api/generate-questions will report unavailable");
    }

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
