//! Common test utilities and fixtures for integration tests.
//!
//! TestContext builds the real router over a fresh in-memory store, with
//! fake OCR and question generator collaborators swapped in as needed.

pub mod fixtures;

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use serde_json::Value;

use notebook_core::{CandidateCard, ExtractError};
use notebook_vision_backend::config::Config;
use notebook_vision_backend::services::{OcrEngine, OcrOutput, QuestionGenerator, SemanticExtractor};
use notebook_vision_backend::{app, AppState};

/// OCR engine that returns a fixed outcome for every image.
pub struct FakeOcr(pub OcrOutput);

#[async_trait]
impl OcrEngine for FakeOcr {
    async fn recognize(&self, _image: &[u8]) -> OcrOutput {
        self.0.clone()
    }
}

/// Question generator that returns a fixed response.
pub struct FakeGenerator(pub Result<Value, ExtractError>);

#[async_trait]
impl QuestionGenerator for FakeGenerator {
    async fn generate(&self, _notes: &str) -> Result<Value, ExtractError> {
        self.0.clone()
    }
}

/// Semantic extractor that returns a fixed outcome for every text.
pub struct FakeSemantic(pub Result<Vec<CandidateCard>, ExtractError>);

#[async_trait]
impl SemanticExtractor for FakeSemantic {
    async fn extract(&self, _text: &str) -> Result<Vec<CandidateCard>, ExtractError> {
        self.0.clone()
    }
}

/// Test context holding the application state under test.
pub struct TestContext {
    state: AppState,
}

impl TestContext {
    /// Fresh store, no OCR engine, no question generator.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            state: AppState::new(config),
        }
    }

    /// Install an OCR engine that recognizes `text` in every upload.
    pub fn with_ocr_text(mut self, text: &str) -> Self {
        self.state = self.state.with_ocr(Arc::new(FakeOcr(OcrOutput::recognized(text))));
        self
    }

    /// Install an OCR engine that fails every upload.
    pub fn with_failing_ocr(mut self, reason: &str) -> Self {
        self.state = self.state.with_ocr(Arc::new(FakeOcr(OcrOutput::failed(reason))));
        self
    }

    pub fn with_generator(mut self, response: Result<Value, ExtractError>) -> Self {
        self.state = self.state.with_generator(Arc::new(FakeGenerator(response)));
        self
    }

    pub fn with_semantic(mut self, response: Result<Vec<CandidateCard>, ExtractError>) -> Self {
        self.state = self.state.with_semantic(Arc::new(FakeSemantic(response)));
        self
    }

    /// Shared state, for driving the store directly.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        app(self.state.clone())
    }
}
