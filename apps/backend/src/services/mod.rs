//! Collaborator seams: OCR, semantic extraction and question generation.

pub mod generator;
pub mod ocr;
pub mod semantic;

pub use generator::QuestionGenerator;
pub use ocr::{OcrEngine, OcrOutput};
pub use semantic::SemanticExtractor;
