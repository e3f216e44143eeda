//! Text-generation service boundary.
//!
//! The engine treats the service as an opaque oracle: one prompt in, one
//! text blob out, no streaming, no conversation state. Everything that can
//! go wrong on the way collapses into [`ServiceError`]; the classifier and
//! generator absorb it at their boundaries instead of propagating.

use thiserror::Error;

/// A failed call to the text-generation service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The service answered with a non-success status (auth, quota, etc.).
    #[error("service returned HTTP {0}")]
    Status(u16),
    /// The response arrived but did not contain usable text.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Blocking request/response oracle for generated text.
pub trait TextGenerator {
    fn generate_content(&self, prompt: &str) -> Result<String, ServiceError>;
}
