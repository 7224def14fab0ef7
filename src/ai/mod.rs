//! All model inference functionality

pub mod client;

use async_trait::async_trait;

use crate::core::models::SummaryParams;
use crate::errors::SummaryError;

// Re-export main types for convenience
pub use client::{InferenceClient, extract_summary_text};

/// A text summarization capability.
///
/// The request handler only sees this trait, so the hosted pipeline can be
/// swapped for a fake in tests.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Returns the raw, unprocessed summary of `text`.
    async fn summarize(&self, text: &str, params: &SummaryParams) -> Result<String, SummaryError>;
}
