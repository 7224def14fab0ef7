/// TLDR Form - a one-page web form that summarizes pasted text.
///
/// A single Lambda function serves the form and, on submission, sends the
/// text to a hosted summarization model, then trims the returned summary to a
/// few clean sentences before rendering it back into the page.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda (function URL or API Gateway proxy) for the web route
/// - A Hugging Face style inference endpoint for the model, via reqwest
/// - A `Summarizer` trait so the handler never touches a global model handle
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use tldr_form::ai::InferenceClient;
/// use tldr_form::core::config::AppConfig;
/// use tldr_form::core::models::SummaryParams;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     tldr_form::setup_logging();
///
///     let config = AppConfig::default();
///     let summarizer = InferenceClient::from_config(&config)?;
///
///     let summary = tldr_form::summary::summarize_text(
///         &summarizer,
///         "Long article text goes here...",
///         &SummaryParams::default(),
///     )
///     .await?;
///     println!("Summary: {}", summary);
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod summary;
pub mod views;

pub use ai::Summarizer;
pub use errors::SummaryError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at startup.
///
/// Calling it again after a subscriber is installed is a no-op.
///
/// # Example
///
/// ```
/// tldr_form::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
