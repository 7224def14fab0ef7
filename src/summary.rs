//! Summary post-processing and the summarize entry point used by the form.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::ai::Summarizer;
use crate::core::models::SummaryParams;
use crate::errors::SummaryError;

// Unicode whitespace plus the ASCII information separators (FS, GS, RS, US).
static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\x1c-\x1f]+").expect("static regex compile"));

// Terminal punctuation followed by a run of spaces. The split point is right
// after the punctuation character, which is always one byte.
static SENTENCE_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?] +").expect("static regex compile"));

/// Collapses every whitespace run into a single space and trims the ends.
#[must_use]
pub fn normalize_whitespace(s: &str) -> String {
    WHITESPACE_RE
        .replace_all(s, " ")
        .trim_matches(is_space)
        .to_string()
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Splits already-normalized text into sentence segments.
///
/// Punctuation stays attached to the segment it ends; the separating spaces
/// are dropped. Text without a break is returned as a single segment, and an
/// empty string yields one empty segment.
#[must_use]
pub fn split_sentences(s: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;

    for m in SENTENCE_BREAK_RE.find_iter(s) {
        segments.push(&s[start..=m.start()]);
        start = m.end();
    }
    segments.push(&s[start..]);

    segments
}

/// Normalizes `raw` and keeps at most `num_lines` sentences of it.
#[must_use]
pub fn postprocess_summary(raw: &str, num_lines: usize) -> String {
    let normalized = normalize_whitespace(raw);
    split_sentences(&normalized)
        .into_iter()
        .take(num_lines)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs `text` through the summarizer and post-processes the result.
///
/// # Errors
///
/// Returns whatever the summarizer fails with; post-processing itself
/// cannot fail.
pub async fn summarize_text(
    summarizer: &dyn Summarizer,
    text: &str,
    params: &SummaryParams,
) -> Result<String, SummaryError> {
    let raw = summarizer.summarize(text, params).await?;

    #[cfg(feature = "debug-logs")]
    info!("Raw model summary:\n{}", raw);

    let summary = postprocess_summary(&raw, params.num_lines);
    info!(
        input_chars = text.chars().count(),
        raw_chars = raw.chars().count(),
        summary_chars = summary.chars().count(),
        "Summary generated"
    );

    Ok(summary)
}
