use std::env;
use std::str::FromStr;

use crate::core::models::SummaryParams;

pub const DEFAULT_MODEL: &str = "sshleifer/distilbart-cnn-12-6";
pub const DEFAULT_INFERENCE_BASE_URL: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub hf_api_token: Option<String>,
    pub summary_model: String,
    pub inference_base_url: String,
    pub inference_timeout_secs: u64,
    /// Bounds used by the form route.
    pub form_params: SummaryParams,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            hf_api_token: None,
            summary_model: DEFAULT_MODEL.to_string(),
            inference_base_url: DEFAULT_INFERENCE_BASE_URL.to_string(),
            inference_timeout_secs: DEFAULT_TIMEOUT_SECS,
            form_params: SummaryParams::form_defaults(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests don't touch
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = SummaryParams::form_defaults();

        let form_params = SummaryParams {
            max_length: parse_or(&lookup, "SUMMARY_MAX_LENGTH", defaults.max_length)?,
            min_length: parse_or(&lookup, "SUMMARY_MIN_LENGTH", defaults.min_length)?,
            num_lines: parse_or(&lookup, "SUMMARY_NUM_LINES", defaults.num_lines)?,
            do_sample: parse_or(&lookup, "SUMMARY_DO_SAMPLE", defaults.do_sample)?,
        };

        if form_params.min_length > form_params.max_length {
            return Err(format!(
                "SUMMARY_MIN_LENGTH ({}) must not exceed SUMMARY_MAX_LENGTH ({})",
                form_params.min_length, form_params.max_length
            ));
        }

        Ok(Self {
            hf_api_token: lookup("HF_API_TOKEN").filter(|t| !t.trim().is_empty()),
            summary_model: lookup("SUMMARY_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            inference_base_url: lookup("INFERENCE_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_INFERENCE_BASE_URL.to_string()),
            inference_timeout_secs: parse_or(
                &lookup,
                "INFERENCE_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )?,
            form_params,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, String>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| format!("{}: {}", key, e)),
        None => Ok(default),
    }
}
