use serde::{Deserialize, Serialize};

/// Generation bounds and post-processing cap for one summarization call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryParams {
    pub max_length: u32,
    pub min_length: u32,
    pub do_sample: bool,
    pub num_lines: usize,
}

impl SummaryParams {
    /// Bounds the form route submits with.
    #[must_use]
    pub fn form_defaults() -> Self {
        Self {
            max_length: 150,
            min_length: 40,
            ..Self::default()
        }
    }
}

impl Default for SummaryParams {
    fn default() -> Self {
        Self {
            max_length: 80,
            min_length: 10,
            do_sample: true,
            num_lines: 3,
        }
    }
}

/// Request body for the hosted summarization pipeline.
#[derive(Debug, Serialize)]
pub struct InferenceRequest<'a> {
    pub inputs: &'a str,
    pub parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
pub struct GenerationParameters {
    pub max_length: u32,
    pub min_length: u32,
    pub do_sample: bool,
}

impl From<&SummaryParams> for GenerationParameters {
    fn from(params: &SummaryParams) -> Self {
        Self {
            max_length: params.max_length,
            min_length: params.min_length,
            do_sample: params.do_sample,
        }
    }
}

/// One entry of the pipeline's response array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryOutput {
    pub summary_text: String,
}
