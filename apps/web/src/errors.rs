use thiserror::Error;

use crate::llm_client::LlmError;

/// Generation pipeline failures, split by where the fault lies:
/// the call to the model vs the model's reply.
///
/// Handlers render these into the page as a user-visible error state —
/// a pipeline failure must never surface as a bare 500.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The Gemini call itself failed (network, auth, rate limit, 5xx).
    #[error("LLM call failed: {0}")]
    Llm(LlmError),

    /// The model replied, but the reply was empty, unparseable, or failed
    /// shape validation.
    #[error("invalid model output: {0}")]
    InvalidOutput(String),
}

impl From<LlmError> for GenerateError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Parse(e) => GenerateError::InvalidOutput(format!("not valid JSON: {e}")),
            LlmError::EmptyContent => {
                GenerateError::InvalidOutput("model returned empty content".to_string())
            }
            other => GenerateError::Llm(other),
        }
    }
}

impl GenerateError {
    /// Short message safe to show on the page. Details stay in the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            GenerateError::Llm(_) => {
                "The generation service is currently unavailable. Please try again."
            }
            GenerateError::InvalidOutput(_) => {
                "The model returned an unexpected response. Please try again."
            }
        }
    }
}
