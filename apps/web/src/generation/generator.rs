//! Post generation — the pipeline behind the form.
//!
//! `AppState` holds an `Arc<dyn PostGenerator>`, so the handler never knows
//! which backend it is talking to. Production wires in `GeminiPostGenerator`;
//! tests substitute a stub to observe invocations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::GenerateError;
use crate::generation::prompts::{GENERATION_SYSTEM, POST_PROMPT_TEMPLATE};
use crate::llm_client::GeminiClient;

/// A single validated form submission. Request-scoped, never persisted.
#[derive(Debug, Clone)]
pub struct PostRequest {
    /// Required — the handler rejects empty topics before building this.
    pub topic: String,
    pub platform: Option<String>,
    pub tone: Option<String>,
    /// Desired length in words. `None` selects the default length phrase.
    pub word_count: Option<u32>,
}

/// The model's parsed reply: the post body plus its suggested hashtags,
/// in the order the model returned them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPost {
    pub post: String,
    pub hashtags: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt construction
// ────────────────────────────────────────────────────────────────────────────

/// Builds the length clause inserted into the prompt.
pub fn word_count_instruction(word_count: Option<u32>) -> String {
    match word_count {
        Some(n) => format!("of about {n} words"),
        None => "between 50 and 100 words".to_string(),
    }
}

/// Four-way template fill. Absent platform/tone fall back to neutral wording
/// so the template never renders an empty slot.
pub fn build_prompt(request: &PostRequest) -> String {
    let platform = request
        .platform
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or("any platform");
    let tone = request
        .tone
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or("neutral");

    POST_PROMPT_TEMPLATE
        .replace("{topic}", &request.topic)
        .replace("{platform}", platform)
        .replace("{tone}", tone)
        .replace(
            "{word_count_instruction}",
            &word_count_instruction(request.word_count),
        )
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The generation pipeline seam. Implement this to swap backends without
/// touching the handler or the page renderer.
#[async_trait]
pub trait PostGenerator: Send + Sync {
    async fn generate(&self, request: &PostRequest) -> Result<GeneratedPost, GenerateError>;
}

// ────────────────────────────────────────────────────────────────────────────
// GeminiPostGenerator — production backend
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full pipeline: template fill → Gemini call → JSON parse →
/// shape validation.
pub struct GeminiPostGenerator {
    llm: GeminiClient,
}

impl GeminiPostGenerator {
    pub fn new(llm: GeminiClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl PostGenerator for GeminiPostGenerator {
    async fn generate(&self, request: &PostRequest) -> Result<GeneratedPost, GenerateError> {
        let prompt = build_prompt(request);
        debug!(topic = %request.topic, "invoking generation pipeline");

        let generated: GeneratedPost = self.llm.call_json(&prompt, GENERATION_SYSTEM).await?;

        validate_post(generated)
    }
}

/// Shape validation for model output. serde has already enforced key presence
/// and types; this enforces the semantic contract: a non-empty post, and
/// every hashtag carrying its `#` prefix (normalized when the model drops it).
fn validate_post(mut generated: GeneratedPost) -> Result<GeneratedPost, GenerateError> {
    if generated.post.trim().is_empty() {
        return Err(GenerateError::InvalidOutput(
            "'post' must be a non-empty string".to_string(),
        ));
    }

    for tag in &mut generated.hashtags {
        let trimmed = tag.trim();
        if trimmed.is_empty() || trimmed == "#" {
            return Err(GenerateError::InvalidOutput(
                "'hashtags' contains an empty entry".to_string(),
            ));
        }
        *tag = if trimmed.starts_with('#') {
            trimmed.to_string()
        } else {
            format!("#{trimmed}")
        };
    }

    Ok(generated)
}
