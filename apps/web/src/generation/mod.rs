// Post generation pipeline: template fill → Gemini call → JSON parse → validation.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
