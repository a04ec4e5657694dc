// All LLM prompt constants for the generation pipeline.

/// System prompt — enforces JSON-only output.
pub const GENERATION_SYSTEM: &str =
    "You are a creative and expert social media assistant. \
    You MUST respond with a single, valid JSON object. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Post generation prompt template.
/// Replace: {topic}, {platform}, {tone}, {word_count_instruction}
pub const POST_PROMPT_TEMPLATE: &str = r#"Your task is to generate a social media post based on the user's specifications.

*Topic:* "{topic}"
*Platform:* {platform}
*Tone:* **{tone}**

*Task Details:*
1. Analyze the topic provided.
2. Write a single, engaging post {word_count_instruction}.
3. The post must be tailored for the specified platform and strictly adhere to the specified tone.
4. Suggest 3-5 relevant hashtags.

*Output Format:*
Return a single, valid JSON object with two keys:
- "post": A string containing the generated post.
- "hashtags": An array of strings, where each string is a hashtag (starting with '#')."#;
