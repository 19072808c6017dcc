// Prompt constants for article generation.

/// Article generation prompt template.
/// Replace: {headline}, {tone_guidance}
pub const ARTICLE_PROMPT_TEMPLATE: &str = r#"Generate a news article based on the following headline.
Make sure the article is factual, well-structured.

Headline: {headline}

Please follow these guidelines:
- Write in a journalistic style
- {tone_guidance}
- Include relevant details and context
- Maintain objectivity
- Use clear and concise language
- Follow proper news article structure (lead paragraph, body, conclusion)"#;
