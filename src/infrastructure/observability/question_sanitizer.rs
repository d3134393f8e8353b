const MAX_VISIBLE_LENGTH: usize = 100;

/// Sanitizes free-text question/prompt content for safe logging:
/// truncates long text and redacts credential-shaped fragments.
pub fn sanitize_question(question: &str) -> String {
    let trimmed = question.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let visible_end = trimmed
        .char_indices()
        .nth(MAX_VISIBLE_LENGTH)
        .map(|(idx, _)| idx);

    let sanitized = match visible_end {
        Some(end) => format!("{}... ({} chars total)", &trimmed[..end], trimmed.len()),
        None => trimmed.to_string(),
    };

    redact_sensitive_patterns(&sanitized)
}

fn redact_sensitive_patterns(text: &str) -> String {
    let patterns = [
        ("Bearer ", "Bearer [REDACTED]"),
        ("api_key=", "api_key=[REDACTED]"),
        ("password=", "password=[REDACTED]"),
        ("secret=", "secret=[REDACTED]"),
        ("token=", "token=[REDACTED]"),
    ];

    let mut result = text.to_string();
    for (pattern, replacement) in patterns {
        if let Some(idx) = result.find(pattern) {
            let end = result[idx + pattern.len()..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| idx + pattern.len() + i)
                .unwrap_or(result.len());
            result = format!("{}{}{}", &result[..idx], replacement, &result[end..]);
        }
    }

    result
}
