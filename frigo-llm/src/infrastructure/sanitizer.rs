//! Text cleanup for raw model output
//!
//! Models wrap their JSON in markdown fences, prepend commentary, or both.
//! The sanitizer is purely textual: it never repairs JSON, it only cuts away
//! what surrounds it so the validator gets the best candidate.

const FENCE: &str = "```";

/// Strips markdown fences and isolates the JSON payload of a model answer.
pub struct ResponseSanitizer;

impl ResponseSanitizer {
    /// Clean a raw model answer.
    ///
    /// 1) If a fenced block is present, keep only its body (language tag dropped).
    /// 2) Keep the span from the first `{` or `[` to the last matching closer.
    /// 3) Otherwise return the cleaned text so the validator can decide.
    ///
    /// `sanitize(sanitize(x)) == sanitize(x)` for text with at most one fenced block.
    pub fn sanitize(raw: &str) -> String {
        let unfenced = Self::strip_fence(raw.trim());

        match Self::extract_bracketed_span(unfenced) {
            Some(span) => span.to_string(),
            None => unfenced.to_string(),
        }
    }

    /// Body of the fenced block, up to the last closing fence, or the input
    /// when there is no fence.
    ///
    /// Backticks only open a fence at the start of a line or before any
    /// bracket, so backticks quoted inside a JSON string are left alone. An
    /// unclosed fence keeps everything after the opening line.
    pub fn strip_fence(content: &str) -> &str {
        let Some(start) = opening_fence(content) else {
            return content;
        };

        let after_open = &content[start + FENCE.len()..];
        let tag_len = after_open
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
            .unwrap_or(after_open.len());
        let body = &after_open[tag_len..];

        let body = match body.rfind(FENCE) {
            Some(end) => &body[..end],
            None => body,
        };

        body.trim()
    }

    /// Greedy span from the first opening bracket to the last closer of the same kind.
    pub fn extract_bracketed_span(content: &str) -> Option<&str> {
        let start = content.find(['{', '['])?;
        let closer = if content[start..].starts_with('{') {
            '}'
        } else {
            ']'
        };
        let end = content.rfind(closer)?;

        (end > start).then(|| &content[start..=end])
    }
}

fn opening_fence(content: &str) -> Option<usize> {
    let first_bracket = content.find(['{', '[']).unwrap_or(content.len());

    content
        .match_indices(FENCE)
        .map(|(idx, _)| idx)
        .find(|&idx| {
            let line_start = content[..idx].trim_end_matches([' ', '\t']);
            idx < first_bracket || line_start.is_empty() || line_start.ends_with('\n')
        })
}
