use std::sync::OnceLock;

use regex::Regex;

/// Redacts known secret patterns from the input string.
///
/// Covers bearer and basic credentials, session or auth values carried in
/// URL query strings (the game endpoint may append them), and generic
/// `key=`/`token=`/`secret=`/`password=` assignments.
pub fn sanitize_secrets(input: &str) -> String {
    let mut result = input.to_string();
    for (re, replacement) in patterns() {
        result = re.replace_all(&result, *replacement).into_owned();
    }
    result
}

fn patterns() -> &'static [(Regex, &'static str)] {
    static PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        // Specific patterns first, generic last.
        [
            (r"Bearer [a-zA-Z0-9._\-]+", "Bearer [REDACTED]"),
            (r"Basic [a-zA-Z0-9+/=]{8,}", "Basic [REDACTED]"),
            (
                r"(?i)([?&](?:token|access_token|auth|session|sid|sig|signature|key|api_key)=)[^&#\s]+",
                "${1}[REDACTED]",
            ),
            (
                r"(?i)((?:key|token|secret|password)\s*[=:]\s*)[a-zA-Z0-9_\-]{16,}",
                "${1}[REDACTED]",
            ),
        ]
        .into_iter()
        .filter_map(|(pattern, replacement)| match Regex::new(pattern) {
            Ok(re) => Some((re, replacement)),
            Err(e) => {
                tracing::error!(pattern, error = %e, "invalid redaction pattern");
                None
            }
        })
        .collect()
    })
}
