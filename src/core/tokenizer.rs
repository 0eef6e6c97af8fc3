use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+|[^\w\s]").expect("token pattern is valid"));

/// Split text into lowercase word tokens
///
/// A maximal run of word characters is one token. Whitespace only separates.
/// Any other character (`/`, `-`, `+`, `.`, ...) becomes a token of its own, so
/// "A/B testing" yields `["a", "/", "b", "testing"]` and "java" can never
/// align inside "javascript".
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();

    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
