//! Ambient credential discovery for the generation service.

/// Environment variables consulted when no key was supplied explicitly, in
/// order of precedence.
pub const AMBIENT_KEY_VARS: [&str; 2] = ["GOOGLE_API_KEY", "GEMINI_API_KEY"];

/// Looks up an API key in the process environment.
pub fn discover_api_key() -> Option<String> {
    discover_api_key_from(|name| std::env::var(name).ok())
}

/// Same as [`discover_api_key`] with an injectable lookup so callers can
/// resolve against something other than the live environment.
pub fn discover_api_key_from(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    AMBIENT_KEY_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// Masks a secret for display, keeping only the last four characters.
pub fn redact(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn google_key_wins_over_gemini_key() {
        let found = discover_api_key_from(lookup(&[
            ("GEMINI_API_KEY", "gemini"),
            ("GOOGLE_API_KEY", "google"),
        ]));
        assert_eq!(found.as_deref(), Some("google"));
    }

    #[test]
    fn blank_values_are_skipped() {
        let found = discover_api_key_from(lookup(&[
            ("GOOGLE_API_KEY", "  "),
            ("GEMINI_API_KEY", "gemini"),
        ]));
        assert_eq!(found.as_deref(), Some("gemini"));
        assert_eq!(discover_api_key_from(lookup(&[])), None);
    }

    #[test]
    fn redact_keeps_tail_only() {
        assert_eq!(redact("abcdefgh"), "****efgh");
        assert_eq!(redact("abc"), "****");
    }
}
