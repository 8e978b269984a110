use super::LanguageManager;
use crate::document::Document;
use regex::Regex;
use std::sync::OnceLock;

const COOKIE_KEY: &str = "language=";

static LANGUAGE_COOKIE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Keeps the language in a `language=<code>` cookie segment.
///
/// Other cookie segments are preserved on write. When the cookie string has
/// no `language=` segment yet, one is appended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CookieManager;

impl CookieManager {
    fn language_regex() -> &'static Regex {
        LANGUAGE_COOKIE_REGEX
            .get_or_init(|| Regex::new(r"(?:^|;)\s*language=([^;\s]+)").unwrap())
    }
}

impl LanguageManager for CookieManager {
    fn extract(&self, document: &dyn Document) -> Option<String> {
        let cookie = document.cookie();
        Self::language_regex()
            .captures(&cookie)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().to_string())
    }

    fn store(&self, document: &mut dyn Document, language: &str) {
        let cookie = document.cookie();
        let entry = format!("{COOKIE_KEY}{language}");

        if cookie.trim().is_empty() {
            document.set_cookie(&entry);
            return;
        }

        let mut segments: Vec<&str> = cookie
            .split(';')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.iter().position(|s| s.starts_with(COOKIE_KEY)) {
            Some(index) => segments[index] = entry.as_str(),
            None => segments.push(entry.as_str()),
        }

        document.set_cookie(&segments.join("; "));
    }

    fn name(&self) -> &str {
        "cookie"
    }
}
