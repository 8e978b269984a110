use anyhow::{Context, Result};

/// Settings for the `audit` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    // Bundle
    pub translations_path: String,

    // Completeness
    pub reference_language: Option<String>,
    pub strict: bool,
}

impl AuditConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            // Bundle
            translations_path: lookup("I18NT_TRANSLATIONS")
                .filter(|v| !v.is_empty())
                .context("I18NT_TRANSLATIONS not set")?,

            // Completeness
            reference_language: lookup("I18NT_REFERENCE_LANGUAGE").filter(|v| !v.is_empty()),
            strict: lookup("I18NT_STRICT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        })
    }
}
