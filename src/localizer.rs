//! The localization context: stored bundles, language resolution, and the
//! translation pass over a document.

use crate::document::{Document, ReadyState};
use crate::error::Result;
use crate::manager::{FragmentManager, LanguageManager};
use crate::metrics::PassMetrics;
use crate::translation::{LabelMap, Translation, TranslationTable};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Attribute that marks an element as a translation target.
pub const DEFAULT_MARKER_ATTRIBUTE: &str = "data-i18nd";

/// Options accepted by [`Localizer::init`].
///
/// Every field is optional. A present field replaces the stored value, an
/// absent one keeps it. Empty strings count as absent, and so does a JSON
/// value of the wrong type.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizerConfig {
    #[serde(default, deserialize_with = "lenient")]
    pub translations: Option<TranslationTable>,

    #[serde(default, deserialize_with = "lenient")]
    pub default_language: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub marker_attribute: Option<String>,

    /// Managers cannot be expressed in JSON; set them in code.
    #[serde(skip)]
    pub manager: Option<Arc<dyn LanguageManager>>,
}

impl LocalizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON config object. Unknown options are ignored.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_translations(mut self, translations: TranslationTable) -> Self {
        self.translations = Some(translations);
        self
    }

    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = Some(language.into());
        self
    }

    pub fn with_manager(mut self, manager: impl LanguageManager + 'static) -> Self {
        self.manager = Some(Arc::new(manager));
        self
    }

    pub fn with_shared_manager(mut self, manager: Arc<dyn LanguageManager>) -> Self {
        self.manager = Some(manager);
        self
    }

    pub fn with_marker_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.marker_attribute = Some(attribute.into());
        self
    }
}

/// Reads a config field, treating values of the wrong type as absent.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            debug!("Ignoring config option: {}", e);
            Ok(None)
        }
    }
}

impl fmt::Debug for LocalizerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalizerConfig")
            .field("translations", &self.translations)
            .field("default_language", &self.default_language)
            .field("marker_attribute", &self.marker_attribute)
            .field("manager", &self.manager.as_ref().map(|m| m.name()))
            .finish()
    }
}

/// Why a pass returned without touching the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    DocumentNotReady,
    NoTranslations,
    NoLanguage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The resolved language has no entry for the key.
    MissingKey,
    /// The entry is an attribute assignment without target or content.
    MalformedEntry,
}

/// A non-fatal problem found while applying translations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub key: String,
    pub language: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::MissingKey => write!(
                f,
                "tag '{}' is used without a translation for '{}'",
                self.key, self.language
            ),
            DiagnosticKind::MalformedEntry => write!(
                f,
                "translation '{}' for '{}' is missing its target or content",
                self.key, self.language
            ),
        }
    }
}

/// Result of a pass that ran over the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassSummary {
    pub language: String,
    /// Number of elements that received a value.
    pub applied: usize,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassOutcome {
    Skipped(SkipReason),
    Completed(PassSummary),
}

impl PassOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, PassOutcome::Completed(_))
    }

    pub fn summary(&self) -> Option<&PassSummary> {
        match self {
            PassOutcome::Completed(summary) => Some(summary),
            PassOutcome::Skipped(_) => None,
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            PassOutcome::Completed(summary) => &summary.diagnostics,
            PassOutcome::Skipped(_) => &[],
        }
    }
}

/// Localization context owned by the host.
///
/// Holds the translation table, the fallback language, the active language
/// manager and the marker attribute. Independent instances do not share
/// any state.
pub struct Localizer {
    translations: Option<TranslationTable>,
    default_language: Option<String>,
    manager: Arc<dyn LanguageManager>,
    marker_attribute: String,
    metrics: PassMetrics,
}

impl Localizer {
    /// Create a localizer with no bundles, no default language and the
    /// fragment manager.
    pub fn new() -> Self {
        Self {
            translations: None,
            default_language: None,
            manager: Arc::new(FragmentManager),
            marker_attribute: DEFAULT_MARKER_ATTRIBUTE.to_string(),
            metrics: PassMetrics::new(),
        }
    }

    /// Create a localizer and apply `config` to it.
    pub fn with_config(config: LocalizerConfig) -> Self {
        let mut localizer = Self::new();
        localizer.init(config);
        localizer
    }

    /// Layer `config` over the current state.
    ///
    /// Can be called any number of times, e.g. to install newly loaded
    /// bundles or to swap only the manager. Absent or empty fields never
    /// clear what is already stored.
    pub fn init(&mut self, config: LocalizerConfig) {
        if let Some(translations) = config.translations {
            debug!("Installing translations for {} languages", translations.len());
            self.translations = Some(translations);
        }

        if let Some(language) = config.default_language.filter(|l| !l.is_empty()) {
            debug!("Default language set to '{}'", language);
            self.default_language = Some(language);
        }

        if let Some(manager) = config.manager {
            debug!("Language manager switched to '{}'", manager.name());
            self.manager = manager;
        }

        if let Some(attribute) = config.marker_attribute.filter(|a| !a.is_empty()) {
            self.marker_attribute = attribute;
        }
    }

    pub fn translations(&self) -> Option<&TranslationTable> {
        self.translations.as_ref()
    }

    pub fn default_language(&self) -> Option<&str> {
        self.default_language.as_deref()
    }

    pub fn manager(&self) -> &Arc<dyn LanguageManager> {
        &self.manager
    }

    pub fn marker_attribute(&self) -> &str {
        &self.marker_attribute
    }

    pub fn metrics(&self) -> &PassMetrics {
        &self.metrics
    }

    /// The manager's language if it has one, otherwise the default language.
    pub fn resolve_language(&self, document: &dyn Document) -> Option<String> {
        self.manager
            .extract(document)
            .filter(|l| !l.is_empty())
            .or_else(|| self.default_language.clone())
    }

    /// Look up a single entry.
    pub fn lookup(&self, language: &str, label: &str) -> Option<&Translation> {
        self.labels(language)?.get(label)
    }

    fn labels(&self, language: &str) -> Option<&LabelMap> {
        self.translations.as_ref()?.get(language)
    }

    /// Apply the resolved language to every tagged element of `document`.
    ///
    /// Returns early without side effects when the document is still
    /// loading, no bundle is installed, or no language resolves. Missing and
    /// malformed entries leave their element untouched and are reported in
    /// the returned summary and as `warn` events.
    pub fn translate(&self, document: &mut dyn Document) -> PassOutcome {
        match self.run_pass(document) {
            Ok(summary) => {
                self.metrics.record_completed();
                debug!(
                    "Translated {} elements into '{}' ({} diagnostics)",
                    summary.applied,
                    summary.language,
                    summary.diagnostics.len()
                );
                PassOutcome::Completed(summary)
            }
            Err(reason) => {
                self.metrics.record_skipped();
                debug!("Translation pass skipped: {:?}", reason);
                PassOutcome::Skipped(reason)
            }
        }
    }

    fn run_pass(&self, document: &mut dyn Document) -> std::result::Result<PassSummary, SkipReason> {
        if document.ready_state() != ReadyState::Complete {
            return Err(SkipReason::DocumentNotReady);
        }
        let translations = self
            .translations
            .as_ref()
            .ok_or(SkipReason::NoTranslations)?;
        let language = self
            .resolve_language(&*document)
            .ok_or(SkipReason::NoLanguage)?;
        let labels = translations.get(&language);

        let mut summary = PassSummary {
            language,
            applied: 0,
            diagnostics: Vec::new(),
        };

        for node in document.query_attribute(&self.marker_attribute) {
            let Some(key) = document.attribute(node, &self.marker_attribute) else {
                continue;
            };

            match labels.and_then(|l| l.get(&key)) {
                Some(Translation::PlainText(text)) => {
                    document.set_text_content(node, text);
                    summary.applied += 1;
                    self.metrics.record_applied();
                }
                Some(Translation::AttributeAssignment { target, content })
                    if !target.is_empty() && !content.is_empty() =>
                {
                    document.set_property(node, target, content);
                    summary.applied += 1;
                    self.metrics.record_applied();
                }
                Some(Translation::AttributeAssignment { .. }) => {
                    self.metrics.record_malformed();
                    summary.diagnostics.push(self.report(
                        DiagnosticKind::MalformedEntry,
                        key,
                        &summary.language,
                    ));
                }
                None => {
                    self.metrics.record_missing();
                    summary.diagnostics.push(self.report(
                        DiagnosticKind::MissingKey,
                        key,
                        &summary.language,
                    ));
                }
            }
        }

        Ok(summary)
    }

    fn report(&self, kind: DiagnosticKind, key: String, language: &str) -> Diagnostic {
        let diagnostic = Diagnostic {
            kind,
            key,
            language: language.to_string(),
        };
        warn!(
            key = %diagnostic.key,
            language = %diagnostic.language,
            "{}",
            diagnostic
        );
        diagnostic
    }

    /// Store `language` through the active manager and, when
    /// `translate_instantly` is set, run a pass right away.
    ///
    /// The language is not checked against the installed bundles. The pass
    /// picks up the new language only if the manager reads back what it
    /// just stored.
    pub fn switch_language(
        &self,
        document: &mut dyn Document,
        language: &str,
        translate_instantly: bool,
    ) -> Option<PassOutcome> {
        if translate_instantly {
            Some(self.switch_language_now(document, language))
        } else {
            self.switch_language_deferred(document, language);
            None
        }
    }

    /// Switch language and retranslate immediately.
    pub fn switch_language_now(&self, document: &mut dyn Document, language: &str) -> PassOutcome {
        self.switch_language_deferred(document, language);
        self.translate(document)
    }

    /// Switch language without touching the document.
    pub fn switch_language_deferred(&self, document: &mut dyn Document, language: &str) {
        debug!("Switching language to '{}' via '{}'", language, self.manager.name());
        self.manager.store(document, language);
    }
}

impl Default for Localizer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Localizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Localizer")
            .field("languages", &self.translations.as_ref().map(|t| t.len()))
            .field("default_language", &self.default_language)
            .field("manager", &self.manager.name())
            .field("marker_attribute", &self.marker_attribute)
            .finish()
    }
}
