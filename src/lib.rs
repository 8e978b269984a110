//! Apply translation tables to documents tagged with translation keys.
//!
//! Elements carry a marker attribute (`data-i18nd` by default) whose value
//! is a label. A [`Localizer`] resolves the active language through its
//! [`LanguageManager`], looks each label up in the installed
//! [`TranslationTable`] and writes the result into the element, either as
//! text content or into a named property.
//!
//! # Architecture
//!
//! - `translation`: table types and JSON bundle loading
//! - `document`: the host document trait and an in-memory implementation
//! - `manager`: language managers (fragment, cookie, closures)
//! - `localizer`: the localization context and the translation pass
//! - `readiness`: optional re-run of the pass on ready-state changes
//! - `audit`: completeness checks over bundles and documents
//! - `metrics`: per-localizer pass counters
//!
//! # Example
//!
//! ```
//! use i18nt::{Document, Localizer, LocalizerConfig, MemoryDocument};
//!
//! let table = i18nt::load_table_from_str(r#"{"en": {"greet": "Hello"}}"#)?;
//! let localizer = Localizer::with_config(
//!     LocalizerConfig::new()
//!         .with_translations(table)
//!         .with_default_language("en"),
//! );
//!
//! let mut doc = MemoryDocument::complete();
//! let node = doc.push_tagged("p", "data-i18nd", "greet");
//! localizer.translate(&mut doc);
//!
//! assert_eq!(doc.text_content(node).as_deref(), Some("Hello"));
//! # Ok::<(), i18nt::Error>(())
//! ```

pub mod audit;
pub mod config;
pub mod document;
pub mod error;
pub mod localizer;
pub mod manager;
pub mod metrics;
pub mod readiness;
pub mod translation;

pub use audit::{AuditReport, BundleAuditor};
pub use document::{Document, MemoryDocument, NodeId, ReadyState};
pub use error::{Error, Result};
pub use localizer::{
    Diagnostic, DiagnosticKind, Localizer, LocalizerConfig, PassOutcome, PassSummary, SkipReason,
    DEFAULT_MARKER_ATTRIBUTE,
};
pub use manager::{ClosureManager, CookieManager, FragmentManager, LanguageManager};
pub use metrics::{MetricsReport, PassMetrics};
pub use readiness::{ReadyStateHooks, ReadyStateListener};
pub use translation::{
    load_table_from_path, load_table_from_str, LabelMap, Translation, TranslationTable,
};
