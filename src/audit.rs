//! Bundle completeness auditing.
//!
//! The translation pass reports missing keys one element at a time, and only
//! for the language being shown. The auditor checks a whole table up front so
//! gaps are found before they reach a page.

use crate::document::Document;
use crate::translation::{Translation, TranslationTable};
use serde::Serialize;
use std::collections::BTreeSet;

/// Findings from auditing a bundle, split by how they show up on a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    /// Malformed entries, and audited languages the table does not have.
    pub errors: Vec<String>,

    /// Labels one language lacks; the pass reports them as missing keys.
    pub warnings: Vec<String>,
}

impl AuditReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a pass over this bundle would leave elements untranslated.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether some language falls short of the expected label set.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Every label is present in every language and well formed.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Completeness checker for translation tables.
pub struct BundleAuditor;

impl BundleAuditor {
    /// Audit every language of `table`.
    ///
    /// With a `reference` language, each other language is compared against
    /// its labels: missing labels and labels the reference lacks are
    /// warnings. Without one, every language is compared against the union
    /// of all labels. Incomplete attribute assignments are errors.
    pub fn audit(table: &TranslationTable, reference: Option<&str>) -> AuditReport {
        let mut report = AuditReport::new();

        let expected: BTreeSet<&str> = match reference {
            Some(code) => match table.get(code) {
                Some(labels) => labels.keys().map(String::as_str).collect(),
                None => {
                    report
                        .errors
                        .push(format!("Reference language '{}' is not in the bundle", code));
                    return report;
                }
            },
            None => table
                .values()
                .flat_map(|labels| labels.keys().map(String::as_str))
                .collect(),
        };

        for (language, labels) in table {
            if labels.is_empty() {
                report
                    .warnings
                    .push(format!("Language '{}' has no labels", language));
            }

            for label in expected.iter().filter(|l| !labels.contains_key(**l)) {
                report.warnings.push(format!(
                    "Language '{}' is missing label '{}'",
                    language, label
                ));
            }

            if reference.is_some() {
                for label in labels.keys().filter(|l| !expected.contains(l.as_str())) {
                    report.warnings.push(format!(
                        "Language '{}' has label '{}' not present in the reference",
                        language, label
                    ));
                }
            }

            for (label, translation) in labels {
                if translation.is_malformed() {
                    report.errors.push(format!(
                        "Label '{}' in '{}' {}",
                        label,
                        language,
                        Self::describe_malformed(translation)
                    ));
                }
            }
        }

        report
    }

    /// Check that `language` covers every key tagged in `document`.
    pub fn audit_document(
        table: &TranslationTable,
        language: &str,
        document: &dyn Document,
        marker_attribute: &str,
    ) -> AuditReport {
        let mut report = AuditReport::new();

        let Some(labels) = table.get(language) else {
            report
                .errors
                .push(format!("Language '{}' is not in the bundle", language));
            return report;
        };

        let keys: BTreeSet<String> = document
            .query_attribute(marker_attribute)
            .into_iter()
            .filter_map(|node| document.attribute(node, marker_attribute))
            .collect();

        for key in keys {
            match labels.get(&key) {
                None => report.warnings.push(format!(
                    "Tag '{}' has no translation for '{}'",
                    key, language
                )),
                Some(translation) if translation.is_malformed() => report.errors.push(format!(
                    "Label '{}' in '{}' {}",
                    key,
                    language,
                    Self::describe_malformed(translation)
                )),
                Some(_) => {}
            }
        }

        report
    }

    fn describe_malformed(translation: &Translation) -> &'static str {
        match translation {
            Translation::AttributeAssignment { target, content }
                if target.is_empty() && content.is_empty() =>
            {
                "has neither target nor content"
            }
            Translation::AttributeAssignment { target, .. } if target.is_empty() => {
                "has no target"
            }
            _ => "has no content",
        }
    }
}
