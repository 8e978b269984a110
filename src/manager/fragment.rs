use super::LanguageManager;
use crate::document::Document;

/// Keeps the language in the location fragment, e.g. `page.html#fr`.
///
/// The fragment is read verbatim, without percent-decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FragmentManager;

impl LanguageManager for FragmentManager {
    fn extract(&self, document: &dyn Document) -> Option<String> {
        let fragment = document.fragment();
        (!fragment.is_empty()).then_some(fragment)
    }

    fn store(&self, document: &mut dyn Document, language: &str) {
        document.set_fragment(language);
    }

    fn name(&self) -> &str {
        "fragment"
    }
}
