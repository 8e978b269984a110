//! Language managers: where the current language is read from and written to.
//!
//! # Architecture
//!
//! - `LanguageManager`: the capability pair every manager provides
//! - `fragment`: language kept in the location fragment (`#fr`)
//! - `cookie`: language kept in a `language=` cookie segment
//! - `ClosureManager`: adapter for ad-hoc managers built from two closures
//!
//! Managers hold no state of their own beyond what they are constructed
//! with. Swapping the active manager on a `Localizer` is a single `Arc` swap.

mod cookie;
mod fragment;

pub use cookie::CookieManager;
pub use fragment::FragmentManager;

use crate::document::Document;
use std::fmt;

/// Reads and writes the user's selected language.
pub trait LanguageManager: Send + Sync {
    /// Current language from the manager's source, `None` when unset.
    fn extract(&self, document: &dyn Document) -> Option<String>;

    /// Persist a newly selected language. No validation is performed.
    fn store(&self, document: &mut dyn Document, language: &str);

    /// Short name used in log output.
    fn name(&self) -> &str {
        "custom"
    }
}

type Extractor = dyn Fn(&dyn Document) -> Option<String> + Send + Sync;
type Setter = dyn Fn(&mut dyn Document, &str) + Send + Sync;

/// Manager built from an extractor and a setter closure.
///
/// # Example
/// ```
/// use i18nt::{ClosureManager, LanguageManager, MemoryDocument};
/// use std::sync::Mutex;
///
/// let stored = std::sync::Arc::new(Mutex::new(None::<String>));
/// let read = stored.clone();
/// let manager = ClosureManager::new(
///     move |_| read.lock().unwrap().clone(),
///     move |_, language| *stored.lock().unwrap() = Some(language.to_string()),
/// );
///
/// let mut doc = MemoryDocument::complete();
/// manager.store(&mut doc, "fr");
/// assert_eq!(manager.extract(&doc).as_deref(), Some("fr"));
/// ```
pub struct ClosureManager {
    extractor: Box<Extractor>,
    setter: Box<Setter>,
}

impl ClosureManager {
    pub fn new<E, S>(extractor: E, setter: S) -> Self
    where
        E: Fn(&dyn Document) -> Option<String> + Send + Sync + 'static,
        S: Fn(&mut dyn Document, &str) + Send + Sync + 'static,
    {
        Self {
            extractor: Box::new(extractor),
            setter: Box::new(setter),
        }
    }
}

impl LanguageManager for ClosureManager {
    fn extract(&self, document: &dyn Document) -> Option<String> {
        (self.extractor)(document)
    }

    fn store(&self, document: &mut dyn Document, language: &str) {
        (self.setter)(document, language)
    }
}

impl fmt::Debug for ClosureManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClosureManager").finish_non_exhaustive()
    }
}
