//! Re-run translation when the document's ready state changes.
//!
//! Nothing is registered implicitly. A host that wants the pass to follow
//! page loading collects its listeners in [`ReadyStateHooks`] and calls
//! [`ReadyStateHooks::notify`] from its own ready-state event handler.

use crate::document::{Document, MemoryDocument, ReadyState};
use crate::localizer::Localizer;
use tracing::debug;

/// Reacts to a ready-state transition of the host document.
pub trait ReadyStateListener {
    fn ready_state_changed(&self, document: &mut dyn Document);
}

impl ReadyStateListener for Localizer {
    fn ready_state_changed(&self, document: &mut dyn Document) {
        self.translate(document);
    }
}

/// Listeners to notify on every ready-state change.
#[derive(Default)]
pub struct ReadyStateHooks<'a> {
    listeners: Vec<&'a dyn ReadyStateListener>,
}

impl<'a> ReadyStateHooks<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, listener: &'a dyn ReadyStateListener) {
        self.listeners.push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Notify every listener, in registration order.
    pub fn notify(&self, document: &mut dyn Document) {
        debug!(
            "Ready state is {:?}, notifying {} listeners",
            document.ready_state(),
            self.listeners.len()
        );
        for listener in &self.listeners {
            listener.ready_state_changed(document);
        }
    }

    /// Move an in-memory document to `state` and notify the listeners.
    pub fn advance(&self, document: &mut MemoryDocument, state: ReadyState) {
        document.set_ready_state(state);
        self.notify(document);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localizer::{LocalizerConfig, DEFAULT_MARKER_ATTRIBUTE};
    use crate::translation::load_table_from_str;
    use std::cell::Cell;

    struct Counter(Cell<usize>);

    impl ReadyStateListener for Counter {
        fn ready_state_changed(&self, _document: &mut dyn Document) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_notify_calls_every_listener() {
        let first = Counter(Cell::new(0));
        let second = Counter(Cell::new(0));
        let mut hooks = ReadyStateHooks::new();
        hooks.register(&first);
        hooks.register(&second);

        let mut doc = MemoryDocument::new();
        hooks.advance(&mut doc, ReadyState::Interactive);
        hooks.advance(&mut doc, ReadyState::Complete);

        assert_eq!(first.0.get(), 2);
        assert_eq!(second.0.get(), 2);
    }

    #[test]
    fn test_localizer_translates_once_complete() {
        let localizer = Localizer::with_config(
            LocalizerConfig::new()
                .with_translations(load_table_from_str(r#"{"en": {"greet": "Hello"}}"#).unwrap())
                .with_default_language("en"),
        );
        let mut hooks = ReadyStateHooks::new();
        hooks.register(&localizer);

        let mut doc = MemoryDocument::new();
        let node = doc.push_tagged("p", DEFAULT_MARKER_ATTRIBUTE, "greet");

        hooks.advance(&mut doc, ReadyState::Interactive);
        assert_eq!(doc.text_content(node).as_deref(), Some(""));

        hooks.advance(&mut doc, ReadyState::Complete);
        assert_eq!(doc.text_content(node).as_deref(), Some("Hello"));
        assert_eq!(localizer.metrics().passes_skipped(), 1);
        assert_eq!(localizer.metrics().passes_completed(), 1);
    }

    #[test]
    fn test_empty_hooks() {
        let hooks = ReadyStateHooks::new();
        assert!(hooks.is_empty());
        hooks.notify(&mut MemoryDocument::complete());
    }
}
