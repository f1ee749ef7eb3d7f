// File: src/language.rs
// Purpose: Active language state, negotiation on load, and persistence

use prefkit_i18n::{Translator, DEFAULT_LANGUAGE};
use tracing::{debug, warn};

use crate::store::KeyValueStore;

/// Storage key for the visitor's saved language choice
pub const LANGUAGE_STORAGE_KEY: &str = "preferredLanguage";

/// Owns the translator plus the persisted language preference.
///
/// Storage problems never take the page down: reads and writes that fail
/// are logged and the language falls back to negotiation.
#[derive(Debug)]
pub struct LanguageManager<S> {
    store: S,
    translator: Translator,
}

impl<S: KeyValueStore> LanguageManager<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            translator: Translator::default(),
        }
    }

    /// Pick the initial language: a saved preference wins over the
    /// browser tag, and both are negotiated against the catalog.
    pub async fn load(&mut self, browser_language: Option<&str>) -> &'static str {
        let stored = match self.store.get(LANGUAGE_STORAGE_KEY).await {
            Ok(value) => value,
            Err(error) => {
                warn!(store = self.store.name(), %error, "could not read language preference");
                None
            }
        };

        // A saved tag counts only while the catalog still carries it;
        // anything else negotiates from the browser tag.
        let catalog = self.translator.catalog();
        let resolved = match stored.as_deref().filter(|tag| catalog.supports(tag)) {
            Some(tag) => catalog.negotiate(tag),
            None => match browser_language {
                Some(tag) => catalog.negotiate(tag),
                None => DEFAULT_LANGUAGE,
            },
        };

        self.translator.set_language(resolved);
        debug!(language = resolved, "language loaded");
        resolved
    }

    /// The visitor picked a language; activate and persist it.
    pub async fn set_language(&mut self, lang: &str) -> &'static str {
        let resolved = self.translator.set_language(lang);

        if let Err(error) = self.store.set(LANGUAGE_STORAGE_KEY, resolved).await {
            warn!(store = self.store.name(), %error, "could not save language preference");
        }

        resolved
    }

    pub fn current(&self) -> &'static str {
        self.translator.current_language()
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.translator.t(key)
    }

    pub fn translate<'a>(&self, key: &'a str, fallback: &'a str) -> &'a str {
        self.translator.translate(key, fallback)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_load_without_any_signal_uses_the_default() {
        let mut manager = LanguageManager::new(MemoryStore::new());
        assert_eq!(manager.load(None).await, "en-US");
        assert_eq!(manager.current(), "en-US");
    }

    #[tokio::test]
    async fn test_load_negotiates_the_browser_tag() {
        let store = MemoryStore::new();
        let mut manager = LanguageManager::new(store.clone());

        assert_eq!(manager.load(Some("de-AT")).await, "de");
        assert_eq!(manager.t("title"), "Präferenzzentrum");

        // Negotiation alone is not a choice worth saving
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_saved_preference_beats_the_browser_tag() {
        let store = MemoryStore::new();
        store.set(LANGUAGE_STORAGE_KEY, "zh").await.unwrap();

        let mut manager = LanguageManager::new(store);
        assert_eq!(manager.load(Some("de")).await, "zh");
    }

    #[tokio::test]
    async fn test_unrecognized_saved_preference_falls_back() {
        let store = MemoryStore::new();
        store.set(LANGUAGE_STORAGE_KEY, "klingon").await.unwrap();

        let mut manager = LanguageManager::new(store.clone());
        assert_eq!(manager.load(None).await, "en-US");

        // The browser tag still gets its negotiation pass
        let mut manager = LanguageManager::new(store);
        assert_eq!(manager.load(Some("de")).await, "de");
    }

    #[tokio::test]
    async fn test_set_language_persists_the_resolved_tag() {
        let store = MemoryStore::new();
        let mut manager = LanguageManager::new(store.clone());

        assert_eq!(manager.set_language("de").await, "de");
        assert_eq!(store.get(LANGUAGE_STORAGE_KEY).await.unwrap().as_deref(), Some("de"));

        // Unsupported picks resolve to the default before persisting
        assert_eq!(manager.set_language("fr").await, "en-US");
        assert_eq!(
            store.get(LANGUAGE_STORAGE_KEY).await.unwrap().as_deref(),
            Some("en-US")
        );
    }
}
