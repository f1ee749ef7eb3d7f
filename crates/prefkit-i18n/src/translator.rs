//! Key lookup with language fallback

use tracing::warn;

use crate::catalog::{Catalog, DEFAULT_LANGUAGE};

/// Resolves translation keys against an active language.
///
/// Lookup chain: active language, then the default language (with a
/// warning), then the caller's fallback when non-empty, then the key
/// itself. Which language is active is plain state here; persisting it
/// is the caller's concern.
#[derive(Debug, Clone)]
pub struct Translator {
    catalog: &'static Catalog,
    current: &'static str,
}

impl Translator {
    pub fn new(catalog: &'static Catalog) -> Self {
        Self {
            catalog,
            current: DEFAULT_LANGUAGE,
        }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn current_language(&self) -> &'static str {
        self.current
    }

    /// Switch the active language.
    ///
    /// Unsupported tags warn and resolve to the default. Returns the tag
    /// actually activated.
    pub fn set_language(&mut self, lang: &str) -> &'static str {
        let resolved = match self.catalog.languages().find(|&tag| tag == lang) {
            Some(tag) => tag,
            None => {
                warn!(language = lang, fallback = DEFAULT_LANGUAGE, "language not supported");
                DEFAULT_LANGUAGE
            }
        };
        self.current = resolved;
        resolved
    }

    /// Translate a key, using `fallback` when it is missing everywhere.
    ///
    /// An empty fallback means "use the key itself".
    pub fn translate<'a>(&self, key: &'a str, fallback: &'a str) -> &'a str {
        if let Some(text) = self.catalog.get(self.current, key) {
            return text;
        }

        warn!(key, language = self.current, "translation missing");

        if let Some(text) = self.catalog.get(DEFAULT_LANGUAGE, key) {
            return text;
        }
        if !fallback.is_empty() {
            return fallback;
        }
        key
    }

    /// Translate a key with no caller fallback
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.translate(key, "")
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_active_language_wins() {
        let mut tr = Translator::default();
        assert_eq!(tr.t("title"), "Preference Center");

        tr.set_language("de");
        assert_eq!(tr.t("title"), "Präferenzzentrum");
        assert_eq!(tr.current_language(), "de");
    }

    #[test]
    fn test_unsupported_language_resolves_to_default() {
        let mut tr = Translator::default();
        assert_eq!(tr.set_language("fr"), DEFAULT_LANGUAGE);
        assert_eq!(tr.current_language(), "en-US");
    }

    #[test]
    fn test_missing_key_uses_caller_fallback_then_the_key() {
        // Built-in dictionaries all carry the same keys, so a made-up key
        // exercises the tail of the chain
        let mut tr = Translator::default();
        tr.set_language("zh");
        assert_eq!(tr.t("nav.privacy"), "隐私政策");
        assert_eq!(tr.translate("definitely.missing", "stand-in"), "stand-in");
        assert_eq!(tr.translate("definitely.missing", ""), "definitely.missing");
    }

    #[test]
    fn test_fallback_order_default_before_caller() {
        let tr = Translator::default();
        // Key present in the default dictionary: caller fallback is ignored
        assert_eq!(tr.translate("title", "unused"), "Preference Center");
    }

    #[test]
    fn test_debug_output_shows_the_active_language() {
        let mut tr = Translator::default();
        tr.set_language("zh");
        assert!(format!("{tr:?}").contains(r#"current: "zh""#));
    }
}
