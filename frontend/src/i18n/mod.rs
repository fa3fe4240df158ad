use std::collections::HashMap;

use gloo_storage::{LocalStorage, Storage};
use leptos::*;

pub const DEFAULT_LANGUAGE: &str = "en";
const LANGUAGE_KEY: &str = "masthead.language";

/// Translation data loaded from JSON files
type Translations = HashMap<String, String>;

/// I18n context that provides translation functions
#[derive(Clone, Copy)]
pub struct I18nContext {
    pub language: RwSignal<String>,
    translations: RwSignal<Translations>,
}

impl I18nContext {
    /// Create a new I18nContext with the specified language
    pub fn new(language: &str) -> Self {
        let language = normalize_language(language);
        Self {
            language: create_rw_signal(language.to_string()),
            translations: create_rw_signal(load_translations(language)),
        }
    }

    /// Translate a key to the current language.
    /// Returns the key itself if translation is not found
    pub fn t(&self, key: &str) -> String {
        self.translations
            .with(|translations| translations.get(key).cloned())
            .unwrap_or_else(|| key.to_string())
    }

    /// Change the current language. Unsupported codes fall back to the default.
    pub fn set_language(&self, lang: &str) {
        let lang = normalize_language(lang);
        self.translations.set(load_translations(lang));
        self.language.set(lang.to_string());
    }

    pub fn current_language(&self) -> String {
        self.language.get()
    }
}

/// Load translations for a language from embedded JSON
fn load_translations(lang: &str) -> Translations {
    let json = match lang {
        "de" => include_str!("../translations/de.json"),
        _ => include_str!("../translations/en.json"),
    };

    serde_json::from_str(json).unwrap_or_default()
}

/// Maps any language code onto one we ship translations for.
pub fn normalize_language(lang: &str) -> &'static str {
    let primary = lang.split(['-', '_']).next().unwrap_or_default();
    supported_languages()
        .into_iter()
        .map(|(code, _)| code)
        .find(|code| code.eq_ignore_ascii_case(primary))
        .unwrap_or(DEFAULT_LANGUAGE)
}

/// Language chosen in a previous visit, if any.
pub fn stored_language() -> Option<String> {
    LocalStorage::get(LANGUAGE_KEY).ok()
}

pub fn persist_language(lang: &str) {
    if let Err(err) = LocalStorage::set(LANGUAGE_KEY, lang) {
        log::warn!("could not persist language {}: {}", lang, err);
    }
}

/// Provide I18n context to the application, preferring a stored choice.
pub fn provide_i18n(default_language: &str) -> I18nContext {
    let language = stored_language().unwrap_or_else(|| default_language.to_string());
    let ctx = I18nContext::new(&language);
    provide_context(ctx);
    ctx
}

/// Use the I18n context from within a component
pub fn use_i18n() -> I18nContext {
    expect_context::<I18nContext>()
}

/// Get the list of supported languages
pub fn supported_languages() -> Vec<(&'static str, &'static str)> {
    vec![
        ("en", "English"),
        ("de", "Deutsch"),
    ]
}
