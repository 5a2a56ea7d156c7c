// file: src/models/language.rs
// description: static language profile table driving model and dictionary selection
// reference: iso 639-1 codes, hunspell dictionary naming

use crate::error::{PipelineError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageProfile {
    pub display_name: &'static str,
    pub code: &'static str,
    pub model_id: &'static str,
    pub dictionary_id: Option<&'static str>,
}

impl LanguageProfile {
    const fn new(
        display_name: &'static str,
        code: &'static str,
        model_id: &'static str,
        dictionary_id: Option<&'static str>,
    ) -> Self {
        Self {
            display_name,
            code,
            model_id,
            dictionary_id,
        }
    }

    pub fn supports_dictionary(&self) -> bool {
        self.dictionary_id.is_some()
    }

    /// Resolves a profile by display name, ISO code, or the leading English
    /// name (`"german"` matches `"German (Deutsch)"`). Case-insensitive.
    pub fn find(query: &str) -> Result<&'static LanguageProfile> {
        let needle = query.trim().to_lowercase();

        SUPPORTED_LANGUAGES
            .iter()
            .find(|profile| {
                profile.display_name.to_lowercase() == needle
                    || profile.code == needle
                    || profile.english_name().to_lowercase() == needle
            })
            .ok_or_else(|| PipelineError::UnknownLanguage(query.to_string()))
    }

    pub fn english_name(&self) -> &'static str {
        self.display_name
            .split(" (")
            .next()
            .unwrap_or(self.display_name)
    }

    /// Every profile ordered by display name.
    pub fn sorted() -> Vec<&'static LanguageProfile> {
        let mut profiles: Vec<_> = SUPPORTED_LANGUAGES.iter().collect();
        profiles.sort_by_key(|p| p.display_name);
        profiles
    }
}

pub static SUPPORTED_LANGUAGES: &[LanguageProfile] = &[
    LanguageProfile::new("Catalan (Català)", "ca", "ca_lexicon", None),
    LanguageProfile::new("Chinese (简体中文)", "zh", "zh_lexicon", None),
    LanguageProfile::new("Croatian (Hrvatski)", "hr", "hr_lexicon", None),
    LanguageProfile::new("Danish (Dansk)", "da", "da_lexicon", None),
    LanguageProfile::new("Dutch (Nederlands)", "nl", "nl_lexicon", Some("nl_NL")),
    LanguageProfile::new("English", "en", "en_lexicon", Some("en_US")),
    LanguageProfile::new("Finnish (Suomi)", "fi", "fi_lexicon", None),
    LanguageProfile::new("French (Français)", "fr", "fr_lexicon", Some("fr_FR")),
    LanguageProfile::new("German (Deutsch)", "de", "de_lexicon", Some("de_DE")),
    LanguageProfile::new("Greek (Ελληνικά)", "el", "el_lexicon", None),
    LanguageProfile::new("Italian (Italiano)", "it", "it_lexicon", Some("it_IT")),
    LanguageProfile::new("Japanese (日本語)", "ja", "ja_lexicon", None),
    LanguageProfile::new("Korean (한국어)", "ko", "ko_lexicon", None),
    LanguageProfile::new("Lithuanian (Lietuvių)", "lt", "lt_lexicon", None),
    LanguageProfile::new("Macedonian (Македонски)", "mk", "mk_lexicon", None),
    LanguageProfile::new(
        "Norwegian Bokmål (Norsk Bokmål)",
        "nb",
        "nb_lexicon",
        None,
    ),
    LanguageProfile::new("Polish (Polski)", "pl", "pl_lexicon", None),
    LanguageProfile::new("Portuguese (Português)", "pt", "pt_lexicon", Some("pt_PT")),
    LanguageProfile::new("Romanian (Română)", "ro", "ro_lexicon", None),
    LanguageProfile::new("Russian (Русский)", "ru", "ru_lexicon", Some("ru_RU")),
    LanguageProfile::new("Slovenian (Slovenščina)", "sl", "sl_lexicon", None),
    LanguageProfile::new("Spanish (Español)", "es", "es_lexicon", Some("es_ES")),
    LanguageProfile::new("Swedish (Svenska)", "sv", "sv_lexicon", None),
    LanguageProfile::new("Ukrainian (Українська)", "uk", "uk_lexicon", None),
];
