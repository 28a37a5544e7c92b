//! # Locales
//!
//! The closed set of locales the directory publishes in. `En` is the base
//! locale: every calculator's base record is authored in English and every
//! other locale falls back to it field by field.
//!
//! Locale codes arrive as strings from routing (`/es/loan-calculator`).
//! Parsing is lenient: an unknown code is not an error, the caller simply
//! serves the base locale.
//!
//! ## Example
//!
//! ```rust
//! use content_core::locale::Locale;
//!
//! assert_eq!(Locale::parse("es"), Some(Locale::Es));
//! assert_eq!(Locale::parse("xx"), None);
//! assert_eq!(Locale::parse_or_base("xx"), Locale::En);
//! assert_eq!(Locale::Pt.bcp47(), "pt-PT");
//! ```

use serde::{Deserialize, Serialize};

/// A locale the site publishes content in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (base locale, always complete)
    #[default]
    En,
    /// Spanish
    Es,
    /// Portuguese
    Pt,
    /// French
    Fr,
    /// German (narrower content coverage)
    De,
    /// Dutch (narrower content coverage)
    Nl,
}

impl Locale {
    /// The base locale every other locale falls back to.
    pub const BASE: Locale = Locale::En;

    /// All supported locales, base first.
    pub const ALL: [Locale; 6] = [
        Locale::En,
        Locale::Es,
        Locale::Pt,
        Locale::Fr,
        Locale::De,
        Locale::Nl,
    ];

    /// Parse a routing code. Matching is case-insensitive; region
    /// subtags are ignored (`"pt-BR"` parses as `Pt`).
    pub fn parse(code: &str) -> Option<Locale> {
        let primary = code.split(['-', '_']).next().unwrap_or(code);
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "es" => Some(Locale::Es),
            "pt" => Some(Locale::Pt),
            "fr" => Some(Locale::Fr),
            "de" => Some(Locale::De),
            "nl" => Some(Locale::Nl),
            _ => None,
        }
    }

    /// Parse a routing code, falling back to the base locale for
    /// anything unrecognized. Unknown locales are never an error.
    pub fn parse_or_base(code: &str) -> Locale {
        Locale::parse(code).unwrap_or(Locale::BASE)
    }

    /// Two-letter routing code.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::Pt => "pt",
            Locale::Fr => "fr",
            Locale::De => "de",
            Locale::Nl => "nl",
        }
    }

    /// BCP-47 tag used for the JSON-LD `inLanguage` property.
    pub fn bcp47(&self) -> &'static str {
        match self {
            Locale::En => "en-US",
            Locale::Es => "es-ES",
            Locale::Pt => "pt-PT",
            Locale::Fr => "fr-FR",
            Locale::De => "de-DE",
            Locale::Nl => "nl-NL",
        }
    }

    /// Native-language display name.
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Es => "Español",
            Locale::Pt => "Português",
            Locale::Fr => "Français",
            Locale::De => "Deutsch",
            Locale::Nl => "Nederlands",
        }
    }

    /// Localized "Home" label used for breadcrumbs.
    pub fn home_name(&self) -> &'static str {
        match self {
            Locale::En => "Home",
            Locale::Es => "Inicio",
            Locale::Pt => "Início",
            Locale::Fr => "Accueil",
            Locale::De => "Startseite",
            Locale::Nl => "Home",
        }
    }

    pub fn is_base(&self) -> bool {
        *self == Locale::BASE
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_codes() {
        for locale in Locale::ALL {
            assert_eq!(Locale::parse(locale.code()), Some(locale));
        }
    }

    #[test]
    fn test_parse_is_lenient() {
        assert_eq!(Locale::parse("ES"), Some(Locale::Es));
        assert_eq!(Locale::parse("pt-BR"), Some(Locale::Pt));
        assert_eq!(Locale::parse("fr_CA"), Some(Locale::Fr));
        assert_eq!(Locale::parse("ja"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn test_unknown_locale_falls_back_to_base() {
        assert_eq!(Locale::parse_or_base("zz"), Locale::En);
        assert_eq!(Locale::parse_or_base("de"), Locale::De);
    }

    #[test]
    fn test_serde_codes_match_routing_codes() {
        let json = serde_json::to_string(&Locale::Nl).unwrap();
        assert_eq!(json, "\"nl\"");
        let roundtrip: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, Locale::Nl);
    }
}
