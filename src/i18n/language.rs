//! Language tags: the closed set of supported languages.
//!
//! Codes are matched case-insensitively against the short symbolic code
//! ("EN", "es", "Fr", ...), never against the display name.

use crate::i18n::GreetingTable;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::error;

/// Errors produced by strict language code parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    /// The code does not name any supported language.
    #[error("Unsupported language code: {0}")]
    Unsupported(String),
}

/// One of the eight supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageTag {
    #[default]
    En,
    Es,
    Fr,
    De,
    It,
    Pt,
    Zh,
    Ja,
}

impl LanguageTag {
    /// Every supported language, in declaration order.
    pub const ALL: [LanguageTag; 8] = [
        LanguageTag::En,
        LanguageTag::Es,
        LanguageTag::Fr,
        LanguageTag::De,
        LanguageTag::It,
        LanguageTag::Pt,
        LanguageTag::Zh,
        LanguageTag::Ja,
    ];

    /// Symbolic code of the language (e.g. "EN", "JA").
    pub const fn code(self) -> &'static str {
        match self {
            LanguageTag::En => "EN",
            LanguageTag::Es => "ES",
            LanguageTag::Fr => "FR",
            LanguageTag::De => "DE",
            LanguageTag::It => "IT",
            LanguageTag::Pt => "PT",
            LanguageTag::Zh => "ZH",
            LanguageTag::Ja => "JA",
        }
    }

    /// English display name of the language.
    pub const fn name(self) -> &'static str {
        match self {
            LanguageTag::En => "English",
            LanguageTag::Es => "Spanish",
            LanguageTag::Fr => "French",
            LanguageTag::De => "German",
            LanguageTag::It => "Italian",
            LanguageTag::Pt => "Portuguese",
            LanguageTag::Zh => "Chinese",
            LanguageTag::Ja => "Japanese",
        }
    }

    /// Greeting word for this language, taken from the [`GreetingTable`].
    pub fn greeting(self) -> &'static str {
        GreetingTable::get().greeting_for(self)
    }

    /// Parse a language code strictly.
    ///
    /// # Arguments
    /// * `code` - Symbolic code in any case (e.g. "en", "Es", "FR")
    ///
    /// # Returns
    /// * `Ok(LanguageTag)` if the uppercased code names a supported language
    /// * `Err(LanguageError::Unsupported)` otherwise
    ///
    /// Use [`resolve_language`] when an unknown code should fall back to
    /// English instead.
    pub fn from_code(code: &str) -> Result<LanguageTag, LanguageError> {
        let wanted = code.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|tag| tag.code() == wanted)
            .ok_or_else(|| LanguageError::Unsupported(code.to_string()))
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LanguageTag {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageTag::from_code(s)
    }
}

impl Serialize for LanguageTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

// Goes through `resolve_language`, so stored selections always load as a valid tag.
impl<'de> Deserialize<'de> for LanguageTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(resolve_language(code))
    }
}

/// Input accepted wherever a language is chosen: a resolved tag or a raw code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSelector {
    Tag(LanguageTag),
    Code(String),
}

impl From<LanguageTag> for LanguageSelector {
    fn from(tag: LanguageTag) -> Self {
        LanguageSelector::Tag(tag)
    }
}

impl From<&str> for LanguageSelector {
    fn from(code: &str) -> Self {
        LanguageSelector::Code(code.to_string())
    }
}

impl From<String> for LanguageSelector {
    fn from(code: String) -> Self {
        LanguageSelector::Code(code)
    }
}

impl From<&String> for LanguageSelector {
    fn from(code: &String) -> Self {
        LanguageSelector::Code(code.clone())
    }
}

/// Resolve a tag or raw code into a supported language.
///
/// Tags pass through untouched. Codes are matched with
/// [`LanguageTag::from_code`]; an unsupported code is logged at error level
/// and resolves to English. This never fails.
pub fn resolve_language(input: impl Into<LanguageSelector>) -> LanguageTag {
    match input.into() {
        LanguageSelector::Tag(tag) => tag,
        LanguageSelector::Code(code) => LanguageTag::from_code(&code).unwrap_or_else(|err| {
            error!(code = %code, "{}, defaulting to English.", err);
            LanguageTag::En
        }),
    }
}
