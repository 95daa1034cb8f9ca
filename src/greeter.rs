use crate::i18n::{resolve_language, LanguageSelector, LanguageTag};
use std::fmt;

/// Italian greetings always address this name instead of the stored one.
const ITALIAN_ADDRESSEE: &str = "Mario Potato";

/// Greets one person in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeter {
    name: String,
    language: LanguageTag,
}

impl Greeter {
    /// Create a greeter that speaks English.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_language(name, LanguageTag::default())
    }

    /// Create a greeter for a tag or a raw language code.
    ///
    /// The name is kept verbatim. Unsupported codes fall back to English
    /// (see [`resolve_language`]).
    pub fn with_language(name: impl Into<String>, language: impl Into<LanguageSelector>) -> Self {
        Self {
            name: name.into(),
            language: resolve_language(language),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn language(&self) -> LanguageTag {
        self.language
    }

    /// Render the greeting, e.g. "Hola, Ana!".
    ///
    /// Italian ignores the stored name: it is always "Ciao, Mario Potato!".
    pub fn greet(&self) -> String {
        let greeting = self.language.greeting();
        match self.language {
            LanguageTag::It => format!("{}, {}!", greeting, ITALIAN_ADDRESSEE),
            _ => format!("{}, {}!", greeting, self.name),
        }
    }
}

impl fmt::Display for Greeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.greet())
    }
}
