//! Greeting table: single source of truth for the greeting word of each language.
//!
//! The table is a process-wide static built at compile time and only ever read.

use crate::i18n::LanguageTag;

/// Greeting word for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreetingEntry {
    /// Language the greeting belongs to
    pub tag: LanguageTag,

    /// Greeting word (e.g. "Hello", "Hola")
    pub greeting: &'static str,
}

/// Global greeting table.
///
/// Entries are stored in [`LanguageTag::ALL`] order, so a tag's
/// discriminant is its index.
#[derive(Debug)]
pub struct GreetingTable {
    entries: [GreetingEntry; 8],
}

static TABLE: GreetingTable = GreetingTable {
    entries: [
        GreetingEntry {
            tag: LanguageTag::En,
            greeting: "Hello",
        },
        GreetingEntry {
            tag: LanguageTag::Es,
            greeting: "Hola",
        },
        GreetingEntry {
            tag: LanguageTag::Fr,
            greeting: "Bonjour",
        },
        GreetingEntry {
            tag: LanguageTag::De,
            greeting: "Hallo",
        },
        GreetingEntry {
            tag: LanguageTag::It,
            greeting: "Ciao",
        },
        GreetingEntry {
            tag: LanguageTag::Pt,
            greeting: "Olá",
        },
        GreetingEntry {
            tag: LanguageTag::Zh,
            greeting: "你好",
        },
        GreetingEntry {
            tag: LanguageTag::Ja,
            greeting: "こんにちは",
        },
    ],
};

impl GreetingTable {
    /// Get the global greeting table.
    pub fn get() -> &'static GreetingTable {
        &TABLE
    }

    /// Greeting word for a language.
    pub fn greeting_for(&self, tag: LanguageTag) -> &'static str {
        self.entries[tag as usize].greeting
    }

    /// All entries, in [`LanguageTag::ALL`] order.
    pub fn entries(&self) -> &[GreetingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
