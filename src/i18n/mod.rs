//! Languages and greeting words.
//!
//! # Architecture
//!
//! - `language`: the closed `LanguageTag` set and fail-soft code resolution
//! - `registry`: the read-only greeting table
//!
//! # Example
//!
//! ```rust
//! use polyglot_greeter::i18n::{resolve_language, LanguageTag};
//!
//! assert_eq!(resolve_language("fr"), LanguageTag::Fr);
//! assert_eq!(LanguageTag::Fr.greeting(), "Bonjour");
//!
//! // Unknown codes are logged and fall back to English
//! assert_eq!(resolve_language("xx"), LanguageTag::En);
//! ```

mod language;
mod registry;

pub use language::{resolve_language, LanguageError, LanguageSelector, LanguageTag};
pub use registry::{GreetingEntry, GreetingTable};
