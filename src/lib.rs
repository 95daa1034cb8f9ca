//! Greet someone by name in one of eight languages.
//!
//! ```rust
//! use polyglot_greeter::Greeter;
//!
//! assert_eq!(Greeter::with_language("Ana", "es").greet(), "Hola, Ana!");
//! assert_eq!(Greeter::new("Bob").greet(), "Hello, Bob!");
//! ```

pub mod greeter;
pub mod i18n;

#[cfg(test)]
mod test_utils;

pub use greeter::Greeter;
pub use i18n::{resolve_language, GreetingTable, LanguageError, LanguageSelector, LanguageTag};
