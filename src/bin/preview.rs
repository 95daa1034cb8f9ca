//! Preview binary - prints a greeting for a name in every (or selected) language
//!
//! Usage:
//!   cargo run --bin preview                   # "World" in all eight languages
//!   cargo run --bin preview -- Ana            # Ana in all eight languages
//!   cargo run --bin preview -- Ana es it xx   # Ana in Spanish, Italian, and the English fallback
//!
//! Optional environment variables:
//! - RUST_LOG (log filter, defaults to polyglot_greeter=info)

use anyhow::Result;
use polyglot_greeter::{resolve_language, Greeter, LanguageTag};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("polyglot_greeter=info".parse()?),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "World".to_string());
    let codes: Vec<String> = args.collect();

    let languages: Vec<LanguageTag> = if codes.is_empty() {
        LanguageTag::ALL.to_vec()
    } else {
        codes.iter().map(resolve_language).collect()
    };

    info!("Previewing {} greeting(s) for {}", languages.len(), name);

    for language in languages {
        let greeter = Greeter::with_language(name.as_str(), language);
        println!("{} {}: {}", language.code(), language.name(), greeter);
    }

    Ok(())
}
