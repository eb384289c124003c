//! Compiled string patterns used by the schemas.

use std::sync::LazyLock;

use regex::Regex;

/// Feature ids: no leading or trailing whitespace.
pub static ID: LazyLock<Regex> = LazyLock::new(|| compile(r"^(\S.*)?\S$"));

/// Wikidata item ids, e.g. `Q123`.
pub static WIKIDATA: LazyLock<Regex> = LazyLock::new(|| compile(r"^Q\d+"));

/// ISO 3166-1 alpha-2 country codes.
pub static COUNTRY: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Z]{2}$"));

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(error) => unreachable!("static pattern {pattern} failed to compile: {error}"),
    }
}
