//! User-defined macro expansion.
//!
//! Definitions are discovered with `\newcommand{NAME}{VALUE}` and every
//! occurrence of NAME in the document, definitions included, is replaced
//! by VALUE. Matching is plain substring replacement with no scoping.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

static DEFINITION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\newcommand\{\S*\}").expect("newcommand pattern is valid"));

/// Macro name to replacement text.
pub type MacroTable = HashMap<String, String>;

/// Collect the macro definitions in `text`. Later definitions win.
pub fn collect_macros(text: &str) -> MacroTable {
    let mut table = MacroTable::new();

    for definition in DEFINITION.find_iter(text) {
        let block = definition.as_str();
        let inner = block
            .strip_prefix("\\newcommand{")
            .and_then(|b| b.strip_suffix('}'))
            .unwrap_or_default();

        let mut parts = inner.split("}{");
        match (parts.next(), parts.next()) {
            (Some(name), Some(value)) if !name.is_empty() => {
                table.insert(name.to_string(), value.to_string());
            }
            _ => tracing::debug!(definition = block, "skipping macro definition without a value"),
        }
    }

    table
}

/// Expand every macro defined in `text`.
pub fn expand_macros(text: &str) -> String {
    let table = collect_macros(text);

    // Longest names first, so `\RR` is not clobbered by a `\R` macro.
    let mut macros: Vec<(&String, &String)> = table.iter().collect();
    macros.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    macros
        .into_iter()
        .fold(text.to_string(), |text, (name, value)| text.replace(name.as_str(), value))
}
