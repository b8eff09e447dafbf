//! Cosmetic line breaking of the converted markup.
//!
//! Purely literal replacements applied in order; the markup itself is not
//! changed. Running the layout twice adds breaks twice.

/// Replacement rules, applied in this order.
const LAYOUT_RULES: &[(&str, &str)] = &[
    ("</p><p>", "</p>\n\n<p>"),
    ("<ul>", "\n<ul>"),
    ("<ol>", "\n<ol>"),
    ("</ol>", "\n</ol>\n"),
    ("</ul>", "\n</ul>\n"),
    ("<li>", "\n<li>"),
];

/// Break paragraphs and lists onto their own lines.
pub fn layout(body: &str) -> String {
    LAYOUT_RULES
        .iter()
        .fold(body.to_string(), |text, (from, to)| text.replace(from, to))
}

/// Prefix the marker line that identifies converted output.
pub fn with_marker(marker: &str, body: &str) -> String {
    format!("{marker}\n{body}")
}
