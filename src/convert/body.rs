//! Document body extraction and paragraph segmentation.

use once_cell::sync::Lazy;
use regex::Regex;

static DOCUMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\\begin\{document\}(?P<body>.*)\\end\{document\}")
        .expect("document pattern is valid")
});

/// Front-matter directives that have no place in an embedded fragment.
static FRONT_MATTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?s)\\title\{.*?\}|\\date\{.*?\}|\\maketitle|\\bibliographystyle\{.*?\}|\\bibliography\{.*?\}",
    )
    .expect("front matter pattern is valid")
});

static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\n+").expect("paragraph pattern is valid"));

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum BodyError {
    #[error("no \\begin{{document}} ... \\end{{document}} block found")]
    MissingDocument,
}

/// Extract the document body and wrap its paragraphs in `<p>` tags.
///
/// The body runs from the first `\begin{document}` to the last
/// `\end{document}`. Blank-line separated chunks become paragraphs,
/// whitespace-only chunks are dropped, and remaining line breaks become
/// spaces, so the result is a single line.
pub fn extract_body(source: &str) -> Result<String, BodyError> {
    let body = DOCUMENT
        .captures(source)
        .and_then(|caps| caps.name("body"))
        .ok_or(BodyError::MissingDocument)?
        .as_str();

    let body = FRONT_MATTER.replace_all(body, "");

    let paragraphs: String = PARAGRAPH_BREAK
        .split(&body)
        .filter(|chunk| !chunk.trim().is_empty())
        .map(|chunk| format!("<p>{chunk}</p>"))
        .collect();

    Ok(paragraphs.replace('\n', " "))
}
