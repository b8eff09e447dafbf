//! Itemize and enumerate environments.
//!
//! Every directive is rewritten on its own, without tracking nesting, so
//! nested lists come out nested and unbalanced input comes out unbalanced.

use once_cell::sync::Lazy;
use regex::Regex;

use super::tokens::TokenStream;

static LIST_DIRECTIVES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\\begin\{(?P<begin>itemize|enumerate)\}|\\end\{(?P<end>itemize|enumerate)\}|(?P<item>\\item)",
    )
    .expect("list pattern is valid")
});

fn list_tag(environment: &str) -> &'static str {
    match environment {
        "enumerate" => "ol",
        _ => "ul",
    }
}

/// Rewrite list environments to `<ul>`/`<ol>` and each `\item` to `<li>`.
///
/// An item's content is the text up to the next list directive.
pub fn rewrite_lists(body: &str) -> String {
    let stream = TokenStream::split(&LIST_DIRECTIVES, body);
    let mut out = String::with_capacity(body.len());
    out.push_str(stream.leading());

    for (_, tag, text) in stream.segments() {
        if tag.name("item").is_some() {
            out.push_str("<li>");
            out.push_str(text);
            out.push_str("</li>");
            continue;
        }

        if let Some(environment) = tag.name("begin") {
            out.push('<');
            out.push_str(list_tag(environment.as_str()));
            out.push('>');
        } else if let Some(environment) = tag.name("end") {
            out.push_str("</");
            out.push_str(list_tag(environment.as_str()));
            out.push('>');
        }
        out.push_str(text);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_itemize() {
        assert_eq!(
            rewrite_lists("\\begin{itemize}\\item one \\item two\\end{itemize}"),
            "<ul><li> one </li><li> two</li></ul>"
        );
    }

    #[test]
    fn test_nested_lists() {
        assert_eq!(
            rewrite_lists(
                "\\begin{itemize} \\begin{enumerate}\\item A\\item B\\end{enumerate} \\end{itemize}"
            ),
            "<ul> <ol><li> A</li><li> B</li></ol> </ul>"
        );
    }

    #[test]
    fn test_item_outside_list() {
        assert_eq!(rewrite_lists("lead \\item stray"), "lead <li> stray</li>");
    }

    #[test]
    fn test_unbalanced_input_passes_through() {
        assert_eq!(
            rewrite_lists("\\end{enumerate}tail\\begin{itemize}"),
            "</ol>tail<ul>"
        );
    }

    #[test]
    fn test_no_directives() {
        assert_eq!(rewrite_lists("<p>plain</p>"), "<p>plain</p>");
    }
}
