//! Numbered section and subsection headings.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::labels::{self, Directive, INDEX_SEPARATOR, Numbering, Rewritten};

static SECTION_DIRECTIVES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\\section\{(?P<section>.*?)\}|\\subsection\{(?P<subsection>.*?)\}|\\label\{(?P<label>section:.*?)\}",
    )
    .expect("section pattern is valid")
});

/// Section counters for a single document.
struct SectionNumbering {
    /// Number the next section will take.
    section: u32,
    /// Number the next subsection will take.
    subsection: u32,
}

impl SectionNumbering {
    fn new() -> Self {
        Self {
            section: 1,
            subsection: 1,
        }
    }
}

impl Numbering for SectionNumbering {
    fn pattern(&self) -> &Regex {
        &SECTION_DIRECTIVES
    }

    fn namespaces(&self) -> &[&'static str] {
        &["section"]
    }

    fn classify<'t>(&self, tag: &Captures<'t>) -> Directive<'t> {
        if let Some(label) = tag.name("label") {
            Directive::label(label.as_str())
        } else if let Some(title) = tag.name("subsection") {
            Directive::Open {
                kind: "subsection",
                title: title.as_str(),
            }
        } else {
            Directive::Open {
                kind: "section",
                title: tag.name("section").map_or("", |t| t.as_str()),
            }
        }
    }

    fn label_namespace(&self, _kind: &str) -> &'static str {
        "section"
    }

    fn next_index(&mut self, kind: &str) -> String {
        if kind == "section" {
            let index = self.section.to_string();
            self.section += 1;
            self.subsection = 1;
            index
        } else {
            let index = format!("{}.{}", self.section, self.subsection);
            self.subsection += 1;
            index
        }
    }

    fn render_open(&self, kind: &str, title: &str, index: &str, anchor: Option<&str>) -> String {
        let tag = if kind == "section" { "h2" } else { "h3" };
        let id = anchor.map(|id| format!(" id=\"{id}\"")).unwrap_or_default();
        format!("\n<{tag}{id}>{index}{INDEX_SEPARATOR}{title}</{tag}>\n")
    }

    fn render_close(&self, _kind: &str) -> String {
        String::new()
    }
}

/// Rewrite `\section`/`\subsection` headings and resolve references to them.
pub fn rewrite_sections(body: &str) -> Rewritten {
    labels::rewrite(body, SectionNumbering::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sections_numbered_in_order() {
        let out = rewrite_sections("\\section{A}x\\section{B}y\\section{C}");
        assert_eq!(
            out.text,
            "\n<h2>1&nbsp;&nbsp;&nbsp;A</h2>\nx\n<h2>2&nbsp;&nbsp;&nbsp;B</h2>\ny\n<h2>3&nbsp;&nbsp;&nbsp;C</h2>\n"
        );
        assert!(out.labels.is_empty());
    }

    #[test]
    fn test_subsections_restart_under_each_section() {
        let out = rewrite_sections(
            "\\section{A}\\subsection{A1}\\subsection{A2}\\section{B}\\subsection{B1}",
        );
        assert!(out.text.contains("<h2>1&nbsp;&nbsp;&nbsp;A</h2>"));
        assert!(out.text.contains("<h3>2.1&nbsp;&nbsp;&nbsp;A1</h3>"));
        assert!(out.text.contains("<h3>2.2&nbsp;&nbsp;&nbsp;A2</h3>"));
        assert!(out.text.contains("<h2>2&nbsp;&nbsp;&nbsp;B</h2>"));
        assert!(out.text.contains("<h3>3.1&nbsp;&nbsp;&nbsp;B1</h3>"));
    }

    #[test]
    fn test_subsection_before_any_section() {
        let out = rewrite_sections("\\subsection{Preface}");
        assert_eq!(out.text, "\n<h3>1.1&nbsp;&nbsp;&nbsp;Preface</h3>\n");
    }

    #[test]
    fn test_labelled_section_gets_anchor_and_reference() {
        let out = rewrite_sections(
            "\\section{Intro}\\label{section:intro} text \\section{Next} see \\ref{section:intro}",
        );
        assert_eq!(
            out.text,
            "\n<h2 id=\"section_intro\">1&nbsp;&nbsp;&nbsp;Intro</h2>\n text \
             \n<h2>2&nbsp;&nbsp;&nbsp;Next</h2>\n see <a href=\"#section_intro\">1</a>"
        );
        assert_eq!(out.labels.get("section:intro").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_labelled_subsection_reference_is_dotted() {
        let out = rewrite_sections(
            "\\section{A}\\subsection{B}\\label{section:b}\\ref{section:b}",
        );
        assert!(out.text.contains("<h3 id=\"section_b\">2.1&nbsp;&nbsp;&nbsp;B</h3>"));
        assert!(out.text.ends_with("<a href=\"#section_b\">2.1</a>"));
    }

    #[test]
    fn test_subsection_reads_counter_after_section() {
        let out = rewrite_sections("\\section{A}\\subsection{A1}");
        assert_eq!(
            out.text,
            "\n<h2>1&nbsp;&nbsp;&nbsp;A</h2>\n\n<h3>2.1&nbsp;&nbsp;&nbsp;A1</h3>\n"
        );
    }

    #[test]
    fn test_unknown_reference_left_untouched() {
        let out = rewrite_sections("\\section{A} see \\ref{missing}");
        assert!(out.text.ends_with(" see \\ref{missing}"));
    }

    #[test]
    fn test_theorem_labels_are_not_section_tags() {
        let out = rewrite_sections("\\section{A}\\label{theorem:t} \\ref{theorem:t}");
        assert_eq!(
            out.text,
            "\n<h2>1&nbsp;&nbsp;&nbsp;A</h2>\n\\label{theorem:t} \\ref{theorem:t}"
        );
    }

    #[test]
    fn test_stray_namespace_prefix_rewritten() {
        let out = rewrite_sections("prose mentioning section:foo");
        assert_eq!(out.text, "prose mentioning section_foo");
    }
}
