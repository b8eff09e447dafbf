//! Numbered theorem and lemma blocks.
//!
//! Theorems and lemmas draw from one shared counter, so a lemma between
//! two theorems takes the number in between.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::labels::{self, Directive, INDEX_SEPARATOR, Numbering, Rewritten};
use crate::util::capitalize;

static THEOREM_DIRECTIVES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\\begin\{(?P<open>theorem|lemma)\}|\\end\{(?P<close>theorem|lemma)\}|\\label\{(?P<label>(?:theorem|lemma):.*?)\}",
    )
    .expect("theorem pattern is valid")
});

struct TheoremNumbering {
    count: u32,
}

impl Numbering for TheoremNumbering {
    fn pattern(&self) -> &Regex {
        &THEOREM_DIRECTIVES
    }

    fn namespaces(&self) -> &[&'static str] {
        &["theorem", "lemma"]
    }

    fn classify<'t>(&self, tag: &Captures<'t>) -> Directive<'t> {
        if let Some(label) = tag.name("label") {
            Directive::label(label.as_str())
        } else if let Some(kind) = tag.name("open") {
            Directive::Open {
                kind: kind.as_str(),
                title: "",
            }
        } else {
            Directive::Close {
                kind: tag.name("close").map_or("", |k| k.as_str()),
            }
        }
    }

    fn label_namespace(&self, kind: &str) -> &'static str {
        if kind == "lemma" { "lemma" } else { "theorem" }
    }

    fn next_index(&mut self, _kind: &str) -> String {
        self.count += 1;
        self.count.to_string()
    }

    fn render_open(&self, kind: &str, _title: &str, index: &str, anchor: Option<&str>) -> String {
        let id = anchor.map(|id| format!(" id=\"{id}\"")).unwrap_or_default();
        format!(
            "<blockquote{id}><b>{} {index}{INDEX_SEPARATOR}</b>",
            capitalize(kind)
        )
    }

    fn render_close(&self, _kind: &str) -> String {
        "</blockquote>".to_string()
    }
}

/// Rewrite theorem/lemma environments and resolve references to them.
pub fn rewrite_theorems(body: &str) -> Rewritten {
    labels::rewrite(body, TheoremNumbering { count: 0 })
}
