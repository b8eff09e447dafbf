//! Numbered directives, label binding and cross-reference resolution.
//!
//! Sections and theorems share one algorithm, differing only in which
//! directives they recognise and how they number and render them:
//!
//! 1. Split the text on the directive pattern.
//! 2. Scan left to right. Each opening directive takes the next index and,
//!    if the next directive is a label in the matching namespace, binds
//!    that label to the index and renders with an anchor.
//! 3. Replace every `\ref{LABEL}` whose label was bound with a link.
//! 4. Rewrite `namespace:` to `namespace_` so anchors carry no colon.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::tokens::TokenStream;

/// Separator between a display number and the text after it.
pub const INDEX_SEPARATOR: &str = "&nbsp;&nbsp;&nbsp;";

/// Label (including its namespace prefix) to assigned display number.
pub type LabelTable = BTreeMap<String, String>;

static REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\ref\{(?P<label>.*?)\}").expect("reference pattern is valid"));

/// A directive recognised by a [`Numbering`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'t> {
    /// `\label{namespace:rest}`; consumed, never rendered.
    Label { namespace: &'t str, id: &'t str },
    /// Start of a numbered element, e.g. `\section{Title}` or `\begin{lemma}`.
    Open { kind: &'t str, title: &'t str },
    /// End of a numbered element, e.g. `\end{lemma}`.
    Close { kind: &'t str },
}

impl<'t> Directive<'t> {
    /// Build a label directive, splitting the namespace off `id`.
    pub fn label(id: &'t str) -> Self {
        let namespace = id.split_once(':').map_or(id, |(namespace, _)| namespace);
        Directive::Label { namespace, id }
    }
}

/// Numbering rules for one family of labelled directives.
///
/// A fresh value is built for every rewrite, so counters never leak
/// between documents.
pub trait Numbering {
    /// Pattern matching every directive this numbering understands.
    fn pattern(&self) -> &Regex;

    /// Label namespaces whose colon is rewritten in the final text.
    fn namespaces(&self) -> &[&'static str];

    /// Classify a matched directive.
    fn classify<'t>(&self, tag: &Captures<'t>) -> Directive<'t>;

    /// The namespace a label must have to bind to an opening `kind`.
    fn label_namespace(&self, kind: &str) -> &'static str;

    /// Advance the counters for an opening `kind` and return its index.
    fn next_index(&mut self, kind: &str) -> String;

    /// Markup for an opening directive.
    fn render_open(&self, kind: &str, title: &str, index: &str, anchor: Option<&str>) -> String;

    /// Markup for a closing directive.
    fn render_close(&self, kind: &str) -> String;
}

/// Output of a labelled rewrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rewritten {
    pub text: String,
    /// Labels bound during the scan, keyed as written in the source.
    pub labels: LabelTable,
    /// Labels of `\ref` directives left unresolved, as written in the source.
    pub unresolved: Vec<String>,
}

/// Run the scan, reference and namespace passes for `numbering` over `input`.
pub fn rewrite<N: Numbering>(input: &str, mut numbering: N) -> Rewritten {
    let stream = TokenStream::split(numbering.pattern(), input);
    let mut labels = LabelTable::new();
    let mut text = String::with_capacity(input.len());
    text.push_str(stream.leading());

    for (i, tag, following) in stream.segments() {
        match numbering.classify(tag) {
            Directive::Label { .. } => {}
            Directive::Open { kind, title } => {
                let index = numbering.next_index(kind);
                let namespace = numbering.label_namespace(kind);
                let anchor = stream
                    .tag(i + 1)
                    .and_then(|next| match numbering.classify(next) {
                        Directive::Label { namespace: ns, id } if ns == namespace => Some(id),
                        _ => None,
                    });

                if let Some(id) = anchor {
                    tracing::debug!(label = id, index = %index, "bound label");
                    labels.insert(id.to_string(), index.clone());
                }
                text.push_str(&numbering.render_open(kind, title, &index, anchor));
            }
            Directive::Close { kind } => text.push_str(&numbering.render_close(kind)),
        }
        text.push_str(following);
    }

    let text = resolve_references(&text, &labels);
    let unresolved = unresolved_references(&text);
    let text = numbering
        .namespaces()
        .iter()
        .fold(text, |text, namespace| {
            text.replace(&format!("{namespace}:"), &format!("{namespace}_"))
        });

    Rewritten {
        text,
        labels,
        unresolved,
    }
}

/// Replace each `\ref{LABEL}` found in `labels` with a link to its anchor.
///
/// References to unknown labels are left exactly as written.
pub fn resolve_references(text: &str, labels: &LabelTable) -> String {
    REFERENCE
        .replace_all(text, |caps: &Captures| {
            let label = &caps["label"];
            match labels.get(label) {
                Some(index) => format!("<a href=\"#{label}\">{index}</a>"),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Labels of every `\ref{…}` still present in `text`, in order of appearance.
pub fn unresolved_references(text: &str) -> Vec<String> {
    REFERENCE
        .captures_iter(text)
        .map(|caps| caps["label"].to_string())
        .collect()
}
