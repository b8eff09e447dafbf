//! Document types for pipeline processing.

use std::path::{Path, PathBuf};

use crate::convert::labels::{LabelTable, Rewritten};

/// A document being processed through the pipeline.
///
/// The content evolves through the stages:
///
/// 1. Initially: `content` = LaTeX source
/// 2. After macros: source with macros expanded
/// 3. After body: single-line body with `<p>` paragraphs
/// 4. After sections/theorems/lists/links: converted markup
/// 5. After page: `output_text` = marker line + markup
#[derive(Debug)]
pub struct ProcessingDocument {
    /// Path the source was loaded from
    pub source_path: PathBuf,

    /// Path the converted text is written to
    pub output_path: PathBuf,

    /// Content being processed.
    pub content: String,

    /// Section labels bound by the sections stage.
    pub section_labels: LabelTable,

    /// Theorem and lemma labels bound by the theorems stage.
    pub theorem_labels: LabelTable,

    /// `\ref` labels no labelled stage could resolve, as written in the source.
    ///
    /// None until a labelled stage has run.
    pub unresolved_references: Option<Vec<String>>,

    /// Final output text after the page stage.
    ///
    /// None until the page stage populates it.
    pub output_text: Option<String>,

    /// Whether the write stage persisted `output_text`.
    pub written: bool,
}

impl ProcessingDocument {
    /// Create a new processing document from loaded source text.
    ///
    /// Line endings are normalised to `\n`.
    pub fn new(source_path: PathBuf, output_path: PathBuf, source: &str) -> Self {
        Self {
            source_path,
            output_path,
            content: source.replace("\r\n", "\n"),
            section_labels: LabelTable::new(),
            theorem_labels: LabelTable::new(),
            unresolved_references: None,
            output_text: None,
            written: false,
        }
    }

    /// Get the source path for messages.
    pub fn source(&self) -> &Path {
        &self.source_path
    }

    /// Record the outcome of a labelled rewrite.
    ///
    /// A reference stays unresolved only if every labelled stage so far
    /// left it alone.
    pub fn record_unresolved(&mut self, rewritten: &Rewritten) {
        match self.unresolved_references.as_mut() {
            Some(unresolved) => unresolved.retain(|label| !rewritten.labels.contains_key(label)),
            None => self.unresolved_references = Some(rewritten.unresolved.clone()),
        }
    }

    /// All labels bound in this document, sections first.
    pub fn labels(&self) -> LabelTable {
        self.section_labels
            .iter()
            .chain(&self.theorem_labels)
            .map(|(label, index)| (label.clone(), index.clone()))
            .collect()
    }
}
