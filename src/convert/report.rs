//! Per-document conversion summary.

use std::path::PathBuf;

use serde::Serialize;

use super::labels::LabelTable;
use super::pipeline::ProcessingDocument;

/// What happened to one document, serialized by `convert --report`.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub source: PathBuf,
    pub output: PathBuf,
    pub written: bool,
    /// Every bound label (as written in the source) and its number
    pub labels: LabelTable,
    /// Labels of `\ref` directives that nothing resolved
    pub unresolved_references: Vec<String>,
}

impl DocumentReport {
    /// Summarise a document after the pipeline has run.
    pub fn from_document(doc: &ProcessingDocument) -> Self {
        Self {
            source: doc.source_path.clone(),
            output: doc.output_path.clone(),
            written: doc.written,
            labels: doc.labels(),
            unresolved_references: doc.unresolved_references.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes() {
        let mut doc = ProcessingDocument::new(
            PathBuf::from("paper.tex"),
            PathBuf::from("paper.txt"),
            "",
        );
        doc.unresolved_references = Some(vec!["section:gone".to_string()]);
        doc.section_labels
            .insert("section:intro".to_string(), "1".to_string());
        doc.theorem_labels
            .insert("lemma:key".to_string(), "2".to_string());

        let report = DocumentReport::from_document(&doc);
        assert_eq!(report.unresolved_references, vec!["section:gone".to_string()]);
        assert_eq!(report.labels.len(), 2);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["source"], "paper.tex");
        assert_eq!(json["written"], false);
        assert_eq!(json["labels"]["lemma:key"], "2");
    }
}
