//! Theorem numbering stage.

use crate::convert::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};
use crate::convert::theorems::rewrite_theorems;

/// Stage that numbers theorem/lemma blocks and resolves `\ref`
/// directives pointing at their labels.
pub struct TheoremStage;

impl Stage for TheoremStage {
    fn name(&self) -> &'static str {
        "theorems"
    }

    fn process(
        &self,
        docs: &mut [ProcessingDocument],
        _ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        for doc in docs {
            let rewritten = rewrite_theorems(&doc.content);
            doc.record_unresolved(&rewritten);
            doc.content = rewritten.text;
            doc.theorem_labels = rewritten.labels;
        }

        Ok(())
    }
}
