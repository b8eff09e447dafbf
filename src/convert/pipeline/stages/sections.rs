//! Section numbering stage.

use crate::convert::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};
use crate::convert::sections::rewrite_sections;

/// Stage that numbers `\section`/`\subsection` headings and resolves
/// `\ref` directives pointing at section labels.
pub struct SectionStage;

impl Stage for SectionStage {
    fn name(&self) -> &'static str {
        "sections"
    }

    fn process(
        &self,
        docs: &mut [ProcessingDocument],
        _ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        for doc in docs {
            let rewritten = rewrite_sections(&doc.content);
            doc.record_unresolved(&rewritten);
            doc.content = rewritten.text;
            doc.section_labels = rewritten.labels;
        }

        Ok(())
    }
}
