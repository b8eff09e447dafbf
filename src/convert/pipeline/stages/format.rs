//! Readability formatting stage.

use crate::convert::format::layout;
use crate::convert::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};

/// Stage that puts paragraphs, lists and list items on their own lines.
///
/// Only whitespace changes; leave it out of the pipeline for single-line
/// output.
pub struct FormatStage;

impl Stage for FormatStage {
    fn name(&self) -> &'static str {
        "format"
    }

    fn process(
        &self,
        docs: &mut [ProcessingDocument],
        _ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        for doc in docs {
            doc.content = layout(&doc.content);
        }

        Ok(())
    }
}
