//! List conversion stage.

use crate::convert::lists::rewrite_lists;
use crate::convert::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};

pub struct ListStage;

impl Stage for ListStage {
    fn name(&self) -> &'static str {
        "lists"
    }

    fn process(
        &self,
        docs: &mut [ProcessingDocument],
        _ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        for doc in docs {
            doc.content = rewrite_lists(&doc.content);
        }

        Ok(())
    }
}
