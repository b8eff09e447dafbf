//! Hyperlink conversion stage.

use crate::convert::links::rewrite_links;
use crate::convert::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};

pub struct LinkStage;

impl Stage for LinkStage {
    fn name(&self) -> &'static str {
        "links"
    }

    fn process(
        &self,
        docs: &mut [ProcessingDocument],
        _ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        for doc in docs {
            doc.content = rewrite_links(&doc.content);
        }

        Ok(())
    }
}
