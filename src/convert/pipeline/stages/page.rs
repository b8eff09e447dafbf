//! Page assembly stage.

use crate::convert::format::with_marker;
use crate::convert::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};

/// Stage that prefixes the configured marker line to the converted body.
///
/// After this stage, `doc.output_text` contains the complete output.
pub struct PageStage;

impl Stage for PageStage {
    fn name(&self) -> &'static str {
        "page"
    }

    fn process(
        &self,
        docs: &mut [ProcessingDocument],
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        for doc in docs {
            doc.output_text = Some(with_marker(&ctx.output.marker, &doc.content));
        }

        Ok(())
    }
}
