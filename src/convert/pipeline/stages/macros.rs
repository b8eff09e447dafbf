//! Macro expansion stage.

use crate::convert::macros::expand_macros;
use crate::convert::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};

/// Stage that expands `\newcommand` macros throughout the source.
///
/// Runs first so that directives produced by a macro are seen by every
/// later stage.
pub struct MacroStage;

impl Stage for MacroStage {
    fn name(&self) -> &'static str {
        "macros"
    }

    fn process(
        &self,
        docs: &mut [ProcessingDocument],
        _ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        for doc in docs {
            doc.content = expand_macros(&doc.content);
        }

        Ok(())
    }
}
