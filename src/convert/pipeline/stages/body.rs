//! Body extraction stage.

use crate::convert::body::extract_body;
use crate::convert::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};

/// Stage that reduces each document to its paragraph-wrapped body.
///
/// A document without `\begin{document}`/`\end{document}` fails the
/// whole run.
pub struct BodyStage;

impl Stage for BodyStage {
    fn name(&self) -> &'static str {
        "body"
    }

    fn process(
        &self,
        docs: &mut [ProcessingDocument],
        _ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        for doc in docs {
            doc.content = extract_body(&doc.content).map_err(|source| PipelineError::Body {
                path: doc.source_path.clone(),
                source,
            })?;
        }

        Ok(())
    }
}
