//! File writing stage.
//!
//! Writes the final output text to the filesystem.

use crate::convert::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};

/// Stage that writes converted documents to their output paths.
///
/// A document that cannot be written is logged and left with
/// `written == false`; the remaining documents are still written.
pub struct WriteStage;

impl Stage for WriteStage {
    fn name(&self) -> &'static str {
        "write"
    }

    fn process(
        &self,
        docs: &mut [ProcessingDocument],
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        for doc in docs {
            let text = doc.output_text.as_ref().ok_or_else(|| {
                PipelineError::stage(
                    "write",
                    format!(
                        "document '{}' has no output text (was page stage run?)",
                        doc.source().display()
                    ),
                )
            })?;

            if ctx.dry_run {
                tracing::info!(path = %doc.output_path.display(), "dry run, not writing");
                continue;
            }

            // Create parent directories if needed
            if let Some(parent) = doc.output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    tracing::error!(path = %parent.display(), error = %e, "failed to create output directory");
                    continue;
                }
            }

            match std::fs::write(&doc.output_path, text) {
                Ok(()) => {
                    tracing::info!(path = %doc.output_path.display(), "wrote output");
                    doc.written = true;
                }
                Err(e) => {
                    tracing::error!(path = %doc.output_path.display(), error = %e, "failed to write output");
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;

    fn converted(dir: &std::path::Path, name: &str) -> ProcessingDocument {
        let mut doc = ProcessingDocument::new(dir.join("in.tex"), dir.join(name), "");
        doc.output_text = Some("[latexpage]\n<p>x</p>".to_string());
        doc
    }

    #[test]
    fn test_writes_output_text() {
        let dir = tempfile::tempdir().unwrap();
        let output = OutputConfig::default();
        let ctx = PipelineContext::new(&output, false);
        let mut docs = vec![converted(dir.path(), "nested/out.txt")];

        WriteStage.process(&mut docs, &ctx).unwrap();

        assert!(docs[0].written);
        let written = std::fs::read_to_string(dir.path().join("nested/out.txt")).unwrap();
        assert_eq!(written, "[latexpage]\n<p>x</p>");
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = OutputConfig::default();
        let ctx = PipelineContext::new(&output, true);
        let mut docs = vec![converted(dir.path(), "out.txt")];

        WriteStage.process(&mut docs, &ctx).unwrap();

        assert!(!docs[0].written);
        assert!(!dir.path().join("out.txt").exists());
    }

    #[test]
    fn test_write_failure_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        // A directory standing where the file should go makes the write fail.
        std::fs::create_dir(dir.path().join("blocked.txt")).unwrap();
        let output = OutputConfig::default();
        let ctx = PipelineContext::new(&output, false);
        let mut docs = vec![
            converted(dir.path(), "blocked.txt"),
            converted(dir.path(), "fine.txt"),
        ];

        WriteStage.process(&mut docs, &ctx).unwrap();

        assert!(!docs[0].written);
        assert!(docs[1].written);
    }

    #[test]
    fn test_missing_output_text_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = OutputConfig::default();
        let ctx = PipelineContext::new(&output, false);
        let mut docs = vec![ProcessingDocument::new(
            dir.path().join("in.tex"),
            dir.path().join("out.txt"),
            "",
        )];

        let err = WriteStage.process(&mut docs, &ctx).unwrap_err();
        assert!(err.to_string().contains("stage 'write' failed"));
    }
}
