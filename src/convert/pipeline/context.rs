//! Pipeline context for sharing state across stages.

use crate::config::OutputConfig;

/// Shared context for pipeline stages.
pub struct PipelineContext<'a> {
    /// Output settings (marker line, extension, directory)
    pub output: &'a OutputConfig,

    /// Run every stage but skip writing files
    pub dry_run: bool,
}

impl<'a> PipelineContext<'a> {
    /// Create a new pipeline context.
    pub fn new(output: &'a OutputConfig, dry_run: bool) -> Self {
        Self { output, dry_run }
    }
}
