//! Conversion pipeline for LaTeX documents.
//!
//! The pipeline transforms documents through a series of stages:
//! 1. Macro expansion
//! 2. Body extraction (paragraphs)
//! 3. Sections, theorems, lists and links
//! 4. Formatting (optional line breaks)
//! 5. Page assembly (marker line)
//! 6. File writing
//!
//! Each stage runs over the whole batch before the next one starts, so a
//! fatal error in any document stops the run before anything is written.

mod context;
mod document;
mod error;
mod stages;

pub use context::PipelineContext;
pub use document::ProcessingDocument;
pub use error::PipelineError;

use stages::{
    BodyStage, FormatStage, LinkStage, ListStage, MacroStage, PageStage, SectionStage,
    TheoremStage, WriteStage,
};

/// A stage in the document processing pipeline.
///
/// Stages transform documents sequentially. Each stage receives all documents
/// and can modify them in place before passing to the next stage.
pub trait Stage: Send + Sync {
    /// Unique name for this stage (used for insertion points).
    fn name(&self) -> &'static str;

    /// Process documents through this stage.
    fn process(
        &self,
        docs: &mut [ProcessingDocument],
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError>;
}

/// The document processing pipeline.
///
/// The transform pipeline is: macros → body → sections → theorems → lists → links.
///
/// # Extension Points
///
/// Insert custom stages using `insert_after`:
///
/// ```ignore
/// pipeline.insert_after("links", MyCustomStage);
/// ```
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Create an empty pipeline with no stages.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Create the pipeline of pure text transformations.
    ///
    /// Stages: macros → body → sections → theorems → lists → links
    pub fn transform_pipeline() -> Self {
        let mut pipeline = Self::new();
        pipeline.add_stage(MacroStage);
        pipeline.add_stage(BodyStage);
        pipeline.add_stage(SectionStage);
        pipeline.add_stage(TheoremStage);
        pipeline.add_stage(ListStage);
        pipeline.add_stage(LinkStage);
        pipeline
    }

    /// Create the full conversion pipeline.
    ///
    /// Stages: transform → [format] → page → write
    pub fn for_options(pretty: bool) -> Self {
        let mut pipeline = Self::transform_pipeline();
        if pretty {
            pipeline.add_stage(FormatStage);
        }
        pipeline.add_stage(PageStage);
        pipeline.add_stage(WriteStage);
        pipeline
    }

    /// Add a stage to the end of the pipeline.
    pub fn add_stage<S: Stage + 'static>(&mut self, stage: S) -> &mut Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Insert a stage after the named stage.
    ///
    /// # Panics
    ///
    /// Panics if no stage with the given name exists.
    #[allow(dead_code)]
    pub fn insert_after<S: Stage + 'static>(&mut self, name: &str, stage: S) -> &mut Self {
        let pos = self
            .stages
            .iter()
            .position(|s| s.name() == name)
            .unwrap_or_else(|| panic!("stage '{}' not found in pipeline", name));
        self.stages.insert(pos + 1, Box::new(stage));
        self
    }

    /// Run the pipeline on a set of documents.
    pub fn run(
        &self,
        docs: &mut [ProcessingDocument],
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        for stage in &self.stages {
            tracing::debug!(stage = stage.name(), documents = docs.len(), "running stage");
            stage.process(docs, ctx)?;
        }

        Ok(())
    }

    /// Get the names of all stages in order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::for_options(true)
    }
}
