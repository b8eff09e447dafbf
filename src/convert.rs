mod body;
mod format;
pub mod labels;
mod links;
mod lists;
mod macros;
pub mod paths;
pub mod pipeline;
mod report;
mod sections;
mod theorems;
mod tokens;

pub use paths::{base_path_from_config, output_path_for, resolve_against};
pub use pipeline::{Pipeline, PipelineContext, ProcessingDocument};
pub use report::DocumentReport;
