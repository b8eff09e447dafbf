//! Default pipeline stages.
//!
//! The standard document processing pipeline consists of:
//!
//! 1. **MacroStage** - Expand `\newcommand` macros
//! 2. **BodyStage** - Extract the document body and wrap paragraphs
//! 3. **SectionStage** - Number headings and resolve their references
//! 4. **TheoremStage** - Number theorems/lemmas and resolve their references
//! 5. **ListStage** - Convert itemize/enumerate lists
//! 6. **LinkStage** - Convert hyperlinks
//! 7. **FormatStage** - Break block markup onto separate lines
//! 8. **PageStage** - Prefix the marker line
//! 9. **WriteStage** - Write the output text next to its source

mod body;
mod format;
mod links;
mod lists;
mod macros;
mod page;
mod sections;
mod theorems;
mod write;

pub use body::BodyStage;
pub use format::FormatStage;
pub use links::LinkStage;
pub use lists::ListStage;
pub use macros::MacroStage;
pub use page::PageStage;
pub use sections::SectionStage;
pub use theorems::TheoremStage;
pub use write::WriteStage;
