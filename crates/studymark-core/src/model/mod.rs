pub mod document;
pub mod section;
pub mod snippet;
pub mod toc;

pub use document::Document;
pub use section::{Section, SectionKind};
pub use snippet::SnippetBlock;
pub use toc::{Toc, TocEntry, TocPart};
