pub mod builder;
pub mod parse;

pub use builder::{build_toc, TocBuildResult};
pub use parse::parse_toc;
