pub mod report_render;
pub mod toc_render;

pub use report_render::render_report;
pub use toc_render::render_toc;
