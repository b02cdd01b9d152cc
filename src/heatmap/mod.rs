mod build;
pub mod color;
mod highlight;

pub use build::build_heatmap;
pub use highlight::HighlightSpec;
