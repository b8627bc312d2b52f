pub mod aggregate;
pub mod exec;
pub mod fetch;
pub mod grid;
pub mod output;
pub mod render;

pub use aggregate::{aggregate, BatchSummary, CommitAggregator};
pub use exec::exec;
pub use fetch::fetch_into;
pub use grid::build_grid;
pub use output::{output_heatmap, output_json, stats_output};
pub use render::{HeatmapRenderer, Intensity};
