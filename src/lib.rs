#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod text_metrics;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, LayoutConfig, load_config};
pub use ir::{Block, BlockDb, BlockSize, ROOT_ID};
pub use layout::{Bounds, LayoutError, layout, layout_tree, measure_leaf_blocks};
pub use layout_dump::LayoutDump;
