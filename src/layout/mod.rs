mod bounds;
mod error;
mod grid;
mod position;
mod sizing;
mod text;
pub(crate) mod types;
pub use bounds::find_bounds;
pub use error::{LayoutError, LayoutResult};
pub use grid::calculate_block_position;
pub use position::layout_blocks;
pub use sizing::{get_max_child_size, set_block_sizes};
pub use text::{TextBlock, measure_label, measure_leaf_blocks};
pub use types::*;

use crate::config::LayoutConfig;
use crate::ir::{Block, BlockDb, BlockSize, ROOT_ID};
use log::{debug, trace};

/// Lays out the tree under the `root` block of `db`.
///
/// Returns `Ok(None)` when there is no root block. On error the tree may be
/// left half normalized.
pub fn layout(db: &mut BlockDb, config: &LayoutConfig) -> LayoutResult<Option<Bounds>> {
    let Some(root) = db.get_block_mut(ROOT_ID) else {
        debug!(target: "block_layout", "no root block, nothing to lay out");
        return Ok(None);
    };
    layout_tree(root, config).map(Some)
}

/// Sizes every block bottom-up, then places them top-down, then measures the result.
/// Each pass covers the whole tree before the next one starts.
pub fn layout_tree(root: &mut Block, config: &LayoutConfig) -> LayoutResult<Bounds> {
    set_block_sizes(root, config, CellSize::default());
    layout_blocks(root, config)?;
    let bounds = find_bounds(root);
    debug!(
        target: "block_layout",
        "bounds of {}: ({}, {}) {} x {}",
        root.id,
        bounds.x,
        bounds.y,
        bounds.width,
        bounds.height
    );
    Ok(bounds)
}
