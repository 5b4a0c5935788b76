use super::*;

/// Left edge rows of `block`'s grid start from.
///
/// Blocks still sitting at the origin (the root, or anything positioned at
/// `x == 0`) start one padding to the left of it.
fn row_start(block: &Block, padding: f32) -> f32 {
    match block.size {
        Some(size) if size.x != 0.0 => size.left(),
        _ => -padding,
    }
}

/// Largest width-unit counter an `f32` grid slot still represents exactly.
const MAX_GRID_SLOT: u32 = 1 << f32::MANTISSA_DIGITS;

fn grid_slot(column_pos: u32) -> LayoutResult<f32> {
    if column_pos > MAX_GRID_SLOT {
        return Err(LayoutError::InvalidArgument(format!(
            "grid slot {column_pos} exceeds the {MAX_GRID_SLOT} slots a row can address"
        )));
    }
    Ok(column_pos as f32)
}

/// Assigns centers to every descendant of `block`, parents before children.
/// Expects the whole tree to be sized already.
pub fn layout_blocks(block: &mut Block, config: &LayoutConfig) -> LayoutResult<()> {
    if block.children.is_empty() {
        return Ok(());
    }
    let padding = config.padding;
    let columns = block.column_setting();
    let parent = block.size;
    let row_left = row_start(block, padding);

    let mut starting_pos_x = row_left;
    let mut column_pos = 0u32;
    let mut row_pos = 0usize;

    for child in &mut block.children {
        let units = child.width_units();
        let Some(size) = child.size.as_mut() else {
            continue;
        };
        let BlockPosition { px, py } = calculate_block_position(columns, grid_slot(column_pos)?)?;
        if py != row_pos {
            row_pos = py;
            starting_pos_x = row_left;
        }

        if let Some(parent) = parent {
            let half_width = size.width / 2.0;
            size.x = starting_pos_x + padding + half_width;
            starting_pos_x = size.x + half_width;
            size.y = parent.top()
                + py as f32 * (size.height + padding)
                + size.height / 2.0
                + padding;
            trace!(
                target: "block_layout",
                "placed {} at cell ({px}, {py}) => center ({}, {})",
                child.id,
                size.x,
                size.y
            );
        }

        layout_blocks(child, config)?;
        column_pos = column_pos.saturating_add(units);
    }
    Ok(())
}
