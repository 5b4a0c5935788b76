use super::*;

fn is_integer(value: f32) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Maps the `position`-th width unit of a parent with `columns` columns to its grid cell.
pub fn calculate_block_position(columns: f32, position: f32) -> LayoutResult<BlockPosition> {
    if columns == 0.0 || !is_integer(columns) {
        return Err(LayoutError::InvalidArgument(format!(
            "columns must be a non-zero integer, got {columns}"
        )));
    }
    if position < 0.0 || !is_integer(position) {
        return Err(LayoutError::InvalidArgument(format!(
            "position must be a non-negative integer, got {position}"
        )));
    }

    let position = position as usize;
    if columns < 0.0 {
        return Ok(BlockPosition { px: position, py: 0 });
    }
    let columns = columns as usize;
    if columns == 1 {
        return Ok(BlockPosition { px: 0, py: position });
    }
    let px = position % columns;
    let py = position / columns;
    trace!(target: "block_layout", "grid position {position} in {columns} columns => ({px}, {py})");
    Ok(BlockPosition { px, py })
}
