use serde::Serialize;

/// Zero-based column/row of a child inside its parent's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPosition {
    pub px: usize,
    pub py: usize,
}

/// Per-unit cell size shared by all children of one block.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CellSize {
    pub width: f32,
    pub height: f32,
}

/// Axis-aligned box covering every positioned block; `x`/`y` are the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}
