use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Id of the synthetic container every block tree hangs off.
pub const ROOT_ID: &str = "root";

/// Occupied extent of a block. `x`/`y` are the block's center, not its top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockSize {
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
}

impl BlockSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            x: 0.0,
            y: 0.0,
        }
    }

    pub fn left(&self) -> f32 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn top(&self) -> f32 {
        self.y - self.height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
    /// `> 1` wrapping grid, `1` single column, negative or absent lays children out in one row.
    /// Kept as a plain number so malformed input surfaces as a layout error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<f32>,
    #[serde(default = "default_width_units")]
    pub w: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<BlockSize>,
}

fn default_width_units() -> u32 {
    1
}

impl Block {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            children: Vec::new(),
            columns: None,
            w: 1,
            size: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Block>) -> Self {
        self.children = children;
        self
    }

    pub fn with_columns(mut self, columns: i32) -> Self {
        self.columns = Some(columns as f32);
        self
    }

    pub fn with_width_units(mut self, w: u32) -> Self {
        self.w = w;
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = Some(BlockSize::new(width, height));
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Grid slots this block spans inside its parent. Zero is read as one.
    pub fn width_units(&self) -> u32 {
        self.w.max(1)
    }

    /// Column setting with "absent" folded into auto (`-1`).
    pub fn column_setting(&self) -> f32 {
        self.columns.unwrap_or(-1.0)
    }

    pub fn find(&self, id: &str) -> Option<&Block> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Block> {
        if self.id == id {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(id))
    }

    /// Pre-order walk over this block and every descendant.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Block, usize)) {
        self.walk_at(0, visit);
    }

    fn walk_at<'a>(&'a self, depth: usize, visit: &mut impl FnMut(&'a Block, usize)) {
        visit(self, depth);
        for child in &self.children {
            child.walk_at(depth + 1, visit);
        }
    }

    pub fn walk_mut(&mut self, visit: &mut impl FnMut(&mut Block)) {
        visit(self);
        for child in &mut self.children {
            child.walk_mut(visit);
        }
    }
}

/// Owns the block tree handed over by the diagram parser.
#[derive(Debug, Clone, Default)]
pub struct BlockDb {
    root: Option<Block>,
}

impl BlockDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(root: Block) -> Self {
        Self { root: Some(root) }
    }

    /// Loads a tree from JSON. Hand-written files may use JSON5 (comments, trailing commas).
    pub fn from_json(input: &str) -> Result<Self> {
        let root: Block = match serde_json::from_str(input) {
            Ok(root) => root,
            Err(strict_err) => json5::from_str(input).map_err(|lenient_err| {
                anyhow::anyhow!("invalid block tree: {strict_err} (json5: {lenient_err})")
            })?,
        };
        Ok(Self::with_root(root))
    }

    pub fn root(&self) -> Option<&Block> {
        self.root.as_ref()
    }

    pub fn get_block(&self, id: &str) -> Option<&Block> {
        self.root.as_ref()?.find(id)
    }

    pub fn get_block_mut(&mut self, id: &str) -> Option<&mut Block> {
        self.root.as_mut()?.find_mut(id)
    }
}
