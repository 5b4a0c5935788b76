use crate::ir::Block;
use crate::layout::Bounds;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub bounds: Option<Bounds>,
    pub blocks: Vec<BlockDump>,
}

#[derive(Debug, Serialize)]
pub struct BlockDump {
    pub id: String,
    pub label: Option<String>,
    pub parent: Option<String>,
    pub depth: usize,
    pub columns: Option<f32>,
    pub w: u32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl LayoutDump {
    /// Flattens the sized blocks of `root` in pre-order. Unsized blocks are left out.
    pub fn from_tree(root: Option<&Block>, bounds: Option<Bounds>) -> Self {
        let mut blocks = Vec::new();
        if let Some(root) = root {
            collect(root, None, 0, &mut blocks);
        }
        LayoutDump { bounds, blocks }
    }
}

fn collect(block: &Block, parent: Option<&str>, depth: usize, out: &mut Vec<BlockDump>) {
    if let Some(size) = block.size {
        out.push(BlockDump {
            id: block.id.clone(),
            label: block.label.clone(),
            parent: parent.map(str::to_string),
            depth,
            columns: block.columns,
            w: block.w,
            x: size.x,
            y: size.y,
            width: size.width,
            height: size.height,
        });
    }
    for child in &block.children {
        collect(child, Some(&block.id), depth + 1, out);
    }
}

/// Writes the dump as pretty JSON to `path`, or to stdout when no path is given.
pub fn write_layout_dump(path: Option<&Path>, dump: &LayoutDump) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(&mut writer, dump)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, dump)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
