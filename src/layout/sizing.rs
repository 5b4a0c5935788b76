use super::*;

/// Largest per-unit width and largest height among `block`'s immediate children.
/// Unsized children count as zero.
///
/// A child spanning `w` units loses the `padding * (w - 1)` of inner gaps before
/// the split, so a re-stamped child reports exactly the cell it was given.
pub fn get_max_child_size(block: &Block, padding: f32) -> CellSize {
    let mut max = CellSize::default();
    for child in &block.children {
        let size = child.size.unwrap_or_default();
        let units = child.width_units() as f32;
        let unit_width = (size.width - padding * (units - 1.0)) / units;
        max.width = max.width.max(unit_width);
        max.height = max.height.max(size.height);
    }
    max
}

fn restamp_children(block: &mut Block, cell: CellSize, padding: f32) {
    for child in &mut block.children {
        let units = child.width_units() as f32;
        if let Some(size) = child.size.as_mut() {
            *size = BlockSize::new(cell.width * units + padding * (units - 1.0), cell.height);
        }
    }
}

/// Sizes `block` and its whole subtree, leaves first.
///
/// `sibling` is the cell size the parent already settled on for this block's row;
/// a block whose own grid comes out narrower grows to it and spreads the extra
/// room evenly over its children. A width set on the block before layout is
/// honoured the same way and is applied last, so it wins when both apply.
/// Leaves keep whatever size they came with.
pub fn set_block_sizes(block: &mut Block, config: &LayoutConfig, sibling: CellSize) {
    if block.children.is_empty() {
        return;
    }
    let padding = config.padding;
    debug!(
        target: "block_layout",
        "sizing {} (preset width {:?}, sibling width {})",
        block.id,
        block.size.map(|size| size.width),
        sibling.width
    );

    for child in &mut block.children {
        set_block_sizes(child, config, CellSize::default());
    }

    let cell = get_max_child_size(block, padding);
    trace!(
        target: "block_layout",
        "cell of {} children: {} x {}",
        block.id,
        cell.width,
        cell.height
    );
    restamp_children(block, cell, padding);

    for child in &mut block.children {
        set_block_sizes(child, config, cell);
    }

    let columns = block.column_setting();
    let num_items = block.children.len() as f32;
    let x_size = if columns > 0.0 && columns < num_items {
        columns
    } else {
        num_items
    };
    let y_size = (num_items / x_size).ceil();

    let mut width = x_size * (cell.width + padding) + padding;
    let mut height = y_size * (cell.height + padding) + padding;

    if width < sibling.width {
        debug!(
            target: "block_layout",
            "{} is narrower than its siblings ({width} < {}), growing",
            block.id,
            sibling.width
        );
        width = sibling.width;
        height = sibling.height;
        let child_width = (sibling.width - x_size * padding - padding) / x_size;
        let child_height = (sibling.height - y_size * padding - padding) / y_size;
        for child in &mut block.children {
            if let Some(size) = child.size.as_mut() {
                *size = BlockSize::new(child_width, child_height);
            }
        }
    }

    let preset_width = block.size.map_or(0.0, |size| size.width);
    if width < preset_width {
        debug!(
            target: "block_layout",
            "{} keeps its preset width {preset_width} over {width}",
            block.id
        );
        width = preset_width;
        let child_width = (width - num_items * padding - padding) / num_items;
        for child in &mut block.children {
            if let Some(size) = child.size.as_mut() {
                size.width = child_width;
            }
        }
    }

    debug!(
        target: "block_layout",
        "sized {}: {x_size} x {y_size} cells => {width} x {height}",
        block.id
    );
    block.size = Some(BlockSize::new(width, height));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: &str) -> Block {
        Block::new(id).with_size(50.0, 30.0)
    }

    fn size_of(block: &Block) -> BlockSize {
        block.size.unwrap()
    }

    #[test]
    fn max_child_size_divides_by_width_units() {
        let block = Block::new("p").with_children(vec![
            Block::new("a").with_size(40.0, 20.0),
            Block::new("b").with_size(108.0, 10.0).with_width_units(2),
            Block::new("c"),
        ]);
        assert_eq!(
            get_max_child_size(&block, 8.0),
            CellSize {
                width: 50.0,
                height: 20.0
            }
        );
    }

    #[test]
    fn leaves_are_untouched() {
        let mut bare = Block::new("a");
        set_block_sizes(&mut bare, &LayoutConfig::default(), CellSize::default());
        assert!(bare.size.is_none());

        let mut sized = leaf("b");
        set_block_sizes(&mut sized, &LayoutConfig::default(), CellSize::default());
        assert_eq!(size_of(&sized), BlockSize::new(50.0, 30.0));
    }

    #[test]
    fn wrapping_grid_uses_column_count() {
        let children = (0..5).map(|i| leaf(&format!("c{i}"))).collect();
        let mut block = Block::new("p").with_columns(2).with_children(children);
        set_block_sizes(&mut block, &LayoutConfig::default(), CellSize::default());
        // 2 columns, 3 rows
        assert_eq!(size_of(&block).width, 2.0 * (50.0 + 8.0) + 8.0);
        assert_eq!(size_of(&block).height, 3.0 * (30.0 + 8.0) + 8.0);
    }

    #[test]
    fn column_count_not_below_child_count_falls_back_to_one_row() {
        let children = (0..3).map(|i| leaf(&format!("c{i}"))).collect();
        let mut block = Block::new("p").with_columns(5).with_children(children);
        set_block_sizes(&mut block, &LayoutConfig::default(), CellSize::default());
        assert_eq!(size_of(&block), BlockSize::new(3.0 * 58.0 + 8.0, 46.0));
    }

    #[test]
    fn children_are_normalized_to_one_cell() {
        let mut block = Block::new("p").with_children(vec![
            Block::new("a").with_size(20.0, 40.0),
            Block::new("b").with_size(60.0, 10.0),
            Block::new("c").with_size(30.0, 30.0).with_width_units(2),
        ]);
        set_block_sizes(&mut block, &LayoutConfig::default(), CellSize::default());
        assert_eq!(size_of(&block.children[0]), BlockSize::new(60.0, 40.0));
        assert_eq!(size_of(&block.children[1]), BlockSize::new(60.0, 40.0));
        assert_eq!(size_of(&block.children[2]), BlockSize::new(128.0, 40.0));
    }

    #[test]
    fn grows_to_sibling_cell() {
        let mut block = Block::new("p").with_children(vec![leaf("a"), leaf("b")]);
        let sibling = CellSize {
            width: 200.0,
            height: 60.0,
        };
        set_block_sizes(&mut block, &LayoutConfig::default(), sibling);
        assert_eq!(size_of(&block), BlockSize::new(200.0, 60.0));
        for child in &block.children {
            // (200 - 2 * 8 - 8) / 2 and (60 - 8 - 8) / 1
            assert_eq!(size_of(child), BlockSize::new(88.0, 44.0));
        }
    }

    #[test]
    fn narrower_sibling_cell_is_ignored() {
        let mut block = Block::new("p").with_children(vec![leaf("a"), leaf("b")]);
        let sibling = CellSize {
            width: 100.0,
            height: 100.0,
        };
        set_block_sizes(&mut block, &LayoutConfig::default(), sibling);
        assert_eq!(size_of(&block), BlockSize::new(124.0, 46.0));
    }

    #[test]
    fn preset_width_widens_children() {
        let mut block = Block::new("p")
            .with_size(300.0, 0.0)
            .with_children(vec![leaf("a"), leaf("b")]);
        set_block_sizes(&mut block, &LayoutConfig::default(), CellSize::default());
        assert_eq!(size_of(&block), BlockSize::new(300.0, 46.0));
        for child in &block.children {
            assert_eq!(size_of(child).width, (300.0 - 16.0 - 8.0) / 2.0);
            assert_eq!(size_of(child).height, 30.0);
        }
    }

    #[test]
    fn preset_width_applies_after_sibling_growth() {
        let mut block = Block::new("p")
            .with_size(300.0, 0.0)
            .with_children(vec![leaf("a"), leaf("b")]);
        let sibling = CellSize {
            width: 200.0,
            height: 60.0,
        };
        set_block_sizes(&mut block, &LayoutConfig::default(), sibling);
        assert_eq!(size_of(&block), BlockSize::new(300.0, 60.0));
        for child in &block.children {
            assert_eq!(size_of(child), BlockSize::new(138.0, 44.0));
        }
    }

    #[test]
    fn nested_leaf_grows_to_cousin_container() {
        let mut root = Block::new(ROOT_ID).with_children(vec![
            Block::new("group").with_children(vec![leaf("a"), leaf("b")]),
            leaf("c"),
        ]);
        set_block_sizes(&mut root, &LayoutConfig::default(), CellSize::default());
        let group = size_of(&root.children[0]);
        assert_eq!(group, BlockSize::new(124.0, 46.0));
        assert_eq!(size_of(&root.children[1]), group);
        assert_eq!(size_of(&root), BlockSize::new(2.0 * 132.0 + 8.0, 62.0));
    }

    #[test]
    fn sizing_twice_is_stable() {
        let mut root = Block::new(ROOT_ID).with_children(vec![
            Block::new("group")
                .with_columns(2)
                .with_children((0..3).map(|i| leaf(&format!("g{i}"))).collect()),
            leaf("c"),
        ]);
        let config = LayoutConfig::default();
        set_block_sizes(&mut root, &config, CellSize::default());
        let first = root.clone();
        set_block_sizes(&mut root, &config, CellSize::default());
        let mut before = Vec::new();
        first.walk(&mut |block, _| before.push((block.id.clone(), block.size)));
        let mut after = Vec::new();
        root.walk(&mut |block, _| after.push((block.id.clone(), block.size)));
        assert_eq!(before, after);
    }

    #[test]
    fn sizing_twice_is_stable_with_wide_children() {
        let mut root = Block::new(ROOT_ID).with_children(vec![
            leaf("a"),
            leaf("wide").with_width_units(2),
            Block::new("group")
                .with_columns(3)
                .with_children(vec![leaf("g0"), leaf("g1").with_width_units(3), leaf("g2")]),
        ]);
        let config = LayoutConfig::default();
        set_block_sizes(&mut root, &config, CellSize::default());
        let first = root.clone();
        for _ in 0..2 {
            set_block_sizes(&mut root, &config, CellSize::default());
            assert_eq!(root, first);
        }
        assert_eq!(size_of(&root.children[1]).width, 2.0 * size_of(&root.children[0]).width + 8.0);
    }
}
