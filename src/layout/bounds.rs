use super::*;

/// Running extents of one bounds search. Starts at the origin, so the origin is always covered.
#[derive(Debug, Default)]
struct Extents {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Extents {
    fn visit(&mut self, block: &Block) {
        for child in &block.children {
            self.visit(child);
        }
        if block.id == ROOT_ID {
            return;
        }
        if let Some(size) = block.size {
            self.min_x = self.min_x.min(size.left());
            self.min_y = self.min_y.min(size.top());
            self.max_x = self.max_x.max(size.right());
            self.max_y = self.max_y.max(size.bottom());
        }
    }

    fn into_bounds(self) -> Bounds {
        Bounds {
            x: self.min_x,
            y: self.min_y,
            width: self.max_x - self.min_x,
            height: self.max_y - self.min_y,
        }
    }
}

/// Box covering every sized block under `block`, the root container excluded.
pub fn find_bounds(block: &Block) -> Bounds {
    let mut extents = Extents::default();
    extents.visit(block);
    extents.into_bounds()
}
