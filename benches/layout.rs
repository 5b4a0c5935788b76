use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mermaid_block_layout::config::LayoutConfig;
use mermaid_block_layout::ir::{Block, BlockDb, ROOT_ID};
use mermaid_block_layout::layout::layout;
use std::hint::black_box;

fn leaf(id: String) -> Block {
    Block::new(id).with_size(50.0, 30.0)
}

/// One root holding `count` leaves in a grid of `columns`.
fn wide_tree(count: usize, columns: i32) -> BlockDb {
    let children = (0..count).map(|i| leaf(format!("n{i}"))).collect();
    BlockDb::with_root(
        Block::new(ROOT_ID)
            .with_columns(columns)
            .with_children(children),
    )
}

/// Nested groups `depth` levels deep with `fanout` children each.
fn deep_tree(depth: usize, fanout: usize) -> BlockDb {
    fn group(prefix: String, depth: usize, fanout: usize) -> Block {
        if depth == 0 {
            return leaf(prefix);
        }
        let children = (0..fanout)
            .map(|i| group(format!("{prefix}.{i}"), depth - 1, fanout))
            .collect();
        Block::new(prefix)
            .with_columns(fanout.div_ceil(2).max(1) as i32)
            .with_children(children)
    }
    let mut root = group(ROOT_ID.to_string(), depth, fanout);
    root.id = ROOT_ID.to_string();
    BlockDb::with_root(root)
}

fn bench_layout(c: &mut Criterion) {
    let config = LayoutConfig::default();
    let mut group = c.benchmark_group("layout");

    for count in [10usize, 100, 1000] {
        let db = wide_tree(count, 8);
        group.bench_with_input(BenchmarkId::new("wide", count), &db, |b, db| {
            b.iter(|| {
                let mut db = db.clone();
                black_box(layout(&mut db, &config).ok())
            })
        });
    }

    // the sizer revisits subtrees, so keep depth modest
    for (depth, fanout) in [(2usize, 4usize), (3, 4), (4, 3)] {
        let db = deep_tree(depth, fanout);
        let name = format!("{depth}x{fanout}");
        group.bench_with_input(BenchmarkId::new("deep", name), &db, |b, db| {
            b.iter(|| {
                let mut db = db.clone();
                black_box(layout(&mut db, &config).ok())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
