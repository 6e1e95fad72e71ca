//! Absolute-position resolution over a deep parent-relative chain.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cadenza_ui::{Component, ComponentTree, HeadlessRenderer, Unit};

const DEPTH: usize = 64;

fn deep_tree() -> (ComponentTree<HeadlessRenderer>, cadenza_ui::ComponentId) {
    let mut tree = ComponentTree::new((1600.0, 900.0));
    let mut parent = tree.insert(Component::new(
        "root",
        [Unit::px(10.0), Unit::px(10.0), Unit::vw(90.0), Unit::vh(90.0)],
    ));
    let mut leaf = parent;
    for level in 0..DEPTH {
        leaf = tree
            .add_child(
                parent,
                Component::new(
                    format!("level_{level}"),
                    [Unit::px(2.0), Unit::px(2.0), Unit::pw(98.0), Unit::ph(98.0)],
                ),
            )
            .expect("distinct names");
        parent = leaf;
    }
    (tree, leaf)
}

fn bench_absolute_position(c: &mut Criterion) {
    let mut group = c.benchmark_group("absolute_position");

    group.bench_function("cold_deep_chain", |b| {
        let (mut tree, leaf) = deep_tree();
        let root = tree.roots()[0];
        b.iter(|| {
            // Invalidate the whole chain, then resolve the leaf from scratch.
            tree.set_x(root, Unit::px(10.0));
            black_box(tree.absolute_position(black_box(leaf)))
        });
    });

    group.bench_function("warm_cache", |b| {
        let (mut tree, leaf) = deep_tree();
        tree.absolute_position(leaf);
        b.iter(|| black_box(tree.absolute_position(black_box(leaf))));
    });

    group.finish();
}

criterion_group!(benches, bench_absolute_position);
criterion_main!(benches);
