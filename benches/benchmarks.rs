//! Performance benchmarks for treetally

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use treetally::test_utils::TestTree;
use treetally::{MarkdownRenderer, SummaryConfig, collect, format_size};

/// Build a tree with `dir_count` top-level directories, each holding two
/// nested levels and a handful of files, plus an ignored node_modules.
fn create_test_tree(dir_count: usize) -> TestTree {
    let tree = TestTree::new();
    for i in 0..dir_count {
        for j in 0..3 {
            tree.add_file(&format!("dir{}/file{}.txt", i, j), 64 * (j + 1));
            tree.add_file(&format!("dir{}/sub/inner{}.rs", i, j), 128);
            tree.add_file(&format!("dir{}/sub/deep/leaf{}.md", i, j), 32);
        }
        tree.add_file(&format!("dir{}/.hidden", i), 16);
    }
    tree.add_file("node_modules/pkg/index.js", 4096);
    tree
}

fn bench_collect(c: &mut Criterion) {
    let mut group = c.benchmark_group("collect");

    let small = create_test_tree(10);
    let small_config = SummaryConfig::new(small.path());
    group.bench_function("small_tree_10_dirs", |b| {
        b.iter(|| collect(black_box(&small_config)).unwrap())
    });

    let large = create_test_tree(200);
    let large_config = SummaryConfig::new(large.path());
    group.bench_function("large_tree_200_dirs", |b| {
        b.iter(|| collect(black_box(&large_config)).unwrap())
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let tree = create_test_tree(200);
    let collection = collect(&SummaryConfig::new(tree.path())).unwrap();
    let renderer = MarkdownRenderer::new("bench");

    c.bench_function("render_200_dirs", |b| {
        b.iter(|| renderer.render(black_box(&collection)))
    });
}

fn bench_format_size(c: &mut Criterion) {
    c.bench_function("format_size", |b| {
        b.iter(|| {
            for bytes in [0u64, 1023, 1536, 1_048_576, 1u64 << 42, 1u64 << 55] {
                black_box(format_size(black_box(bytes)));
            }
        })
    });
}

criterion_group!(benches, bench_collect, bench_render, bench_format_size);
criterion_main!(benches);
