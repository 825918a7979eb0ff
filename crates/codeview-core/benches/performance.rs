use codeview_core::{HighlightLineSet, Typewriter, diff, fold_ranges};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn large_source(block_count: usize) -> String {
    let mut out = String::with_capacity(block_count * 96);
    for i in 0..block_count {
        out.push_str(&format!(
            "function f{i}(a, b) {{\n  const s = \"{{ not a brace }}\";\n  return a + b;\n}}\n"
        ));
    }
    // Remove the final '\n' to avoid creating an extra trailing empty line.
    out.pop();
    out
}

fn bench_fold_ranges(c: &mut Criterion) {
    let code = large_source(10_000);
    c.bench_function("fold_ranges/40k_lines", |b| {
        b.iter(|| black_box(fold_ranges(black_box(&code), "javascript")))
    });
}

fn bench_diff_small_edit(c: &mut Criterion) {
    let old = large_source(2_500);
    let new = old.replacen("return a + b;", "return a - b;", 50);
    c.bench_function("diff/10k_lines_50_edits", |b| {
        b.iter(|| black_box(diff(black_box(&old), black_box(&new))))
    });
}

fn bench_highlight_spec(c: &mut Criterion) {
    c.bench_function("highlight_lines/parse_huge_range", |b| {
        b.iter(|| black_box(HighlightLineSet::parse(black_box("1-100000000,5,7-9"))))
    });
}

fn bench_typewriter_frames(c: &mut Criterion) {
    let code = large_source(200);
    c.bench_function("typewriter/frames", |b| {
        b.iter(|| black_box(Typewriter::new(black_box(&code)).count()))
    });
}

criterion_group!(
    benches,
    bench_fold_ranges,
    bench_diff_small_edit,
    bench_highlight_spec,
    bench_typewriter_frames
);
criterion_main!(benches);
