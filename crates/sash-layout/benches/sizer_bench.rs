//! Benchmarks for the resize apply hot path.
//!
//! Run with: cargo bench -p sash-layout

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sash_core::Size;
use sash_layout::{
    GridModel, GridSizer, ResizeBehavior, ResizeDirection, SizerPlacement, SizerTarget, Track,
};
use std::hint::black_box;

fn fixed_grid(n: usize) -> GridModel {
    let columns = (0..n)
        .map(|_| Track::fixed(100.0).expect("valid track"))
        .collect();
    GridModel::new(columns, Vec::new())
}

fn proportional_grid(n: usize) -> GridModel {
    let columns = (0..n)
        .map(|_| Track::proportional(1.0, 100.0).expect("valid track"))
        .collect();
    GridModel::new(columns, Vec::new())
}

fn placement() -> SizerPlacement {
    SizerPlacement {
        column: 0,
        size: Size::new(8.0, 400.0),
        ..SizerPlacement::default()
    }
}

fn bench_fixed_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("sizer/fixed_apply");

    for n in [2usize, 8, 32] {
        let mut grid = fixed_grid(n);
        let mut sizer = GridSizer::new(&mut grid, placement())
            .resize_direction(ResizeDirection::Columns)
            .resize_behavior(ResizeBehavior::CurrentAndNext);
        sizer.on_drag_starting();

        group.bench_with_input(BenchmarkId::new("cumulative_delta", n), &n, |b, _| {
            let mut delta = 0.0f64;
            b.iter(|| {
                // Oscillate so sizes never drift out of the valid range.
                delta = if delta >= 20.0 { -20.0 } else { delta + 1.0 };
                black_box(sizer.on_drag_horizontal(black_box(delta)))
            })
        });
    }

    group.finish();
}

fn bench_proportional_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("sizer/proportional_apply");

    // Exercises the freeze loop over every other star track.
    for n in [3usize, 8, 32] {
        let mut grid = proportional_grid(n);
        let mut sizer = GridSizer::new(&mut grid, placement())
            .resize_direction(ResizeDirection::Columns)
            .resize_behavior(ResizeBehavior::CurrentAndNext);
        sizer.on_drag_starting();

        group.bench_with_input(BenchmarkId::new("star_freeze", n), &n, |b, _| {
            let mut delta = 0.0f64;
            b.iter(|| {
                delta = if delta >= 20.0 { -20.0 } else { delta + 1.0 };
                black_box(sizer.on_drag_horizontal(black_box(delta)))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fixed_apply, bench_proportional_apply);
criterion_main!(benches);
