//! Benchmark tests for the toggle engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flipswitch_core::{Point, Size, ThemeColors};
use flipswitch_widgets::{
    presets, HostMetrics, ToggleConfig, ToggleFlags, ToggleLayout, TogglePalette,
};

fn bench_config_resolve(c: &mut Criterion) {
    let config = presets::ios_style(1.0, false);
    c.bench_function("config_resolve", |b| {
        b.iter(|| black_box(config.clone()).resolve())
    });
}

fn bench_palette_resolve(c: &mut Criterion) {
    let theme = ThemeColors::dark();
    let candidate = presets::material_style(1.0).palette;
    c.bench_function("palette_resolve", |b| {
        b.iter(|| TogglePalette::resolve(black_box(candidate.as_ref()), black_box(&theme)))
    });
}

fn bench_layout_compute(c: &mut Criterion) {
    let config = ToggleConfig::default()
        .flags(ToggleFlags::ANIMATED)
        .resolve();
    let metrics = HostMetrics::default();
    c.bench_function("layout_compute", |b| {
        b.iter(|| {
            ToggleLayout::compute(
                black_box(Point::new(10.0, 10.0)),
                black_box(&config),
                black_box(Size::new(49.0, 14.0)),
                &metrics,
            )
        })
    });
}

fn bench_knob_positions(c: &mut Criterion) {
    let config = ToggleConfig::default().resolve();
    let layout = ToggleLayout::compute(
        Point::ORIGIN,
        &config,
        Size::ZERO,
        &HostMetrics::default(),
    );
    c.bench_function("knob_circle_sweep", |b| {
        b.iter(|| {
            for step in 0..=16 {
                let t = step as f32 / 16.0;
                black_box(layout.knob_circle(black_box(t)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_config_resolve,
    bench_palette_resolve,
    bench_layout_compute,
    bench_knob_positions
);
criterion_main!(benches);
