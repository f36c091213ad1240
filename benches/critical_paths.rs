//! Criterion benchmarks for Seedavatar critical paths
//!
//! Benchmarks the core performance-critical operations:
//! - Hash: seed hashing at several seed lengths
//! - Color: hex parsing and luminance sorting
//! - Styles: each built-in style drawing one body
//! - Generate: full pipeline including data-URI encoding

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use seedavatar::color::{sort_by_luminance, Color};
use seedavatar::hash::hash_seed;
use seedavatar::palettes;
use seedavatar::styles;
use seedavatar::{AvatarGenerator, AvatarOptions, DrawOptions, Variant};

// =============================================================================
// Hash Benchmarks
// =============================================================================

fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash");

    for len in [8usize, 32, 256, 4096].iter() {
        let seed: String = (0..*len).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
        group.throughput(Throughput::Bytes(*len as u64));
        group.bench_with_input(BenchmarkId::new("hash_seed", len), &seed, |b, seed| {
            b.iter(|| hash_seed(black_box(seed)))
        });
    }

    group.bench_function("hash_seed_non_bmp", |b| {
        b.iter(|| hash_seed(black_box("🦀🦀🦀 avatar 🦀🦀🦀")))
    });

    group.finish();
}

// =============================================================================
// Color Benchmarks
// =============================================================================

fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("color");

    group.bench_function("parse_rrggbb", |b| b.iter(|| Color::parse(black_box("#a6e22e"))));
    group.bench_function("parse_rgb", |b| b.iter(|| Color::parse(black_box("#fff"))));

    let monokai = palettes::get_builtin("monokai").expect("monokai is built in");
    group.bench_function("sort_by_luminance_monokai", |b| {
        b.iter(|| sort_by_luminance(black_box(monokai.colors())))
    });

    group.finish();
}

// =============================================================================
// Style Benchmarks
// =============================================================================

fn bench_styles(c: &mut Criterion) {
    let mut group = c.benchmark_group("styles");
    let palette = palettes::get_builtin("pride").expect("pride is built in");
    let options = DrawOptions {
        size: 100,
        palette: &palette,
        variant: Variant::Light,
        display_name: Some("Bench Mark"),
    };
    let hash = hash_seed("benchmark-user@example.com");

    for style in styles::all_builtins() {
        group.bench_function(style.name(), |b| b.iter(|| style.draw(black_box(hash), &options)));
    }

    group.finish();
}

// =============================================================================
// Generate Benchmarks
// =============================================================================

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let generator = AvatarGenerator::new();

    for style in ["block", "nebula", "polygon"].iter() {
        let options = AvatarOptions::default().with_style(*style);
        group.bench_with_input(BenchmarkId::new("data_uri", style), &options, |b, options| {
            b.iter(|| generator.generate(black_box("benchmark-user@example.com"), options))
        });
    }

    let options = AvatarOptions::default();
    group.bench_function("render_svg_block", |b| {
        b.iter(|| generator.render_svg(black_box("benchmark-user@example.com"), &options))
    });

    group.bench_function("new_generator", |b| b.iter(AvatarGenerator::new));

    group.finish();
}

criterion_group!(benches, bench_hash, bench_color, bench_styles, bench_generate);

criterion_main!(benches);
