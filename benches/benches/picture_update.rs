//! Benchmark suite for picture parsing and per-tick updates
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use wwapic_benches::{animated_script, fill_script, long_script, populated_store};
use wwapic_types::picture::{
	EngineConfig, NullHost, Picture, PicturePointer, PictureSource, PropertyLine,
};

/// Benchmark line tokenizing on its own
fn bench_line_parsing(c: &mut Criterion) {
	let mut group = c.benchmark_group("line_parsing");

	for line in ["pos=100,200", r#"text="Hello, world",1,2"#, "wait=500,+5,+1,-1,1"] {
		group.bench_with_input(BenchmarkId::new("parse", line), line, |b, line| {
			b.iter(|| black_box(PropertyLine::parse(black_box(line))));
		});
	}

	group.finish();
}

/// Benchmark building whole pictures from scripts
fn bench_picture_build(c: &mut Criterion) {
	let mut group = c.benchmark_group("picture_build");
	let source = PictureSource::new(PicturePointer::new(1, 0));

	for count in [10, 100, 1000] {
		let script = long_script(count);
		group.throughput(Throughput::Elements(count as u64));
		group.bench_with_input(BenchmarkId::new("from_lines", count), &script, |b, script| {
			b.iter(|| black_box(Picture::from_lines(source, EngineConfig::default(), script)));
		});
	}

	group.finish();
}

/// Benchmark store ticks with every animation running
fn bench_store_update(c: &mut Criterion) {
	let mut group = c.benchmark_group("store_update");
	let script = animated_script();

	for count in [1, 10, 100] {
		let mut store = populated_store(count, &script);
		store.start(&mut NullHost);
		group.throughput(Throughput::Elements(count as u64));
		group.bench_function(BenchmarkId::new("tick", count), |b| {
			b.iter(|| black_box(store.update(&mut NullHost)));
		});
	}

	group.finish();
}

/// Benchmark render composition, dominated by the fill tile plan
fn bench_render(c: &mut Criterion) {
	let mut group = c.benchmark_group("render");

	for chip_size in [40, 20, 10] {
		let mut store = populated_store(1, &fill_script(chip_size));
		store.start(&mut NullHost);
		group.bench_function(BenchmarkId::new("fill", chip_size), |b| {
			b.iter(|| black_box(store.render_all()));
		});
	}

	let mut store = populated_store(100, &animated_script());
	store.start(&mut NullHost);
	group.bench_function("animated_100", |b| {
		b.iter(|| black_box(store.render_all()));
	});

	group.finish();
}

criterion_group!(benches, bench_line_parsing, bench_picture_build, bench_store_update, bench_render);
criterion_main!(benches);
