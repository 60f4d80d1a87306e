use criterion::{criterion_group, criterion_main, Criterion};

use colorstories::rendering::font::GlyphAtlas;
use colorstories::rendering::layout::{compose_story, CANVAS_SIZE};
use colorstories::rendering::raster::{paint, rasterize};
use colorstories::{ColorValue, StoryRecord};

// Run with:
//    cargo bench

/// Bench: paint only (no PNG encoding)
fn bench_paint(c: &mut Criterion) {
    let atlas = GlyphAtlas::build();
    let commands = compose_story(&StoryRecord::new(ColorValue::new(0x123ABC), "Happy", "River"));

    c.bench_function("paint_story_card", |b| {
        b.iter(|| paint(&commands, CANVAS_SIZE, CANVAS_SIZE, &atlas))
    });
}

/// Bench: full story card, paint + PNG encode
fn bench_rasterize(c: &mut Criterion) {
    let atlas = GlyphAtlas::build();
    let commands = compose_story(&StoryRecord::new(ColorValue::new(0x123ABC), "Happy", "River"));

    c.bench_function("rasterize_story_card", |b| {
        b.iter(|| rasterize(&commands, CANVAS_SIZE, CANVAS_SIZE, &atlas).unwrap())
    });
}

criterion_group!(benches, bench_paint, bench_rasterize);
criterion_main!(benches);
