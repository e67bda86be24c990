use criterion::{criterion_group, criterion_main, Criterion};
use ecopulse_core::{RecordingSurface, Size};
use ecopulse_scene::ParticleField;

fn bench_field(c: &mut Criterion) {
    let bounds = Size::new(1920.0, 1080.0);

    c.bench_function("field_step", |b| {
        let mut field = ParticleField::with_seed(bounds, 42);
        b.iter(|| field.step());
    });

    c.bench_function("field_step_and_paint", |b| {
        let mut field = ParticleField::with_seed(bounds, 42);
        let mut surface = RecordingSurface::new(bounds);
        b.iter(|| {
            field.step();
            field.paint(&mut surface);
        });
    });
}

criterion_group!(benches, bench_field);
criterion_main!(benches);
