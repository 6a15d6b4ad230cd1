use choropleth::{render, RasterSurface, Region, RenderConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geo::polygon;

fn grid(size: usize) -> Vec<Region> {
    (0..size * size)
        .map(|i| {
            let (x, y) = ((i % size) as f64, (i / size) as f64);
            Region::new(
                polygon![
                    (x: x, y: y),
                    (x: x + 1.0, y: y),
                    (x: x + 1.0, y: y + 1.0),
                    (x: x, y: y + 1.0),
                ],
                (x * y).sqrt(),
            )
        })
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let regions = grid(50);
    let config = RenderConfig {
        canvas: choropleth::config::CanvasConfig {
            width: 800,
            height: 800,
        },
        ..Default::default()
    };

    c.bench_function("raster_2500_regions", |b| {
        b.iter(|| {
            render(
                RasterSurface::new(),
                black_box(&regions),
                "density",
                &config,
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
