//! Fixture regions for tests.

use choropleth::Region;
use geo::{polygon, MultiPolygon, Polygon};

/// Axis-aligned square with its lower-left corner at (x, y)
pub fn square(x: f64, y: f64, size: f64) -> Polygon<f64> {
    polygon![
        (x: x, y: y),
        (x: x + size, y: y),
        (x: x + size, y: y + size),
        (x: x, y: y + size),
    ]
}

/// Three unit squares A, B, C in a row with the given values
pub fn three_squares(values: [f64; 3]) -> Vec<Region> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| Region::new(square(i as f64 * 2.0, 0.0, 1.0), value))
        .collect()
}

/// A multi-polygon region made of `parts` unit squares
pub fn archipelago(parts: usize, value: f64) -> Region {
    let polygons = (0..parts)
        .map(|i| square(i as f64 * 1.5, 3.0, 1.0))
        .collect::<Vec<_>>();
    Region::new(MultiPolygon::new(polygons), value)
}

/// `columns` x `rows` grid of unit squares with increasing values
pub fn grid(columns: usize, rows: usize) -> Vec<Region> {
    (0..rows)
        .flat_map(|row| {
            (0..columns).map(move |col| {
                Region::new(
                    square(col as f64, row as f64, 1.0),
                    (row * columns + col) as f64,
                )
            })
        })
        .collect()
}
