//! Output surface tests
//!
//! These tests render through the raster and SVG surfaces end-to-end and
//! inspect the produced image or document.

mod common;

use choropleth::surface::{Layout, Viewport};
use choropleth::{
    get_colormap, parse_geojson, plot_choropleth, regions_from_geojson, render, AspectMode, Canvas,
    MissingValuePolicy, RasterSurface, RenderConfig, SvgSurface,
};
use common::assertions::assert_color_close;
use common::image_utils::{
    assert_image_dimensions, count_pixels, detect_image_format, distinct_colors,
    load_image_from_bytes,
};
use common::test_data::{grid, three_squares};
use geo::{coord, Rect};
use image::ImageFormat;

const WHITE: [u8; 4] = [255, 255, 255, 255];

/// Pixel at the center of the unit square whose lower-left corner is (x, y)
fn square_center(canvas: Canvas, legend: bool, bounds: Rect<f64>, x: f64, y: f64) -> (u32, u32) {
    let layout = Layout::new(canvas, legend);
    let viewport = Viewport::fit(bounds, layout.map, AspectMode::Equal);
    let (px, py) = viewport.to_pixel(coord! { x: x + 0.5, y: y + 0.5 });
    (px as u32, py as u32)
}

#[test]
fn test_raster_example_scenario() {
    let viridis = get_colormap("viridis").unwrap();
    let regions = three_squares([0.0, 50.0, 100.0]);

    let rendered = plot_choropleth(&regions, "gdpPercap", "viridis", false).unwrap();
    assert!(rendered.legend.is_none());

    let canvas = Canvas {
        width: 1200,
        height: 1200,
    };
    let bounds = Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 5.0, y: 1.0 });
    let expected = [
        (0.0, viridis.map_normalized(0.0)),
        (2.0, viridis.map_normalized(0.5)),
        (4.0, viridis.map_normalized(1.0)),
    ];

    for (x, color) in expected {
        let (px, py) = square_center(canvas, false, bounds, x, 0.0);
        assert_eq!(rendered.image.get_pixel(px, py).0, color);
    }

    // The gaps between squares stay blank
    let (gap_x, gap_y) = square_center(canvas, false, bounds, 1.0, 0.0);
    assert_eq!(rendered.image.get_pixel(gap_x, gap_y).0, WHITE);
    assert_eq!(rendered.image.get_pixel(0, 0).0, WHITE);
}

#[test]
fn test_raster_equal_aspect_keeps_squares_square() {
    let regions = vec![choropleth::Region::new(
        common::test_data::square(0.0, 0.0, 1.0),
        1.0,
    )];
    let config = RenderConfig {
        canvas: choropleth::config::CanvasConfig {
            width: 300,
            height: 150,
        },
        legend: false,
        ..Default::default()
    };

    let rendered = render(RasterSurface::new(), &regions, "v", &config).unwrap();
    let viridis_mid = get_colormap("viridis").unwrap().map_normalized(0.5);

    // 150 - 2 * 6 margin = 138 px per side, edges drawn inclusively
    let filled: Vec<(u32, u32)> = rendered
        .image
        .enumerate_pixels()
        .filter(|(_, _, p)| p.0 == viridis_mid)
        .map(|(x, y, _)| (x, y))
        .collect();
    let extent = |axis: fn(&(u32, u32)) -> u32| {
        let lo = filled.iter().map(axis).min().unwrap();
        let hi = filled.iter().map(axis).max().unwrap();
        hi - lo + 1
    };
    let (width, height) = (extent(|p| p.0), extent(|p| p.1));

    assert_eq!(width, height);
    assert!((138..=139).contains(&width), "square side was {width}");
    assert_eq!(count_pixels(&rendered.image, viridis_mid), (width * height) as usize);
}

#[test]
fn test_raster_legend_and_png_round_trip() {
    let regions = grid(5, 5);
    let rendered = plot_choropleth(&regions, "rank", "coolwarm", true).unwrap();

    let legend = rendered.legend.clone().unwrap();
    assert_eq!(legend.label, "rank");
    assert_eq!(legend.colormap, "coolwarm");
    assert_eq!((legend.min, legend.max), (0.0, 24.0));

    let coolwarm = get_colormap("coolwarm").unwrap();
    let colors = distinct_colors(&rendered.image);
    assert!(colors.contains(&coolwarm.map_normalized(0.0)));
    assert!(colors.contains(&coolwarm.map_normalized(1.0)));

    let bytes = rendered.encode_png().unwrap();
    assert_eq!(detect_image_format(&bytes), Some(ImageFormat::Png));
    let decoded = load_image_from_bytes(&bytes).unwrap();
    assert!(assert_image_dimensions(&decoded, 1200, 1200).is_ok());
    assert_eq!(decoded.to_rgba8(), rendered.image);
}

#[test]
fn test_raster_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.png");

    let rendered = plot_choropleth(&three_squares([1.0, 2.0, 3.0]), "v", "greens", true).unwrap();
    rendered.save(&path).unwrap();

    let decoded = image::open(&path).unwrap();
    assert!(assert_image_dimensions(&decoded, 1200, 1200).is_ok());
}

#[test]
fn test_svg_surface() {
    let regions = three_squares([0.0, 50.0, 100.0]);
    let config = RenderConfig::default();

    let svg = render(SvgSurface::new(), &regions, "gdpPercap", &config).unwrap();

    let viridis = get_colormap("viridis").unwrap();
    let [r, g, b, _] = viridis.map_normalized(1.0);
    assert_eq!(svg.matches("<polygon").count(), 3);
    assert!(svg.contains(&format!("fill=\"rgb({},{},{})\"", r, g, b)));
    assert!(svg.contains(">gdpPercap</text>"));
    assert!(svg.contains(">100</text>"));
    assert!(svg.contains("rotate(90 "));
}

#[test]
fn test_geojson_to_raster() {
    let geojson = parse_geojson(
        r#"{
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "properties": { "rate": 0.1 },
                  "geometry": { "type": "Polygon",
                                "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]] } },
                { "type": "Feature", "properties": { "rate": 0.9 },
                  "geometry": { "type": "Polygon",
                                "coordinates": [[[2, 0], [3, 0], [3, 1], [2, 1], [2, 0]]] } }
            ]
        }"#,
    )
    .unwrap();
    let regions = regions_from_geojson(&geojson, "rate", MissingValuePolicy::Reject).unwrap();
    let rendered = plot_choropleth(&regions, "rate", "reds", false).unwrap();

    let reds = get_colormap("reds").unwrap();
    let canvas = Canvas {
        width: 1200,
        height: 1200,
    };
    let bounds = Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 3.0, y: 1.0 });

    let (px, py) = square_center(canvas, false, bounds, 0.0, 0.0);
    assert_color_close(rendered.image.get_pixel(px, py).0, reds.map_normalized(0.0), 0);
    let (px, py) = square_center(canvas, false, bounds, 2.0, 0.0);
    assert_color_close(rendered.image.get_pixel(px, py).0, reds.map_normalized(1.0), 0);
}
