//! Canvas layout and world-to-pixel mapping shared by all surfaces.

use geo::{Coord, Rect};

use super::{AspectMode, Canvas};

/// Blank border around the drawing, as a fraction of the shorter canvas side
pub const MARGIN_FRACTION: f64 = 0.04;

/// Share of the canvas width reserved for the legend strip
pub const LEGEND_FRACTION: f64 = 0.15;

/// Width of the colorbar relative to the legend strip
pub const BAR_FRACTION: f64 = 0.3;

/// Height of the colorbar relative to the map area
pub const BAR_HEIGHT_FRACTION: f64 = 0.8;

/// Distance in pixels between the tick labels and the legend label
pub const LABEL_PAD: f64 = 15.0;

/// Rotation of the legend label, counter-clockwise in a y-up frame.
/// 270 degrees makes the label read top to bottom.
pub const LABEL_ROTATION_DEGREES: f64 = 270.0;

/// Axis-aligned rectangle in pixel space (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Placement of the colorbar inside the legend strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendLayout {
    pub strip: PixelRect,
    pub bar: PixelRect,
}

/// Placement of the map area and the optional legend on a canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub map: PixelRect,
    pub legend: Option<LegendLayout>,
}

impl Layout {
    pub fn new(canvas: Canvas, with_legend: bool) -> Self {
        let width = canvas.width as f64;
        let height = canvas.height as f64;
        let margin = MARGIN_FRACTION * width.min(height);
        let legend_width = if with_legend {
            LEGEND_FRACTION * width
        } else {
            0.0
        };

        let map = PixelRect {
            x: margin,
            y: margin,
            width: (width - 2.0 * margin - legend_width).max(1.0),
            height: (height - 2.0 * margin).max(1.0),
        };

        let legend = with_legend.then(|| {
            let strip = PixelRect {
                x: map.right(),
                y: map.y,
                width: legend_width,
                height: map.height,
            };
            let bar_height = strip.height * BAR_HEIGHT_FRACTION;
            let bar = PixelRect {
                x: strip.x + strip.width * 0.1,
                y: strip.y + (strip.height - bar_height) / 2.0,
                width: (strip.width * BAR_FRACTION).max(1.0),
                height: bar_height.max(1.0),
            };
            LegendLayout { strip, bar }
        });

        Self { map, legend }
    }
}

/// Affine mapping from world coordinates to pixels, north up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale_x: f64,
    pub scale_y: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Viewport {
    /// Fit `bounds` into `area`, centering the drawing along the axis with slack
    pub fn fit(bounds: Rect<f64>, area: PixelRect, aspect: AspectMode) -> Self {
        // A zero extent (all points on one line) still gets a finite scale
        let extent_x = if bounds.width() > 0.0 { bounds.width() } else { 1.0 };
        let extent_y = if bounds.height() > 0.0 { bounds.height() } else { 1.0 };

        let fit_x = area.width / extent_x;
        let fit_y = area.height / extent_y;
        let (scale_x, scale_y) = match aspect {
            AspectMode::Equal => {
                let scale = fit_x.min(fit_y);
                (scale, scale)
            }
            AspectMode::Auto => (fit_x, fit_y),
        };

        let slack_x = area.width - bounds.width() * scale_x;
        let slack_y = area.height - bounds.height() * scale_y;

        Self {
            scale_x,
            scale_y,
            offset_x: area.x + slack_x / 2.0 - bounds.min().x * scale_x,
            offset_y: area.y + slack_y / 2.0 + bounds.max().y * scale_y,
        }
    }

    pub fn to_pixel(&self, coord: Coord<f64>) -> (f64, f64) {
        (
            self.offset_x + coord.x * self.scale_x,
            self.offset_y - coord.y * self.scale_y,
        )
    }
}

/// Smallest rectangle covering both inputs
pub fn union_rect(a: Rect<f64>, b: Rect<f64>) -> Rect<f64> {
    Rect::new(
        Coord {
            x: a.min().x.min(b.min().x),
            y: a.min().y.min(b.min().y),
        },
        Coord {
            x: a.max().x.max(b.max().x),
            y: a.max().y.max(b.max().y),
        },
    )
}

/// [`LABEL_ROTATION_DEGREES`] expressed for a y-down frame.
///
/// Pixel and SVG coordinates have y pointing down, so angles run clockwise.
pub fn clockwise_label_rotation() -> f64 {
    (360.0 - LABEL_ROTATION_DEGREES) % 360.0
}

/// Short tick label: integers print without a fraction, others with up to 3 decimals
pub fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let text = format!("{:.3}", value);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
