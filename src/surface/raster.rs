//! RGBA raster surface.
//!
//! Rings are filled with `imageproc` polygon drawing; translucent colors are
//! blended over what is already painted. The colorbar is a vertical gradient
//! with the maximum at the top, labeled with its end values and the rotated
//! attribute name.

use geo::Coord;
use image::{imageops, ImageBuffer, ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::{draw_polygon_mut, draw_text_mut, text_size, Blend};
use imageproc::point::Point;
use rusttype::{Font, Scale};
use std::io::Cursor;
use std::path::Path;

use super::layout::{clockwise_label_rotation, format_tick, LegendLayout, PixelRect, LABEL_PAD};
use super::scene::{LegendInfo, LegendSpec, Scene};
use super::{AspectMode, Canvas, Colorbar, Surface};
use crate::config::RenderConfig;
use crate::error::{ChoroplethError, Result};

/// Color of the colorbar outline, tick marks and legend text
const FRAME_COLOR: [u8; 4] = [40, 40, 40, 255];

/// Length of the tick marks to the right of the colorbar, in pixels
const TICK_LENGTH: u32 = 4;

/// Gap between a tick mark and its value
const TICK_TEXT_GAP: u32 = 2;

/// Legend text size relative to the legend strip width, in pixels
const FONT_FRACTION: f64 = 0.1;
const MIN_FONT_SIZE: f64 = 8.0;
const MAX_FONT_SIZE: f64 = 24.0;

static LEGEND_FONT: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

const WHITE: [u8; 4] = [255, 255, 255, 255];

/// Raster output of a render
#[derive(Debug, Clone)]
pub struct RenderedImage {
    pub image: RgbaImage,
    /// Present when a colorbar was drawn
    pub legend: Option<LegendInfo>,
}

impl RenderedImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Encode the image as PNG
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        self.image
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(|e| ChoroplethError::ImageGeneration {
                message: format!("Failed to encode PNG: {}", e),
            })?;
        Ok(buffer.into_inner())
    }

    /// Write the image to `path`; the format follows the file extension
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.image
            .save(path.as_ref())
            .map_err(|e| ChoroplethError::ImageGeneration {
                message: format!("Failed to save {}: {}", path.as_ref().display(), e),
            })
    }
}

/// Surface that rasterizes into an [`RgbaImage`]
#[derive(Debug)]
pub struct RasterSurface {
    scene: Scene,
    background: [u8; 4],
}

impl RasterSurface {
    pub fn new() -> Self {
        Self::with_background(WHITE)
    }

    pub fn with_background(background: [u8; 4]) -> Self {
        Self {
            scene: Scene::new(),
            background,
        }
    }

    pub fn from_config(config: &RenderConfig) -> Result<Self> {
        Ok(Self::with_background(config.background_rgba()?))
    }
}

impl Default for RasterSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for RasterSurface {
    type Output = RenderedImage;

    fn create_canvas(&mut self, canvas: Canvas) -> Result<()> {
        self.scene.create_canvas(canvas)
    }

    fn fill_polygon(&mut self, ring: &[Coord<f64>], color: [u8; 4]) -> Result<()> {
        self.scene.push_fill(ring, color);
        Ok(())
    }

    fn draw_colorbar(&mut self, colorbar: &Colorbar<'_>) -> Result<()> {
        self.scene.set_colorbar(colorbar);
        Ok(())
    }

    fn set_aspect_ratio(&mut self, mode: AspectMode) -> Result<()> {
        self.scene.set_aspect(mode);
        Ok(())
    }

    fn show(self) -> Result<RenderedImage> {
        let (canvas, layout, viewport) = self.scene.compose()?;
        let mut image: RgbaImage =
            ImageBuffer::from_pixel(canvas.width, canvas.height, Rgba(self.background));

        if let Some(viewport) = viewport {
            let mut points = Vec::new();
            for fill in self.scene.fills() {
                points.clear();
                points.extend(fill.ring.iter().map(|c| viewport.to_pixel(*c)));
                fill_ring(&mut image, &points, Rgba(fill.color));
            }
        }

        let legend = match (self.scene.legend(), layout.legend) {
            (Some(spec), Some(placement)) => {
                draw_legend(&mut image, spec, &placement)?;
                Some(spec.info.clone())
            }
            _ => None,
        };

        Ok(RenderedImage { image, legend })
    }
}

/// Fill a ring given in pixel coordinates
fn fill_ring(image: &mut RgbaImage, points: &[(f64, f64)], color: Rgba<u8>) {
    let mut polygon: Vec<Point<i32>> = points
        .iter()
        .map(|&(x, y)| Point::new(x.round() as i32, y.round() as i32))
        .collect();

    // imageproc closes the polygon itself and rejects a repeated end point
    polygon.dedup();
    while polygon.len() > 1 && polygon.first() == polygon.last() {
        polygon.pop();
    }
    if polygon.len() < 3 {
        return;
    }

    if color.0[3] == u8::MAX {
        draw_polygon_mut(image, &polygon, color);
    } else {
        let mut blended = Blend(std::mem::take(image));
        draw_polygon_mut(&mut blended, &polygon, color);
        *image = blended.0;
    }
}

fn draw_legend(image: &mut RgbaImage, spec: &LegendSpec, placement: &LegendLayout) -> Result<()> {
    let bar = pixel_bounds(&placement.bar);
    let (x0, y0, x1, y1) = bar;
    let rows = (y1 - y0).max(1);

    for y in y0..y1 {
        // Top row is the maximum of the range
        let t = if rows > 1 {
            1.0 - (y - y0) as f64 / (rows - 1) as f64
        } else {
            1.0
        };
        let color = Rgba(spec.sample(t));
        for x in x0..x1 {
            put(image, x, y, color);
        }
    }

    draw_frame(image, bar);
    draw_legend_text(image, spec, placement)
}

/// Tick values next to both ends of the bar and the rotated label beyond them
fn draw_legend_text(
    image: &mut RgbaImage,
    spec: &LegendSpec,
    placement: &LegendLayout,
) -> Result<()> {
    let font = legend_font()?;
    let size = (placement.strip.width * FONT_FRACTION).clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    let scale = Scale::uniform(size as f32);
    let ink = Rgba(FRAME_COLOR);

    let (_, y0, x1, y1) = pixel_bounds(&placement.bar);
    let tick_x = (x1 + TICK_LENGTH + TICK_TEXT_GAP) as i32;
    let mut widest = 0;

    for (value, y) in [(spec.info.max, y0), (spec.info.min, y1.saturating_sub(1))] {
        let text = format_tick(value);
        let (width, height) = text_size(scale, &font, &text);
        widest = widest.max(width);
        draw_text_mut(image, ink, tick_x, y as i32 - height / 2, scale, &font, &text);
    }

    if spec.info.label.is_empty() {
        return Ok(());
    }

    let label = render_label(&font, scale, &spec.info.label);
    let label_x = tick_x as f64 + widest as f64 + LABEL_PAD;
    let label_y = (y0 + y1) as f64 / 2.0 - label.height() as f64 / 2.0;
    imageops::overlay(image, &label, label_x.round() as i64, label_y.round() as i64);
    Ok(())
}

/// Draw `text` onto a transparent tile and turn it to the label angle
fn render_label(font: &Font<'_>, scale: Scale, text: &str) -> RgbaImage {
    let (width, height) = text_size(scale, font, text);
    let [r, g, b, _] = FRAME_COLOR;
    let mut tile: RgbaImage = ImageBuffer::from_pixel(
        width.max(1) as u32 + 2,
        height.max(1) as u32 + 2,
        Rgba([r, g, b, 0]),
    );
    draw_text_mut(&mut tile, Rgba(FRAME_COLOR), 1, 1, scale, font, text);

    match clockwise_label_rotation() as u32 {
        90 => imageops::rotate90(&tile),
        180 => imageops::rotate180(&tile),
        270 => imageops::rotate270(&tile),
        _ => tile,
    }
}

fn legend_font() -> Result<Font<'static>> {
    Font::try_from_bytes(LEGEND_FONT).ok_or_else(|| ChoroplethError::ImageGeneration {
        message: "Failed to load the legend font".to_string(),
    })
}

/// Outline the bar and add tick marks at both ends
fn draw_frame(image: &mut RgbaImage, (x0, y0, x1, y1): (u32, u32, u32, u32)) {
    let frame = Rgba(FRAME_COLOR);
    let right = x1.saturating_sub(1);
    let bottom = y1.saturating_sub(1);

    for x in x0..x1 {
        put(image, x, y0, frame);
        put(image, x, bottom, frame);
    }
    for y in y0..y1 {
        put(image, x0, y, frame);
        put(image, right, y, frame);
    }
    for x in x1..x1 + TICK_LENGTH {
        put(image, x, y0, frame);
        put(image, x, bottom, frame);
    }
}

fn pixel_bounds(rect: &PixelRect) -> (u32, u32, u32, u32) {
    let to_px = |v: f64| v.round().max(0.0) as u32;
    (
        to_px(rect.x),
        to_px(rect.y),
        to_px(rect.right()),
        to_px(rect.bottom()),
    )
}

fn put(image: &mut RgbaImage, x: u32, y: u32, color: Rgba<u8>) {
    if x < image.width() && y < image.height() {
        image.put_pixel(x, y, color);
    }
}
