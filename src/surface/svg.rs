//! SVG document surface.
//!
//! Produces a standalone SVG string. Unlike the raster surface it renders
//! the legend text: min/max tick labels and the attribute name, rotated so
//! it reads top to bottom.

use geo::Coord;
use std::fmt::Write;

use super::layout::{format_tick, clockwise_label_rotation, LegendLayout, LABEL_PAD};
use super::scene::{LegendSpec, Scene};
use super::{AspectMode, Canvas, Colorbar, Surface};
use crate::config::RenderConfig;
use crate::error::Result;

/// Number of gradient stops written for the colorbar
const GRADIENT_STOPS: usize = 11;

const FONT_SIZE: f64 = 12.0;

/// Surface that writes an SVG document
#[derive(Debug)]
pub struct SvgSurface {
    scene: Scene,
    background: [u8; 4],
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::with_background([255, 255, 255, 255])
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

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for SvgSurface {
    type Output = String;

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

    fn show(self) -> Result<String> {
        let (canvas, layout, viewport) = self.scene.compose()?;
        let mut svg = String::new();

        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = canvas.width,
            h = canvas.height
        )?;
        writeln!(
            svg,
            r#"<rect width="100%" height="100%" {}/>"#,
            paint(self.background)
        )?;

        writeln!(svg, r#"<g id="regions">"#)?;
        if let Some(viewport) = viewport {
            for fill in self.scene.fills().iter().filter(|f| f.ring.len() >= 3) {
                let points = fill
                    .ring
                    .iter()
                    .map(|c| {
                        let (x, y) = viewport.to_pixel(*c);
                        format!("{:.2},{:.2}", x, y)
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                writeln!(
                    svg,
                    r#"<polygon points="{}" {}/>"#,
                    points,
                    paint(fill.color)
                )?;
            }
        }
        writeln!(svg, "</g>")?;

        if let (Some(spec), Some(placement)) = (self.scene.legend(), layout.legend) {
            write_legend(&mut svg, spec, &placement)?;
        }

        writeln!(svg, "</svg>")?;
        Ok(svg)
    }
}

fn write_legend(svg: &mut String, spec: &LegendSpec, placement: &LegendLayout) -> Result<()> {
    let bar = placement.bar;

    writeln!(svg, r#"<g id="legend">"#)?;
    // Gradient runs bottom (min) to top (max)
    writeln!(
        svg,
        r#"<defs><linearGradient id="colorbar-gradient" x1="0" y1="1" x2="0" y2="0">"#
    )?;
    for i in 0..GRADIENT_STOPS {
        let t = i as f64 / (GRADIENT_STOPS - 1) as f64;
        let [r, g, b, a] = spec.sample(t);
        writeln!(
            svg,
            r#"<stop offset="{:.3}" stop-color="rgb({},{},{})" stop-opacity="{:.3}"/>"#,
            t,
            r,
            g,
            b,
            a as f64 / 255.0
        )?;
    }
    writeln!(svg, "</linearGradient></defs>")?;

    writeln!(
        svg,
        r##"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="url(#colorbar-gradient)" stroke="rgb(40,40,40)"/>"##,
        bar.x, bar.y, bar.width, bar.height
    )?;

    let tick_x = bar.right() + 4.0;
    writeln!(
        svg,
        r#"<text x="{:.2}" y="{:.2}" font-size="{}" dominant-baseline="middle">{}</text>"#,
        tick_x,
        bar.y,
        FONT_SIZE,
        format_tick(spec.info.max)
    )?;
    writeln!(
        svg,
        r#"<text x="{:.2}" y="{:.2}" font-size="{}" dominant-baseline="middle">{}</text>"#,
        tick_x,
        bar.bottom(),
        FONT_SIZE,
        format_tick(spec.info.min)
    )?;

    let widest_tick = format_tick(spec.info.max)
        .len()
        .max(format_tick(spec.info.min).len()) as f64;
    let label_x = tick_x + widest_tick * FONT_SIZE * 0.6 + LABEL_PAD;
    let label_y = bar.y + bar.height / 2.0;
    writeln!(
        svg,
        r#"<text x="{x:.2}" y="{y:.2}" font-size="{size}" text-anchor="middle" transform="rotate({angle} {x:.2} {y:.2})">{label}</text>"#,
        x = label_x,
        y = label_y,
        size = FONT_SIZE,
        angle = clockwise_label_rotation(),
        label = escape_xml(&spec.info.label)
    )?;
    writeln!(svg, "</g>")?;
    Ok(())
}

fn paint([r, g, b, a]: [u8; 4]) -> String {
    if a == 255 {
        format!(r#"fill="rgb({},{},{})""#, r, g, b)
    } else {
        format!(
            r#"fill="rgb({},{},{})" fill-opacity="{:.3}""#,
            r,
            g,
            b,
            a as f64 / 255.0
        )
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
