//! Buffered drawing state shared by the concrete surfaces.
//!
//! Fills and the colorbar are recorded as they arrive and only laid out when
//! the surface is shown, so the aspect ratio can be set after the fills.

use geo::{BoundingRect, Coord, LineString, Rect};

use super::layout::{union_rect, Layout, Viewport};
use super::{AspectMode, Canvas, Colorbar};
use crate::error::{ChoroplethError, Result};

/// Number of colors sampled from the ramp for a legend
pub const LEGEND_SAMPLES: usize = 256;

/// One filled ring
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    pub ring: Vec<Coord<f64>>,
    pub color: [u8; 4],
}

/// Description of the legend that was drawn
#[derive(Debug, Clone, PartialEq)]
pub struct LegendInfo {
    pub label: String,
    pub colormap: String,
    pub min: f64,
    pub max: f64,
}

/// A recorded colorbar: its description plus colors sampled bottom to top
#[derive(Debug, Clone, PartialEq)]
pub struct LegendSpec {
    pub info: LegendInfo,
    pub samples: Vec<[u8; 4]>,
}

impl LegendSpec {
    /// Color at normalized position `t` (0 = min, 1 = max)
    pub fn sample(&self, t: f64) -> [u8; 4] {
        let last = self.samples.len().saturating_sub(1);
        let index = (t.clamp(0.0, 1.0) * last as f64).round() as usize;
        self.samples[index.min(last)]
    }
}

#[derive(Debug, Default)]
pub struct Scene {
    canvas: Option<Canvas>,
    fills: Vec<Fill>,
    legend: Option<LegendSpec>,
    aspect: AspectMode,
    bounds: Option<Rect<f64>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_canvas(&mut self, canvas: Canvas) -> Result<()> {
        if canvas.width == 0 || canvas.height == 0 {
            return Err(ChoroplethError::ImageGeneration {
                message: format!(
                    "Canvas dimensions must be positive, got {}x{}",
                    canvas.width, canvas.height
                ),
            });
        }
        self.canvas = Some(canvas);
        Ok(())
    }

    pub fn push_fill(&mut self, ring: &[Coord<f64>], color: [u8; 4]) {
        if let Some(rect) = LineString::from(ring.to_vec()).bounding_rect() {
            self.bounds = Some(match self.bounds {
                Some(bounds) => union_rect(bounds, rect),
                None => rect,
            });
        }
        self.fills.push(Fill {
            ring: ring.to_vec(),
            color,
        });
    }

    pub fn set_colorbar(&mut self, colorbar: &Colorbar<'_>) {
        let last = (LEGEND_SAMPLES - 1) as f64;
        let samples = (0..LEGEND_SAMPLES)
            .map(|i| colorbar.colormap.map_normalized(i as f64 / last))
            .collect();

        self.legend = Some(LegendSpec {
            info: LegendInfo {
                label: colorbar.label.to_string(),
                colormap: colorbar.colormap.name().to_string(),
                min: colorbar.range.min,
                max: colorbar.range.max,
            },
            samples,
        });
    }

    pub fn set_aspect(&mut self, aspect: AspectMode) {
        self.aspect = aspect;
    }

    pub fn fills(&self) -> &[Fill] {
        &self.fills
    }

    pub fn legend(&self) -> Option<&LegendSpec> {
        self.legend.as_ref()
    }

    /// Canvas, layout and viewport for the recorded drawing.
    ///
    /// The viewport is `None` when nothing with an extent was filled.
    pub fn compose(&self) -> Result<(Canvas, Layout, Option<Viewport>)> {
        let canvas = self.canvas.ok_or_else(|| ChoroplethError::ImageGeneration {
            message: "canvas was never created".to_string(),
        })?;
        let layout = Layout::new(canvas, self.legend.is_some());
        let viewport = self
            .bounds
            .map(|bounds| Viewport::fit(bounds, layout.map, self.aspect));
        Ok((canvas, layout, viewport))
    }
}
