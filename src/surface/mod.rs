//! Rendering surfaces.
//!
//! A [`Surface`] is the output side of a render: the renderer creates the
//! canvas, fills one polygon per ring, optionally adds a colorbar, sets the
//! aspect ratio and finally calls [`Surface::show`], which consumes the
//! surface and returns whatever it produced.

pub mod layout;
pub mod raster;
pub mod scene;
pub mod svg;

use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::colormaps::Colormap;
use crate::config::CanvasConfig;
use crate::error::Result;
use crate::normalize::NormalizationRange;

pub use layout::{Layout, LegendLayout, PixelRect, Viewport};
pub use raster::{RasterSurface, RenderedImage};
pub use scene::{Fill, LegendInfo, LegendSpec, Scene};
pub use svg::SvgSurface;

/// Canvas size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl From<CanvasConfig> for Canvas {
    fn from(config: CanvasConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
        }
    }
}

/// How world units map onto pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectMode {
    /// One unit in x covers the same number of pixels as one unit in y
    #[default]
    Equal,
    /// Each axis is stretched independently to fill the map area
    Auto,
}

/// A colorbar request: the ramp, the value range it spans and its label
pub struct Colorbar<'a> {
    pub colormap: &'a dyn Colormap,
    pub range: NormalizationRange,
    pub label: &'a str,
}

/// Output collaborator for the renderer
pub trait Surface {
    /// What [`Surface::show`] hands back to the caller
    type Output;

    /// Start a drawing of the given size
    fn create_canvas(&mut self, canvas: Canvas) -> Result<()>;

    /// Fill the interior of a ring with a color
    fn fill_polygon(&mut self, ring: &[Coord<f64>], color: [u8; 4]) -> Result<()>;

    /// Add a colorbar next to the map
    fn draw_colorbar(&mut self, colorbar: &Colorbar<'_>) -> Result<()>;

    /// Set how world coordinates are scaled onto the canvas
    fn set_aspect_ratio(&mut self, mode: AspectMode) -> Result<()>;

    /// Finish the drawing and release the surface
    fn show(self) -> Result<Self::Output>
    where
        Self: Sized;
}
