//! # choropleth
//!
//! Render choropleth maps: fill each region with a color proportional to a
//! numeric attribute and optionally add a colorbar legend.
//!
//! ## Key Features
//!
//! - **Polygon and multi-polygon regions**: built on `geo` geometry types
//! - **Matplotlib-named colormaps**: viridis, plasma, coolwarm and friends, plus `_r` reversals
//! - **Explicit policies**: degenerate value ranges and missing values are handled by configuration
//! - **Pluggable output**: raster (PNG) and SVG surfaces behind one trait
//!
//! ## Example
//!
//! ```
//! use choropleth::{plot_choropleth, Region};
//! use geo::polygon;
//!
//! let regions = vec![
//!     Region::new(polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0)], 3.0),
//!     Region::new(polygon![(x: 1.0, y: 0.0), (x: 2.0, y: 0.0), (x: 2.0, y: 1.0)], 9.0),
//! ];
//! let image = plot_choropleth(&regions, "density", "viridis", true).unwrap();
//! assert_eq!(image.legend.unwrap().label, "density");
//! ```

pub mod colormaps;
pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod normalize;
pub mod region;
pub mod render;
pub mod surface;

pub use colormaps::{get_colormap, Colormap};
pub use config::RenderConfig;
pub use error::{ChoroplethError, Result};
pub use features::{parse_geojson, regions_from_geojson};
pub use logging::{generate_render_id, init_tracing, log_error, log_timed_operation};
pub use normalize::{DegenerateRangePolicy, NormalizationRange};
pub use region::{MissingValuePolicy, Region};
pub use render::{assign_colors, plot_choropleth, region_color, render};
pub use surface::{AspectMode, Canvas, RasterSurface, RenderedImage, Surface, SvgSurface};
