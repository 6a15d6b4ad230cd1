//! Choropleth rendering.
//!
//! The renderer computes the value range once, maps each region's value
//! through the colormap and fills every ring of the region with that color.
//! All geometry is dispatched into rings before the first draw call, so an
//! unsupported geometry fails the render without touching the surface.

use std::time::Instant;
use tracing::{debug, warn};

use crate::colormaps::{get_colormap, Colormap};
use crate::config::RenderConfig;
use crate::error::{ChoroplethError, Result};
use crate::logging::{generate_render_id, log_render_stats};
use crate::normalize::{DegenerateRangePolicy, NormalizationRange};
use crate::region::{MissingValuePolicy, Region};
use crate::surface::{Canvas, Colorbar, RasterSurface, RenderedImage, Surface};

/// Color for a single value, given the shared range and colormap
pub fn region_color(
    value: f64,
    range: NormalizationRange,
    colormap: &dyn Colormap,
    policy: DegenerateRangePolicy,
) -> Result<[u8; 4]> {
    let t = range.normalize(value, policy)?;
    Ok(colormap.map_normalized(t))
}

/// Colors for all regions, in input order.
///
/// Every value must be finite; the range is computed over these regions.
pub fn assign_colors(
    regions: &[Region],
    colormap: &dyn Colormap,
    policy: DegenerateRangePolicy,
) -> Result<Vec<[u8; 4]>> {
    let range = NormalizationRange::from_values(regions.iter().map(|r| r.value))?;
    regions
        .iter()
        .map(|region| region_color(region.value, range, colormap, policy))
        .collect()
}

/// Render `regions` onto `surface` and return what the surface produces.
///
/// `attribute` names the column the values came from and labels the legend.
/// The colormap, legend flag, canvas size, aspect mode and the policies for
/// degenerate ranges and missing values come from `config`.
pub fn render<S: Surface>(
    mut surface: S,
    regions: &[Region],
    attribute: &str,
    config: &RenderConfig,
) -> Result<S::Output> {
    let start_time = Instant::now();
    let render_id = generate_render_id();

    debug!(
        render_id = %render_id,
        attribute = attribute,
        colormap = %config.colormap,
        region_count = regions.len(),
        legend = config.legend,
        "Starting choropleth render"
    );

    let colormap = get_colormap(&config.colormap)?;
    let regions = select_regions(regions, config.missing_values)?;
    let range = NormalizationRange::from_values(regions.iter().map(|r| r.value))?;

    let rings = regions
        .iter()
        .map(|region| region.rings())
        .collect::<Result<Vec<_>>>()?;
    let colors = regions
        .iter()
        .map(|region| {
            region_color(
                region.value,
                range,
                colormap.as_ref(),
                config.degenerate_range,
            )
        })
        .collect::<Result<Vec<_>>>()?;

    if range.is_degenerate() {
        debug!(
            render_id = %render_id,
            value = range.min,
            "All regions share one value, using the ramp midpoint"
        );
    }

    surface.create_canvas(Canvas::from(config.canvas))?;

    let mut ring_count = 0;
    for (region_rings, color) in rings.iter().zip(&colors) {
        for ring in region_rings {
            surface.fill_polygon(&ring.0, *color)?;
            ring_count += 1;
        }
    }

    if config.legend {
        surface.draw_colorbar(&Colorbar {
            colormap: colormap.as_ref(),
            range,
            label: attribute,
        })?;
    }

    surface.set_aspect_ratio(config.aspect)?;
    let output = surface.show()?;

    log_render_stats(
        &render_id,
        attribute,
        colormap.name(),
        regions.len(),
        ring_count,
        (range.min, range.max),
        start_time,
    );

    Ok(output)
}

/// Render onto a raster surface with default settings.
///
/// Shorthand for the common case: pick a colormap, toggle the legend, get an
/// image back.
pub fn plot_choropleth(
    regions: &[Region],
    attribute: &str,
    colormap: &str,
    legend: bool,
) -> Result<RenderedImage> {
    let config = RenderConfig {
        colormap: colormap.to_string(),
        legend,
        ..Default::default()
    };
    let surface = RasterSurface::from_config(&config)?;
    render(surface, regions, attribute, &config)
}

/// Apply the missing-value policy, keeping input order
fn select_regions(regions: &[Region], policy: MissingValuePolicy) -> Result<Vec<&Region>> {
    let mut selected = Vec::with_capacity(regions.len());

    for (index, region) in regions.iter().enumerate() {
        if region.value.is_finite() {
            selected.push(region);
            continue;
        }
        match policy {
            MissingValuePolicy::Reject => {
                return Err(ChoroplethError::NonFiniteValue {
                    index,
                    value: region.value,
                });
            }
            MissingValuePolicy::Skip => {
                warn!(
                    index = index,
                    value = region.value,
                    "Skipping region without a finite value"
                );
            }
        }
    }

    if selected.is_empty() {
        return Err(ChoroplethError::EmptyInput);
    }
    Ok(selected)
}
