//! Colormap trait and registry.
//!
//! This module defines the common interface for all colormaps and the
//! name-based lookup used by the renderer.

use crate::error::{ChoroplethError, Result};

/// Suffix that selects the reversed version of a named colormap
pub const REVERSED_SUFFIX: &str = "_r";

/// Trait for color mapping implementations
pub trait Colormap: Send + Sync {
    /// Map a normalized value (0.0 to 1.0) to an RGBA color.
    ///
    /// Values outside the unit interval are clamped.
    fn map_normalized(&self, value: f64) -> [u8; 4];

    /// Get the name of this colormap
    fn name(&self) -> &str;
}

/// A colormap traversed from 1.0 down to 0.0
pub struct Reversed {
    inner: Box<dyn Colormap>,
    name: String,
}

impl Reversed {
    pub fn new(inner: Box<dyn Colormap>) -> Self {
        let name = format!("{}{}", inner.name(), REVERSED_SUFFIX);
        Self { inner, name }
    }
}

impl Colormap for Reversed {
    fn map_normalized(&self, value: f64) -> [u8; 4] {
        self.inner.map_normalized(1.0 - clamp_unit(value))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Names accepted by [`get_colormap`], without the reversed variants
pub fn available_colormaps() -> &'static [&'static str] {
    &[
        "viridis", "plasma", "inferno", "magma", "cividis", "turbo", "blues", "greens", "greys",
        "oranges", "purples", "reds", "ylorrd", "ylgnbu", "coolwarm", "rdbu", "spectral", "brbg",
        "piyg",
    ]
}

/// Get a colormap by name.
///
/// Lookup is case-insensitive. A trailing `_r` selects the reversed map.
pub fn get_colormap(name: &str) -> Result<Box<dyn Colormap>> {
    use super::{diverging::*, sequential::*};

    let lowered = name.to_lowercase();
    if let Some(base) = lowered.strip_suffix(REVERSED_SUFFIX) {
        return get_colormap(base)
            .map(|inner| Box::new(Reversed::new(inner)) as Box<dyn Colormap>)
            .map_err(|_| ChoroplethError::UnknownRamp {
                name: name.to_string(),
            });
    }

    match lowered.as_str() {
        "viridis" => Ok(Box::new(Viridis)),
        "plasma" => Ok(Box::new(Plasma)),
        "inferno" => Ok(Box::new(Inferno)),
        "magma" => Ok(Box::new(Magma)),
        "cividis" => Ok(Box::new(Cividis)),
        "turbo" => Ok(Box::new(Turbo)),
        "blues" => Ok(Box::new(Blues)),
        "greens" => Ok(Box::new(Greens)),
        "greys" | "grays" => Ok(Box::new(Greys)),
        "oranges" => Ok(Box::new(Oranges)),
        "purples" => Ok(Box::new(Purples)),
        "reds" => Ok(Box::new(Reds)),
        "ylorrd" => Ok(Box::new(YlOrRd)),
        "ylgnbu" => Ok(Box::new(YlGnBu)),
        "coolwarm" => Ok(Box::new(Coolwarm)),
        "rdbu" => Ok(Box::new(RdBu)),
        "spectral" => Ok(Box::new(Spectral)),
        "brbg" => Ok(Box::new(BrBG)),
        "piyg" => Ok(Box::new(PiYG)),
        _ => Err(ChoroplethError::UnknownRamp {
            name: name.to_string(),
        }),
    }
}

/// Clamp a value into [0, 1], sending NaN to 0
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Number of entries in a sampled colormap table
pub const TABLE_SIZE: usize = 256;

/// Sample a gradient at [`TABLE_SIZE`] evenly spaced positions, ends included
pub fn sample_gradient(gradient: &colorgrad::Gradient) -> Vec<[u8; 4]> {
    let last = (TABLE_SIZE - 1) as f64;
    (0..TABLE_SIZE)
        .map(|i| gradient.at(i as f64 / last).to_rgba8())
        .collect()
}

/// Look up a normalized value in a sampled table, interpolating between entries
pub fn lookup(table: &[[u8; 4]], value: f64) -> [u8; 4] {
    let last = match table.len() {
        0 => return [0, 0, 0, 0],
        n => n - 1,
    };

    let position = clamp_unit(value) * last as f64;
    let index = position.floor() as usize;
    if index >= last {
        return table[last];
    }

    let t = position - index as f64;
    lerp_color(table[index], table[index + 1], t)
}

/// Linear interpolation between two colors
pub fn lerp_color(c1: [u8; 4], c2: [u8; 4], t: f64) -> [u8; 4] {
    let mix = |a: u8, b: u8| (a as f64 * (1.0 - t) + b as f64 * t).round() as u8;
    [
        mix(c1[0], c2[0]),
        mix(c1[1], c2[1]),
        mix(c1[2], c2[2]),
        mix(c1[3], c2[3]),
    ]
}
