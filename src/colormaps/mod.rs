//! Colormap implementations for choropleth fills and legends.
//!
//! This module provides matplotlib-named colormaps backed by `colorgrad`
//! gradients, each sampled into a fixed-size lookup table.

/// Declare a unit-struct colormap backed by a lookup table sampled once from
/// a `colorgrad` gradient.
macro_rules! gradient_colormap {
    ($(#[$meta:meta])* $ty:ident, $name:literal, $build:expr) => {
        $(#[$meta])*
        pub struct $ty;

        impl $ty {
            fn table() -> &'static [[u8; 4]] {
                static TABLE: once_cell::sync::Lazy<Vec<[u8; 4]>> =
                    once_cell::sync::Lazy::new(|| {
                        $crate::colormaps::colormap::sample_gradient(&$build())
                    });
                &TABLE
            }
        }

        impl $crate::colormaps::Colormap for $ty {
            fn map_normalized(&self, value: f64) -> [u8; 4] {
                $crate::colormaps::colormap::lookup(Self::table(), value)
            }

            fn name(&self) -> &str {
                $name
            }
        }
    };
}

pub mod colormap;
pub mod diverging;
pub mod sequential;

pub use colormap::{available_colormaps, get_colormap, Colormap, Reversed};

// Re-export commonly used colormaps
pub use diverging::{BrBG, Coolwarm, PiYG, RdBu, Spectral};
pub use sequential::{
    Blues, Cividis, Greens, Greys, Inferno, Magma, Oranges, Plasma, Purples, Reds, Turbo,
    Viridis, YlGnBu, YlOrRd,
};
