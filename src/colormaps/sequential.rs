//! Sequential colormaps (low to high progression).
//!
//! These colormaps suit attributes that only grow in one direction, such as
//! population density or income.

gradient_colormap!(
    /// Viridis colormap - perceptually uniform, colorblind-friendly
    Viridis,
    "viridis",
    colorgrad::viridis
);

gradient_colormap!(
    /// Plasma colormap
    Plasma,
    "plasma",
    colorgrad::plasma
);

gradient_colormap!(
    /// Inferno colormap
    Inferno,
    "inferno",
    colorgrad::inferno
);

gradient_colormap!(
    /// Magma colormap
    Magma,
    "magma",
    colorgrad::magma
);

gradient_colormap!(
    /// Cividis colormap - colorblind-friendly alternative to viridis
    Cividis,
    "cividis",
    colorgrad::cividis
);

gradient_colormap!(
    /// Turbo colormap - improved rainbow
    Turbo,
    "turbo",
    colorgrad::turbo
);

gradient_colormap!(Blues, "blues", colorgrad::blues);
gradient_colormap!(Greens, "greens", colorgrad::greens);
gradient_colormap!(Greys, "greys", colorgrad::greys);
gradient_colormap!(Oranges, "oranges", colorgrad::oranges);
gradient_colormap!(Purples, "purples", colorgrad::purples);
gradient_colormap!(Reds, "reds", colorgrad::reds);

gradient_colormap!(
    /// Yellow-orange-red, a common choice for rates and densities
    YlOrRd,
    "ylorrd",
    colorgrad::yl_or_rd
);

gradient_colormap!(YlGnBu, "ylgnbu", colorgrad::yl_gn_bu);
