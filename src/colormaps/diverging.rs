//! Diverging colormaps (two-hue progression with center).
//!
//! These colormaps are suitable for data that diverges from a central value,
//! e.g. change rates around zero.

gradient_colormap!(
    /// Coolwarm colormap - blue to red through light gray
    Coolwarm,
    "coolwarm",
    || {
        colorgrad::CustomGradient::new()
            .html_colors(&["#3b4cc0", "#dddddd", "#b40426"])
            .build()
            .expect("coolwarm anchor colors are valid")
    }
);

gradient_colormap!(
    /// RdBu colormap - red through white to blue
    RdBu,
    "rdbu",
    colorgrad::rd_bu
);

gradient_colormap!(Spectral, "spectral", colorgrad::spectral);
gradient_colormap!(BrBG, "brbg", colorgrad::br_bg);
gradient_colormap!(PiYG, "piyg", colorgrad::pi_yg);
