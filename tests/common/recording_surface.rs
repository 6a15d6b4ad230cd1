//! A surface that records every call made to it.

use choropleth::surface::{Colorbar, Surface};
use choropleth::{AspectMode, Canvas, NormalizationRange, Result};
use geo::Coord;

/// One call received by the surface
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateCanvas(Canvas),
    Fill {
        ring: Vec<Coord<f64>>,
        color: [u8; 4],
    },
    Colorbar {
        colormap: String,
        range: NormalizationRange,
        label: String,
    },
    SetAspect(AspectMode),
    Show,
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<Call>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for RecordingSurface {
    type Output = Vec<Call>;

    fn create_canvas(&mut self, canvas: Canvas) -> Result<()> {
        self.calls.push(Call::CreateCanvas(canvas));
        Ok(())
    }

    fn fill_polygon(&mut self, ring: &[Coord<f64>], color: [u8; 4]) -> Result<()> {
        self.calls.push(Call::Fill {
            ring: ring.to_vec(),
            color,
        });
        Ok(())
    }

    fn draw_colorbar(&mut self, colorbar: &Colorbar<'_>) -> Result<()> {
        self.calls.push(Call::Colorbar {
            colormap: colorbar.colormap.name().to_string(),
            range: colorbar.range,
            label: colorbar.label.to_string(),
        });
        Ok(())
    }

    fn set_aspect_ratio(&mut self, mode: AspectMode) -> Result<()> {
        self.calls.push(Call::SetAspect(mode));
        Ok(())
    }

    fn show(mut self) -> Result<Vec<Call>> {
        self.calls.push(Call::Show);
        Ok(self.calls)
    }
}

/// Colors of all fill calls, in order
pub fn fill_colors(calls: &[Call]) -> Vec<[u8; 4]> {
    calls
        .iter()
        .filter_map(|call| match call {
            Call::Fill { color, .. } => Some(*color),
            _ => None,
        })
        .collect()
}

/// All colorbar calls
pub fn colorbars(calls: &[Call]) -> Vec<&Call> {
    calls
        .iter()
        .filter(|call| matches!(call, Call::Colorbar { .. }))
        .collect()
}
