//! Region data model.
//!
//! A region pairs a boundary geometry with the numeric attribute that drives
//! its fill color. Only polygons and multi-polygons can be filled; every
//! other geometry kind is rejected when the rings are resolved.

use geo::{Geometry, LineString, MultiPolygon, Polygon};
use serde::{Deserialize, Serialize};

use crate::error::{ChoroplethError, Result};

/// What to do with a region whose value is missing, NaN or infinite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingValuePolicy {
    /// Fail the whole render
    #[default]
    Reject,
    /// Leave the region out of the range computation and the drawing
    Skip,
}

/// A geographic region with the attribute value used for coloring
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Boundary of the region
    pub geometry: Geometry<f64>,
    /// Attribute value for the chosen column
    pub value: f64,
}

impl Region {
    /// Region with the given geometry and attribute value
    pub fn new(geometry: impl Into<Geometry<f64>>, value: f64) -> Self {
        Self {
            geometry: geometry.into(),
            value,
        }
    }

    /// Exterior rings to fill for this region.
    ///
    /// A polygon yields its exterior ring, a multi-polygon yields one exterior
    /// ring per member. Interior rings are not filled.
    pub fn rings(&self) -> Result<Vec<&LineString<f64>>> {
        match &self.geometry {
            Geometry::Polygon(polygon) => Ok(vec![polygon.exterior()]),
            Geometry::MultiPolygon(multi) => Ok(multi.iter().map(Polygon::exterior).collect()),
            other => Err(ChoroplethError::UnsupportedGeometry {
                kind: geometry_kind(other).to_string(),
            }),
        }
    }

    /// Number of polygon parts, or `None` for an unsupported geometry
    pub fn part_count(&self) -> Option<usize> {
        match &self.geometry {
            Geometry::Polygon(_) => Some(1),
            Geometry::MultiPolygon(MultiPolygon(parts)) => Some(parts.len()),
            _ => None,
        }
    }
}

/// Name of a geometry variant, as used in error messages
pub fn geometry_kind(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}
