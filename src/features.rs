//! GeoJSON input adapter.
//!
//! Turns a FeatureCollection into [`Region`]s by converting each feature's
//! geometry and reading one numeric property. The geometry kind is not
//! checked here; the renderer rejects anything it cannot fill.

use geo::Geometry;
use geojson::{Feature, GeoJson};
use serde_json::Value;
use tracing::warn;

use crate::error::{ChoroplethError, Result};
use crate::region::{MissingValuePolicy, Region};

/// Parse a GeoJSON document
pub fn parse_geojson(input: &str) -> Result<GeoJson> {
    Ok(input.parse::<GeoJson>()?)
}

/// Build regions from a Feature or FeatureCollection, reading `column` as the value.
///
/// Features without a geometry or without a finite numeric `column` are
/// handled according to `policy`. Numeric strings such as `"12.5"` are
/// accepted.
pub fn regions_from_geojson(
    geojson: &GeoJson,
    column: &str,
    policy: MissingValuePolicy,
) -> Result<Vec<Region>> {
    let features: Vec<&Feature> = match geojson {
        GeoJson::FeatureCollection(collection) => collection.features.iter().collect(),
        GeoJson::Feature(feature) => vec![feature],
        GeoJson::Geometry(_) => {
            return Err(ChoroplethError::InvalidParameter {
                param: "geojson".to_string(),
                message: "expected a Feature or FeatureCollection, found a bare Geometry"
                    .to_string(),
            });
        }
    };

    let mut regions = Vec::with_capacity(features.len());
    for (index, feature) in features.into_iter().enumerate() {
        match region_from_feature(feature, column)? {
            Some(region) => regions.push(region),
            None => match policy {
                MissingValuePolicy::Reject => {
                    return Err(ChoroplethError::MissingAttribute {
                        index,
                        column: column.to_string(),
                    });
                }
                MissingValuePolicy::Skip => {
                    warn!(
                        index = index,
                        column = column,
                        "Skipping feature without geometry or numeric value"
                    );
                }
            },
        }
    }

    Ok(regions)
}

fn region_from_feature(feature: &Feature, column: &str) -> Result<Option<Region>> {
    let Some(geometry) = &feature.geometry else {
        return Ok(None);
    };
    let Some(value) = numeric_property(feature, column) else {
        return Ok(None);
    };

    let geometry: Geometry<f64> = geometry.value.clone().try_into()?;
    Ok(Some(Region::new(geometry, value)))
}

fn numeric_property(feature: &Feature, column: &str) -> Option<f64> {
    let value = match feature.property(column)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    value.is_finite().then_some(value)
}
