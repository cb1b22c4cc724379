//! GeoJSON marker export
//!
//! Writes the filtered records as a FeatureCollection of point features, one
//! marker per deposit, colored through the palette. This is the data contract
//! the map widget consumes: position, label fields for the info window, and
//! the resolved marker color.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use geojson::feature::Id;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;
use tracing::{info, warn};

use nedra::{Deposit, Palette};

/// Writes `deposits` as a GeoJSON FeatureCollection to `output_path`.
///
/// Records without coordinates are skipped with a warning; callers normally
/// pass an already-filtered set, which cannot contain any.
pub fn export_markers(deposits: &[&Deposit], palette: &Palette, output_path: &Path) -> Result<()> {
    let features: Vec<Feature> = deposits
        .iter()
        .filter_map(|deposit| match marker_feature(deposit, palette) {
            Some(feature) => Some(feature),
            None => {
                warn!(id = %deposit.id, "skipping marker without coordinates");
                None
            }
        })
        .collect();

    let collection = FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };

    let file = File::create(output_path).context(format!(
        "Failed to create file: {}",
        output_path.display()
    ))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &collection)?;
    writer.flush()?;

    info!(
        markers = collection.features.len(),
        path = %output_path.display(),
        "exported GeoJSON markers"
    );

    Ok(())
}

/// Builds one marker feature. GeoJSON positions are `[lng, lat]`.
fn marker_feature(deposit: &Deposit, palette: &Palette) -> Option<Feature> {
    let point: geo::Point = deposit.coordinates?.to_point();

    let mut properties = JsonObject::new();
    properties.insert("name".to_string(), json!(deposit.deposit_name));
    properties.insert(
        "concessionaire".to_string(),
        json!(deposit.concessionaire),
    );
    properties.insert("municipality".to_string(), json!(deposit.municipality));
    properties.insert("region".to_string(), json!(deposit.region));
    properties.insert("resource_type".to_string(), json!(deposit.resource_type));
    properties.insert("status".to_string(), json!(deposit.status));
    properties.insert(
        "confidence".to_string(),
        json!(deposit.confidence.as_str()),
    );
    properties.insert("color".to_string(), json!(palette.classify(deposit)));

    Some(Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(vec![point.x(), point.y()]))),
        id: Some(Id::String(deposit.id.clone())),
        properties: Some(properties),
        foreign_members: None,
    })
}
