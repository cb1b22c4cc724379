//! Export of filtered records for the map widget

pub mod geojson;
