use super::{property_ops::feature_label, InputError, GEOM_PROPERTY};
use crate::geometry::{self, GeometryError, SurveyGeometry};
use geojson::{Feature, FeatureCollection, GeoJson};
use kdam::tqdm;
use std::{path::Path, str::FromStr};

/// helper to read a FeatureCollection from a file
pub fn read_feature_collection(input_file: &Path) -> Result<FeatureCollection, InputError> {
    let filename = input_file.to_string_lossy().to_string();
    let contents = std::fs::read_to_string(input_file)
        .map_err(|e| InputError::ReadError(filename.clone(), e.to_string()))?;
    let dataset = GeoJson::from_str(&contents).map_err(|e| {
        InputError::ReadError(filename.clone(), format!("not a GeoJSON document: {e}"))
    })?;
    match dataset {
        GeoJson::FeatureCollection(feature_collection) => Ok(feature_collection),
        GeoJson::Geometry(_) => Err(InputError::ReadError(
            filename,
            String::from("expected a FeatureCollection but found a single 'Geometry'"),
        )),
        GeoJson::Feature(_) => Err(InputError::ReadError(
            filename,
            String::from("expected a FeatureCollection but found a single 'Feature'"),
        )),
    }
}

/// writes a collection as pretty-printed JSON. an existing file is only
/// replaced when `overwrite` is set; returns whether the file was written.
pub fn write_feature_collection(
    feature_collection: &FeatureCollection,
    output_file: &Path,
    overwrite: bool,
) -> Result<bool, InputError> {
    let filename = output_file.to_string_lossy().to_string();
    if output_file.exists() && !overwrite {
        log::warn!("{filename} exists and overwrite is not set, skipping");
        return Ok(false);
    }
    if let Some(parent) = output_file.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| InputError::WriteError(filename.clone(), e.to_string()))?;
        }
    }
    let contents = serde_json::to_string_pretty(feature_collection)
        .map_err(|e| InputError::WriteError(filename.clone(), e.to_string()))?;
    std::fs::write(output_file, contents)
        .map_err(|e| InputError::WriteError(filename, e.to_string()))?;
    Ok(true)
}

/// encodes the geometry of a feature and stores it in the `geom` property.
pub fn encode_feature_geometry(feature: &mut Feature) -> Result<String, InputError> {
    let encoded = feature
        .geometry
        .as_ref()
        .ok_or(GeometryError::MissingGeometry)
        .and_then(|g| SurveyGeometry::try_from(g))
        .and_then(|g| geometry::encode(&g))
        .map_err(|source| InputError::Geometry {
            feature: feature_label(feature),
            source,
        })?;
    feature.set_property(GEOM_PROPERTY, encoded.clone());
    Ok(encoded)
}

/// adds the `geom` property to every feature of a collection.
pub fn enrich_with_geometry(feature_collection: &mut FeatureCollection) -> Result<(), InputError> {
    let n_features = feature_collection.features.len();
    let iter = tqdm!(
        feature_collection.features.iter_mut(),
        total = n_features,
        desc = "encode geometries"
    );
    for feature in iter {
        encode_feature_geometry(feature)?;
    }
    eprintln!();
    Ok(())
}
