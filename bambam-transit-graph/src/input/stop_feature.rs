use super::{
    property_ops::{feature_label, get_f64, get_i64, get_optional_value, get_string},
    InputError,
};
use crate::{
    geometry::{self, GeometryError, SurveyGeometry},
    graph::StopAttributes,
};
use geojson::Feature;
use serde_json::Value;

/// a stop as read from the stop survey collection.
#[derive(Debug, Clone, PartialEq)]
pub struct StopFeature {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub strada_id: Option<Value>,
    pub l_array: Option<Value>,
    pub geometry: SurveyGeometry,
}

impl StopFeature {
    /// node attributes of this stop, with the point encoded as text.
    pub fn to_attributes(&self) -> Result<StopAttributes, GeometryError> {
        Ok(StopAttributes {
            id: self.id,
            name: self.name.clone(),
            lat: self.latitude,
            lon: self.longitude,
            strada_id: self.strada_id.clone(),
            l_array: self.l_array.clone(),
            geometry: geometry::encode(&self.geometry)?,
        })
    }
}

impl TryFrom<&Feature> for StopFeature {
    type Error = InputError;

    fn try_from(feature: &Feature) -> Result<Self, Self::Error> {
        let geometry_error = |source| InputError::Geometry {
            feature: feature_label(feature),
            source,
        };
        let raw = feature
            .geometry
            .as_ref()
            .ok_or_else(|| geometry_error(GeometryError::MissingGeometry))?;
        let geometry = SurveyGeometry::try_from(raw).map_err(geometry_error)?;
        if !matches!(geometry, SurveyGeometry::Point(_)) {
            return Err(geometry_error(GeometryError::UnsupportedGeometryType(
                geometry.type_name().to_string(),
            )));
        }

        Ok(StopFeature {
            id: get_i64(feature, "id")?,
            name: get_string(feature, "name")?,
            latitude: get_f64(feature, "latitude")?,
            longitude: get_f64(feature, "longitude")?,
            strada_id: get_optional_value(feature, "strada_id"),
            l_array: get_optional_value(feature, "l_array"),
            geometry,
        })
    }
}
