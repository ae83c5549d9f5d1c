use super::{
    property_ops::{feature_label, get_i64, get_optional_string, get_string},
    InputError,
};
use crate::{
    geometry::{self, GeometryError, SurveyGeometry},
    graph::LineAttributes,
};
use geojson::Feature;

/// a line route as read from the line survey collection.
#[derive(Debug, Clone, PartialEq)]
pub struct LineFeature {
    pub id: i64,
    pub name: String,
    pub from: Option<String>,
    pub to: Option<String>,
    pub network: Option<String>,
    pub operator: Option<String>,
    pub geometry: SurveyGeometry,
}

impl LineFeature {
    pub fn to_attributes(&self) -> Result<LineAttributes, GeometryError> {
        Ok(LineAttributes {
            id: self.id,
            name: self.name.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
            network: self.network.clone(),
            operator: self.operator.clone(),
            geometry: geometry::encode(&self.geometry)?,
        })
    }
}

impl TryFrom<&Feature> for LineFeature {
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
        if matches!(geometry, SurveyGeometry::Point(_)) {
            return Err(geometry_error(GeometryError::UnsupportedGeometryType(
                geometry.type_name().to_string(),
            )));
        }

        Ok(LineFeature {
            id: get_i64(feature, "id")?,
            name: get_string(feature, "name")?,
            from: get_optional_string(feature, "from")?,
            to: get_optional_string(feature, "to")?,
            network: get_optional_string(feature, "network")?,
            operator: get_optional_string(feature, "operator")?,
            geometry,
        })
    }
}

#[cfg(test)]
mod test {
    use super::LineFeature;
    use crate::input::InputError;
    use geojson::Feature;
    use serde_json::json;

    #[test]
    fn test_line_feature_attributes() {
        let feature = Feature::from_json_value(json!({
            "type": "Feature",
            "geometry": {
                "type": "MultiLineString",
                "coordinates": [[[9.19, 45.46], [9.2, 45.47]], [[9.2, 45.47], [9.21, 45.48]]]
            },
            "properties": {
                "id": "90",
                "name": 90,
                "from": "Lotto",
                "to": "Lotto",
                "network": null,
                "operator": "ATM"
            }
        }))
        .expect("test invariant failed: invalid feature");
        let line = LineFeature::try_from(&feature).expect("should read line");
        assert_eq!(line.id, 90);
        assert_eq!(line.name, "90");
        assert_eq!(line.network, None);

        let attributes = line.to_attributes().expect("should encode");
        assert_eq!(
            attributes.geometry,
            "MULTILINESTRING((9.19 45.46,9.2 45.47),(9.2 45.47,9.21 45.48))"
        );
    }

    #[test]
    fn test_line_missing_name() {
        let feature = Feature::from_json_value(json!({
            "type": "Feature",
            "geometry": { "type": "LineString", "coordinates": [[9.19, 45.46], [9.2, 45.47]] },
            "properties": { "id": 90 }
        }))
        .expect("test invariant failed: invalid feature");
        let result = LineFeature::try_from(&feature);
        assert!(matches!(
            result,
            Err(InputError::MissingProperty { property, .. }) if property == "name"
        ));
    }
}
