use super::GeometryError;
use geo::Coord;
use serde_json::Value;

/// geometries found in the transit survey collections. stops are always
/// points, lines are stored as a single part or as a collection of parts.
#[derive(Debug, Clone, PartialEq)]
pub enum SurveyGeometry {
    Point(Coord<f64>),
    LineString(Vec<Coord<f64>>),
    MultiLineString(Vec<Vec<Coord<f64>>>),
}

impl SurveyGeometry {
    /// the GeoJSON type name of this geometry.
    pub fn type_name(&self) -> &'static str {
        match self {
            SurveyGeometry::Point(_) => "Point",
            SurveyGeometry::LineString(_) => "LineString",
            SurveyGeometry::MultiLineString(_) => "MultiLineString",
        }
    }

    /// builds a geometry from a GeoJSON type tag and the raw `coordinates`
    /// array of that geometry. the nesting depth of `coordinates` must match
    /// the type tag.
    pub fn from_coordinates(type_name: &str, coordinates: &Value) -> Result<Self, GeometryError> {
        match type_name {
            "Point" => coord_from_value(coordinates, "Point").map(SurveyGeometry::Point),
            "LineString" => {
                part_from_value(coordinates, "LineString").map(SurveyGeometry::LineString)
            }
            "MultiLineString" => {
                let parts = as_array(coordinates, "MultiLineString")?
                    .iter()
                    .map(|part| part_from_value(part, "MultiLineString"))
                    .collect::<Result<Vec<_>, _>>()?;
                if parts.is_empty() {
                    return Err(GeometryError::InvalidGeometry(
                        "MultiLineString",
                        String::from("geometry has no parts"),
                    ));
                }
                Ok(SurveyGeometry::MultiLineString(parts))
            }
            other => Err(GeometryError::UnsupportedGeometryType(other.to_string())),
        }
    }
}

impl TryFrom<&geojson::Geometry> for SurveyGeometry {
    type Error = GeometryError;

    fn try_from(geometry: &geojson::Geometry) -> Result<Self, Self::Error> {
        match &geometry.value {
            geojson::Value::Point(position) => {
                coord_from_position(position, "Point").map(SurveyGeometry::Point)
            }
            geojson::Value::LineString(positions) => {
                part_from_positions(positions, "LineString").map(SurveyGeometry::LineString)
            }
            geojson::Value::MultiLineString(parts) => {
                if parts.is_empty() {
                    return Err(GeometryError::InvalidGeometry(
                        "MultiLineString",
                        String::from("geometry has no parts"),
                    ));
                }
                let parts = parts
                    .iter()
                    .map(|part| part_from_positions(part, "MultiLineString"))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(SurveyGeometry::MultiLineString(parts))
            }
            other => Err(GeometryError::UnsupportedGeometryType(
                geojson_type_name(other).to_string(),
            )),
        }
    }
}

fn geojson_type_name(value: &geojson::Value) -> &'static str {
    match value {
        geojson::Value::Point(_) => "Point",
        geojson::Value::MultiPoint(_) => "MultiPoint",
        geojson::Value::LineString(_) => "LineString",
        geojson::Value::MultiLineString(_) => "MultiLineString",
        geojson::Value::Polygon(_) => "Polygon",
        geojson::Value::MultiPolygon(_) => "MultiPolygon",
        geojson::Value::GeometryCollection(_) => "GeometryCollection",
    }
}

/// only the first two ordinates (x, y) are kept, any altitude is dropped.
fn coord_from_position(position: &[f64], kind: &'static str) -> Result<Coord<f64>, GeometryError> {
    match position {
        [x, y, ..] if x.is_finite() && y.is_finite() => Ok(Coord { x: *x, y: *y }),
        [_, _, ..] => Err(GeometryError::InvalidGeometry(
            kind,
            format!("non-finite coordinate {position:?}"),
        )),
        _ => Err(GeometryError::InvalidGeometry(
            kind,
            format!("position {position:?} has fewer than two ordinates"),
        )),
    }
}

fn part_from_positions(
    positions: &[Vec<f64>],
    kind: &'static str,
) -> Result<Vec<Coord<f64>>, GeometryError> {
    if positions.is_empty() {
        return Err(GeometryError::InvalidGeometry(
            kind,
            String::from("line part has no positions"),
        ));
    }
    positions
        .iter()
        .map(|position| coord_from_position(position, kind))
        .collect()
}

fn as_array<'a>(value: &'a Value, kind: &'static str) -> Result<&'a Vec<Value>, GeometryError> {
    value.as_array().ok_or_else(|| {
        GeometryError::InvalidGeometry(kind, format!("expected an array, found '{value}'"))
    })
}

fn coord_from_value(value: &Value, kind: &'static str) -> Result<Coord<f64>, GeometryError> {
    let ordinates = as_array(value, kind)?
        .iter()
        .map(|v| {
            v.as_f64().ok_or_else(|| {
                GeometryError::InvalidGeometry(kind, format!("ordinate '{v}' is not a number"))
            })
        })
        .collect::<Result<Vec<f64>, _>>()?;
    coord_from_position(&ordinates, kind)
}

fn part_from_value(value: &Value, kind: &'static str) -> Result<Vec<Coord<f64>>, GeometryError> {
    let positions = as_array(value, kind)?;
    if positions.is_empty() {
        return Err(GeometryError::InvalidGeometry(
            kind,
            String::from("line part has no positions"),
        ));
    }
    positions
        .iter()
        .map(|position| coord_from_value(position, kind))
        .collect()
}

#[cfg(test)]
mod test {
    use super::SurveyGeometry;
    use crate::geometry::GeometryError;
    use geo::Coord;
    use serde_json::json;

    #[test]
    fn test_point_from_geojson_drops_altitude() {
        let geometry = geojson::Geometry::new(geojson::Value::Point(vec![9.19, 45.46, 120.0]));
        let result = SurveyGeometry::try_from(&geometry).expect("point should convert");
        assert_eq!(result, SurveyGeometry::Point(Coord { x: 9.19, y: 45.46 }));
    }

    #[test]
    fn test_multilinestring_from_raw_coordinates() {
        let coordinates = json!([[[1.0, 2.0], [3.0, 4.0]], [[5.0, 6.0]]]);
        let result = SurveyGeometry::from_coordinates("MultiLineString", &coordinates)
            .expect("multilinestring should convert");
        let expected = SurveyGeometry::MultiLineString(vec![
            vec![Coord { x: 1.0, y: 2.0 }, Coord { x: 3.0, y: 4.0 }],
            vec![Coord { x: 5.0, y: 6.0 }],
        ]);
        assert_eq!(result, expected);
    }

    #[test]
    fn test_wrong_nesting_depth_is_invalid() {
        // a LineString coordinate array tagged as MultiLineString
        let coordinates = json!([[1.0, 2.0], [3.0, 4.0]]);
        let result = SurveyGeometry::from_coordinates("MultiLineString", &coordinates);
        assert!(matches!(
            result,
            Err(GeometryError::InvalidGeometry("MultiLineString", _))
        ));
    }

    #[test]
    fn test_non_numeric_ordinate_is_invalid() {
        let coordinates = json!(["9.19", 45.46]);
        let result = SurveyGeometry::from_coordinates("Point", &coordinates);
        assert!(matches!(
            result,
            Err(GeometryError::InvalidGeometry("Point", _))
        ));
    }

    #[test]
    fn test_single_ordinate_point_is_invalid() {
        let geometry = geojson::Geometry::new(geojson::Value::Point(vec![9.19]));
        let result = SurveyGeometry::try_from(&geometry);
        assert!(matches!(
            result,
            Err(GeometryError::InvalidGeometry("Point", _))
        ));
    }

    #[test]
    fn test_polygon_is_unsupported() {
        let geometry = geojson::Geometry::new(geojson::Value::Polygon(vec![vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
            vec![0.0, 0.0],
        ]]));
        let result = SurveyGeometry::try_from(&geometry);
        assert_eq!(
            result,
            Err(GeometryError::UnsupportedGeometryType(String::from(
                "Polygon"
            )))
        );
    }
}
