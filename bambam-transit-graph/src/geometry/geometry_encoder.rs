use super::{GeometryError, SurveyGeometry};
use geo::Coord;
use itertools::Itertools;

/// writes the text encoding of a survey geometry, using the upper-cased
/// GeoJSON type name as keyword:
///
/// - `POINT(x y)`
/// - `LINESTRING((x1 y1,x2 y2,...))`, a single part wrapped like a multi-part geometry
/// - `MULTILINESTRING((x1 y1,...),(x1 y1,...))`
///
/// ordinates are written with the shortest representation that reads back
/// to the same `f64`, x (longitude) before y (latitude).
pub fn encode(geometry: &SurveyGeometry) -> Result<String, GeometryError> {
    let keyword = geometry.type_name().to_uppercase();
    let body = match geometry {
        SurveyGeometry::Point(coord) => encode_coord(coord, geometry.type_name())?,
        SurveyGeometry::LineString(part) => encode_part(part, geometry.type_name())?,
        SurveyGeometry::MultiLineString(parts) => {
            if parts.is_empty() {
                return Err(GeometryError::InvalidGeometry(
                    geometry.type_name(),
                    String::from("geometry has no parts"),
                ));
            }
            parts
                .iter()
                .map(|part| encode_part(part, geometry.type_name()))
                .collect::<Result<Vec<_>, _>>()?
                .join(",")
        }
    };
    Ok(format!("{keyword}({body})"))
}

fn encode_part(part: &[Coord<f64>], kind: &'static str) -> Result<String, GeometryError> {
    if part.is_empty() {
        return Err(GeometryError::InvalidGeometry(
            kind,
            String::from("line part has no positions"),
        ));
    }
    let coords = part
        .iter()
        .map(|coord| encode_coord(coord, kind))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!("({})", coords.iter().join(",")))
}

fn encode_coord(coord: &Coord<f64>, kind: &'static str) -> Result<String, GeometryError> {
    if !coord.x.is_finite() || !coord.y.is_finite() {
        return Err(GeometryError::InvalidGeometry(
            kind,
            format!("non-finite coordinate ({}, {})", coord.x, coord.y),
        ));
    }
    Ok(format!("{} {}", coord.x, coord.y))
}
