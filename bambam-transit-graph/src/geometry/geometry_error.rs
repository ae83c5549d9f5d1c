use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("feature has no geometry")]
    MissingGeometry,
    #[error("unsupported geometry type '{0}', expected Point, LineString or MultiLineString")]
    UnsupportedGeometryType(String),
    #[error("invalid {0} geometry: {1}")]
    InvalidGeometry(&'static str, String),
}
