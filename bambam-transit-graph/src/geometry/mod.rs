mod geometry_encoder;
mod geometry_error;
mod survey_geometry;

pub use geometry_encoder::encode;
pub use geometry_error::GeometryError;
pub use survey_geometry::SurveyGeometry;
