mod feature_collection_ops;
mod input_error;
mod line_feature;
mod property_ops;
mod schedule_feature;
mod stop_feature;

pub use feature_collection_ops::{
    encode_feature_geometry, enrich_with_geometry, read_feature_collection,
    write_feature_collection,
};
pub use input_error::InputError;
pub use line_feature::LineFeature;
pub use property_ops::feature_label;
pub use stop_feature::StopFeature;

/// property that receives the text encoding of a feature's geometry
pub const GEOM_PROPERTY: &str = "geom";
