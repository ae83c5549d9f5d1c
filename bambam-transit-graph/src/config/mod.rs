mod error_policy;
mod import_configuration;

pub use error_policy::ErrorPolicy;
pub use import_configuration::ImportConfiguration;
