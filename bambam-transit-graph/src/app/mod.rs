mod app_error;
mod import_pipeline;
mod import_summary;
mod operation;
mod transit_graph_app;

pub use app_error::TransitGraphAppError;
pub use import_pipeline::{run_import, ImportPipeline};
pub use import_summary::ImportSummary;
pub use operation::TransitGraphOperation;
pub use transit_graph_app::TransitGraphApp;
