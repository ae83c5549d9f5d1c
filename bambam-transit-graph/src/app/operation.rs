use super::{run_import, TransitGraphAppError};
use crate::{
    config::{ErrorPolicy, ImportConfiguration},
    graph::MidnightCrossingPolicy,
    input::{enrich_with_geometry, read_feature_collection, write_feature_collection},
};
use clap::Subcommand;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum TransitGraphOperation {
    /// write the text encoding of each feature geometry of a stop or line
    /// collection into its `geom` property
    Geometry {
        /// GeoJSON FeatureCollection of stops or lines
        #[arg(long)]
        input: String,
        /// output path for the enriched collection
        #[arg(long)]
        output: String,
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
    /// build the transit graph from the stop, line and schedule collections
    Import {
        #[arg(long, help = "GeoJSON FeatureCollection of stops")]
        stops_file: String,
        #[arg(long, help = "GeoJSON FeatureCollection of lines")]
        lines_file: String,
        #[arg(long, help = "GeoJSON FeatureCollection of line/stop schedule records")]
        schedule_file: String,
        #[arg(long, help = "output path for enriched collections and graph files")]
        output_directory: String,
        #[arg(long, help = "path to .toml or .json file with import parameters")]
        configuration_file: Option<String>,
        /// overrides the configured midnight crossing policy
        #[arg(long, value_enum)]
        midnight_crossing_policy: Option<MidnightCrossingPolicy>,
        /// overrides the configured error policy
        #[arg(long, value_enum)]
        error_policy: Option<ErrorPolicy>,
        /// replace existing output files
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
}

impl TransitGraphOperation {
    pub fn run(&self) -> Result<(), TransitGraphAppError> {
        match self {
            TransitGraphOperation::Geometry {
                input,
                output,
                overwrite,
            } => {
                let mut collection = read_feature_collection(Path::new(input))?;
                enrich_with_geometry(&mut collection)?;
                if write_feature_collection(&collection, Path::new(output), *overwrite)? {
                    log::info!(
                        "wrote {} features with geometry encoding to {output}",
                        collection.features.len()
                    );
                }
                Ok(())
            }
            TransitGraphOperation::Import {
                stops_file,
                lines_file,
                schedule_file,
                output_directory,
                configuration_file,
                midnight_crossing_policy,
                error_policy,
                overwrite,
            } => {
                let mut conf = match configuration_file {
                    None => Ok(ImportConfiguration::default()),
                    Some(f) => {
                        log::info!("reading import configuration from {f}");
                        ImportConfiguration::try_from(f)
                    }
                }?;
                if let Some(policy) = midnight_crossing_policy {
                    conf.midnight_crossing_policy = *policy;
                }
                if let Some(policy) = error_policy {
                    conf.error_policy = *policy;
                }
                conf.overwrite = conf.overwrite || *overwrite;

                let summary = run_import(
                    Path::new(stops_file),
                    Path::new(lines_file),
                    Path::new(schedule_file),
                    Path::new(output_directory),
                    conf,
                )?;
                log::info!("import summary\n{summary}");
                println!("{}", serde_json::to_string_pretty(&summary)?);
                Ok(())
            }
        }
    }
}
