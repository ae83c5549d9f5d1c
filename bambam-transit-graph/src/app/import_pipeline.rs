use super::{ImportSummary, TransitGraphAppError};
use crate::{
    config::{ErrorPolicy, ImportConfiguration},
    graph::{GraphUpsertModel, GraphWriter, InMemoryGraphStore},
    input::{self, InputError, LineFeature, StopFeature, GEOM_PROPERTY},
    schedule::{ScheduleNormalizer, ScheduleRecord},
};
use geojson::{Feature, FeatureCollection};
use kdam::tqdm;
use std::path::Path;

/// names of the enriched survey collections written next to the graph export
pub mod filenames {
    pub const STOPS_GEOM: &str = "stops-geom.json";
    pub const LINES_GEOM: &str = "lines-geom.json";
}

/// the three-pass import of survey collections into a transit graph:
///
/// 1. stop and line nodes
/// 2. `STOP_IN` edges from the schedule records
/// 3. `LINEA_ID` edges between consecutive stops of each line
///
/// failing records either abort the import or are skipped, depending on
/// the [`ErrorPolicy`] of the configuration.
pub struct ImportPipeline {
    configuration: ImportConfiguration,
    model: GraphUpsertModel<InMemoryGraphStore>,
    summary: ImportSummary,
}

impl ImportPipeline {
    pub fn new(configuration: ImportConfiguration) -> ImportPipeline {
        let model = GraphUpsertModel::new(
            InMemoryGraphStore::new(),
            configuration.midnight_crossing_policy,
        );
        ImportPipeline {
            configuration,
            model,
            summary: ImportSummary::default(),
        }
    }

    pub fn summary(&self) -> &ImportSummary {
        &self.summary
    }

    pub fn store(&self) -> &InMemoryGraphStore {
        self.model.store()
    }

    pub fn into_store(self) -> InMemoryGraphStore {
        self.model.into_store()
    }

    /// creates a stop node per feature and adds the `geom` property to
    /// each feature that was read successfully.
    pub fn import_stops(&mut self, stops: &mut FeatureCollection) -> Result<(), TransitGraphAppError> {
        let n_features = stops.features.len();
        for feature in tqdm!(stops.features.iter_mut(), total = n_features, desc = "import stops") {
            match self.import_stop(feature) {
                Ok(_) => {}
                Err(e) => self.recover(e)?,
            }
        }
        eprintln!();
        log::info!(
            "imported stops: {} created, {} existing",
            self.summary.stops_created,
            self.summary.stops_existing
        );
        Ok(())
    }

    /// creates a line node per feature and adds the `geom` property to
    /// each feature that was read successfully.
    pub fn import_lines(&mut self, lines: &mut FeatureCollection) -> Result<(), TransitGraphAppError> {
        let n_features = lines.features.len();
        for feature in tqdm!(lines.features.iter_mut(), total = n_features, desc = "import lines") {
            match self.import_line(feature) {
                Ok(_) => {}
                Err(e) => self.recover(e)?,
            }
        }
        eprintln!();
        log::info!(
            "imported lines: {} created, {} existing",
            self.summary.lines_created,
            self.summary.lines_existing
        );
        Ok(())
    }

    /// reads the schedule records and links each line to the stops it
    /// serves. returns the records that were read, for the sequence pass.
    pub fn import_memberships(
        &mut self,
        schedule: &FeatureCollection,
    ) -> Result<Vec<ScheduleRecord>, TransitGraphAppError> {
        let mut records = Vec::with_capacity(schedule.features.len());
        let iter = tqdm!(
            schedule.features.iter(),
            total = schedule.features.len(),
            desc = "import STOP_IN edges"
        );
        for feature in iter {
            let record = match ScheduleRecord::try_from(feature) {
                Ok(record) => record,
                Err(e) => {
                    self.recover(e.into())?;
                    continue;
                }
            };
            match self.model.upsert_membership(
                record.line_id,
                record.stop_id,
                record.sequence,
                record.run,
            ) {
                Ok(outcome) => self.summary.add_membership(&outcome),
                Err(e) => self.recover(e.into())?,
            }
            records.push(record);
        }
        eprintln!();
        log::info!(
            "imported STOP_IN edges: {} created, {} existing",
            self.summary.memberships_created,
            self.summary.memberships_existing
        );
        Ok(records)
    }

    /// links consecutive stops of each line with their travel time.
    pub fn import_sequence_edges(
        &mut self,
        records: &[ScheduleRecord],
    ) -> Result<(), TransitGraphAppError> {
        let normalizer = ScheduleNormalizer::new(self.configuration.parallelize);
        let legs = normalizer.legs(records);
        let n_legs = legs.len();
        for leg in tqdm!(legs.into_iter(), total = n_legs, desc = "import LINEA_ID edges") {
            match self.model.upsert_sequence_edge(
                leg.origin_stop_id,
                leg.destination_stop_id,
                leg.line_id,
            ) {
                Ok(outcome) => self.summary.add_sequence_edge(&outcome),
                Err(e) => {
                    log::debug!("failed leg {leg}");
                    self.recover(e.into())?
                }
            }
        }
        eprintln!();
        log::info!(
            "imported LINEA_ID edges: {} created, {} existing",
            self.summary.sequence_edges_created,
            self.summary.sequence_edges_existing
        );
        Ok(())
    }

    fn import_stop(&mut self, feature: &mut Feature) -> Result<(), TransitGraphAppError> {
        let stop = StopFeature::try_from(&*feature)?;
        let attributes = stop.to_attributes().map_err(|source| InputError::Geometry {
            feature: input::feature_label(feature),
            source,
        })?;
        feature.set_property(GEOM_PROPERTY, attributes.geometry.clone());
        let outcome = self.model.upsert_stop(&stop.name, &attributes)?;
        self.summary.add_stop(&outcome);
        Ok(())
    }

    fn import_line(&mut self, feature: &mut Feature) -> Result<(), TransitGraphAppError> {
        let line = LineFeature::try_from(&*feature)?;
        let attributes = line.to_attributes().map_err(|source| InputError::Geometry {
            feature: input::feature_label(feature),
            source,
        })?;
        feature.set_property(GEOM_PROPERTY, attributes.geometry.clone());
        let outcome = self.model.upsert_line(&line.name, &attributes)?;
        self.summary.add_line(&outcome);
        Ok(())
    }

    fn recover(&mut self, error: TransitGraphAppError) -> Result<(), TransitGraphAppError> {
        match self.configuration.error_policy {
            ErrorPolicy::Fail => Err(error),
            ErrorPolicy::Skip => {
                log::warn!("skipping record: {error}");
                self.summary.records_skipped += 1;
                Ok(())
            }
        }
    }
}

/// runs the full import: reads the three survey collections, builds the
/// graph, then writes the enriched stop and line collections and the graph
/// export into the output directory.
pub fn run_import(
    stops_file: &Path,
    lines_file: &Path,
    schedule_file: &Path,
    output_directory: &Path,
    configuration: ImportConfiguration,
) -> Result<ImportSummary, TransitGraphAppError> {
    let mut stops = input::read_feature_collection(stops_file)?;
    let mut lines = input::read_feature_collection(lines_file)?;
    let schedule = input::read_feature_collection(schedule_file)?;
    log::info!(
        "read {} stops, {} lines and {} schedule records",
        stops.features.len(),
        lines.features.len(),
        schedule.features.len()
    );

    let overwrite = configuration.overwrite;
    let mut pipeline = ImportPipeline::new(configuration);
    pipeline.import_stops(&mut stops)?;
    pipeline.import_lines(&mut lines)?;
    let records = pipeline.import_memberships(&schedule)?;
    pipeline.import_sequence_edges(&records)?;

    std::fs::create_dir_all(output_directory)?;
    input::write_feature_collection(
        &stops,
        &output_directory.join(filenames::STOPS_GEOM),
        overwrite,
    )?;
    input::write_feature_collection(
        &lines,
        &output_directory.join(filenames::LINES_GEOM),
        overwrite,
    )?;
    pipeline.store().write_graph(output_directory, overwrite)?;

    Ok(pipeline.summary().clone())
}

#[cfg(test)]
mod test {
    use super::{filenames, run_import, ImportPipeline};
    use crate::{
        app::TransitGraphAppError,
        config::{ErrorPolicy, ImportConfiguration},
        graph::{self, fieldname, EdgeKind, GraphError, GraphStore, NodeLabel},
        input::GEOM_PROPERTY,
    };
    use geojson::FeatureCollection;
    use serde_json::{json, Value};

    fn collection(features: Vec<Value>) -> FeatureCollection {
        serde_json::from_value(json!({ "type": "FeatureCollection", "features": features }))
            .expect("test invariant failed: invalid collection")
    }

    fn stop(id: i64, name: &str, x: f64, y: f64) -> Value {
        json!({
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [x, y] },
            "properties": {
                "id": id,
                "name": name,
                "latitude": y,
                "longitude": x,
                "strada_id": null,
                "l_array": [id]
            }
        })
    }

    fn schedule_record(line_id: i64, stop_id: i64, sequence: i64, run: &str) -> Value {
        json!({
            "type": "Feature",
            "geometry": null,
            "properties": { "id": line_id, "stop_id": stop_id, "sequenza": sequence, "corsa": run }
        })
    }

    fn mock_stops() -> FeatureCollection {
        collection(vec![
            stop(1, "A", 9.0, 45.0),
            stop(2, "B", 9.5, 45.25),
            stop(3, "C", 10.0, 45.5),
        ])
    }

    fn mock_lines() -> FeatureCollection {
        collection(vec![json!({
            "type": "Feature",
            "geometry": {
                "type": "MultiLineString",
                "coordinates": [[[9.5, 45.25], [9.0, 45.0]], [[9.0, 45.0], [10.0, 45.5]]]
            },
            "properties": {
                "id": 10,
                "name": "L",
                "from": "B",
                "to": "C",
                "network": "urbano",
                "operator": "ATM"
            }
        })])
    }

    fn mock_schedule() -> FeatureCollection {
        collection(vec![
            schedule_record(10, 1, 2, "08:00"),
            schedule_record(10, 2, 1, "07:50"),
            schedule_record(10, 3, 3, "08:20"),
        ])
    }

    fn duration(pipeline: &ImportPipeline, origin: &str, destination: &str) -> Option<i64> {
        let store = pipeline.store();
        let src = store.find_node(NodeLabel::Stop, origin)?;
        let dst = store.find_node(NodeLabel::Stop, destination)?;
        let edge_id = store.find_edge(EdgeKind::LineaId, src, dst)?;
        store
            .edge(edge_id)?
            .properties
            .get(fieldname::DURATION)?
            .as_i64()
    }

    fn run_passes(
        pipeline: &mut ImportPipeline,
        schedule: &FeatureCollection,
    ) -> Result<(), TransitGraphAppError> {
        pipeline.import_stops(&mut mock_stops())?;
        pipeline.import_lines(&mut mock_lines())?;
        let records = pipeline.import_memberships(schedule)?;
        pipeline.import_sequence_edges(&records)
    }

    #[test]
    fn test_three_pass_import() {
        let mut pipeline = ImportPipeline::new(ImportConfiguration::default());
        run_passes(&mut pipeline, &mock_schedule()).expect("import should succeed");

        assert_eq!(duration(&pipeline, "B", "A"), Some(10));
        assert_eq!(duration(&pipeline, "A", "C"), Some(20));
        assert_eq!(duration(&pipeline, "A", "B"), None);

        let summary = pipeline.summary();
        assert_eq!(summary.stops_created, 3);
        assert_eq!(summary.lines_created, 1);
        assert_eq!(summary.memberships_created, 3);
        assert_eq!(summary.sequence_edges_created, 2);
        assert_eq!(summary.records_skipped, 0);
    }

    #[test]
    fn test_repeated_runs_collapse_onto_first_write() {
        // a second run of line 10 at 09:00, 08:50, 09:20
        let schedule = collection(vec![
            schedule_record(10, 1, 2, "08:00"),
            schedule_record(10, 2, 1, "07:50"),
            schedule_record(10, 3, 3, "08:20"),
            schedule_record(10, 1, 2, "09:00"),
            schedule_record(10, 2, 1, "08:50"),
            schedule_record(10, 3, 3, "09:30"),
        ]);
        let mut pipeline = ImportPipeline::new(ImportConfiguration::default());
        run_passes(&mut pipeline, &schedule).expect("import should succeed");

        let summary = pipeline.summary();
        assert_eq!(summary.memberships_created, 3);
        assert_eq!(summary.memberships_existing, 3);
        assert_eq!(duration(&pipeline, "A", "C"), Some(20));
        assert_eq!(
            pipeline.store().edges_of_kind(EdgeKind::LineaId).count(),
            2,
            "legs between the same stops of different runs share one edge"
        );
    }

    #[test]
    fn test_fail_policy_aborts_on_unknown_stop() {
        let schedule = collection(vec![
            schedule_record(10, 1, 1, "08:00"),
            schedule_record(10, 99, 2, "08:10"),
        ]);
        let mut pipeline = ImportPipeline::new(ImportConfiguration::default());
        let result = run_passes(&mut pipeline, &schedule);
        assert!(matches!(
            result,
            Err(TransitGraphAppError::GraphError {
                source: GraphError::MissingEndpoint { id: 99, .. }
            })
        ));
    }

    #[test]
    fn test_skip_policy_counts_failures() {
        let schedule = collection(vec![
            schedule_record(10, 1, 1, "08:00"),
            schedule_record(10, 99, 2, "08:10"),
            schedule_record(10, 3, 3, "not a time"),
            schedule_record(10, 2, 4, "08:30"),
        ]);
        let configuration = ImportConfiguration {
            error_policy: ErrorPolicy::Skip,
            ..Default::default()
        };
        let mut pipeline = ImportPipeline::new(configuration);
        run_passes(&mut pipeline, &schedule).expect("skip policy should not fail");

        // stop 99 fails as a membership and in both of its legs, the
        // record with an invalid run time is never read
        let summary = pipeline.summary();
        assert_eq!(summary.memberships_created, 2);
        assert_eq!(summary.sequence_edges_created, 0);
        assert_eq!(summary.records_skipped, 4);
    }

    #[test]
    fn test_midnight_crossing_is_rejected_by_default() {
        let schedule = collection(vec![
            schedule_record(10, 1, 1, "23:55"),
            schedule_record(10, 2, 2, "00:05"),
        ]);
        let mut pipeline = ImportPipeline::new(ImportConfiguration::default());
        let result = run_passes(&mut pipeline, &schedule);
        assert!(matches!(
            result,
            Err(TransitGraphAppError::GraphError {
                source: GraphError::NegativeDuration { minutes: -1430, .. }
            })
        ));
    }

    #[test]
    fn test_run_import_writes_outputs() {
        let directory = std::env::temp_dir().join("bambam-transit-graph-import-test");
        std::fs::create_dir_all(&directory).expect("should create temp directory");
        let write = |name: &str, fc: FeatureCollection| {
            let path = directory.join(name);
            let contents = serde_json::to_string(&fc).expect("should encode fixture");
            std::fs::write(&path, contents).expect("should write fixture");
            path
        };
        let stops_file = write("fer.json", mock_stops());
        let lines_file = write("linee.json", mock_lines());
        let schedule_file = write("linee_fer_orario.json", mock_schedule());
        let output_directory = directory.join("out");

        let configuration = ImportConfiguration {
            overwrite: true,
            parallelize: false,
            ..Default::default()
        };
        let summary = run_import(
            &stops_file,
            &lines_file,
            &schedule_file,
            &output_directory,
            configuration,
        )
        .expect("import should succeed");
        assert_eq!(summary.sequence_edges_created, 2);

        let enriched = crate::input::read_feature_collection(
            &output_directory.join(filenames::STOPS_GEOM),
        )
        .expect("enriched stops should be written");
        assert_eq!(
            enriched.features[1].property(GEOM_PROPERTY),
            Some(&json!("POINT(9.5 45.25)"))
        );
        let lines = crate::input::read_feature_collection(
            &output_directory.join(filenames::LINES_GEOM),
        )
        .expect("enriched lines should be written");
        assert_eq!(
            lines.features[0].property(GEOM_PROPERTY),
            Some(&json!("MULTILINESTRING((9.5 45.25,9 45),(9 45,10 45.5))"))
        );
        for filename in [
            graph::filenames::STOPS,
            graph::filenames::LINES,
            graph::filenames::STOP_IN,
            graph::filenames::LINEA_ID,
        ] {
            assert!(output_directory.join(filename).exists(), "{filename}");
        }
    }
}
