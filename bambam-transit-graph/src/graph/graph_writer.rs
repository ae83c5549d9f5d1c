use super::{
    attributes::from_properties, EdgeKind, EdgeRecord, GraphError, GraphStore, InMemoryGraphStore,
    LineAttributes, MembershipAttributes, NodeLabel, NodeRecord, SequenceAttributes,
    StopAttributes,
};
use chrono::NaiveTime;
use csv::QuoteStyle;
use flate2::{write::GzEncoder, Compression};
use kdam::tqdm;
use serde::{Deserialize, Serialize};
use std::{fs::File, path::Path};

pub trait GraphWriter {
    /// writes one gzip-compressed CSV file per node label and edge kind
    /// into a shared directory, for bulk loading into a graph database.
    fn write_graph(&self, output_directory: &Path, overwrite: bool) -> Result<(), GraphError>;
}

pub mod filenames {
    pub const STOPS: &str = "stops.csv.gz";
    pub const LINES: &str = "lines.csv.gz";
    pub const STOP_IN: &str = "stop-in.csv.gz";
    pub const LINEA_ID: &str = "linea-id.csv.gz";
}

#[derive(Debug, Serialize, Deserialize)]
struct StopRow {
    node_id: usize,
    id: i64,
    name: String,
    lat: f64,
    lon: f64,
    strada_id: Option<String>,
    l_array: Option<String>,
    geometry: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct LineRow {
    node_id: usize,
    id: i64,
    name: String,
    from: Option<String>,
    to: Option<String>,
    network: Option<String>,
    operator: Option<String>,
    geometry: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct StopInRow {
    edge_id: usize,
    line: String,
    stop: String,
    sequence: i64,
    run: NaiveTime,
}

#[derive(Debug, Serialize, Deserialize)]
struct LineaIdRow {
    edge_id: usize,
    origin: String,
    destination: String,
    duration: i64,
    line_id: i64,
}

impl GraphWriter for InMemoryGraphStore {
    fn write_graph(&self, output_directory: &Path, overwrite: bool) -> Result<(), GraphError> {
        if !output_directory.is_dir() && std::fs::create_dir_all(output_directory).is_err() {
            let dirname = output_directory.as_os_str().to_string_lossy();
            return Err(GraphError::InternalError(format!(
                "unable to create directory {}",
                &dirname
            )));
        }

        if let Some(mut writer) = create_writer(output_directory, filenames::STOPS, overwrite)? {
            let stops = self.nodes_with_label(NodeLabel::Stop).collect::<Vec<_>>();
            for node in tqdm!(stops.into_iter(), desc = "write stop nodes") {
                let row = stop_row(node)?;
                writer
                    .serialize(row)
                    .map_err(|e| GraphError::CsvWriteError(String::from(filenames::STOPS), e))?;
            }
            flush(writer, filenames::STOPS)?;
        }

        if let Some(mut writer) = create_writer(output_directory, filenames::LINES, overwrite)? {
            for node in self.nodes_with_label(NodeLabel::Line) {
                let row = line_row(node)?;
                writer
                    .serialize(row)
                    .map_err(|e| GraphError::CsvWriteError(String::from(filenames::LINES), e))?;
            }
            flush(writer, filenames::LINES)?;
        }

        if let Some(mut writer) = create_writer(output_directory, filenames::STOP_IN, overwrite)? {
            let edges = self.edges_of_kind(EdgeKind::StopIn).collect::<Vec<_>>();
            for edge in tqdm!(edges.into_iter(), desc = "write STOP_IN edges") {
                let membership: MembershipAttributes = from_properties(&edge.properties)?;
                let (line, stop) = self.endpoint_keys(edge)?;
                let row = StopInRow {
                    edge_id: edge.edge_id.0,
                    line,
                    stop,
                    sequence: membership.sequence,
                    run: membership.run,
                };
                writer.serialize(row).map_err(|e| {
                    GraphError::CsvWriteError(String::from(filenames::STOP_IN), e)
                })?;
            }
            flush(writer, filenames::STOP_IN)?;
        }

        if let Some(mut writer) = create_writer(output_directory, filenames::LINEA_ID, overwrite)?
        {
            let edges = self.edges_of_kind(EdgeKind::LineaId).collect::<Vec<_>>();
            for edge in tqdm!(edges.into_iter(), desc = "write LINEA_ID edges") {
                let sequence: SequenceAttributes = from_properties(&edge.properties)?;
                let (origin, destination) = self.endpoint_keys(edge)?;
                let row = LineaIdRow {
                    edge_id: edge.edge_id.0,
                    origin,
                    destination,
                    duration: sequence.duration,
                    line_id: sequence.line_id,
                };
                writer.serialize(row).map_err(|e| {
                    GraphError::CsvWriteError(String::from(filenames::LINEA_ID), e)
                })?;
            }
            flush(writer, filenames::LINEA_ID)?;
        }

        Ok(())
    }
}

impl InMemoryGraphStore {
    /// natural keys of the source and destination node of an edge
    fn endpoint_keys(&self, edge: &EdgeRecord) -> Result<(String, String), GraphError> {
        let src = self
            .node(edge.src)
            .ok_or(GraphError::GraphMissingNodeId(edge.src))?;
        let dst = self
            .node(edge.dst)
            .ok_or(GraphError::GraphMissingNodeId(edge.dst))?;
        Ok((src.key.clone(), dst.key.clone()))
    }
}

fn stop_row(node: &NodeRecord) -> Result<StopRow, GraphError> {
    let stop: StopAttributes = from_properties(&node.properties)?;
    Ok(StopRow {
        node_id: node.node_id.0,
        id: stop.id,
        name: node.key.clone(),
        lat: stop.lat,
        lon: stop.lon,
        strada_id: stop.strada_id.map(|v| v.to_string()),
        l_array: stop.l_array.map(|v| v.to_string()),
        geometry: stop.geometry,
    })
}

fn line_row(node: &NodeRecord) -> Result<LineRow, GraphError> {
    let line: LineAttributes = from_properties(&node.properties)?;
    Ok(LineRow {
        node_id: node.node_id.0,
        id: line.id,
        name: node.key.clone(),
        from: line.from,
        to: line.to,
        network: line.network,
        operator: line.operator,
        geometry: line.geometry,
    })
}

fn create_writer(
    directory: &Path,
    filename: &str,
    overwrite: bool,
) -> Result<Option<csv::Writer<GzEncoder<File>>>, GraphError> {
    let filepath = directory.join(filename);
    if filepath.exists() && !overwrite {
        log::warn!(
            "{} exists and overwrite is not set, skipping",
            filepath.to_string_lossy()
        );
        return Ok(None);
    }
    let file = File::create(&filepath).map_err(|e| {
        GraphError::InternalError(format!(
            "unable to create file {}: {e}",
            filepath.to_string_lossy()
        ))
    })?;
    let buffer = GzEncoder::new(file, Compression::default());
    let writer = csv::WriterBuilder::new()
        .has_headers(true)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(buffer);
    Ok(Some(writer))
}

/// flushes the CSV buffer and finishes the gzip stream.
fn flush(writer: csv::Writer<GzEncoder<File>>, filename: &str) -> Result<(), GraphError> {
    let encoder = writer.into_inner().map_err(|e| {
        GraphError::InternalError(format!("failure flushing {filename}: {}", e.error()))
    })?;
    encoder
        .finish()
        .map_err(|e| GraphError::InternalError(format!("failure finishing {filename}: {e}")))?;
    Ok(())
}
