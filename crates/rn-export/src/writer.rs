//! JSON file writers.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::{ExportRecord, ExportResult, MapLayers};

/// File name conventionally used for the exported document.
pub const NETWORK_DATA_FILE: &str = "network_data.json";

/// Write `record` as a pretty-printed `network_data` document to `path`.
pub fn write_network_json(path: &Path, record: &ExportRecord) -> ExportResult<()> {
    write_pretty(path, &record.document())?;
    info!(
        path = %path.display(),
        nodes = record.node_count(),
        edge_entries = record.edges.len(),
        task_edges = record.task_edges.len(),
        "network data written"
    );
    Ok(())
}

/// Write `node_coords.json` and `network_edges.json` into `dir`, creating
/// it if needed.
pub fn write_map_layers(dir: &Path, layers: &MapLayers) -> ExportResult<()> {
    fs::create_dir_all(dir)?;
    write_pretty(&dir.join("node_coords.json"), &layers.nodes)?;
    write_pretty(&dir.join("network_edges.json"), &layers.edges)?;
    info!(
        dir = %dir.display(),
        nodes = layers.nodes.len(),
        edges = layers.edges.len(),
        "map layers written"
    );
    Ok(())
}

fn write_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> ExportResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, value)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
