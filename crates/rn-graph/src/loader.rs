//! CSV graph loader.
//!
//! # CSV format
//!
//! Two files, both with a header row.  Nodes:
//!
//! ```csv
//! id,lat,lon
//! 101,39.9332,116.4554
//! 102,39.9340,116.4561
//! ```
//!
//! Edges, one row per undirected road segment:
//!
//! ```csv
//! u,v,length_m
//! 101,102,84.2
//! 102,103,
//! ```
//!
//! An empty `length_m` cell means the length is unknown.  Negative or
//! non-finite lengths are rejected.  Every edge endpoint must appear in the
//! node file.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use rn_core::{GeoPoint, NodeId};

use crate::graph::{RoadGraph, RoadGraphBuilder};
use crate::{GraphError, GraphResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct NodeRecord {
    id:  i64,
    lat: f64,
    lon: f64,
}

#[derive(Deserialize)]
struct EdgeRecord {
    u:        i64,
    v:        i64,
    length_m: Option<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a graph from a node CSV and an edge CSV.
pub fn load_graph_csv(nodes: &Path, edges: &Path) -> GraphResult<RoadGraph> {
    let node_file = std::fs::File::open(nodes)?;
    let edge_file = std::fs::File::open(edges)?;
    let graph = load_graph_reader(node_file, edge_file)?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        path = %nodes.display(),
        "road graph loaded"
    );
    Ok(graph)
}

/// Like [`load_graph_csv`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_graph_reader<N: Read, E: Read>(nodes: N, edges: E) -> GraphResult<RoadGraph> {
    let mut b = RoadGraphBuilder::new();

    let mut node_reader = csv::Reader::from_reader(nodes);
    for result in node_reader.deserialize::<NodeRecord>() {
        let row = result.map_err(|e| GraphError::Parse(e.to_string()))?;
        b.add_node(NodeId(row.id), GeoPoint::new(row.lat, row.lon))?;
    }

    let mut edge_reader = csv::Reader::from_reader(edges);
    for result in edge_reader.deserialize::<EdgeRecord>() {
        let row = result.map_err(|e| GraphError::Parse(e.to_string()))?;
        let length_m = row.length_m.map(check_length).transpose()?;
        b.add_edge(NodeId(row.u), NodeId(row.v), length_m)?;
    }

    Ok(b.build())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn check_length(m: f64) -> GraphResult<f64> {
    if m.is_finite() && m >= 0.0 {
        Ok(m)
    } else {
        Err(GraphError::Parse(format!(
            "invalid edge length {m}: expected a non-negative number of metres"
        )))
    }
}
