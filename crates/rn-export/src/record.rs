//! Dense-index export record.
//!
//! Node ids are renumbered `0..n` in the graph's node iteration order
//! (insertion order).  The serialized form is
//!
//! ```text
//! { "network_data": [ [[lon, lat], …],
//!                     [[from, to, length_km], …],   // 2 per undirected edge
//!                     [[from, to], …] ] }           // 1 per task edge
//! ```

use rustc_hash::FxHashMap;
use serde::Serialize;

use rn_core::NodeId;
use rn_graph::{RoadGraph, TaskEdgeSet};

use crate::{ExportError, ExportResult};

/// Length assumed for an edge whose source supplied none.
pub const DEFAULT_EDGE_LENGTH_M: f64 = 1.0;

/// One directed edge entry: `(from index, to index, length in km)`.
pub type EdgeTriple = (u32, u32, f64);

/// The exported network.
#[derive(Clone, Debug)]
pub struct ExportRecord {
    /// Dense index → source node id.
    node_ids: Vec<NodeId>,
    index_of: FxHashMap<NodeId, u32>,
    /// `[lon, lat]` per dense index.
    pub node_coords: Vec<[f64; 2]>,
    pub edges:       Vec<EdgeTriple>,
    pub task_edges:  Vec<[u32; 2]>,
}

/// Borrowed, serializable view of an [`ExportRecord`].
#[derive(Serialize)]
pub struct NetworkDocument<'a> {
    network_data: (&'a [[f64; 2]], &'a [EdgeTriple], &'a [[u32; 2]]),
}

impl ExportRecord {
    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    /// Dense index assigned to `id`.
    pub fn index_of(&self, id: NodeId) -> Option<u32> {
        self.index_of.get(&id).copied()
    }

    /// Source node id behind dense index `index`.
    pub fn node_id(&self, index: u32) -> Option<NodeId> {
        self.node_ids.get(index as usize).copied()
    }

    /// Dense index → node id, in index order.
    pub fn node_ids(&self) -> &[NodeId] {
        &self.node_ids
    }

    pub fn document(&self) -> NetworkDocument<'_> {
        NetworkDocument {
            network_data: (&self.node_coords, &self.edges, &self.task_edges),
        }
    }
}

/// Renumber `graph` and serialize it together with `tasks`.
///
/// Each undirected edge contributes `[u, v, km]` followed by `[v, u, km]`.
/// Task edges are written once, in the orientation the set stores.  Fails
/// on an empty graph or on a task edge whose endpoint is not in `graph`.
pub fn export(graph: &RoadGraph, tasks: &TaskEdgeSet) -> ExportResult<ExportRecord> {
    if graph.is_empty() {
        return Err(ExportError::EmptyGraph);
    }

    let n = graph.node_count();
    let mut node_ids = Vec::with_capacity(n);
    let mut node_coords = Vec::with_capacity(n);
    let mut index_of = FxHashMap::default();
    index_of.reserve(n);

    for (i, (id, pos)) in graph.node_positions().enumerate() {
        node_ids.push(id);
        node_coords.push(pos.lon_lat());
        index_of.insert(id, i as u32);
    }

    // Graph invariant: every edge endpoint is a live node.
    let mut edges = Vec::with_capacity(graph.edge_count() * 2);
    for e in graph.edges() {
        let (u, v) = (index_of[&e.u], index_of[&e.v]);
        let km = e.length_m.unwrap_or(DEFAULT_EDGE_LENGTH_M) / 1000.0;
        edges.push((u, v, km));
        edges.push((v, u, km));
    }

    let lookup = |id: NodeId| index_of.get(&id).copied().ok_or(ExportError::UnknownNode(id));
    let task_edges = tasks
        .iter()
        .map(|(u, v)| -> ExportResult<[u32; 2]> { Ok([lookup(u)?, lookup(v)?]) })
        .collect::<ExportResult<Vec<_>>>()?;

    Ok(ExportRecord { node_ids, index_of, node_coords, edges, task_edges })
}
