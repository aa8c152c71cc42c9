//! Map-layer sidecar for the visualization layer.
//!
//! Carries source node ids and real coordinates (no renumbering), plus a
//! per-edge `task` flag so the map can style task edges by set membership.

use serde::Serialize;

use rn_graph::{RoadGraph, TaskEdgeSet};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodeLayerRecord {
    pub node_id: i64,
    pub lat:     f64,
    pub lon:     f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeLayerRecord {
    pub from_node: i64,
    pub to_node:   i64,
    /// `null` when the source supplied no length.
    pub length_m:  Option<f64>,
    pub task:      bool,
}

/// Node and edge layers of one graph.
#[derive(Debug, Clone, Default)]
pub struct MapLayers {
    pub nodes: Vec<NodeLayerRecord>,
    pub edges: Vec<EdgeLayerRecord>,
}

impl MapLayers {
    pub fn build(graph: &RoadGraph, tasks: &TaskEdgeSet) -> Self {
        let nodes = graph
            .node_positions()
            .map(|(id, pos)| NodeLayerRecord { node_id: id.0, lat: pos.lat, lon: pos.lon })
            .collect();
        let edges = graph
            .edges()
            .map(|e| EdgeLayerRecord {
                from_node: e.u.0,
                to_node:   e.v.0,
                length_m:  e.length_m,
                task:      tasks.contains_edge(&e),
            })
            .collect();
        Self { nodes, edges }
    }

    pub fn task_edge_count(&self) -> usize {
        self.edges.iter().filter(|e| e.task).count()
    }
}
