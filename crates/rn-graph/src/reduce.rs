//! Connectivity-preserving network reduction.
//!
//! # Strategy
//!
//! Node count is never reduced directly.  Instead edges are removed one at a
//! time and a node disappears only once it has no edges left.  Every
//! tentative removal is checked with one BFS: if the non-isolated part of the
//! graph is still a single component the removal stands and the newly
//! isolated nodes are dropped, otherwise the edge is restored.
//!
//! ```text
//! loop while nodes > target:
//!     snapshot live edge ids
//!     for e in snapshot:
//!         remove e
//!         connected?  → drop isolated nodes
//!         otherwise   → restore e
//!     pass removed nothing → stall, stop
//! ```
//!
//! Each pass either removes an edge or ends the loop, so reduction always
//! terminates.  Reaching the target is attempted, not guaranteed: check
//! [`Reduction::outcome`] or call [`Reduction::require_target`].

use tracing::{debug, info, warn};

use rn_core::EdgeId;

use crate::graph::RoadGraph;
use crate::{GraphError, GraphResult};

// ── Reduction result ──────────────────────────────────────────────────────────

/// How a reduction ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReductionOutcome {
    /// The graph has at most `target_nodes` nodes.
    Reached,
    /// A full pass removed no edge while the graph was still above target.
    Stalled { nodes: usize, target: usize },
}

/// The reduced graph plus bookkeeping about how it was obtained.
#[derive(Debug)]
pub struct Reduction {
    pub graph:           RoadGraph,
    pub outcome:         ReductionOutcome,
    /// Node count of the input graph.
    pub input_nodes:     usize,
    /// Node count after restricting to the largest component.
    pub component_nodes: usize,
    pub removed_edges:   usize,
    pub dropped_nodes:   usize,
    pub passes:          usize,
}

impl Reduction {
    pub fn is_stalled(&self) -> bool {
        matches!(self.outcome, ReductionOutcome::Stalled { .. })
    }

    /// The reduced graph, or [`GraphError::ReductionStalled`] if the target
    /// was not reached.
    pub fn require_target(self) -> GraphResult<RoadGraph> {
        match self.outcome {
            ReductionOutcome::Reached => Ok(self.graph),
            ReductionOutcome::Stalled { nodes, target } => {
                Err(GraphError::ReductionStalled { nodes, target })
            }
        }
    }
}

// ── Reducer trait ─────────────────────────────────────────────────────────────

/// Pluggable reduction strategy.
///
/// Implementations must return a single connected component and must never
/// grow the graph.
pub trait Reducer {
    fn reduce(&self, graph: RoadGraph, target_nodes: usize) -> GraphResult<Reduction>;
}

// ── ConnectivityReducer ───────────────────────────────────────────────────────

/// Edge-removal reducer that keeps the graph connected at every step.
///
/// A disconnected input is first replaced by its largest component; nodes
/// outside it are discarded.
pub struct ConnectivityReducer;

impl Reducer for ConnectivityReducer {
    fn reduce(&self, graph: RoadGraph, target_nodes: usize) -> GraphResult<Reduction> {
        if graph.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        let input_nodes = graph.node_count();

        let mut graph = if graph.is_connected() {
            graph
        } else {
            let largest = graph.largest_component();
            info!(
                components = graph.component_count(),
                kept_nodes = largest.node_count(),
                discarded_nodes = input_nodes - largest.node_count(),
                "input is disconnected; keeping largest component"
            );
            largest
        };
        let component_nodes = graph.node_count();

        let mut removed_edges = 0;
        let mut dropped_nodes = 0;
        let mut passes = 0;
        let mut outcome = ReductionOutcome::Reached;

        while graph.node_count() > target_nodes {
            passes += 1;
            let (removed, dropped) = reduction_pass(&mut graph, target_nodes)?;
            removed_edges += removed;
            dropped_nodes += dropped;
            debug!(
                pass = passes,
                removed,
                dropped,
                nodes = graph.node_count(),
                edges = graph.edge_count(),
                "reduction pass finished"
            );

            if removed == 0 && graph.node_count() > target_nodes {
                warn!(
                    nodes = graph.node_count(),
                    target = target_nodes,
                    passes,
                    "reduction stalled: no edge can be removed without disconnecting the graph"
                );
                outcome = ReductionOutcome::Stalled {
                    nodes:  graph.node_count(),
                    target: target_nodes,
                };
                break;
            }
        }

        info!(
            input_nodes,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            removed_edges,
            passes,
            "reduction complete"
        );

        Ok(Reduction {
            graph,
            outcome,
            input_nodes,
            component_nodes,
            removed_edges,
            dropped_nodes,
            passes,
        })
    }
}

/// One sweep over a snapshot of the live edges.  Returns
/// `(edges removed, nodes dropped)`.
fn reduction_pass(graph: &mut RoadGraph, target_nodes: usize) -> GraphResult<(usize, usize)> {
    let snapshot: Vec<EdgeId> = graph.edge_ids().collect();
    let mut removed = 0;
    let mut dropped = 0;

    for edge in snapshot {
        if graph.node_count() <= target_nodes {
            break;
        }
        graph.remove_edge(edge)?;
        if graph.is_connected_ignoring_isolated() {
            removed += 1;
            dropped += graph.drop_isolated_nodes();
        } else {
            graph.restore_edge(edge)?;
        }
    }

    Ok((removed, dropped))
}
