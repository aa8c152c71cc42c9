//! Task-edge selection.
//!
//! Task edges are drawn from the longer half of the network: edges are
//! ranked by length (longest first) and the top `floor(|E| / 2)` form the
//! candidate pool.  The requested number is then sampled uniformly without
//! replacement.  Asking for more than the pool holds is not an error; the
//! result is simply capped at the pool size.

use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;
use tracing::debug;

use rn_core::NodeId;

use crate::graph::{Edge, RoadGraph};
use crate::{GraphError, GraphResult};

// ── TaskEdgeSet ───────────────────────────────────────────────────────────────

/// A set of undirected node pairs.
///
/// Pairs keep the orientation they were inserted with (the export writes
/// them that way), but membership ignores orientation: after inserting
/// `(a, b)`, both `contains(a, b)` and `contains(b, a)` hold and inserting
/// `(b, a)` is a no-op.
#[derive(Clone, Debug, Default)]
pub struct TaskEdgeSet {
    pairs:   Vec<(NodeId, NodeId)>,
    members: FxHashSet<(NodeId, NodeId)>,
}

#[inline]
fn key(u: NodeId, v: NodeId) -> (NodeId, NodeId) {
    if u <= v { (u, v) } else { (v, u) }
}

impl TaskEdgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair; returns `false` if it (or its reverse) was present.
    pub fn insert(&mut self, u: NodeId, v: NodeId) -> bool {
        if !self.members.insert(key(u, v)) {
            return false;
        }
        self.pairs.push((u, v));
        true
    }

    pub fn contains(&self, u: NodeId, v: NodeId) -> bool {
        self.members.contains(&key(u, v))
    }

    /// `true` if `edge` is one of the task edges.
    pub fn contains_edge(&self, edge: &Edge) -> bool {
        self.contains(edge.u, edge.v)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in insertion order, in their stored orientation.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.pairs.iter().copied()
    }
}

impl FromIterator<(NodeId, NodeId)> for TaskEdgeSet {
    fn from_iter<I: IntoIterator<Item = (NodeId, NodeId)>>(iter: I) -> Self {
        let mut set = TaskEdgeSet::new();
        for (u, v) in iter {
            set.insert(u, v);
        }
        set
    }
}

// ── TaskEdgeSelector ──────────────────────────────────────────────────────────

/// Biased-random selection of "significant" road segments.
pub struct TaskEdgeSelector;

impl TaskEdgeSelector {
    /// The longer half of the graph's edges, longest first.
    ///
    /// Missing lengths rank as 0.  The sort is stable, so equal lengths keep
    /// insertion order.
    pub fn candidate_pool(graph: &RoadGraph) -> Vec<Edge> {
        let mut edges: Vec<Edge> = graph.edges().collect();
        edges.sort_by(|a, b| {
            b.length_m
                .unwrap_or(0.0)
                .total_cmp(&a.length_m.unwrap_or(0.0))
        });
        edges.truncate(edges.len() / 2);
        edges
    }

    /// Sample `min(count, pool size)` task edges using `rng`.
    ///
    /// Parallel edges between the same pair collapse into one set entry, so
    /// on a multigraph the result can be smaller than the sample.  The graph
    /// is not modified.  Fails only on a graph without nodes.
    pub fn select<R: Rng + ?Sized>(
        &self,
        graph: &RoadGraph,
        count: usize,
        rng:   &mut R,
    ) -> GraphResult<TaskEdgeSet> {
        if graph.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        let pool = Self::candidate_pool(graph);
        let take = count.min(pool.len());
        if take < count {
            debug!(requested = count, available = pool.len(), "task-edge request capped at candidate pool size");
        }

        let set: TaskEdgeSet = pool
            .choose_multiple(rng, take)
            .map(|e| (e.u, e.v))
            .collect();

        debug!(selected = set.len(), pool = pool.len(), "task edges selected");
        Ok(set)
    }
}
