//! Undirected road graph and its builder.
//!
//! # Data layout
//!
//! Nodes and edges live in insertion-ordered **slot arrays**.  Removing an
//! edge or dropping a node only clears its `*_live` flag; slots are never
//! reused, so:
//!
//! - iteration over nodes and edges is always in insertion order, which makes
//!   reduction and export reproducible for a given input;
//! - an [`EdgeId`] stays valid across `remove_edge` / `restore_edge`.
//!
//! Per-node adjacency lists hold the `EdgeId`s of live incident edges, so
//! `degree` is O(1) and `neighbors` is O(degree).  A self-loop appears twice
//! in its node's list and counts 2 toward the degree.
//!
//! ```text
//! slot_of[NodeId] ─► node slot ─► adjacency[slot] = [EdgeId, …]
//!                                          │
//!                     edge_u / edge_v / edge_length_m  (indexed by EdgeId)
//! ```

use rustc_hash::FxHashMap;

use rn_core::{EdgeId, GeoPoint, NodeId};

use crate::{GraphError, GraphResult};

// ── Edge view ─────────────────────────────────────────────────────────────────

/// Read-only view of one undirected edge.
///
/// `u`/`v` are in the orientation the edge was added with; it carries no
/// direction semantics.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub id:       EdgeId,
    pub u:        NodeId,
    pub v:        NodeId,
    /// Physical length in metres, if the source supplied one.
    pub length_m: Option<f64>,
}

impl Edge {
    /// `true` if this edge joins `a` and `b`, in either orientation.
    #[inline]
    pub fn joins(&self, a: NodeId, b: NodeId) -> bool {
        (self.u == a && self.v == b) || (self.u == b && self.v == a)
    }
}

// ── RoadGraph ─────────────────────────────────────────────────────────────────

/// Undirected road network with removable edges.
///
/// Build with [`RoadGraphBuilder`].
#[derive(Clone, Debug, Default)]
pub struct RoadGraph {
    // ── Node slots ────────────────────────────────────────────────────────
    node_ids:  Vec<NodeId>,
    node_pos:  Vec<GeoPoint>,
    node_live: Vec<bool>,
    /// Live incident edges of each node slot.
    adjacency: Vec<Vec<EdgeId>>,
    slot_of:   FxHashMap<NodeId, u32>,

    // ── Edge slots (indexed by EdgeId) ────────────────────────────────────
    edge_u:        Vec<u32>,
    edge_v:        Vec<u32>,
    edge_length_m: Vec<Option<f64>>,
    edge_live:     Vec<bool>,

    live_nodes: usize,
    live_edges: usize,
}

impl RoadGraph {
    pub(crate) fn with_capacity(nodes: usize, edges: usize) -> Self {
        let mut slot_of = FxHashMap::default();
        slot_of.reserve(nodes);
        Self {
            node_ids:      Vec::with_capacity(nodes),
            node_pos:      Vec::with_capacity(nodes),
            node_live:     Vec::with_capacity(nodes),
            adjacency:     Vec::with_capacity(nodes),
            slot_of,
            edge_u:        Vec::with_capacity(edges),
            edge_v:        Vec::with_capacity(edges),
            edge_length_m: Vec::with_capacity(edges),
            edge_live:     Vec::with_capacity(edges),
            live_nodes:    0,
            live_edges:    0,
        }
    }

    /// Append a node.  Caller guarantees `id` is not present yet.
    pub(crate) fn push_node(&mut self, id: NodeId, pos: GeoPoint) -> u32 {
        let slot = self.node_ids.len() as u32;
        self.node_ids.push(id);
        self.node_pos.push(pos);
        self.node_live.push(true);
        self.adjacency.push(Vec::new());
        self.slot_of.insert(id, slot);
        self.live_nodes += 1;
        slot
    }

    /// Append an edge between two live node slots.
    pub(crate) fn push_edge(&mut self, u: u32, v: u32, length_m: Option<f64>) -> EdgeId {
        let id = EdgeId(self.edge_u.len() as u32);
        self.edge_u.push(u);
        self.edge_v.push(v);
        self.edge_length_m.push(length_m);
        self.edge_live.push(true);
        self.adjacency[u as usize].push(id);
        self.adjacency[v as usize].push(id);
        self.live_edges += 1;
        id
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.live_nodes
    }

    pub fn edge_count(&self) -> usize {
        self.live_edges
    }

    pub fn is_empty(&self) -> bool {
        self.live_nodes == 0
    }

    /// Sum of all known edge lengths, in metres.
    pub fn total_length_m(&self) -> f64 {
        self.edges().filter_map(|e| e.length_m).sum()
    }

    // ── Nodes ─────────────────────────────────────────────────────────────

    /// Live node ids in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.live_slots().map(|s| self.node_ids[s])
    }

    /// Live `(id, position)` pairs in insertion order.
    pub fn node_positions(&self) -> impl Iterator<Item = (NodeId, GeoPoint)> + '_ {
        self.live_slots().map(|s| (self.node_ids[s], self.node_pos[s]))
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.live_slot(id).is_some()
    }

    pub fn position(&self, id: NodeId) -> Option<GeoPoint> {
        self.live_slot(id).map(|s| self.node_pos[s])
    }

    /// Number of live edges incident to `id`.
    pub fn degree(&self, id: NodeId) -> GraphResult<usize> {
        let slot = self.require_slot(id)?;
        Ok(self.adjacency[slot].len())
    }

    /// Neighbours of `id` reached through live edges, one entry per edge.
    pub fn neighbors(&self, id: NodeId) -> GraphResult<impl Iterator<Item = NodeId> + '_> {
        let slot = self.require_slot(id)?;
        Ok(self.adjacency[slot]
            .iter()
            .map(move |&e| self.node_ids[self.other_end(e, slot)]))
    }

    // ── Edges ─────────────────────────────────────────────────────────────

    /// Live edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.edge_u.len())
            .filter(|&i| self.edge_live[i])
            .map(|i| self.edge_view(EdgeId(i as u32)))
    }

    /// Live edge ids in insertion order.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edge_u.len())
            .filter(|&i| self.edge_live[i])
            .map(|i| EdgeId(i as u32))
    }

    /// The edge in slot `id`, if it is currently live.
    pub fn edge(&self, id: EdgeId) -> Option<Edge> {
        self.is_live_edge(id).then(|| self.edge_view(id))
    }

    /// First live edge joining `u` and `v` (either orientation).
    pub fn find_edge(&self, u: NodeId, v: NodeId) -> Option<EdgeId> {
        let su = self.live_slot(u)?;
        let sv = self.live_slot(v)?;
        self.adjacency[su]
            .iter()
            .copied()
            .find(|&e| self.other_end(e, su) == sv)
    }

    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.find_edge(u, v).is_some()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Remove a live edge.  Its endpoints stay in the graph even if they
    /// become isolated; see [`drop_isolated_nodes`](Self::drop_isolated_nodes).
    pub fn remove_edge(&mut self, id: EdgeId) -> GraphResult<Edge> {
        if !self.is_live_edge(id) {
            return Err(GraphError::EdgeNotFound(id));
        }
        let view = self.edge_view(id);
        let (u, v) = (self.edge_u[id.index()] as usize, self.edge_v[id.index()] as usize);
        self.adjacency[u].retain(|&e| e != id);
        if v != u {
            self.adjacency[v].retain(|&e| e != id);
        }
        self.edge_live[id.index()] = false;
        self.live_edges -= 1;
        Ok(view)
    }

    /// Remove the first live edge joining `u` and `v`.
    pub fn remove_edge_between(&mut self, u: NodeId, v: NodeId) -> GraphResult<Edge> {
        let id = self
            .find_edge(u, v)
            .ok_or(GraphError::NoEdgeBetween { u, v })?;
        self.remove_edge(id)
    }

    /// Put a previously removed edge back.
    ///
    /// Fails if the slot never existed, if the edge is live already, or if
    /// one of its endpoints has been dropped since the removal.
    pub fn restore_edge(&mut self, id: EdgeId) -> GraphResult<()> {
        if id.index() >= self.edge_u.len() {
            return Err(GraphError::EdgeNotFound(id));
        }
        if self.edge_live[id.index()] {
            return Err(GraphError::EdgeAlreadyPresent(id));
        }
        let (u, v) = (self.edge_u[id.index()] as usize, self.edge_v[id.index()] as usize);
        for slot in [u, v] {
            if !self.node_live[slot] {
                return Err(GraphError::NodeNotFound(self.node_ids[slot]));
            }
        }
        self.adjacency[u].push(id);
        self.adjacency[v].push(id);
        self.edge_live[id.index()] = true;
        self.live_edges += 1;
        Ok(())
    }

    /// Drop every live node whose degree is 0.  Returns how many were dropped.
    pub fn drop_isolated_nodes(&mut self) -> usize {
        let mut dropped = 0;
        for slot in 0..self.node_ids.len() {
            if self.node_live[slot] && self.adjacency[slot].is_empty() {
                self.node_live[slot] = false;
                dropped += 1;
            }
        }
        self.live_nodes -= dropped;
        dropped
    }

    /// Replace every missing edge length with the great-circle distance
    /// between its endpoints.  Returns how many edges were filled.
    pub fn fill_missing_lengths(&mut self) -> usize {
        let mut filled = 0;
        for i in 0..self.edge_u.len() {
            if self.edge_length_m[i].is_none() {
                let a = self.node_pos[self.edge_u[i] as usize];
                let b = self.node_pos[self.edge_v[i] as usize];
                self.edge_length_m[i] = Some(a.distance_m(b));
                filled += 1;
            }
        }
        filled
    }

    // ── Slot helpers (crate-internal) ─────────────────────────────────────

    /// Total node slots, live or not.
    #[inline]
    pub(crate) fn slot_count(&self) -> usize {
        self.node_ids.len()
    }

    #[inline]
    pub(crate) fn slot_degree(&self, slot: usize) -> usize {
        self.adjacency[slot].len()
    }

    #[inline]
    pub(crate) fn slot_node(&self, slot: usize) -> (NodeId, GeoPoint) {
        (self.node_ids[slot], self.node_pos[slot])
    }

    /// Slots of the live neighbours of `slot`.
    pub(crate) fn slot_neighbors(&self, slot: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency[slot].iter().map(move |&e| self.other_end(e, slot))
    }

    pub(crate) fn live_slots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.node_ids.len()).filter(|&s| self.node_live[s])
    }

    /// Endpoint slots of edge `id` (live or not).
    #[inline]
    pub(crate) fn edge_slots(&self, id: EdgeId) -> (usize, usize) {
        (self.edge_u[id.index()] as usize, self.edge_v[id.index()] as usize)
    }

    fn live_slot(&self, id: NodeId) -> Option<usize> {
        self.slot_of
            .get(&id)
            .map(|&s| s as usize)
            .filter(|&s| self.node_live[s])
    }

    fn require_slot(&self, id: NodeId) -> GraphResult<usize> {
        self.live_slot(id).ok_or(GraphError::NodeNotFound(id))
    }

    #[inline]
    fn is_live_edge(&self, id: EdgeId) -> bool {
        self.edge_live.get(id.index()).copied().unwrap_or(false)
    }

    #[inline]
    fn other_end(&self, e: EdgeId, slot: usize) -> usize {
        let (u, v) = self.edge_slots(e);
        if u == slot { v } else { u }
    }

    fn edge_view(&self, id: EdgeId) -> Edge {
        let (u, v) = self.edge_slots(id);
        Edge {
            id,
            u:        self.node_ids[u],
            v:        self.node_ids[v],
            length_m: self.edge_length_m[id.index()],
        }
    }
}

// ── RoadGraphBuilder ──────────────────────────────────────────────────────────

/// Construct a [`RoadGraph`] from an external node/edge collection, then
/// call [`build`](Self::build).
///
/// Nodes must be added before the edges that reference them.
///
/// # Example
///
/// ```
/// use rn_core::{GeoPoint, NodeId};
/// use rn_graph::RoadGraphBuilder;
///
/// let mut b = RoadGraphBuilder::new();
/// b.add_node(NodeId(1), GeoPoint::new(39.93, 116.45)).unwrap();
/// b.add_node(NodeId(2), GeoPoint::new(39.94, 116.46)).unwrap();
/// b.add_edge(NodeId(1), NodeId(2), Some(1_200.0)).unwrap();
/// let g = b.build();
/// assert_eq!(g.node_count(), 2);
/// assert_eq!(g.edge_count(), 1); // undirected
/// ```
pub struct RoadGraphBuilder {
    graph: RoadGraph,
}

impl RoadGraphBuilder {
    pub fn new() -> Self {
        Self { graph: RoadGraph::default() }
    }

    /// Pre-allocate for the expected number of nodes and edges to reduce
    /// reallocations when bulk-loading.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self { graph: RoadGraph::with_capacity(nodes, edges) }
    }

    /// Add a node.  Each id may be added once.
    pub fn add_node(&mut self, id: NodeId, pos: GeoPoint) -> GraphResult<()> {
        if self.graph.slot_of.contains_key(&id) {
            return Err(GraphError::DuplicateNode(id));
        }
        self.graph.push_node(id, pos);
        Ok(())
    }

    /// Add an undirected edge between two nodes added earlier.
    ///
    /// `length_m` is the physical length in metres, `None` if unknown.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, length_m: Option<f64>) -> GraphResult<EdgeId> {
        let su = self.graph.require_slot(u)?;
        let sv = self.graph.require_slot(v)?;
        Ok(self.graph.push_edge(su as u32, sv as u32, length_m))
    }

    pub fn node_count(&self) -> usize { self.graph.node_count() }
    pub fn edge_count(&self) -> usize { self.graph.edge_count() }

    /// Consume the builder and produce the graph.
    pub fn build(self) -> RoadGraph {
        self.graph
    }
}

impl Default for RoadGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
