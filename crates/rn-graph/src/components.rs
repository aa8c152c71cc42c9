//! Connected components.
//!
//! Components are found by breadth-first search over node slots, started
//! from each unvisited slot in insertion order.  Component numbering is
//! therefore discovery order, which is also the tie-break for
//! [`RoadGraph::largest_component`].

use std::collections::VecDeque;

use rn_core::NodeId;

use crate::graph::RoadGraph;

/// Label for slots that take no part in a labelling.
const UNLABELLED: u32 = u32::MAX;

/// Per-slot component labels plus the size of each component.
struct Labelling {
    label: Vec<u32>,
    sizes: Vec<usize>,
}

impl RoadGraph {
    /// Node ids of every connected component, in discovery order.  Within a
    /// component ids appear in BFS order.
    pub fn components(&self) -> Vec<Vec<NodeId>> {
        let Labelling { label, sizes } = self.label_components(false);
        let mut out: Vec<Vec<NodeId>> = sizes.iter().map(|&n| Vec::with_capacity(n)).collect();
        for slot in self.bfs_order(&label) {
            out[label[slot] as usize].push(self.slot_node(slot).0);
        }
        out
    }

    pub fn component_count(&self) -> usize {
        self.label_components(false).sizes.len()
    }

    /// `true` if every live node is reachable from every other.  An empty
    /// graph is not connected.
    pub fn is_connected(&self) -> bool {
        self.label_components(false).sizes.len() == 1
    }

    /// Like [`is_connected`](Self::is_connected), but over the nodes with
    /// degree > 0 only.  `false` when no node has an edge.
    pub fn is_connected_ignoring_isolated(&self) -> bool {
        self.label_components(true).sizes.len() == 1
    }

    /// A new graph holding only the largest connected component.
    ///
    /// Nodes and edges keep their relative insertion order; edge ids are
    /// re-packed.  Equal-size components are resolved in favour of the one
    /// discovered first.  An empty graph yields an empty graph.
    pub fn largest_component(&self) -> RoadGraph {
        let Labelling { label, sizes } = self.label_components(false);

        // max_by_key returns the last maximum; scan manually for the first.
        let mut best: Option<(u32, usize)> = None;
        for (c, &n) in sizes.iter().enumerate() {
            if best.is_none_or(|(_, m)| n > m) {
                best = Some((c as u32, n));
            }
        }
        let Some((best, size)) = best else {
            return RoadGraph::default();
        };

        let mut out = RoadGraph::with_capacity(size, self.edge_count());
        let mut new_slot = vec![UNLABELLED; self.slot_count()];
        for slot in self.live_slots() {
            if label[slot] == best {
                let (id, pos) = self.slot_node(slot);
                new_slot[slot] = out.push_node(id, pos);
            }
        }
        for edge in self.edge_ids() {
            let (u, v) = self.edge_slots(edge);
            if label[u] == best {
                let length_m = self.edge(edge).and_then(|e| e.length_m);
                out.push_edge(new_slot[u], new_slot[v], length_m);
            }
        }
        out
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Label live slots by component.  With `skip_isolated`, degree-0 slots
    /// stay unlabelled and do not form components of their own.
    fn label_components(&self, skip_isolated: bool) -> Labelling {
        let mut label = vec![UNLABELLED; self.slot_count()];
        let mut sizes = Vec::new();
        let mut queue = VecDeque::new();

        for start in self.live_slots() {
            if label[start] != UNLABELLED {
                continue;
            }
            if skip_isolated && self.slot_degree(start) == 0 {
                continue;
            }
            let c = sizes.len() as u32;
            let mut size = 0usize;
            label[start] = c;
            queue.push_back(start);
            while let Some(slot) = queue.pop_front() {
                size += 1;
                for next in self.slot_neighbors(slot) {
                    if label[next] == UNLABELLED {
                        label[next] = c;
                        queue.push_back(next);
                    }
                }
            }
            sizes.push(size);
        }

        Labelling { label, sizes }
    }

    /// Labelled slots in BFS order, component by component.
    fn bfs_order(&self, label: &[u32]) -> Vec<usize> {
        let mut seen = vec![false; self.slot_count()];
        let mut order = Vec::new();
        let mut queue = VecDeque::new();
        for start in self.live_slots() {
            if seen[start] || label[start] == UNLABELLED {
                continue;
            }
            seen[start] = true;
            queue.push_back(start);
            while let Some(slot) = queue.pop_front() {
                order.push(slot);
                for next in self.slot_neighbors(slot) {
                    if !seen[next] {
                        seen[next] = true;
                        queue.push_back(next);
                    }
                }
            }
        }
        order
    }
}
