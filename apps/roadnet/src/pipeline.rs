//! Reduce → select → export, composed over one graph.

use anyhow::{Context, Result};
use rand::Rng;
use tracing::{info, warn};

use rn_core::PipelineConfig;
use rn_export::{ExportRecord, export};
use rn_graph::{ConnectivityReducer, Reducer, RoadGraph, TaskEdgeSelector, TaskEdgeSet};

/// What a run produced.
pub struct PipelineOutput {
    /// The graph that was exported (reduced if reduction ran).
    pub graph:   RoadGraph,
    pub tasks:   TaskEdgeSet,
    pub record:  ExportRecord,
    /// `true` if the reducer ran and stopped above target.
    pub stalled: bool,
}

/// Run the pipeline on `graph`.
///
/// Reduction only runs when the graph exceeds `config.reduce_above`.  A
/// stalled reduction is accepted with a warning unless `strict` is set, in
/// which case it aborts the run.  Task edges are always selected on the
/// graph that gets exported.
pub fn run<R: Rng + ?Sized>(
    graph:  RoadGraph,
    config: &PipelineConfig,
    strict: bool,
    rng:    &mut R,
) -> Result<PipelineOutput> {
    config.validate()?;

    let mut stalled = false;
    let graph = if config.needs_reduction(graph.node_count()) {
        let reduction = ConnectivityReducer
            .reduce(graph, config.target_nodes)
            .context("reducing road network")?;
        if reduction.is_stalled() && !strict {
            warn!(
                nodes = reduction.graph.node_count(),
                target = config.target_nodes,
                "continuing with partially reduced network"
            );
            stalled = true;
            reduction.graph
        } else {
            reduction
                .require_target()
                .context("network did not reach the target size")?
        }
    } else {
        info!(
            nodes = graph.node_count(),
            threshold = config.reduce_above,
            "network within size threshold; skipping reduction"
        );
        graph
    };

    let tasks = TaskEdgeSelector
        .select(&graph, config.task_edge_count, rng)
        .context("selecting task edges")?;
    let record = export(&graph, &tasks).context("exporting network")?;

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        task_edges = tasks.len(),
        total_length_km = graph.total_length_m() / 1000.0,
        "final network"
    );

    Ok(PipelineOutput { graph, tasks, record, stalled })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use rn_core::{GeoPoint, NodeId, PipelineConfig};
    use rn_graph::{GraphError, RoadGraph, RoadGraphBuilder};

    use super::run;

    /// Ring of `n` nodes, edge `i` has length `10 * (i + 1)` metres.
    fn ring(n: i64) -> RoadGraph {
        let mut b = RoadGraphBuilder::new();
        for i in 0..n {
            b.add_node(NodeId(i), GeoPoint::new(0.0, i as f64 * 0.001)).unwrap();
        }
        for i in 0..n {
            b.add_edge(NodeId(i), NodeId((i + 1) % n), Some(10.0 * (i + 1) as f64)).unwrap();
        }
        b.build()
    }

    fn config(target: usize, above: usize, tasks: usize) -> PipelineConfig {
        PipelineConfig { target_nodes: target, reduce_above: above, task_edge_count: tasks, seed: None }
    }

    #[test]
    fn small_network_is_not_reduced() {
        let mut rng = SmallRng::seed_from_u64(1);
        let out = run(ring(10), &config(5, 12, 3), false, &mut rng).unwrap();
        assert_eq!(out.graph.node_count(), 10);
        assert_eq!(out.record.edges.len(), 20);
        assert_eq!(out.tasks.len(), 3);
        assert!(!out.stalled);
    }

    #[test]
    fn large_network_is_reduced_then_exported() {
        let mut rng = SmallRng::seed_from_u64(2);
        let out = run(ring(30), &config(10, 12, 4), false, &mut rng).unwrap();
        assert!(out.graph.node_count() <= 10);
        assert!(out.graph.is_connected());
        assert_eq!(out.record.node_count(), out.graph.node_count());
        assert_eq!(out.record.edges.len(), 2 * out.graph.edge_count());
        for (u, v) in out.tasks.iter() {
            assert!(out.graph.has_edge(u, v));
        }
    }

    #[test]
    fn stall_is_accepted_unless_strict() {
        // A ring cannot get below 2 nodes.
        let mut rng = SmallRng::seed_from_u64(3);
        let out = run(ring(6), &config(1, 1, 1), false, &mut rng).unwrap();
        assert!(out.stalled);
        assert_eq!(out.graph.node_count(), 2);

        let err = run(ring(6), &config(1, 1, 1), true, &mut rng).err().unwrap();
        assert!(matches!(
            err.downcast_ref::<GraphError>(),
            Some(GraphError::ReductionStalled { nodes: 2, target: 1 })
        ));
    }

    #[test]
    fn invalid_config_rejected() {
        let mut rng = SmallRng::seed_from_u64(4);
        assert!(run(ring(4), &config(0, 0, 1), false, &mut rng).is_err());
    }

    #[test]
    fn empty_graph_is_an_error() {
        let mut rng = SmallRng::seed_from_u64(5);
        let empty = RoadGraphBuilder::new().build();
        assert!(run(empty, &config(1, 1, 1), false, &mut rng).is_err());
    }
}
