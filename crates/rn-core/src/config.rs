//! Pipeline configuration.

use crate::{RnError, RnResult};

/// Top-level configuration of one reduce → select → export run.
///
/// Typically filled in from command-line arguments by the application crate
/// and passed to the pipeline stages.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PipelineConfig {
    /// Node count the reducer shrinks toward.  Default: 100.
    pub target_nodes: usize,

    /// The reducer only runs when the graph has more than this many nodes.
    /// Must be `>= target_nodes`.  Default: 120.
    pub reduce_above: usize,

    /// Number of task edges to sample.  Default: 20.
    pub task_edge_count: usize,

    /// Seed for task-edge sampling.  `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl PipelineConfig {
    /// Reject configurations the pipeline cannot honour.
    pub fn validate(&self) -> RnResult<()> {
        if self.target_nodes == 0 {
            return Err(RnError::Config("target_nodes must be at least 1".into()));
        }
        if self.reduce_above < self.target_nodes {
            return Err(RnError::Config(format!(
                "reduce_above ({}) must not be below target_nodes ({})",
                self.reduce_above, self.target_nodes
            )));
        }
        Ok(())
    }

    /// Whether a graph with `node_count` nodes should be handed to the reducer.
    #[inline]
    pub fn needs_reduction(&self, node_count: usize) -> bool {
        node_count > self.reduce_above
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            target_nodes:    100,
            reduce_above:    120,
            task_edge_count: 20,
            seed:            None,
        }
    }
}
