//! `rn-graph` — undirected road graph, reduction, and task-edge selection.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`graph`]      | `RoadGraph`, `RoadGraphBuilder`, `Edge`                   |
//! | [`components`] | connected components, largest-component extraction       |
//! | [`reduce`]     | `Reducer` trait, `ConnectivityReducer`, `Reduction`       |
//! | [`tasks`]      | `TaskEdgeSelector`, `TaskEdgeSet`                         |
//! | [`loader`]     | `load_graph_csv`, `load_graph_reader`                     |
//! | [`error`]      | `GraphError`, `GraphResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `rn-core` types.        |

pub mod components;
pub mod error;
pub mod graph;
pub mod loader;
pub mod reduce;
pub mod tasks;


pub use error::{GraphError, GraphResult};
pub use graph::{Edge, RoadGraph, RoadGraphBuilder};
pub use loader::{load_graph_csv, load_graph_reader};
pub use reduce::{ConnectivityReducer, Reducer, Reduction, ReductionOutcome};
pub use tasks::{TaskEdgeSelector, TaskEdgeSet};
