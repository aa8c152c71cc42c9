//! `rn-export` — serialize a reduced road graph for downstream tools.
//!
//! Two outputs are provided:
//!
//! | Output            | Files                                        | Consumer            |
//! |-------------------|----------------------------------------------|---------------------|
//! | [`ExportRecord`]  | `network_data.json`                          | planning tools      |
//! | [`MapLayers`]     | `node_coords.json`, `network_edges.json`     | map visualization   |
//!
//! # Usage
//!
//! ```rust,ignore
//! use rn_export::{export, write_network_json};
//!
//! let record = export(&graph, &task_edges)?;
//! write_network_json(Path::new("network_data.json"), &record)?;
//! ```

pub mod error;
pub mod layers;
pub mod record;
pub mod writer;


pub use error::{ExportError, ExportResult};
pub use layers::{EdgeLayerRecord, MapLayers, NodeLayerRecord};
pub use record::{DEFAULT_EDGE_LENGTH_M, EdgeTriple, ExportRecord, NetworkDocument, export};
pub use writer::{NETWORK_DATA_FILE, write_map_layers, write_network_json};
