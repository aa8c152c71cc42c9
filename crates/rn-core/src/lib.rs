//! `rn-core` — foundational types for the `roadnet` workspace.
//!
//! This crate is a dependency of every other `rn-*` crate.  It has no
//! `rn-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `NodeId` (opaque source id), `EdgeId` (graph slot)    |
//! | [`geo`]      | `GeoPoint`, haversine distance                        |
//! | [`rng`]      | `SelectionRng`                                        |
//! | [`config`]   | `PipelineConfig`                                      |
//! | [`error`]    | `RnError`, `RnResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::PipelineConfig;
pub use error::{RnError, RnResult};
pub use geo::GeoPoint;
pub use ids::{EdgeId, NodeId};
pub use rng::SelectionRng;
