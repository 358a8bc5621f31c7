//! Projection engine for annual retirement account projections

mod state;
mod engine;
mod snapshot;

pub use state::ProjectionState;
pub use engine::AccountProjector;
pub use snapshot::{AccountProjection, AccountSnapshot, ProjectionTotals, SnapshotDisplay};
