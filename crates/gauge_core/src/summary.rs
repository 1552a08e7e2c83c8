//! Point-in-time aggregate snapshot

use serde::{Deserialize, Serialize};

/// Aggregate statistics copied out of an accumulator at one instant.
///
/// Detached from the accumulator so it can be queued, logged, or serialized
/// for telemetry without borrowing the live instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: u32,
    pub total: f32,
    pub average: f32,
    pub min: f32,
    pub max: f32,
}
