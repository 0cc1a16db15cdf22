use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::Stage;

// ============================================================================
// Order Lifecycle Events
// ============================================================================

/// Direction of a lifecycle step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }
}

/// Order Event - everything that happened to an order while in memory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum OrderEvent {
    StageChanged(StageChanged),
    BoundaryReached(BoundaryReached),
}

impl OrderEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::StageChanged(_) => "StageChanged",
            OrderEvent::BoundaryReached(_) => "BoundaryReached",
        }
    }
}

/// Stage Changed - the order moved one step through the lifecycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageChanged {
    pub from: Stage,
    pub to: Stage,
    pub direction: Direction,
    pub at: DateTime<Utc>,
}

/// Boundary Reached - advance past `Feedback` or retreat past `Placed`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryReached {
    pub stage: Stage,
    pub direction: Direction,
    pub at: DateTime<Utc>,
}
