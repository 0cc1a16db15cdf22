use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::events::{BoundaryReached, Direction, OrderEvent, StageChanged};
use super::value_objects::{FulfillmentMode, Stage};

// ============================================================================
// Order - Lifecycle State Machine
// ============================================================================

pub const ALREADY_INITIAL_MESSAGE: &str = "Order is already in the initial state.";
pub const ALREADY_COMPLETE_MESSAGE: &str = "Order process is complete. Thank you!";

/// Outcome of a single `advance` or `retreat` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageChange {
    Moved { from: Stage, to: Stage },
    /// Nothing to move to; the stage is unchanged.
    Boundary { stage: Stage, message: &'static str },
}

impl StageChange {
    pub fn is_moved(&self) -> bool {
        matches!(self, StageChange::Moved { .. })
    }
}

#[derive(Debug, Clone)]
pub struct Order {
    // Identity
    id: Uuid,
    placed_at: DateTime<Utc>,

    mode: FulfillmentMode,
    stage: Stage,

    history: Vec<OrderEvent>,
}

impl Order {
    pub fn new(mode: FulfillmentMode) -> Self {
        let order = Self {
            id: Uuid::new_v4(),
            placed_at: Utc::now(),
            mode,
            stage: Stage::Placed,
            history: Vec::new(),
        };

        tracing::debug!(order_id = %order.id, mode = %mode, "Order created");
        order
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    pub fn fulfillment_mode(&self) -> FulfillmentMode {
        self.mode
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn status_text(&self) -> &'static str {
        self.stage.status_text()
    }

    /// Events recorded since the order was placed, oldest first.
    pub fn history(&self) -> &[OrderEvent] {
        &self.history
    }

    pub fn is_complete(&self) -> bool {
        self.stage.is_terminal()
    }

    /// Move one stage forward. At `Feedback` this is a no-op.
    pub fn advance(&mut self) -> StageChange {
        match self.stage.next(self.mode) {
            Some(to) => self.move_to(to, Direction::Forward),
            None => self.hold(Direction::Forward, ALREADY_COMPLETE_MESSAGE),
        }
    }

    /// Move one stage back. At `Placed` this is a no-op.
    pub fn retreat(&mut self) -> StageChange {
        match self.stage.previous(self.mode) {
            Some(to) => self.move_to(to, Direction::Backward),
            None => self.hold(Direction::Backward, ALREADY_INITIAL_MESSAGE),
        }
    }

    /// Advance until the terminal stage, collecting the status text of the
    /// current stage and of every stage entered on the way.
    pub fn drive_to_completion(&mut self) -> Vec<&'static str> {
        let mut statuses = vec![self.status_text()];
        while !self.is_complete() {
            self.advance();
            statuses.push(self.status_text());
        }
        statuses
    }

    fn move_to(&mut self, to: Stage, direction: Direction) -> StageChange {
        let from = self.stage;
        self.stage = to;
        self.history.push(OrderEvent::StageChanged(StageChanged {
            from,
            to,
            direction,
            at: Utc::now(),
        }));

        tracing::info!(
            order_id = %self.id,
            from = from.label(),
            to = to.label(),
            direction = direction.label(),
            "Order stage changed"
        );

        StageChange::Moved { from, to }
    }

    fn hold(&mut self, direction: Direction, message: &'static str) -> StageChange {
        self.history.push(OrderEvent::BoundaryReached(BoundaryReached {
            stage: self.stage,
            direction,
            at: Utc::now(),
        }));

        tracing::info!(
            order_id = %self.id,
            stage = self.stage.label(),
            direction = direction.label(),
            "{}",
            message
        );

        StageChange::Boundary {
            stage: self.stage,
            message,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
