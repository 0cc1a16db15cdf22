use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

use crate::domain::order::{Direction, FulfillmentMode, StageChange};
use crate::payment::PaymentMethod;

// ============================================================================
// Metrics Module - Prometheus counters for the ordering session
// ============================================================================
//
// Tracks:
// - Orders placed per fulfillment mode
// - Lifecycle transitions and boundary no-ops
// - Payments per method and collected revenue
//
// Rendered in the Prometheus text format from the console's main menu.
// ============================================================================

pub struct Metrics {
    registry: Registry,

    pub orders_placed: IntCounterVec,
    pub stage_transitions: IntCounterVec,
    pub stage_boundary_noops: IntCounterVec,
    pub payments: IntCounterVec,
    pub revenue_cents: IntCounter,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let orders_placed = IntCounterVec::new(
            Opts::new("orders_placed_total", "Total orders placed"),
            &["mode"],
        )?;
        registry.register(Box::new(orders_placed.clone()))?;

        let stage_transitions = IntCounterVec::new(
            Opts::new("stage_transitions_total", "Order lifecycle stage transitions"),
            &["direction", "to_stage"],
        )?;
        registry.register(Box::new(stage_transitions.clone()))?;

        let stage_boundary_noops = IntCounterVec::new(
            Opts::new(
                "stage_boundary_noops_total",
                "Advance/retreat calls that hit the first or last stage",
            ),
            &["direction"],
        )?;
        registry.register(Box::new(stage_boundary_noops.clone()))?;

        let payments = IntCounterVec::new(
            Opts::new("payments_total", "Payments taken"),
            &["method"],
        )?;
        registry.register(Box::new(payments.clone()))?;

        let revenue_cents = IntCounter::new(
            "revenue_cents_total",
            "Revenue collected, in minor currency units",
        )?;
        registry.register(Box::new(revenue_cents.clone()))?;

        Ok(Self {
            registry,
            orders_placed,
            stage_transitions,
            stage_boundary_noops,
            payments,
            revenue_cents,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_order_placed(&self, mode: FulfillmentMode) {
        self.orders_placed.with_label_values(&[mode.label()]).inc();
    }

    pub fn record_stage_change(&self, direction: Direction, change: &StageChange) {
        match change {
            StageChange::Moved { to, .. } => {
                self.stage_transitions
                    .with_label_values(&[direction.label(), to.label()])
                    .inc();
            }
            StageChange::Boundary { .. } => {
                self.stage_boundary_noops
                    .with_label_values(&[direction.label()])
                    .inc();
            }
        }
    }

    pub fn record_payment(&self, method: PaymentMethod, amount_cents: u64) {
        self.payments.with_label_values(&[method.label()]).inc();
        self.revenue_cents.inc_by(amount_cents);
    }

    /// Prometheus text exposition of every registered metric.
    pub fn render(&self) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::Stage;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new().unwrap();
        metrics.record_order_placed(FulfillmentMode::Pickup);
        assert!(!metrics.registry().gather().is_empty());
    }

    #[test]
    fn test_record_order_and_transitions() {
        let metrics = Metrics::new().unwrap();
        metrics.record_order_placed(FulfillmentMode::Delivery);
        metrics.record_stage_change(
            Direction::Forward,
            &StageChange::Moved { from: Stage::Placed, to: Stage::Preparing },
        );
        metrics.record_stage_change(
            Direction::Backward,
            &StageChange::Boundary { stage: Stage::Placed, message: "at start" },
        );

        let text = metrics.render().unwrap();
        assert!(text.contains("orders_placed_total{mode=\"delivery\"} 1"));
        assert!(text.contains(
            "stage_transitions_total{direction=\"forward\",to_stage=\"preparing\"} 1"
        ));
        assert!(text.contains("stage_boundary_noops_total{direction=\"backward\"} 1"));
    }

    #[test]
    fn test_record_payment() {
        let metrics = Metrics::new().unwrap();
        metrics.record_payment(PaymentMethod::PayPal, 135_000);
        metrics.record_payment(PaymentMethod::PayPal, 500);

        let text = metrics.render().unwrap();
        assert!(text.contains("payments_total{method=\"PayPal\"} 2"));
        assert!(text.contains("revenue_cents_total 135500"));
    }
}
