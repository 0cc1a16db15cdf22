// ============================================================================
// Order Errors
// ============================================================================
//
// Lifecycle transitions are total; the only failure is building an order
// from an unrecognised fulfillment mode.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("Unknown fulfillment mode: {0}")]
    UnknownFulfillmentMode(String),
}
