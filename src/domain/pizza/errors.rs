// ============================================================================
// Pizza Composition Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PizzaError {
    #[error("Invalid {kind} selection {choice}: choose between 1 and {max}")]
    InvalidSelection {
        kind: &'static str,
        choice: usize,
        max: usize,
    },

    #[error("Not a number: {0}")]
    NotANumber(String),

    #[error("Pizza needs a crust")]
    MissingCrust,

    #[error("Pizza needs a sauce")]
    MissingSauce,
}
