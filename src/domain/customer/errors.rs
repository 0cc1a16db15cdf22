use uuid::Uuid;

// ============================================================================
// Customer Profile Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CustomerError {
    #[error("Customer name cannot be empty")]
    EmptyName,

    #[error("Pizza {0} is already a favorite")]
    AlreadyFavorite(Uuid),

    #[error("Invalid selection {position}. No such favorite pizza (have {count})")]
    NoSuchFavorite { position: usize, count: usize },
}
