use serde::{Deserialize, Serialize};

// ============================================================================
// Add-ons - extras layered over a finished pizza
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddOn {
    ExtraCheese,
    SpecialPackaging,
}

impl AddOn {
    /// Offered to the customer in this order.
    pub const ALL: [AddOn; 2] = [AddOn::ExtraCheese, AddOn::SpecialPackaging];

    pub fn label(self) -> &'static str {
        match self {
            AddOn::ExtraCheese => "Extra Cheese",
            AddOn::SpecialPackaging => "Special Packaging",
        }
    }
}
