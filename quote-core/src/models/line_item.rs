use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One billable row of a quote.
///
/// The `id` is assigned when the item enters the document and is never
/// reused or mutated afterwards; every other field is user-editable.
/// Quantity may be fractional and unit price may be zero or negative;
/// neither is validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: Uuid,
    pub description: String,
    pub technology: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

impl LineItem {
    /// Line total before document-level discount and tax.
    pub fn total(&self) -> Decimal {
        self.quantity * self.unit_price
    }

    /// Copy of this item under a freshly generated id.
    pub fn duplicate(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            ..self.clone()
        }
    }
}
