use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Client, Company, LineItem, Theme};

/// The root aggregate: everything a quote contains, one instance per session.
///
/// Every field is populated from the moment the document exists (defaults
/// come from [`crate::template::default_document`]), and mutation happens
/// only through [`crate::reducer::reduce`]. Derived totals are never stored
/// here; surfaces recompute them from `items` and the rate/cost fields on
/// every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteDocument {
    pub company: Company,
    pub client: Client,
    pub items: Vec<LineItem>,

    /// Currency symbol prefixed to every formatted amount.
    pub currency: String,
    pub discount_percent: Decimal,
    pub tax_percent: Decimal,
    pub hosting_cost: Decimal,
    pub development_cost: Decimal,

    pub header_text: String,
    pub footer_text: String,
    pub notes: String,

    /// Free-text identifier; uniqueness is the user's business.
    pub quote_number: String,
    pub date: NaiveDate,

    pub theme: Theme,
}

impl QuoteDocument {
    /// Position of the item with the given id, if present.
    pub fn item_index(
        &self,
        id: Uuid,
    ) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}
