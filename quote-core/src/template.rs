//! The fixed default template.
//!
//! A session starts from this document unless a persisted one rehydrates,
//! and `ResetDocument` returns to it. Field values are product copy, not
//! placeholders to tidy up.

use chrono::Local;
use uuid::Uuid;

use crate::models::{Client, Company, LineItem, QuoteDocument, TemplateVariant, Theme};

/// The line item every new document is seeded with; also the source of
/// defaults for fields an [`crate::actions::LineItemDraft`] leaves unset.
pub fn template_line_item() -> LineItem {
    LineItem {
        id: Uuid::new_v4(),
        description: "E.g. Website Design & Development".to_string(),
        technology: "E.g. React, Next.js, and Tailwind CSS".to_string(),
        quantity: 1.into(),
        unit_price: 5000.into(),
    }
}

/// A fully populated starting document, dated today.
pub fn default_document() -> QuoteDocument {
    QuoteDocument {
        company: Company {
            name: "Your Company".to_string(),
            address: "123 Main Street, Anytown, USA 12345".to_string(),
            contact: "contact@yourcompany.com".to_string(),
            logo: None,
        },
        client: Client {
            name: "Client Name".to_string(),
            company_name: "Client Company".to_string(),
            address: "456 Oak Avenue, Otherville, USA 54321".to_string(),
            contact: "client@email.com".to_string(),
        },
        items: vec![template_line_item()],
        currency: "$".to_string(),
        discount_percent: 0.into(),
        tax_percent: 10.into(),
        hosting_cost: 0.into(),
        development_cost: 0.into(),
        header_text: "Quotation".to_string(),
        footer_text: "Thank you for your business!".to_string(),
        notes: "This quote is valid for 30 days.".to_string(),
        quote_number: "QT-001".to_string(),
        date: Local::now().date_naive(),
        theme: Theme {
            primary_color: "#3b82f6".to_string(),
            font_family: "Inter".to_string(),
            font_size: 14,
            template: TemplateVariant::Modern,
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::document_totals;

    #[test]
    fn default_document_seeds_one_item() {
        let document = default_document();

        assert_eq!(document.items.len(), 1);
        assert_eq!(document.items[0].quantity, dec!(1));
        assert_eq!(document.items[0].unit_price, dec!(5000));
    }

    #[test]
    fn default_document_totals_match_the_known_scenario() {
        // qty 1 × 5000 with 10% tax and nothing else.
        let totals = document_totals(&default_document());

        assert_eq!(totals.subtotal, dec!(5000));
        assert_eq!(totals.discount_amount, dec!(0));
        assert_eq!(totals.tax_amount, dec!(500));
        assert_eq!(totals.grand_total, dec!(5500));
    }

    #[test]
    fn template_items_get_distinct_ids() {
        assert_ne!(template_line_item().id, template_line_item().id);
    }
}
