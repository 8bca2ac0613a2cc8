//! The derived-totals pipeline.
//!
//! Fixed order of operations. Changing it changes every surface at once
//! and is a regression, not a refactor:
//!
//! | Step | Value |
//! |------|-------|
//! | 1 | `subtotal` = Σ quantity × unit price |
//! | 2 | `discount_amount` = subtotal × discount% / 100 |
//! | 3 | `after_discount` = subtotal − discount_amount |
//! | 4 | `tax_amount` = after_discount × tax% / 100 |
//! | 5 | `grand_total` = after_discount + tax_amount + hosting + development |
//!
//! Discount applies before tax; the two flat costs join after tax and are
//! neither discounted nor taxed. Nothing is rounded in between; surfaces
//! round only when formatting.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{LineItem, QuoteDocument};

/// Result of one totals derivation.
///
/// All four values are unrounded; negative values are legitimate output
/// (negative unit prices are allowed) and are displayed as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteTotals {
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    pub tax_amount: Decimal,
    pub grand_total: Decimal,
}

/// Derives the totals block from line items and the document-level rates.
///
/// Total function over its whole input domain: there is no error case, and
/// any combination of signs is computed faithfully.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::compute_totals;
///
/// let totals = compute_totals(&[], dec!(0), dec!(10), dec!(25), dec!(0));
///
/// assert_eq!(totals.subtotal, dec!(0));
/// assert_eq!(totals.grand_total, dec!(25));
/// ```
pub fn compute_totals(
    items: &[LineItem],
    discount_percent: Decimal,
    tax_percent: Decimal,
    hosting_cost: Decimal,
    development_cost: Decimal,
) -> QuoteTotals {
    let subtotal: Decimal = items.iter().map(LineItem::total).sum();
    let discount_amount = subtotal * discount_percent / Decimal::ONE_HUNDRED;
    let after_discount = subtotal - discount_amount;
    let tax_amount = after_discount * tax_percent / Decimal::ONE_HUNDRED;
    let grand_total = after_discount + tax_amount + hosting_cost + development_cost;

    QuoteTotals {
        subtotal,
        discount_amount,
        tax_amount,
        grand_total,
    }
}

/// [`compute_totals`] over a whole document.
pub fn document_totals(document: &QuoteDocument) -> QuoteTotals {
    compute_totals(
        &document.items,
        document.discount_percent,
        document.tax_percent,
        document.hosting_cost,
        document.development_cost,
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use super::*;

    fn item(
        quantity: Decimal,
        unit_price: Decimal,
    ) -> LineItem {
        LineItem {
            id: Uuid::new_v4(),
            description: String::new(),
            technology: String::new(),
            quantity,
            unit_price,
        }
    }

    // =========================================================================
    // Concrete scenarios from the default template
    // =========================================================================

    #[test]
    fn template_document_totals() {
        // One item qty 1 × 5000, tax 10%, everything else 0.
        let items = vec![item(dec!(1), dec!(5000))];

        let totals = compute_totals(&items, dec!(0), dec!(10), dec!(0), dec!(0));

        assert_eq!(totals.subtotal, dec!(5000));
        assert_eq!(totals.discount_amount, dec!(0));
        assert_eq!(totals.tax_amount, dec!(500));
        assert_eq!(totals.grand_total, dec!(5500));
    }

    #[test]
    fn second_item_raises_subtotal_and_tax() {
        let items = vec![item(dec!(1), dec!(5000)), item(dec!(2), dec!(100))];

        let totals = compute_totals(&items, dec!(0), dec!(10), dec!(0), dec!(0));

        assert_eq!(totals.subtotal, dec!(5200));
        assert_eq!(totals.tax_amount, dec!(520));
        assert_eq!(totals.grand_total, dec!(5720));
    }

    #[test]
    fn discount_applies_before_tax() {
        let items = vec![item(dec!(1), dec!(5000)), item(dec!(2), dec!(100))];

        let totals = compute_totals(&items, dec!(10), dec!(10), dec!(0), dec!(0));

        // 5200 − 520 = 4680 after discount; tax is 10% of that.
        assert_eq!(totals.discount_amount, dec!(520));
        assert_eq!(totals.tax_amount, dec!(468));
        assert_eq!(totals.grand_total, dec!(5148));
    }

    // =========================================================================
    // Structural properties
    // =========================================================================

    #[test]
    fn subtotal_is_order_independent() {
        let mut items = vec![
            item(dec!(1), dec!(5000)),
            item(dec!(2), dec!(100)),
            item(dec!(0.5), dec!(99.98)),
        ];

        let forward = compute_totals(&items, dec!(5), dec!(10), dec!(30), dec!(70));
        items.reverse();
        let reversed = compute_totals(&items, dec!(5), dec!(10), dec!(30), dec!(70));

        assert_eq!(forward, reversed);
    }

    #[test]
    fn grand_total_matches_closed_form() {
        let items = vec![item(dec!(3), dec!(199.99)), item(dec!(1), dec!(-50))];
        let (discount, tax) = (dec!(12.5), dec!(7.25));
        let (hosting, development) = (dec!(20), dec!(180));

        let totals = compute_totals(&items, discount, tax, hosting, development);

        // grand = (subtotal − discount_amount) × (1 + tax/100) + hosting + development
        let after_discount = totals.subtotal - totals.discount_amount;
        let closed_form =
            after_discount * (Decimal::ONE + tax / dec!(100)) + hosting + development;
        assert_eq!(totals.grand_total, closed_form);
    }

    #[test]
    fn flat_costs_are_neither_discounted_nor_taxed() {
        let items = vec![item(dec!(1), dec!(1000))];

        let totals = compute_totals(&items, dec!(50), dec!(20), dec!(100), dec!(200));

        // 1000 → 500 after discount → 600 with tax; costs join untouched.
        assert_eq!(totals.grand_total, dec!(900));
    }

    #[test]
    fn empty_item_list_yields_only_flat_costs() {
        let totals = compute_totals(&[], dec!(10), dec!(10), dec!(40), dec!(60));

        assert_eq!(totals.subtotal, dec!(0));
        assert_eq!(totals.grand_total, dec!(100));
    }

    #[test]
    fn negative_subtotal_is_preserved() {
        let items = vec![item(dec!(1), dec!(-200))];

        let totals = compute_totals(&items, dec!(0), dec!(10), dec!(0), dec!(0));

        assert_eq!(totals.subtotal, dec!(-200));
        assert_eq!(totals.tax_amount, dec!(-20));
        assert_eq!(totals.grand_total, dec!(-220));
    }

    #[test]
    fn no_intermediate_rounding_occurs() {
        // 3 × 33.333 = 99.999; a surface that rounded mid-pipeline would
        // show 100.00 for the subtotal but tax a different base.
        let items = vec![item(dec!(3), dec!(33.333))];

        let totals = compute_totals(&items, dec!(0), dec!(10), dec!(0), dec!(0));

        assert_eq!(totals.subtotal, dec!(99.999));
        assert_eq!(totals.tax_amount, dec!(9.9999));
        assert_eq!(totals.grand_total, dec!(109.9989));
    }
}
