//! Derived-money calculations for a quote document.
//!
//! Totals are never stored on the document; every rendering surface calls
//! into this module on each read so the editor, the preview, and both
//! exporters can never disagree.

pub mod common;
pub mod totals;

pub use common::{format_currency, round_half_up};
pub use totals::{QuoteTotals, compute_totals, document_totals};
