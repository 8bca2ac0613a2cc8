//! The closed action vocabulary of the quote store.
//!
//! Every mutation of a [`QuoteDocument`] is one of these variants; each
//! carries a typed payload, so a misspelled field name is a compile error
//! rather than a silently dropped edit.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{QuoteDocument, TemplateVariant};

/// A top-level scalar field of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteField {
    Currency(String),
    DiscountPercent(Decimal),
    TaxPercent(Decimal),
    HostingCost(Decimal),
    DevelopmentCost(Decimal),
    HeaderText(String),
    FooterText(String),
    Notes(String),
    QuoteNumber(String),
    Date(NaiveDate),
}

/// A field of the company ("From") block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanyField {
    Name(String),
    Address(String),
    Contact(String),
    Logo(Option<String>),
}

/// A field of the client ("To") block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientField {
    Name(String),
    CompanyName(String),
    Address(String),
    Contact(String),
}

/// A field of the visual theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeField {
    PrimaryColor(String),
    FontFamily(String),
    FontSize(u8),
    Template(TemplateVariant),
}

/// An editable field of one line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineItemField {
    Description(String),
    Technology(String),
    Quantity(Decimal),
    UnitPrice(Decimal),
}

/// Partial line item for [`QuoteAction::AddItem`].
///
/// Fields left `None` fall back to the template line item, the same way the
/// editor pre-fills a fresh row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineItemDraft {
    pub description: Option<String>,
    pub technology: Option<String>,
    pub quantity: Option<Decimal>,
    pub unit_price: Option<Decimal>,
}

/// One state transition request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteAction {
    /// Replace the entire document; used on rehydrate.
    SetDocument(Box<QuoteDocument>),
    UpdateQuote(QuoteField),
    UpdateCompany(CompanyField),
    UpdateClient(ClientField),
    UpdateTheme(ThemeField),
    /// Append a new item under a freshly generated id.
    AddItem(LineItemDraft),
    /// Replace one field of the item with the given id; no-op if absent.
    UpdateItem { id: Uuid, field: LineItemField },
    /// Delete the item with the given id; no-op if absent.
    RemoveItem { id: Uuid },
    /// Insert a copy right after the original, under a fresh id; no-op if absent.
    DuplicateItem { id: Uuid },
    /// Move the item at `from` to position `to`; ignored when out of bounds.
    ReorderItems { from: usize, to: usize },
    /// Discard everything and return to the default template.
    ResetDocument,
}
