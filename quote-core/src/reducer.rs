//! The pure state transition of the quote store.
//!
//! `reduce` never performs I/O and never fails: unknown item ids and
//! out-of-range reorder indices leave the document unchanged. The input
//! document is untouched; callers swap in the returned value, so observers
//! always see a fully-old or fully-new document.

use uuid::Uuid;

use crate::actions::{
    ClientField, CompanyField, LineItemDraft, LineItemField, QuoteAction, QuoteField, ThemeField,
};
use crate::models::{LineItem, QuoteDocument};
use crate::template;

/// Applies one action and returns the next document.
pub fn reduce(
    document: &QuoteDocument,
    action: QuoteAction,
) -> QuoteDocument {
    match action {
        QuoteAction::SetDocument(next) => *next,
        QuoteAction::UpdateQuote(field) => update_quote(document, field),
        QuoteAction::UpdateCompany(field) => update_company(document, field),
        QuoteAction::UpdateClient(field) => update_client(document, field),
        QuoteAction::UpdateTheme(field) => update_theme(document, field),
        QuoteAction::AddItem(draft) => add_item(document, draft),
        QuoteAction::UpdateItem { id, field } => update_item(document, id, field),
        QuoteAction::RemoveItem { id } => remove_item(document, id),
        QuoteAction::DuplicateItem { id } => duplicate_item(document, id),
        QuoteAction::ReorderItems { from, to } => reorder_items(document, from, to),
        QuoteAction::ResetDocument => template::default_document(),
    }
}

fn update_quote(
    document: &QuoteDocument,
    field: QuoteField,
) -> QuoteDocument {
    let mut next = document.clone();
    match field {
        QuoteField::Currency(value) => next.currency = value,
        QuoteField::DiscountPercent(value) => next.discount_percent = value,
        QuoteField::TaxPercent(value) => next.tax_percent = value,
        QuoteField::HostingCost(value) => next.hosting_cost = value,
        QuoteField::DevelopmentCost(value) => next.development_cost = value,
        QuoteField::HeaderText(value) => next.header_text = value,
        QuoteField::FooterText(value) => next.footer_text = value,
        QuoteField::Notes(value) => next.notes = value,
        QuoteField::QuoteNumber(value) => next.quote_number = value,
        QuoteField::Date(value) => next.date = value,
    }
    next
}

fn update_company(
    document: &QuoteDocument,
    field: CompanyField,
) -> QuoteDocument {
    let mut next = document.clone();
    match field {
        CompanyField::Name(value) => next.company.name = value,
        CompanyField::Address(value) => next.company.address = value,
        CompanyField::Contact(value) => next.company.contact = value,
        CompanyField::Logo(value) => next.company.logo = value,
    }
    next
}

fn update_client(
    document: &QuoteDocument,
    field: ClientField,
) -> QuoteDocument {
    let mut next = document.clone();
    match field {
        ClientField::Name(value) => next.client.name = value,
        ClientField::CompanyName(value) => next.client.company_name = value,
        ClientField::Address(value) => next.client.address = value,
        ClientField::Contact(value) => next.client.contact = value,
    }
    next
}

fn update_theme(
    document: &QuoteDocument,
    field: ThemeField,
) -> QuoteDocument {
    let mut next = document.clone();
    match field {
        ThemeField::PrimaryColor(value) => next.theme.primary_color = value,
        ThemeField::FontFamily(value) => next.theme.font_family = value,
        ThemeField::FontSize(value) => next.theme.font_size = value,
        ThemeField::Template(value) => next.theme.template = value,
    }
    next
}

fn add_item(
    document: &QuoteDocument,
    draft: LineItemDraft,
) -> QuoteDocument {
    let defaults = template::template_line_item();
    let item = LineItem {
        id: Uuid::new_v4(),
        description: draft.description.unwrap_or(defaults.description),
        technology: draft.technology.unwrap_or(defaults.technology),
        quantity: draft.quantity.unwrap_or(defaults.quantity),
        unit_price: draft.unit_price.unwrap_or(defaults.unit_price),
    };

    let mut next = document.clone();
    next.items.push(item);
    next
}

fn update_item(
    document: &QuoteDocument,
    id: Uuid,
    field: LineItemField,
) -> QuoteDocument {
    let Some(index) = document.item_index(id) else {
        return document.clone();
    };

    let mut next = document.clone();
    let item = &mut next.items[index];
    match field {
        LineItemField::Description(value) => item.description = value,
        LineItemField::Technology(value) => item.technology = value,
        LineItemField::Quantity(value) => item.quantity = value,
        LineItemField::UnitPrice(value) => item.unit_price = value,
    }
    next
}

fn remove_item(
    document: &QuoteDocument,
    id: Uuid,
) -> QuoteDocument {
    let mut next = document.clone();
    next.items.retain(|item| item.id != id);
    next
}

fn duplicate_item(
    document: &QuoteDocument,
    id: Uuid,
) -> QuoteDocument {
    let Some(index) = document.item_index(id) else {
        return document.clone();
    };

    let mut next = document.clone();
    let copy = next.items[index].duplicate();
    next.items.insert(index + 1, copy);
    next
}

fn reorder_items(
    document: &QuoteDocument,
    from: usize,
    to: usize,
) -> QuoteDocument {
    if from >= document.items.len() || to >= document.items.len() {
        return document.clone();
    }

    let mut next = document.clone();
    let moved = next.items.remove(from);
    next.items.insert(to, moved);
    next
}
