mod client;
mod company;
mod line_item;
mod quote;
mod theme;

pub use client::Client;
pub use company::Company;
pub use line_item::LineItem;
pub use quote::QuoteDocument;
pub use theme::{TemplateVariant, Theme};
