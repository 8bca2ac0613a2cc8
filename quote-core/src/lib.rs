pub mod actions;
pub mod calculations;
pub mod input;
pub mod models;
pub mod reducer;
pub mod store;
pub mod template;

pub use actions::{
    ClientField, CompanyField, LineItemDraft, LineItemField, QuoteAction, QuoteField, ThemeField,
};
pub use models::*;
pub use reducer::reduce;
pub use store::{QuoteStateStorage, QuoteStore, StorageError};
