//! File-backed storage for the quote document.
//!
//! The durable-local-storage analogue of the product: one JSON document
//! under a fixed namespace key. Implements the
//! [`quote_core::QuoteStateStorage`] trait; fallback policy on bad data
//! lives in the store, not here: this crate only reports what it found.

mod json_file;

pub use json_file::{JsonFileStorage, STORAGE_KEY};
