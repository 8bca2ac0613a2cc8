//! The store controller.
//!
//! One `QuoteStore` owns the live document for the session. Rendering
//! surfaces read through [`QuoteStore::document`] and mutate exclusively
//! through [`QuoteStore::dispatch`]; persistence happens as an explicit
//! step after each transition and can never corrupt the in-memory state.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::actions::QuoteAction;
use crate::calculations::{QuoteTotals, document_totals};
use crate::models::QuoteDocument;
use crate::reducer::reduce;
use crate::template::default_document;

/// Failures at the persistence boundary.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage read failed: {0}")]
    Read(String),

    #[error("storage write failed: {0}")]
    Write(String),

    /// Stored data exists but cannot be decoded into a document. Treated
    /// the same as absent data: the caller starts from the template.
    #[error("stored document is unreadable: {0}")]
    Corrupt(String),
}

/// Durable home of the serialized document, keyed by a fixed namespace.
///
/// Backends implement exactly three operations; everything else (fallback
/// policy, logging, when to write) is the store's business.
pub trait QuoteStateStorage {
    /// Returns the previously persisted document, or `None` on first run.
    fn load(&self) -> Result<Option<QuoteDocument>, StorageError>;

    /// Replaces the persisted document with `document`.
    fn save(
        &self,
        document: &QuoteDocument,
    ) -> Result<(), StorageError>;

    /// Removes the persisted document entirely.
    fn clear(&self) -> Result<(), StorageError>;
}

/// The single writer over the session's [`QuoteDocument`].
pub struct QuoteStore<S> {
    document: QuoteDocument,
    storage: S,
}

impl<S: QuoteStateStorage> QuoteStore<S> {
    /// Opens the store, rehydrating from `storage` when a usable document
    /// is present and falling back to the default template otherwise.
    ///
    /// Corrupt or unreadable stored state is logged and discarded: no
    /// partial recovery, no retry.
    pub fn open(storage: S) -> Self {
        let document = match storage.load() {
            Ok(Some(document)) => {
                debug!(quote_number = %document.quote_number, "rehydrated persisted document");
                document
            }
            Ok(None) => {
                info!("no persisted document, starting from the default template");
                default_document()
            }
            Err(error) => {
                warn!(%error, "discarding persisted state, starting from the default template");
                default_document()
            }
        };

        Self { document, storage }
    }

    /// The current document. Surfaces must re-derive any view of it,
    /// totals included, on every render.
    pub fn document(&self) -> &QuoteDocument {
        &self.document
    }

    /// Totals derived from the current document.
    pub fn totals(&self) -> QuoteTotals {
        document_totals(&self.document)
    }

    /// Applies one action, swaps in the resulting document, and persists it.
    ///
    /// A persistence failure is logged and otherwise ignored: the in-memory
    /// transition has already happened and stays authoritative.
    pub fn dispatch(
        &mut self,
        action: QuoteAction,
    ) -> &QuoteDocument {
        self.document = reduce(&self.document, action);
        if let Err(error) = self.storage.save(&self.document) {
            warn!(%error, "failed to persist document after transition");
        }
        &self.document
    }
}
