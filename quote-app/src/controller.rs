//! The application controller.
//!
//! One `QuoteApp` per session. Rendering surfaces hold a reference to it,
//! read the document and freshly derived totals on every render, and send
//! every mutation through [`QuoteApp::dispatch`]. Export and aesthetic
//! calls read the document once at call start; their failures surface as a
//! single error for the notification area and leave state untouched.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::info;

use quote_aesthetic::{AestheticClient, AestheticError, AestheticRequest, AestheticSuggestion};
use quote_core::actions::{QuoteAction, ThemeField};
use quote_core::calculations::QuoteTotals;
use quote_core::models::QuoteDocument;
use quote_core::QuoteStore;
use quote_export::{ExportArtifact, export_docx, export_pdf};
use quote_storage::JsonFileStorage;

pub struct QuoteApp {
    store: QuoteStore<JsonFileStorage>,
    aesthetic: Option<AestheticClient>,
}

impl QuoteApp {
    /// Opens the app against the platform data directory, rehydrating any
    /// previously persisted document. The aesthetic client is optional:
    /// without endpoint configuration the feature is simply unavailable.
    pub fn open() -> Result<Self> {
        let storage = JsonFileStorage::in_user_data_dir()?;
        let aesthetic = match AestheticClient::from_env() {
            Ok(client) => Some(client),
            Err(AestheticError::NotConfigured) => None,
            Err(error) => return Err(error.into()),
        };
        Ok(Self {
            store: QuoteStore::open(storage),
            aesthetic,
        })
    }

    /// Opens the app over explicit storage, without an aesthetic client.
    pub fn with_storage(storage: JsonFileStorage) -> Self {
        Self {
            store: QuoteStore::open(storage),
            aesthetic: None,
        }
    }

    pub fn document(&self) -> &QuoteDocument {
        self.store.document()
    }

    /// Derived totals for the current document; call per render.
    pub fn totals(&self) -> QuoteTotals {
        self.store.totals()
    }

    pub fn dispatch(
        &mut self,
        action: QuoteAction,
    ) -> &QuoteDocument {
        self.store.dispatch(action)
    }

    /// Exports the Word document into `directory` and returns the written
    /// path (file name derived from the quote number).
    pub fn export_docx(
        &self,
        directory: &Path,
    ) -> Result<PathBuf> {
        let artifact = export_docx(self.document())?;
        self.write_artifact(directory, artifact)
    }

    /// Exports the PDF into `directory` from the preview raster the
    /// rendering surface captured.
    pub fn export_pdf(
        &self,
        directory: &Path,
        preview_raster: &[u8],
    ) -> Result<PathBuf> {
        let artifact = export_pdf(self.document(), preview_raster)?;
        self.write_artifact(directory, artifact)
    }

    fn write_artifact(
        &self,
        directory: &Path,
        artifact: ExportArtifact,
    ) -> Result<PathBuf> {
        let path = directory.join(&artifact.file_name);
        fs::write(&path, &artifact.bytes)
            .with_context(|| format!("cannot write export '{}'", path.display()))?;
        info!(path = %path.display(), "export written");
        Ok(path)
    }

    /// Asks the aesthetic service for a suggestion based on the uploaded
    /// logo. Reads the document once up front; concurrent edits do not
    /// affect an in-flight call.
    pub async fn suggest_aesthetic(
        &self,
        guidance: Option<String>,
    ) -> Result<AestheticSuggestion> {
        let Some(client) = &self.aesthetic else {
            bail!("aesthetic suggestions are not configured");
        };
        let Some(logo) = self.document().company.logo.clone() else {
            bail!("upload a company logo first");
        };

        let request = AestheticRequest {
            logo_data_uri: logo,
            prompt: guidance,
        };
        Ok(client.generate(&request).await?)
    }

    /// Applies a suggestion the way the customization surface does: the
    /// first palette color becomes the theme's primary color.
    pub fn apply_suggestion(
        &mut self,
        suggestion: &AestheticSuggestion,
    ) {
        if let Some(color) = suggestion.primary_color() {
            self.dispatch(QuoteAction::UpdateTheme(ThemeField::PrimaryColor(
                color.to_string(),
            )));
            info!(color, "applied suggested primary color");
        }
    }
}
