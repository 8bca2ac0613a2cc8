use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use quote_core::{QuoteDocument, QuoteStateStorage, StorageError};

/// Fixed namespace key the document is stored under.
pub const STORAGE_KEY: &str = "quickquote-document";

/// Stores the serialized document as one pretty-printed JSON file.
///
/// Writes go through a sibling temp file followed by a rename, so a crash
/// mid-write leaves either the previous document or the new one, never a
/// torn file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Storage at an explicit file path. Used by tests and portable setups.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage under the platform data directory (e.g.
    /// `~/.local/share/quickquote/` on Linux), creating it if needed.
    pub fn in_user_data_dir() -> Result<Self, StorageError> {
        let dirs = ProjectDirs::from("", "", "quickquote")
            .ok_or_else(|| StorageError::Read("no usable home directory".to_string()))?;
        fs::create_dir_all(dirs.data_dir())
            .map_err(|e| StorageError::Write(e.to_string()))?;
        Ok(Self::at_path(dirs.data_dir().join(format!("{STORAGE_KEY}.json"))))
    }

    /// Where the document lives on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuoteStateStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<QuoteDocument>, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::Read(e.to_string())),
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|e| StorageError::Corrupt(e.to_string()))
    }

    fn save(
        &self,
        document: &QuoteDocument,
    ) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(document)
            .map_err(|e| StorageError::Write(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| StorageError::Write(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| StorageError::Write(e.to_string()))
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Write(e.to_string())),
        }
    }
}
