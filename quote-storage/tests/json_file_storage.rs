//! Integration tests exercising the real on-disk read/write path,
//! including the rehydration behavior the store builds on top of it.

use std::fs;

use pretty_assertions::assert_eq;
use quote_core::actions::{QuoteAction, QuoteField};
use quote_core::template::default_document;
use quote_core::{QuoteStateStorage, QuoteStore, StorageError};
use quote_storage::{JsonFileStorage, STORAGE_KEY};
use rust_decimal_macros::dec;

fn storage_in(dir: &tempfile::TempDir) -> JsonFileStorage {
    JsonFileStorage::at_path(dir.path().join(format!("{STORAGE_KEY}.json")))
}

#[test]
fn load_reports_nothing_on_first_run() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);

    assert_eq!(storage.load().unwrap(), None);
}

#[test]
fn save_then_load_round_trips_the_document() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    let mut document = default_document();
    document.quote_number = "QT-314".to_string();
    document.company.logo = Some("data:image/png;base64,AAAA".to_string());
    document.discount_percent = dec!(2.5);

    storage.save(&document).unwrap();
    let restored = storage.load().unwrap();

    assert_eq!(restored, Some(document));
}

#[test]
fn save_replaces_the_previous_document() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    let mut document = default_document();

    storage.save(&document).unwrap();
    document.notes = "Net 14.".to_string();
    storage.save(&document).unwrap();

    assert_eq!(storage.load().unwrap().unwrap().notes, "Net 14.");
}

#[test]
fn save_leaves_no_temp_file_behind() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);

    storage.save(&default_document()).unwrap();

    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec![format!("{STORAGE_KEY}.json")]);
}

#[test]
fn corrupt_contents_are_reported_as_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    fs::write(storage.path(), "{not json").unwrap();

    let result = storage.load();

    assert!(matches!(result, Err(StorageError::Corrupt(_))));
}

#[test]
fn structurally_incompatible_contents_are_reported_as_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    // Valid JSON, wrong shape: must not be partially merged into a document.
    fs::write(storage.path(), r#"{"version": 2, "payload": []}"#).unwrap();

    let result = storage.load();

    assert!(matches!(result, Err(StorageError::Corrupt(_))));
}

#[test]
fn clear_removes_the_file_and_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    storage.save(&default_document()).unwrap();

    storage.clear().unwrap();
    storage.clear().unwrap();

    assert_eq!(storage.load().unwrap(), None);
}

// =============================================================================
// Store + storage, end to end
// =============================================================================

#[test]
fn store_rehydrates_what_a_previous_session_dispatched() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = QuoteStore::open(storage_in(&dir));
        store.dispatch(QuoteAction::UpdateQuote(QuoteField::QuoteNumber(
            "QT-202".to_string(),
        )));
        store.dispatch(QuoteAction::UpdateQuote(QuoteField::TaxPercent(dec!(19))));
    }

    let store = QuoteStore::open(storage_in(&dir));

    assert_eq!(store.document().quote_number, "QT-202");
    assert_eq!(store.document().tax_percent, dec!(19));
}

#[test]
fn store_falls_back_to_the_template_on_a_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    fs::write(storage.path(), "** definitely not JSON **").unwrap();

    let store = QuoteStore::open(storage);

    // Item ids are generated per call, so compare the template shape
    // rather than the whole document.
    let template = default_document();
    assert_eq!(store.document().quote_number, template.quote_number);
    assert_eq!(store.document().company, template.company);
    assert_eq!(store.document().items.len(), 1);
    assert_eq!(
        store.document().items[0].unit_price,
        template.items[0].unit_price
    );
}
