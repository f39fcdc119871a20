//! End-to-end behaviour of the store, the upload transaction and the history
//! projection over the in-memory backend.

use common::config::STORAGE_KEY;
use common::format::format_size;
use common::history::{clear_history, render};
use common::messages;
use common::model::document::DocumentMetadata;
use common::storage::{KeyValueStorage, MemoryStorage};
use common::store::MetadataStore;
use common::upload::{FeedbackKind, SelectedFile, handle_upload};
use jiff::Timestamp;
use jiff::tz::TimeZone;

fn at(ms: i64) -> Timestamp {
    Timestamp::from_millisecond(ms).unwrap()
}

fn record(id: &str, uploaded_at: &str) -> DocumentMetadata {
    DocumentMetadata {
        id: id.to_string(),
        name: format!("{}.bin", id),
        size: 512,
        mime_type: "application/octet-stream".to_string(),
        last_modified: 1_700_000_000_000,
        uploaded_at: uploaded_at.to_string(),
    }
}

#[test]
fn append_then_get_all_ends_with_record() {
    let store = MetadataStore::new(MemoryStorage::new());
    store.append(record("a", "2024-01-01T00:00:00.000Z")).unwrap();

    let r = record("b", "2024-01-02T00:00:00.000Z");
    store.append(r.clone()).unwrap();

    assert_eq!(store.get_all().last(), Some(&r));
}

#[test]
fn repeated_reads_are_equal() {
    let store = MetadataStore::new(MemoryStorage::new());
    store.append(record("a", "2024-01-01T00:00:00.000Z")).unwrap();

    assert_eq!(store.get_all(), store.get_all());
}

#[test]
fn clear_then_read_is_empty() {
    let store = MetadataStore::new(MemoryStorage::new());
    for i in 0..3 {
        store
            .append(record(&i.to_string(), "2024-01-01T00:00:00.000Z"))
            .unwrap();
    }

    store.clear();
    assert!(store.get_all().is_empty());
    assert_eq!(store.storage().get_item(STORAGE_KEY).unwrap(), None);
}

#[test]
fn corrupt_blob_reads_as_empty() {
    let storage = MemoryStorage::new();
    storage.seed(STORAGE_KEY, "{not json");
    let store = MetadataStore::new(storage);

    assert!(store.get_all().is_empty());
}

#[test]
fn corrupt_blob_is_replaced_on_next_append() {
    let storage = MemoryStorage::new();
    storage.seed(STORAGE_KEY, "[{\"id\":");
    let store = MetadataStore::new(storage);

    store.append(record("a", "2024-01-01T00:00:00.000Z")).unwrap();
    assert_eq!(store.get_all().len(), 1);
}

#[test]
fn history_is_rendered_newest_first() {
    let store = MetadataStore::new(MemoryStorage::new());
    store.append(record("t1", "2024-01-01T00:00:00.000Z")).unwrap();
    store.append(record("t3", "2024-01-03T00:00:00.000Z")).unwrap();
    store.append(record("t2", "2024-01-02T00:00:00.000Z")).unwrap();

    let view = render(&store, &TimeZone::UTC);
    let ids: Vec<_> = view.rows.iter().map(|row| row.id.as_str()).collect();
    assert_eq!(ids, vec!["t3", "t2", "t1"]);

    // Display order does not leak into storage order.
    let stored: Vec<_> = store.get_all().into_iter().map(|d| d.id).collect();
    assert_eq!(stored, vec!["t1", "t3", "t2"]);
}

#[test]
fn upload_without_selection_writes_nothing() {
    let store = MetadataStore::new(MemoryStorage::new());

    let outcome = handle_upload(&store, None, at(1_704_103_200_000));

    assert_eq!(store.storage().write_count(), 0);
    assert_eq!(outcome.feedback.kind, FeedbackKind::Error);
    assert_eq!(outcome.feedback.message, messages::SELECTION_REQUIRED);
    assert!(!outcome.reset_input);
    assert!(outcome.record.is_none());
}

#[test]
fn upload_report_pdf() {
    let store = MetadataStore::new(MemoryStorage::new());
    let earlier = handle_upload(
        &store,
        Some(SelectedFile {
            name: "report.pdf".to_string(),
            size: 2048,
            mime_type: "application/pdf".to_string(),
            last_modified: 1_700_000_000_000,
        }),
        at(1_704_103_200_000),
    );
    let outcome = handle_upload(
        &store,
        Some(SelectedFile {
            name: "report.pdf".to_string(),
            size: 2048,
            mime_type: "application/pdf".to_string(),
            last_modified: 1_700_000_000_000,
        }),
        at(1_704_103_200_000),
    );

    let stored = store.get_all();
    let last = stored.last().unwrap();
    assert_eq!(last.size, 2048);
    assert_eq!(format_size(last.size), "2 Ko");
    assert_eq!(last.mime_type, "application/pdf");
    assert!(!last.id.is_empty());
    assert_ne!(last.id, earlier.record.unwrap().id);
    assert_eq!(outcome.record.as_ref(), Some(last));
    assert!(outcome.reset_input);
}

#[test]
fn failed_write_still_reports_success() {
    let store = MetadataStore::new(MemoryStorage::new());
    store.storage().set_fail_writes(true);

    let outcome = handle_upload(
        &store,
        Some(SelectedFile {
            name: "big.iso".to_string(),
            size: 4_000_000_000,
            mime_type: String::new(),
            last_modified: 0,
        }),
        at(1_704_103_200_000),
    );

    assert_eq!(outcome.feedback.kind, FeedbackKind::Info);
    assert!(store.get_all().is_empty());
}

#[test]
fn confirmed_clear_empties_rendered_history() {
    let store = MetadataStore::new(MemoryStorage::new());
    store.append(record("a", "2024-01-01T00:00:00.000Z")).unwrap();

    assert!(clear_history(&store, false, &TimeZone::UTC).is_none());
    assert_eq!(render(&store, &TimeZone::UTC).rows.len(), 1);

    let view = clear_history(&store, true, &TimeZone::UTC).unwrap();
    assert!(view.is_empty());
}
