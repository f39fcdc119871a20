//! Read-only projection of the stored history for the history page.

use std::cmp::Ordering;

use jiff::tz::TimeZone;

use crate::format::{format_size, format_timestamp_in, parse_instant};
use crate::messages;
use crate::model::document::DocumentMetadata;
use crate::storage::KeyValueStorage;
use crate::store::MetadataStore;

/// One table row, every cell already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub id: String,
    /// Full file name, also used as the cell's hover title.
    pub name: String,
    pub size: String,
    pub mime_type: String,
    pub last_modified: String,
    pub uploaded_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryStats {
    pub count: usize,
    /// Formatted upload date of the most recent record.
    pub last_uploaded_at: Option<String>,
    pub total_bytes: u64,
}

impl HistoryStats {
    pub fn last_uploaded_label(&self) -> &str {
        self.last_uploaded_at
            .as_deref()
            .unwrap_or(messages::NOT_AVAILABLE)
    }

    pub fn total_size_label(&self) -> String {
        format_size(self.total_bytes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryView {
    pub rows: Vec<HistoryRow>,
    pub stats: HistoryStats,
}

impl HistoryView {
    pub fn build(mut records: Vec<DocumentMetadata>, tz: &TimeZone) -> Self {
        sort_newest_first(&mut records);

        let rows: Vec<HistoryRow> = records
            .iter()
            .map(|doc| HistoryRow {
                id: doc.id.clone(),
                name: doc.name.clone(),
                size: format_size(doc.size),
                mime_type: doc.mime_type.clone(),
                last_modified: format_timestamp_in(doc.last_modified, tz),
                uploaded_at: format_timestamp_in(&doc.uploaded_at, tz),
            })
            .collect();

        let stats = HistoryStats {
            count: rows.len(),
            last_uploaded_at: rows.first().map(|row| row.uploaded_at.clone()),
            total_bytes: records.iter().map(|doc| doc.size).sum(),
        };

        Self { rows, stats }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Orders by `uploadedAt`, most recent first.
///
/// Values that are not valid instants go last, compared as raw text. Equal
/// keys have no guaranteed relative order.
pub fn sort_newest_first(records: &mut [DocumentMetadata]) {
    records.sort_by(|a, b| {
        match (parse_instant(&a.uploaded_at), parse_instant(&b.uploaded_at)) {
            (Some(ta), Some(tb)) => tb.cmp(&ta),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => b.uploaded_at.cmp(&a.uploaded_at),
        }
    });
}

/// Current contents of `store`, ready for display.
pub fn render<S: KeyValueStorage>(store: &MetadataStore<S>, tz: &TimeZone) -> HistoryView {
    HistoryView::build(store.get_all(), tz)
}

/// Applies the answer to the clear confirmation.
///
/// Returns the re-rendered (empty) view when `confirmed`, `None` otherwise;
/// a declined prompt touches neither the store nor the display.
pub fn clear_history<S: KeyValueStorage>(
    store: &MetadataStore<S>,
    confirmed: bool,
    tz: &TimeZone,
) -> Option<HistoryView> {
    if !confirmed {
        return None;
    }
    store.clear();
    Some(render(store, tz))
}
