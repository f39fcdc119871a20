//! Runtime state of the history page.

use common::history::{render, HistoryView};
use common::store::MetadataStore;
use jiff::tz::TimeZone;

use crate::storage::BrowserStorage;

pub struct HistoryPage {
    /// Last projection of the store, newest upload first.
    pub view: HistoryView,

    /// Whether the clear confirmation dialog is shown.
    pub confirm_open: bool,

    /// Outcome of the last per-row removal, if any.
    pub notice: Option<String>,
}

impl HistoryPage {
    pub fn load(store: &MetadataStore<BrowserStorage>) -> Self {
        Self {
            view: render(store, &TimeZone::system()),
            confirm_open: false,
            notice: None,
        }
    }

    pub fn reload(&mut self, store: &MetadataStore<BrowserStorage>) {
        self.view = render(store, &TimeZone::system());
    }
}
