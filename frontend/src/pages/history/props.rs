use yew::prelude::*;

use crate::storage::StoreHandle;

/// Properties for the `HistoryPage`.
#[derive(Properties, PartialEq, Clone)]
pub struct HistoryPageProps {
    /// Store the page reads from and clears. Shared with the upload page.
    pub store: StoreHandle,
}
