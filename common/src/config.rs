//! Fixed application constants.

/// Key of the single `localStorage` entry holding the serialized history.
pub const STORAGE_KEY: &str = "axa_docs";

/// Value stored in `type` when the browser reports no MIME type.
pub const UNKNOWN_TYPE: &str = "inconnu";

pub const APP_TITLE: &str = "AXA | Plateforme Documents";
