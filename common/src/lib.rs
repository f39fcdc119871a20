//! Shared core of the document intake tracker.
//!
//! Everything here is independent of the browser so it can be exercised by
//! native tests: the `DocumentMetadata` model, the `MetadataStore` over an
//! abstract key-value backend, display formatting, and the upload and history
//! logic driven by the `frontend` pages.

pub mod config;
pub mod format;
pub mod history;
pub mod messages;
pub mod model;
pub mod storage;
pub mod store;
pub mod upload;
