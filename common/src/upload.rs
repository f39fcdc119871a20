//! Upload transaction: one selected file becomes one appended record.
//!
//! The browser side only extracts a [`SelectedFile`] from the file input and
//! applies the returned [`UploadOutcome`] to the page.

use jiff::Timestamp;
use log::error;
use uuid::Uuid;

use crate::config::UNKNOWN_TYPE;
use crate::format::to_iso_string;
use crate::messages;
use crate::model::document::DocumentMetadata;
use crate::storage::KeyValueStorage;
use crate::store::MetadataStore;

const ID_SUFFIX_LEN: usize = 6;

/// Intrinsic properties of the file picked by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    /// Empty when the browser could not determine a type.
    pub mime_type: String,
    pub last_modified: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Info,
    Error,
}

/// Text shown in the feedback region of the upload page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: String,
}

impl Feedback {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Error,
            message: message.into(),
        }
    }

    pub fn color(&self) -> &'static str {
        match self.kind {
            FeedbackKind::Info => "#64748b",
            FeedbackKind::Error => "#e4002b",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadOutcome {
    pub feedback: Feedback,
    /// Whether the file input must be emptied.
    pub reset_input: bool,
    /// The record handed to the store, if one was built.
    pub record: Option<DocumentMetadata>,
}

/// `<epoch ms>-<6 base36 chars>`. Not guaranteed unique.
pub fn new_document_id(now: Timestamp) -> String {
    let mut entropy = Uuid::new_v4().as_u128();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| {
            let digit = (entropy % 36) as u32;
            entropy /= 36;
            char::from_digit(digit, 36).unwrap_or('0')
        })
        .collect();
    format!("{}-{}", now.as_millisecond(), suffix)
}

pub fn build_record(file: &SelectedFile, now: Timestamp) -> DocumentMetadata {
    let mime_type = if file.mime_type.is_empty() {
        UNKNOWN_TYPE.to_string()
    } else {
        file.mime_type.clone()
    };

    DocumentMetadata {
        id: new_document_id(now),
        name: file.name.clone(),
        size: file.size,
        mime_type,
        last_modified: file.last_modified,
        uploaded_at: to_iso_string(now),
    }
}

/// Records `selection` in `store` and describes what the page must show.
///
/// Without a selection nothing is written.
pub fn handle_upload<S: KeyValueStorage>(
    store: &MetadataStore<S>,
    selection: Option<SelectedFile>,
    now: Timestamp,
) -> UploadOutcome {
    let Some(file) = selection else {
        return UploadOutcome {
            feedback: Feedback::error(messages::SELECTION_REQUIRED),
            reset_input: false,
            record: None,
        };
    };

    let record = build_record(&file, now);
    match store.append(record.clone()) {
        Ok(()) => UploadOutcome {
            feedback: Feedback::info(messages::upload_succeeded(&file.name)),
            reset_input: true,
            record: Some(record),
        },
        Err(e) => {
            error!("Ajout de {} échoué: {}", file.name, e);
            UploadOutcome {
                feedback: Feedback::error(messages::UPLOAD_FAILED),
                reset_input: false,
                record: Some(record),
            }
        }
    }
}
