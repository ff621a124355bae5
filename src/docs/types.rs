use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Title given to documents created without one
pub const DEFAULT_TITLE: &str = "Untitled Document";
/// Body a freshly created document starts with
pub const STARTER_CONTENT: &str = "<p>Start writing your masterpiece...</p>";
/// Maximum content preview length the dashboard cards display
pub const PREVIEW_LENGTH: usize = 150;

/// A document owned by a single user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub content: String, // HTML from the rich-text editing surface
    pub created_at: i64,
    pub updated_at: i64,
    pub owner_id: String,
}

impl Document {
    /// Truncated content slice for list/card views
    pub fn preview(&self, max_len: usize) -> String {
        if self.content.len() <= max_len {
            self.content.clone()
        } else {
            let mut preview: String = self.content.chars().take(max_len).collect();
            preview.push_str("...");
            preview
        }
    }
}

/// Input for creating a new document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateDocumentInput {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Input for updating an existing document
///
/// `id`, `owner_id` and `created_at` are immutable and deliberately absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDocumentInput {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Errors from document store operations
///
/// An ownership mismatch reports `NotFound`, never a distinct value, so a
/// caller cannot learn that a document exists under another owner.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("document not found")]
    NotFound,
    #[error("failed to acquire store lock")]
    Lock,
}
