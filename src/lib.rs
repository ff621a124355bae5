//! Storage and autosave core for the Scribepad writing app.
//!
//! This crate provides:
//! - An in-memory, owner-scoped document store
//! - A per-session debounced autosave controller
//! - The editor session wrapper that ties the two together

pub mod autosave;
pub mod docs;
pub mod session;

pub use autosave::{AutosaveController, SaveIndicator, SaveState, AUTOSAVE_DELAY_MS};
pub use docs::{
    seed_sample_documents, CreateDocumentInput, Document, DocumentStore, StoreError,
    UpdateDocumentInput, DEFAULT_TITLE, PREVIEW_LENGTH, STARTER_CONTENT,
};
pub use session::EditorSession;
