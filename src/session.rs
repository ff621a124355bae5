use std::sync::Arc;
use tokio::sync::watch;

use crate::autosave::{AutosaveController, SaveState};
use crate::docs::{Document, DocumentStore, StoreError};

/// One open editing session for one document
///
/// Opening performs the owner-scoped load, so a missing document and a
/// document owned by someone else both surface as `NotFound` and the UI can
/// redirect without learning which it was.
pub struct EditorSession {
    document: Document,
    controller: AutosaveController,
}

impl EditorSession {
    /// Load the document and start an autosave session over it
    pub fn open(
        store: Arc<DocumentStore>,
        owner_id: &str,
        document_id: &str,
    ) -> Result<Self, StoreError> {
        let document = store.get(owner_id, document_id)?;
        let controller = AutosaveController::new(store, &document);

        Ok(EditorSession {
            document,
            controller,
        })
    }

    /// The snapshot loaded at open time, for the initial render
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn notify_title_changed(&self, title: impl Into<String>) {
        self.controller.notify_title_changed(title);
    }

    pub fn notify_content_changed(&self, content: impl Into<String>) {
        self.controller.notify_content_changed(content);
    }

    pub fn status(&self) -> SaveState {
        self.controller.status()
    }

    pub fn subscribe(&self) -> watch::Receiver<SaveState> {
        self.controller.subscribe()
    }

    pub fn take_last_error(&self) -> Option<StoreError> {
        self.controller.take_last_error()
    }

    /// End the session, committing any edits still inside the debounce window
    pub fn close(self) -> Result<(), StoreError> {
        self.controller.flush()
    }

    /// End the session discarding edits still inside the debounce window
    pub fn close_discarding(self) {
        self.controller.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::{CreateDocumentInput, STARTER_CONTENT};
    use std::time::Duration;
    use tokio::time::sleep;

    fn make_store_with_document() -> (Arc<DocumentStore>, Document) {
        let store = Arc::new(DocumentStore::new());
        let doc = store.create("u1", CreateDocumentInput::default()).unwrap();
        (store, doc)
    }

    #[tokio::test(start_paused = true)]
    async fn test_open_missing_document_fails() {
        let store = Arc::new(DocumentStore::new());

        let result = EditorSession::open(store, "u1", "no-such-id");
        assert!(matches!(result, Err(StoreError::NotFound)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_open_foreign_document_fails() {
        let (store, doc) = make_store_with_document();

        let result = EditorSession::open(store, "u2", &doc.id);
        assert!(matches!(result, Err(StoreError::NotFound)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_open_loads_snapshot() {
        let (store, doc) = make_store_with_document();

        let session = EditorSession::open(store, "u1", &doc.id).unwrap();
        assert_eq!(session.document().content, STARTER_CONTENT);
        assert_eq!(session.status(), SaveState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_flushes_pending_edit() {
        let (store, doc) = make_store_with_document();

        let session = EditorSession::open(store.clone(), "u1", &doc.id).unwrap();
        session.notify_content_changed("<p>almost lost</p>");
        session.close().unwrap();

        assert_eq!(
            store.get("u1", &doc.id).unwrap().content,
            "<p>almost lost</p>"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_discarding_drops_pending_edit() {
        let (store, doc) = make_store_with_document();

        let session = EditorSession::open(store.clone(), "u1", &doc.id).unwrap();
        session.notify_content_changed("<p>gone</p>");
        session.close_discarding();

        sleep(Duration::from_millis(1500)).await;
        assert_eq!(store.get("u1", &doc.id).unwrap().content, STARTER_CONTENT);
    }
}
