use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::docs::{Document, DocumentStore, StoreError, UpdateDocumentInput};

use super::types::{SaveState, AUTOSAVE_DELAY_MS};

/// Latest captured edits plus the last successfully saved baseline
struct EditBuffer {
    title: String,
    content: String,
    saved_title: String,
    saved_content: String,
}

impl EditBuffer {
    fn is_dirty(&self) -> bool {
        self.title != self.saved_title || self.content != self.saved_content
    }
}

/// Debounced autosave for one open editing session
///
/// Every edit event captures the new value and re-arms a single commit timer;
/// when the timer fires with no intervening edit, the latest title and content
/// are written to the store in one update. Edit notifications must be called
/// from within the tokio runtime.
pub struct AutosaveController {
    store: Arc<DocumentStore>,
    owner_id: String,
    document_id: String,
    delay: Duration,
    buffer: Arc<Mutex<EditBuffer>>,
    /// Single-slot pending commit; arming replaces and aborts the previous one
    timer: Mutex<Option<JoinHandle<()>>>,
    state_tx: Arc<watch::Sender<SaveState>>,
    state_rx: watch::Receiver<SaveState>,
    last_error: Arc<Mutex<Option<StoreError>>>,
}

impl AutosaveController {
    /// Create a controller with the default one second delay
    pub fn new(store: Arc<DocumentStore>, document: &Document) -> Self {
        Self::with_delay(store, document, Duration::from_millis(AUTOSAVE_DELAY_MS))
    }

    /// Create a controller with a custom debounce delay
    pub fn with_delay(store: Arc<DocumentStore>, document: &Document, delay: Duration) -> Self {
        let (state_tx, state_rx) = watch::channel(SaveState::Idle);

        AutosaveController {
            store,
            owner_id: document.owner_id.clone(),
            document_id: document.id.clone(),
            delay,
            buffer: Arc::new(Mutex::new(EditBuffer {
                title: document.title.clone(),
                content: document.content.clone(),
                saved_title: document.title.clone(),
                saved_content: document.content.clone(),
            })),
            timer: Mutex::new(None),
            state_tx: Arc::new(state_tx),
            state_rx,
            last_error: Arc::new(Mutex::new(None)),
        }
    }

    /// Capture a title edit and re-arm the commit timer
    pub fn notify_title_changed(&self, title: impl Into<String>) {
        {
            let mut buffer = self.buffer.lock().unwrap();
            buffer.title = title.into();
            let _ = self.state_tx.send(SaveState::PendingSave);
        }
        self.arm_timer();
    }

    /// Capture a content edit and re-arm the commit timer
    pub fn notify_content_changed(&self, content: impl Into<String>) {
        {
            let mut buffer = self.buffer.lock().unwrap();
            buffer.content = content.into();
            let _ = self.state_tx.send(SaveState::PendingSave);
        }
        self.arm_timer();
    }

    /// Commit any outstanding edits right now, cancelling the timer
    pub fn flush(&self) -> Result<(), StoreError> {
        self.cancel();

        let dirty = self.buffer.lock().unwrap().is_dirty();
        if !dirty {
            return Ok(());
        }

        commit(
            &self.store,
            &self.owner_id,
            &self.document_id,
            &self.buffer,
            &self.state_tx,
        )
    }

    /// Drop any pending commit without writing
    pub fn cancel(&self) {
        if let Some(handle) = self.timer.lock().unwrap().take() {
            handle.abort();
        }
    }

    /// Whether the buffer holds edits the store has not seen
    pub fn is_dirty(&self) -> bool {
        self.buffer.lock().unwrap().is_dirty()
    }

    /// Current state machine state
    pub fn status(&self) -> SaveState {
        *self.state_rx.borrow()
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<SaveState> {
        self.state_tx.subscribe()
    }

    /// Take the most recent commit failure, if any
    pub fn take_last_error(&self) -> Option<StoreError> {
        self.last_error.lock().unwrap().take()
    }

    fn arm_timer(&self) {
        let store = self.store.clone();
        let owner_id = self.owner_id.clone();
        let document_id = self.document_id.clone();
        let buffer = self.buffer.clone();
        let state_tx = self.state_tx.clone();
        let last_error = self.last_error.clone();
        let delay = self.delay;

        let mut slot = self.timer.lock().unwrap();
        if let Some(previous) = slot.take() {
            previous.abort();
        }

        *slot = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            if let Err(e) = commit(&store, &owner_id, &document_id, &buffer, &state_tx) {
                eprintln!("autosave failed for document {}: {}", document_id, e);
                *last_error.lock().unwrap() = Some(e);
            }
        }));
    }
}

impl Drop for AutosaveController {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Write the latest captured title and content to the store
///
/// Contains no await points, so an aborted timer task either never commits or
/// has already committed in full.
fn commit(
    store: &DocumentStore,
    owner_id: &str,
    document_id: &str,
    buffer: &Mutex<EditBuffer>,
    state_tx: &watch::Sender<SaveState>,
) -> Result<(), StoreError> {
    let (title, content) = {
        let buffer = buffer.lock().unwrap();
        let _ = state_tx.send(SaveState::Saving);
        (buffer.title.clone(), buffer.content.clone())
    };

    let result = store.update(
        owner_id,
        document_id,
        UpdateDocumentInput {
            title: Some(title.clone()),
            content: Some(content.clone()),
        },
    );

    let mut buffer = buffer.lock().unwrap();
    match result {
        Ok(_) => {
            buffer.saved_title = title;
            buffer.saved_content = content;
            // An edit may have landed while the write was in flight; its own
            // timer is already armed, so only report idle when truly clean.
            let state = if buffer.is_dirty() {
                SaveState::PendingSave
            } else {
                SaveState::Idle
            };
            let _ = state_tx.send(state);
            Ok(())
        }
        Err(e) => {
            let _ = state_tx.send(SaveState::Idle);
            Err(e)
        }
    }
}
