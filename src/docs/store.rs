use std::sync::Mutex;

use super::types::{
    CreateDocumentInput, Document, StoreError, UpdateDocumentInput, DEFAULT_TITLE, STARTER_CONTENT,
};

/// In-memory collection of document records
///
/// Constructed once at application start and shared behind an `Arc`. Every
/// operation is scoped to an owner; an id that belongs to someone else fails
/// closed with `NotFound`.
pub struct DocumentStore {
    documents: Mutex<Vec<Document>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        DocumentStore {
            documents: Mutex::new(Vec::new()),
        }
    }

    /// List the owner's documents in insertion order
    pub fn list(&self, owner_id: &str) -> Result<Vec<Document>, StoreError> {
        let documents = self.documents.lock().map_err(|_| StoreError::Lock)?;

        Ok(documents
            .iter()
            .filter(|d| d.owner_id == owner_id)
            .cloned()
            .collect())
    }

    /// Number of documents the owner has
    pub fn count(&self, owner_id: &str) -> Result<usize, StoreError> {
        let documents = self.documents.lock().map_err(|_| StoreError::Lock)?;

        Ok(documents.iter().filter(|d| d.owner_id == owner_id).count())
    }

    /// Get a single document by id
    pub fn get(&self, owner_id: &str, id: &str) -> Result<Document, StoreError> {
        let documents = self.documents.lock().map_err(|_| StoreError::Lock)?;

        documents
            .iter()
            .find(|d| d.id == id && d.owner_id == owner_id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Create a new document
    pub fn create(
        &self,
        owner_id: &str,
        input: CreateDocumentInput,
    ) -> Result<Document, StoreError> {
        let mut documents = self.documents.lock().map_err(|_| StoreError::Lock)?;
        let now = chrono::Utc::now().timestamp_millis();

        let document = Document {
            id: uuid::Uuid::new_v4().to_string(),
            title: input.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            content: input.content.unwrap_or_else(|| STARTER_CONTENT.to_string()),
            created_at: now,
            updated_at: now,
            owner_id: owner_id.to_string(),
        };

        documents.push(document.clone());
        Ok(document)
    }

    /// Merge the supplied fields into an existing document
    ///
    /// `updated_at` is stamped on every successful update, whether or not any
    /// field was supplied.
    pub fn update(
        &self,
        owner_id: &str,
        id: &str,
        input: UpdateDocumentInput,
    ) -> Result<Document, StoreError> {
        let mut documents = self.documents.lock().map_err(|_| StoreError::Lock)?;

        let document = documents
            .iter_mut()
            .find(|d| d.id == id && d.owner_id == owner_id)
            .ok_or(StoreError::NotFound)?;

        if let Some(title) = input.title {
            document.title = title;
        }
        if let Some(content) = input.content {
            document.content = content;
        }

        // updated_at never decreases, even if the wall clock steps backwards
        let now = chrono::Utc::now().timestamp_millis();
        document.updated_at = now.max(document.updated_at);

        Ok(document.clone())
    }

    /// Delete a document by id; deleting a missing id is a no-op
    pub fn delete(&self, owner_id: &str, id: &str) -> Result<(), StoreError> {
        let mut documents = self.documents.lock().map_err(|_| StoreError::Lock)?;

        documents.retain(|d| !(d.id == id && d.owner_id == owner_id));
        Ok(())
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}
