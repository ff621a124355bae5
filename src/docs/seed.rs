use super::store::DocumentStore;
use super::types::{CreateDocumentInput, Document, StoreError};

/// Welcome documents a fresh workspace starts with
const SAMPLE_DOCUMENTS: [(&str, &str); 2] = [
    (
        "Getting Started with Writing",
        "<p>Welcome to your new writing app! This is a simple guide to help you get started \
         with the features.</p><p>Use the toolbar above to format your text, add headings, \
         and more. Your work is automatically saved as you type.</p>",
    ),
    (
        "My First Novel",
        "<p>It was a dark and stormy night. The wind howled through the trees, sending \
         shivers down my spine.</p><p>I knew I had to keep moving, but my legs felt heavy, \
         like they were made of lead.</p>",
    ),
];

/// Install the welcome documents for a new user
pub fn seed_sample_documents(
    store: &DocumentStore,
    owner_id: &str,
) -> Result<Vec<Document>, StoreError> {
    let mut seeded = Vec::with_capacity(SAMPLE_DOCUMENTS.len());

    for (title, content) in SAMPLE_DOCUMENTS {
        seeded.push(store.create(
            owner_id,
            CreateDocumentInput {
                title: Some(title.to_string()),
                content: Some(content.to_string()),
            },
        )?);
    }

    Ok(seeded)
}
