//! Page extraction.
//!
//! A new document is derived from a source by keeping a subset of its pages
//! and flattening them directly under the root page node:
//! - Inheritable attributes are copied down from the page's ancestors
//! - Every kept page is re-parented to the root page node
//! - The outline is dropped and unreachable objects are pruned

use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::error::{FileKitError, Result};

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE_KEYS: [&str; 4] = ["Resources", "MediaBox", "CropBox", "Rotate"];

/// Guards against cyclic `Parent` chains in damaged files.
const MAX_TREE_DEPTH: usize = 64;

/// Builds documents that hold a subset of another document's pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageExtractor;

impl PageExtractor {
    /// Create a new page extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract pages into a new document.
    ///
    /// # Arguments
    ///
    /// * `doc` - Source document, left untouched
    /// * `pages` - 1-based page numbers, in output order
    ///
    /// # Errors
    ///
    /// Returns an error if `pages` is empty, names a page the document does
    /// not have, or the page tree is malformed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use filekit::split::pages::PageExtractor;
    /// # use lopdf::Document;
    /// # fn example(doc: Document) -> Result<(), Box<dyn std::error::Error>> {
    /// let first_two = PageExtractor::new().extract_pages(&doc, &[1, 2])?;
    /// assert_eq!(first_two.get_pages().len(), 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn extract_pages(&self, doc: &Document, pages: &[u32]) -> Result<Document> {
        if pages.is_empty() {
            return Err(FileKitError::invalid_page_range("No pages selected"));
        }

        let all_pages = doc.get_pages();
        let page_ids = pages
            .iter()
            .map(|number| {
                all_pages.get(number).copied().ok_or_else(|| {
                    FileKitError::invalid_page_range(format!(
                        "Page {number} does not exist (document has {} pages)",
                        all_pages.len()
                    ))
                })
            })
            .collect::<Result<Vec<ObjectId>>>()?;

        let mut new_doc = doc.clone();
        let root_pages_id = root_pages_id(&new_doc)?;

        for &page_id in &page_ids {
            let inherited = inherited_attributes(&new_doc, page_id)?;
            let page = new_doc
                .get_object_mut(page_id)
                .and_then(Object::as_dict_mut)
                .map_err(|e| FileKitError::other(format!("Failed to get page: {e}")))?;

            for (key, value) in inherited {
                page.set(key, value);
            }
            page.set("Parent", Object::Reference(root_pages_id));
        }

        update_page_tree(&mut new_doc, root_pages_id, &page_ids)?;

        if let Ok(catalog) = new_doc.catalog_mut() {
            catalog.remove(b"Outlines");
        }

        let pruned = new_doc.prune_objects();
        tracing::debug!(kept = page_ids.len(), pruned = pruned.len(), "extracted pages");

        Ok(new_doc)
    }

    /// Get the number of pages in a document.
    pub fn page_count(&self, doc: &Document) -> usize {
        doc.get_pages().len()
    }
}

fn root_pages_id(doc: &Document) -> Result<ObjectId> {
    doc.catalog()
        .and_then(|catalog| catalog.get(b"Pages"))
        .and_then(Object::as_reference)
        .map_err(|e| FileKitError::other(format!("Failed to get pages reference: {e}")))
}

/// Attributes the page lacks but an ancestor defines, nearest ancestor first.
fn inherited_attributes(
    doc: &Document,
    page_id: ObjectId,
) -> Result<Vec<(&'static str, Object)>> {
    let page = doc
        .get_dictionary(page_id)
        .map_err(|e| FileKitError::other(format!("Failed to get page: {e}")))?;

    let mut missing: Vec<&'static str> = INHERITABLE_KEYS
        .into_iter()
        .filter(|key| !page.has(key.as_bytes()))
        .collect();

    let mut inherited = Vec::new();
    let mut current: &Dictionary = page;

    for _ in 0..MAX_TREE_DEPTH {
        if missing.is_empty() {
            break;
        }

        let Ok(parent) = current
            .get(b"Parent")
            .and_then(Object::as_reference)
            .and_then(|id| doc.get_dictionary(id))
        else {
            break;
        };

        missing.retain(|key| match parent.get(key.as_bytes()) {
            Ok(value) => {
                inherited.push((*key, value.clone()));
                false
            }
            Err(_) => true,
        });
        current = parent;
    }

    Ok(inherited)
}

/// Point the root page node at exactly `page_ids`.
fn update_page_tree(
    doc: &mut Document,
    root_pages_id: ObjectId,
    page_ids: &[ObjectId],
) -> Result<()> {
    let pages = doc
        .get_object_mut(root_pages_id)
        .and_then(Object::as_dict_mut)
        .map_err(|e| FileKitError::other(format!("Pages object is not a dictionary: {e}")))?;

    let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();
    pages.set("Kids", Object::Array(kids));
    pages.set("Count", Object::Integer(page_ids.len() as i64));

    Ok(())
}
