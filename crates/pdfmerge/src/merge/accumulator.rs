//! The output document that pages are appended to.
//!
//! The accumulator owns a fresh catalog and a single flat `Pages` node.
//! Appending an input moves its objects in (renumbered above everything
//! already present), hangs its pages under the shared `Pages` node and drops
//! the input's own catalog and page tree.

use lopdf::{Dictionary, Document, Object, ObjectId, dictionary};
use std::collections::BTreeSet;

use crate::error::{PdfMergeError, Result};
use crate::io::LoadedPdf;

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Accumulates pages from several documents into one.
#[derive(Debug)]
pub struct PageAccumulator {
    document: Document,
    pages_id: ObjectId,
    page_ids: Vec<ObjectId>,
}

impl PageAccumulator {
    /// Create an empty output document.
    pub fn new() -> Self {
        let mut document = Document::with_version("1.5");

        let pages_id = document.new_object_id();
        document.objects.insert(pages_id, empty_pages_node().into());

        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        document.trailer.set("Root", catalog_id);

        Self {
            document,
            pages_id,
            page_ids: Vec::new(),
        }
    }

    /// Number of pages appended so far.
    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Whether no page has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.page_ids.is_empty()
    }

    /// Append every page of `source`, in document order.
    ///
    /// Consumes the input; its document is released when this returns.
    /// Either all pages are appended or, on error, none are.
    ///
    /// Returns the number of pages appended.
    ///
    /// # Errors
    ///
    /// [`PdfMergeError::UnreadableInput`] if the input's page tree is
    /// malformed (a page that is not a dictionary).
    pub fn append(&mut self, source: LoadedPdf) -> Result<usize> {
        let LoadedPdf { document: mut doc, path } = source;

        doc.renumber_objects_with(self.document.max_id + 1);

        let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();
        if page_ids.is_empty() {
            return Ok(0);
        }

        for &page_id in &page_ids {
            let inherited = inherited_attributes(&doc, page_id);

            let page = doc
                .get_object_mut(page_id)
                .and_then(Object::as_dict_mut)
                .map_err(|err| {
                    PdfMergeError::unreadable_input(
                        &path,
                        format!("page {} {} R is not usable: {err}", page_id.0, page_id.1),
                    )
                })?;

            for (key, value) in inherited {
                page.set(key, value);
            }
            page.set("Parent", self.pages_id);
        }

        let tree_nodes = page_tree_nodes(&doc);
        for (id, object) in doc.objects {
            if !tree_nodes.contains(&id) {
                self.document.objects.insert(id, object);
            }
        }

        self.document.max_id = self.document.max_id.max(doc.max_id);
        self.page_ids.extend_from_slice(&page_ids);

        Ok(page_ids.len())
    }

    /// Finish the page tree and hand out the merged document.
    ///
    /// Objects no longer reachable from the catalog are pruned and object
    /// ids are renumbered compactly.
    pub fn finish(self) -> Document {
        let Self {
            mut document,
            pages_id,
            page_ids,
        } = self;

        let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();
        let mut pages = empty_pages_node();
        pages.set("Kids", Object::Array(kids));
        pages.set("Count", Object::Integer(page_ids.len() as i64));
        document.objects.insert(pages_id, pages.into());

        document.prune_objects();
        document.renumber_objects();

        document
    }
}

impl Default for PageAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

fn empty_pages_node() -> Dictionary {
    dictionary! {
        "Type" => "Pages",
        "Kids" => Vec::<Object>::new(),
        "Count" => 0,
    }
}

/// Inheritable attributes the page lacks but an ancestor defines.
///
/// The nearest ancestor wins. Cycles in `Parent` links are cut.
fn inherited_attributes(doc: &Document, page_id: ObjectId) -> Vec<(&'static [u8], Object)> {
    let Ok(page) = doc.get_dictionary(page_id) else {
        return Vec::new();
    };

    let mut found: Vec<(&'static [u8], Object)> = Vec::new();
    let mut visited = BTreeSet::from([page_id]);
    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();

    while let Some(node_id) = parent {
        if !visited.insert(node_id) {
            break;
        }
        let Ok(node) = doc.get_dictionary(node_id) else {
            break;
        };

        for key in INHERITABLE_KEYS {
            if page.has(key) || found.iter().any(|(k, _)| *k == key) {
                continue;
            }
            if let Ok(value) = node.get(key) {
                found.push((key, value.clone()));
            }
        }

        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
    }

    found
}

/// Ids of the source catalog and every `Pages` node.
fn page_tree_nodes(doc: &Document) -> BTreeSet<ObjectId> {
    let mut nodes: BTreeSet<ObjectId> = doc
        .objects
        .iter()
        .filter(|(_, object)| {
            matches!(type_name(object), Some(name) if name == b"Pages" || name == b"Catalog")
        })
        .map(|(&id, _)| id)
        .collect();

    if let Ok(root) = doc.trailer.get(b"Root").and_then(Object::as_reference) {
        nodes.insert(root);
    }

    nodes
}

fn type_name(object: &Object) -> Option<&[u8]> {
    object
        .as_dict()
        .ok()?
        .get(b"Type")
        .ok()?
        .as_name()
        .ok()
}
