use std::sync::atomic::{AtomicU64, Ordering};

use indextree::{Arena, NodeId};

use crate::error::Error;
use crate::name::NameLookup;
use crate::xmlvalue::Value;

pub(crate) type XmlArena = Arena<Value>;

static NEXT_DOCUMENT_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of a [`Document`]. Unique within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(u64);

impl DocumentId {
    fn next() -> Self {
        DocumentId(NEXT_DOCUMENT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A node in an XML tree.
///
/// This is a lightweight handle and can be copied. It remembers the
/// document that created it; only that document accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node {
    document: DocumentId,
    id: NodeId,
}

impl Node {
    #[inline]
    pub(crate) fn new(document: DocumentId, id: NodeId) -> Self {
        Node { document, id }
    }

    #[inline]
    pub(crate) fn get(&self) -> NodeId {
        self.id
    }

    /// The document this node belongs to.
    #[inline]
    pub fn document(&self) -> DocumentId {
        self.document
    }
}

/// An XML document: a tree of nodes under a document root.
///
/// The document is the only factory for nodes that can be attached to it.
/// To bring content over from another document, reconstruct it with
/// [`Document::deep_copy`] or [`Document::merge_fragment`].
///
/// Cloning a document produces a new, independent document with its own
/// identity. Handles of the original are not accepted by the clone.
#[derive(Debug)]
pub struct Document {
    pub(crate) id: DocumentId,
    pub(crate) arena: XmlArena,
    pub(crate) name_lookup: NameLookup,
    pub(crate) root: NodeId,
}

impl Document {
    /// Create a new document that contains only a document root.
    pub fn new() -> Self {
        let mut arena = XmlArena::new();
        let root = arena.new_node(Value::Root);
        Document {
            id: DocumentId::next(),
            arena,
            name_lookup: NameLookup::new(),
            root,
        }
    }

    /// The identity of this document.
    pub fn id(&self) -> DocumentId {
        self.id
    }

    /// Return true if the node was created by this document.
    pub fn owns(&self, node: Node) -> bool {
        node.document == self.id
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> Node {
        Node::new(self.id, id)
    }

    /// # Panics
    ///
    /// Panics if `node` was created by another document.
    #[inline]
    pub(crate) fn node_id(&self, node: Node) -> NodeId {
        assert!(self.owns(node), "node belongs to another document");
        node.get()
    }

    pub(crate) fn check_owned(&self, node: Node) -> Result<(), Error> {
        if self.owns(node) {
            Ok(())
        } else {
            Err(Error::ForeignNode(node))
        }
    }

    #[inline]
    pub(crate) fn arena(&self) -> &XmlArena {
        &self.arena
    }

    #[inline]
    pub(crate) fn arena_mut(&mut self) -> &mut XmlArena {
        &mut self.arena
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Document {
    fn clone(&self) -> Self {
        Document {
            id: DocumentId::next(),
            arena: self.arena.clone(),
            name_lookup: self.name_lookup.clone(),
            root: self.root,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_have_distinct_ids() {
        let a = Document::new();
        let b = Document::new();
        assert_ne!(a.id(), b.id());
        assert!(a.owns(a.root()));
        assert!(!b.owns(a.root()));
    }

    #[test]
    fn test_clone_is_a_new_document() {
        let doc = Document::parse("<a><b/></a>").unwrap();
        let clone = doc.clone();
        assert_ne!(doc.id(), clone.id());
        assert!(!clone.owns(doc.root()));
        assert_eq!(
            clone.to_string(clone.root()).unwrap(),
            doc.to_string(doc.root()).unwrap()
        );
    }
}
