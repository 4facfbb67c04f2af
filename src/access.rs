use indextree::NodeEdge as IndexTreeNodeEdge;

use crate::document::{Document, Node};
use crate::error::Error;
use crate::xmlvalue::Value;

/// Node edges.
///
/// Used by [`Document::traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeEdge {
    /// The start edge of a node. In case of an element
    /// this is the start tag. In case of root
    /// the start of the document.
    Start(Node),
    /// The end edge of a node. In case of an element
    /// this is the end tag. In case of root the end
    /// of the document. For any other values, the
    /// end edge occurs immediately after the start
    /// edge.
    End(Node),
}

/// ## Read-only access
///
/// Nodes passed in must belong to this document; a node created by another
/// document makes these accessors panic.
impl Document {
    /// The document root. This holds the document element as well as any
    /// comments and processing instructions outside of it.
    pub fn root(&self) -> Node {
        self.node(self.root)
    }

    /// Obtain the document element: the single element under the root.
    ///
    /// Returns [`Error::NoDocumentElement`] for a document that has none
    /// yet.
    ///
    /// ```rust
    /// let doc = xmlgraft::Document::parse("<p>Example</p>")?;
    /// let p = doc.document_element()?;
    /// assert_eq!(doc.element_name(p), Some("p"));
    /// # Ok::<(), xmlgraft::Error>(())
    /// ```
    pub fn document_element(&self) -> Result<Node, Error> {
        self.children(self.root())
            .find(|child| matches!(self.value(*child), Value::Element(_)))
            .ok_or(Error::NoDocumentElement)
    }

    /// Get parent node.
    ///
    /// Returns [`None`] if this is the root node or if the node is
    /// unattached.
    pub fn parent(&self, node: Node) -> Option<Node> {
        self.arena()[self.node_id(node)].parent().map(|id| self.node(id))
    }

    /// Get first child.
    ///
    /// Returns [`None`] if there are no children.
    pub fn first_child(&self, node: Node) -> Option<Node> {
        self.arena()[self.node_id(node)]
            .first_child()
            .map(|id| self.node(id))
    }

    /// Get last child.
    ///
    /// Returns [`None`] if there are no children.
    ///
    /// ```rust
    /// let doc = xmlgraft::Document::parse("<p><a/><b/></p>")?;
    /// let p = doc.document_element()?;
    /// let b = doc.last_child(p).unwrap();
    /// assert_eq!(doc.element_name(b), Some("b"));
    /// assert_eq!(doc.last_child(doc.root()), Some(p));
    /// # Ok::<(), xmlgraft::Error>(())
    /// ```
    pub fn last_child(&self, node: Node) -> Option<Node> {
        self.arena()[self.node_id(node)]
            .last_child()
            .map(|id| self.node(id))
    }

    /// Get next sibling.
    pub fn next_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[self.node_id(node)]
            .next_sibling()
            .map(|id| self.node(id))
    }

    /// Get previous sibling.
    pub fn previous_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[self.node_id(node)]
            .previous_sibling()
            .map(|id| self.node(id))
    }

    /// Return true if the node has at least one child.
    pub fn has_children(&self, node: Node) -> bool {
        self.first_child(node).is_some()
    }

    /// Iterator over the child nodes of this node, in document order.
    pub fn children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        self.node_id(node)
            .children(self.arena())
            .map(move |id| self.node(id))
    }

    /// Iterator over ancestor nodes, including this one.
    pub fn ancestors(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        self.node_id(node)
            .ancestors(self.arena())
            .map(move |id| self.node(id))
    }

    /// Iterator over of the descendants of this node, including this one,
    /// in document order (pre-order depth-first).
    pub fn descendants(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        self.node_id(node)
            .descendants(self.arena())
            .map(move |id| self.node(id))
    }

    /// Traverse over node edges.
    ///
    /// This walks the tree in document order without recursion while
    /// keeping structure information.
    ///
    /// ```rust
    /// use xmlgraft::NodeEdge;
    ///
    /// let doc = xmlgraft::Document::parse("<a><b>Text</b></a>")?;
    /// let a = doc.document_element()?;
    /// let b = doc.first_child(a).unwrap();
    /// let text = doc.first_child(b).unwrap();
    /// let edges = doc.traverse(a).collect::<Vec<_>>();
    /// assert_eq!(edges, vec![
    ///     NodeEdge::Start(a),
    ///     NodeEdge::Start(b),
    ///     NodeEdge::Start(text),
    ///     NodeEdge::End(text),
    ///     NodeEdge::End(b),
    ///     NodeEdge::End(a),
    /// ]);
    /// # Ok::<(), xmlgraft::Error>(())
    /// ```
    pub fn traverse(&self, node: Node) -> impl Iterator<Item = NodeEdge> + '_ {
        self.node_id(node).traverse(self.arena()).map(move |edge| match edge {
            IndexTreeNodeEdge::Start(node_id) => NodeEdge::Start(self.node(node_id)),
            IndexTreeNodeEdge::End(node_id) => NodeEdge::End(self.node(node_id)),
        })
    }
}
