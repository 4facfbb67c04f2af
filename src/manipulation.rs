use crate::document::{Document, Node};
use crate::error::Error;
use crate::xmlvalue::ValueType;

/// ## Manipulation
///
/// This maintains an XML structure:
/// - There is only one document element under the root node.
/// - The only other nodes that can exist directly under the root node are
///   comments and processing instructions.
/// - You cannot add a node to a node that is not an element or the root
///   node.
/// - Nodes created by another document are refused; rebuild them with this
///   document's factories instead.
impl Document {
    /// Append a child to the end of the children of the given parent.
    ///
    /// It is now the new last node of the parent. If the child was already
    /// attached somewhere it is moved.
    ///
    /// ```rust
    /// let mut doc = xmlgraft::Document::parse("<p><a/></p>")?;
    /// let p = doc.document_element()?;
    /// let b = doc.new_element("b");
    /// doc.append(p, b)?;
    /// assert_eq!(doc.to_string(doc.root())?, "<p><a/><b/></p>");
    /// # Ok::<(), xmlgraft::Error>(())
    /// ```
    pub fn append(&mut self, parent: Node, child: Node) -> Result<(), Error> {
        self.check_owned(parent)?;
        self.check_owned(child)?;
        self.add_structure_check(parent, child)?;
        parent.get().checked_append(child.get(), self.arena_mut())?;
        Ok(())
    }

    /// Append a new element with the given name and return it.
    pub fn append_element(&mut self, parent: Node, name: &str) -> Result<Node, Error> {
        let element = self.new_element(name);
        self.append_or_discard(parent, element)
    }

    /// Append a new text node and return it.
    pub fn append_text(&mut self, parent: Node, text: &str) -> Result<Node, Error> {
        let text_node = self.new_text(text);
        self.append_or_discard(parent, text_node)
    }

    /// Append a new CDATA section and return it.
    pub fn append_cdata(&mut self, parent: Node, text: &str) -> Result<Node, Error> {
        let cdata_node = self.new_cdata(text);
        self.append_or_discard(parent, cdata_node)
    }

    /// Set an attribute on an element by attribute name.
    ///
    /// An existing attribute of that name is overwritten.
    pub fn set_attribute<S: Into<String>>(
        &mut self,
        node: Node,
        name: &str,
        value: S,
    ) -> Result<(), Error> {
        self.check_owned(node)?;
        let name_id = self.add_name(name);
        let element = self.element_mut(node).ok_or(Error::NotElement(node))?;
        element.set_attribute(name_id, value);
        Ok(())
    }

    /// Remove a node (and its descendants) from the tree.
    ///
    /// The document root and the document element cannot be removed.
    pub fn remove(&mut self, node: Node) -> Result<(), Error> {
        self.check_owned(node)?;
        match self.value_type(node) {
            ValueType::Root => {
                return Err(Error::InvalidOperation(
                    "Cannot remove document root".into(),
                ));
            }
            ValueType::Element if self.is_under_root(node) => {
                return Err(Error::InvalidOperation(
                    "Cannot remove document element".into(),
                ));
            }
            _ => {}
        }
        self.discard(node);
        Ok(())
    }

    pub(crate) fn discard(&mut self, node: Node) {
        node.get().remove_subtree(self.arena_mut());
    }

    fn append_or_discard(&mut self, parent: Node, child: Node) -> Result<Node, Error> {
        if let Err(err) = self.append(parent, child) {
            self.discard(child);
            return Err(err);
        }
        Ok(child)
    }

    fn add_structure_check(&self, parent: Node, child: Node) -> Result<(), Error> {
        if !matches!(
            self.value_type(parent),
            ValueType::Element | ValueType::Root
        ) {
            return Err(Error::InvalidOperation(
                "Cannot add children to non-element and non-root node".into(),
            ));
        }
        let parent_is_root = self.is_root(parent);
        match self.value_type(child) {
            ValueType::Root => {
                return Err(Error::InvalidOperation("Cannot move document root".into()));
            }
            ValueType::Element => {
                if self.is_under_root(child) {
                    return Err(Error::InvalidOperation(
                        "Cannot move document element".into(),
                    ));
                }
                if parent_is_root && self.document_element().is_ok() {
                    return Err(Error::InvalidOperation(
                        "Cannot add extra element under document root".into(),
                    ));
                }
            }
            ValueType::Text | ValueType::CData => {
                if parent_is_root {
                    return Err(Error::InvalidOperation(
                        "Cannot add text under document root".into(),
                    ));
                }
            }
            ValueType::Comment | ValueType::ProcessingInstruction => {
                // these can exist everywhere
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_builds_tree_in_order() {
        let mut doc = Document::new();
        let root = doc.root();
        let a = doc.append_element(root, "a").unwrap();
        doc.append_text(a, "one").unwrap();
        doc.append_cdata(a, "two").unwrap();
        doc.append_element(a, "b").unwrap();
        assert_eq!(
            doc.to_string(root).unwrap(),
            "<a>one<![CDATA[two]]><b/></a>"
        );
    }

    #[test]
    fn test_append_moves_attached_node() {
        let mut doc = Document::parse("<a><b/><c/></a>").unwrap();
        let a = doc.document_element().unwrap();
        let b = doc.first_child(a).unwrap();
        doc.append(a, b).unwrap();
        assert_eq!(doc.to_string(doc.root()).unwrap(), "<a><c/><b/></a>");
    }

    #[test]
    fn test_append_cycle_is_refused() {
        let mut doc = Document::parse("<a><b/></a>").unwrap();
        let a = doc.document_element().unwrap();
        let b = doc.first_child(a).unwrap();
        let c = doc.append_element(b, "c").unwrap();
        let err = doc.append(c, b).unwrap_err();
        assert!(matches!(err, Error::Node(_)));
    }

    #[test]
    fn test_failed_append_discards_new_node() {
        let mut doc = Document::parse("<a/>").unwrap();
        let root = doc.root();
        assert!(doc.append_text(root, "text").is_err());
        assert_eq!(doc.to_string(root).unwrap(), "<a/>");
    }
}
