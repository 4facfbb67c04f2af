use crate::document::{Document, Node};
use crate::xmlvalue::{Element, Text, Value, ValueType};

/// ## Value access
///
/// These are handy if you only need to match against a single value or know
/// the value type already. If you want to handle all value types, use a
/// `match` statement on [`Value`] instead.
impl Document {
    /// Access to the XML value for this node.
    ///
    /// # Panics
    ///
    /// Panics if `node` was created by another document.
    #[inline]
    pub fn value(&self, node: Node) -> &Value {
        self.arena()[self.node_id(node)].get()
    }

    /// Mutable access to the XML value for this node.
    ///
    /// # Panics
    ///
    /// Panics if `node` was created by another document.
    #[inline]
    pub fn value_mut(&mut self, node: Node) -> &mut Value {
        let id = self.node_id(node);
        self.arena_mut()[id].get_mut()
    }

    /// Get the [`ValueType`] of a node.
    pub fn value_type(&self, node: Node) -> ValueType {
        self.value(node).value_type()
    }

    /// Return true if node is the document root.
    pub fn is_root(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Root
    }

    /// Return true if node is directly under the document root.
    pub fn is_under_root(&self, node: Node) -> bool {
        self.parent(node)
            .map(|parent| self.is_root(parent))
            .unwrap_or(false)
    }

    /// Return true if node is an element.
    pub fn is_element(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Element
    }

    /// Return true if node is text.
    pub fn is_text(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Text
    }

    /// Return true if node is a CDATA section.
    pub fn is_cdata(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::CData
    }

    /// If this node is an element, return a reference to it.
    pub fn element(&self, node: Node) -> Option<&Element> {
        match self.value(node) {
            Value::Element(element) => Some(element),
            _ => None,
        }
    }

    /// If this node is an element, return a mutable reference to it.
    pub fn element_mut(&mut self, node: Node) -> Option<&mut Element> {
        match self.value_mut(node) {
            Value::Element(element) => Some(element),
            _ => None,
        }
    }

    /// The tag name of an element node.
    pub fn element_name(&self, node: Node) -> Option<&str> {
        self.element(node)
            .map(|element| self.name_str(element.name()))
    }

    /// If this node is text, return a reference to it.
    pub fn text(&self, node: Node) -> Option<&Text> {
        match self.value(node) {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// If this node is text, return a mutable reference to it.
    pub fn text_mut(&mut self, node: Node) -> Option<&mut Text> {
        match self.value_mut(node) {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The string of a text node.
    pub fn text_str(&self, node: Node) -> Option<&str> {
        self.text(node).map(|text| text.get())
    }

    /// The payload of a CDATA section node.
    pub fn cdata_str(&self, node: Node) -> Option<&str> {
        match self.value(node) {
            Value::CData(text) => Some(text.get()),
            _ => None,
        }
    }

    /// Get an attribute value of an element by attribute name.
    ///
    /// ```rust
    /// let doc = xmlgraft::Document::parse(r#"<p a="A"/>"#)?;
    /// let p = doc.document_element()?;
    /// assert_eq!(doc.get_attribute(p, "a"), Some("A"));
    /// assert_eq!(doc.get_attribute(p, "b"), None);
    /// # Ok::<(), xmlgraft::Error>(())
    /// ```
    pub fn get_attribute(&self, node: Node, name: &str) -> Option<&str> {
        let name_id = self.name(name)?;
        self.element(node)?.get_attribute(name_id)
    }

    /// Iterate over the attributes of an element as `(name, value)` pairs,
    /// in insertion order. Empty for non-elements.
    pub fn attributes(&self, node: Node) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.element(node)
            .into_iter()
            .flat_map(|element| element.attributes().iter())
            .map(move |(name_id, value)| (self.name_str(*name_id), value.as_str()))
    }
}
