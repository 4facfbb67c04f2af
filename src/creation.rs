use crate::document::{Document, Node};
use crate::xmlvalue::{Comment, Element, ProcessingInstruction, Text, Value};

/// ## Creation
///
/// Nodes created here are detached; attach them with
/// [`Document::append`]. They can only be attached within this document.
impl Document {
    pub(crate) fn new_node(&mut self, value: Value) -> Node {
        let node_id = self.arena_mut().new_node(value);
        self.node(node_id)
    }

    /// Create a new, unattached element node with the given name.
    pub fn new_element(&mut self, name: &str) -> Node {
        let name_id = self.add_name(name);
        self.new_node(Value::Element(Element::new(name_id)))
    }

    /// Create a new, unattached text node.
    pub fn new_text(&mut self, text: &str) -> Node {
        self.new_node(Value::Text(Text::new(text.to_string())))
    }

    /// Create a new, unattached CDATA section node.
    pub fn new_cdata(&mut self, text: &str) -> Node {
        self.new_node(Value::CData(Text::new(text.to_string())))
    }

    /// Create a new, unattached comment node.
    pub fn new_comment(&mut self, comment: &str) -> Node {
        self.new_node(Value::Comment(Comment::new(comment.to_string())))
    }

    /// Create a new, unattached processing instruction node.
    pub fn new_processing_instruction(&mut self, target: &str, data: Option<&str>) -> Node {
        self.new_node(Value::ProcessingInstruction(ProcessingInstruction::new(
            target.to_string(),
            data.map(|s| s.to_string()),
        )))
    }
}
