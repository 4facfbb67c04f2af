//! A fixed representation of a tree of nodes.
//!
//! Document trees are mutable and their nodes only make sense together with
//! the document that owns them. The fixed representation is a plain owned
//! value that has no dependency on any [`Document`]: take a snapshot of a
//! subtree with [`Document::fixed`], compare snapshots of different
//! documents, or turn one into nodes of a document with
//! [`Element::build`].
//!
//! Example:
//!
//! ```rust
//! use xmlgraft::{fixed, Document};
//!
//! let fixed_element = fixed::Element {
//!     name: "foo".to_string(),
//!     attributes: vec![("a".to_string(), "A".to_string())],
//!     children: vec![fixed::Content::Text("Example".to_string())],
//! };
//!
//! let mut doc = Document::new();
//! let node = fixed_element.build(&mut doc)?;
//! doc.append(doc.root(), node)?;
//! assert_eq!(doc.to_string(doc.root())?, r#"<foo a="A">Example</foo>"#);
//! assert_eq!(doc.fixed(node)?, fixed_element);
//! # Ok::<(), xmlgraft::Error>(())
//! ```

use crate::document::{Document, Node};
use crate::error::Error;
use crate::xmlvalue::Value;

/// A fixed representation of an XML element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Element {
    /// Name of element
    pub name: String,
    /// Attributes, in order
    pub attributes: Vec<(String, String)>,
    /// Children
    pub children: Vec<Content>,
}

/// A fixed representation of element content
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Content {
    /// An element node
    Element(Element),
    /// A text node
    Text(String),
    /// A CDATA section
    CData(String),
    /// A comment node
    Comment(String),
    /// A processing instruction node
    ProcessingInstruction(ProcessingInstruction),
}

/// A fixed representation of a processing instruction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProcessingInstruction {
    /// Target of processing instruction
    pub target: String,
    /// Data of processing instruction
    pub data: Option<String>,
}

impl Element {
    /// Turn a fixed element into a new, unattached element node of the
    /// document.
    pub fn build(&self, document: &mut Document) -> Result<Node, Error> {
        let element = document.new_element(&self.name);
        for (name, value) in &self.attributes {
            document.set_attribute(element, name, value.as_str())?;
        }
        for child in &self.children {
            let node = child.build(document)?;
            document.append(element, node)?;
        }
        Ok(element)
    }
}

impl Content {
    fn build(&self, document: &mut Document) -> Result<Node, Error> {
        Ok(match self {
            Content::Element(element) => element.build(document)?,
            Content::Text(text) => document.new_text(text),
            Content::CData(text) => document.new_cdata(text),
            Content::Comment(comment) => document.new_comment(comment),
            Content::ProcessingInstruction(pi) => {
                document.new_processing_instruction(&pi.target, pi.data.as_deref())
            }
        })
    }
}

/// ## Fixed snapshots
impl Document {
    /// Take a fixed snapshot of an element and its descendants.
    pub fn fixed(&self, node: Node) -> Result<Element, Error> {
        self.check_owned(node)?;
        let element = self.element(node).ok_or(Error::NotElement(node))?;
        let attributes = element
            .attributes()
            .iter()
            .map(|(name_id, value)| (self.name_str(*name_id).to_string(), value.clone()))
            .collect();
        let children = self
            .children(node)
            .map(|child| self.fixed_content(child))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Element {
            name: self.name_str(element.name()).to_string(),
            attributes,
            children,
        })
    }

    fn fixed_content(&self, node: Node) -> Result<Content, Error> {
        Ok(match self.value(node) {
            Value::Element(_) => Content::Element(self.fixed(node)?),
            Value::Text(text) => Content::Text(text.get().to_string()),
            Value::CData(text) => Content::CData(text.get().to_string()),
            Value::Comment(comment) => Content::Comment(comment.get().to_string()),
            Value::ProcessingInstruction(pi) => {
                Content::ProcessingInstruction(ProcessingInstruction {
                    target: pi.target().to_string(),
                    data: pi.data().map(|s| s.to_string()),
                })
            }
            Value::Root => {
                return Err(Error::InvalidOperation(
                    "Document root cannot be a child".into(),
                ))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_parsed_tree() {
        let doc = Document::parse(r#"<a x="1">t<![CDATA[c]]><!--n--><?p d?><b/></a>"#).unwrap();
        let a = doc.document_element().unwrap();
        assert_eq!(
            doc.fixed(a).unwrap(),
            Element {
                name: "a".to_string(),
                attributes: vec![("x".to_string(), "1".to_string())],
                children: vec![
                    Content::Text("t".to_string()),
                    Content::CData("c".to_string()),
                    Content::Comment("n".to_string()),
                    Content::ProcessingInstruction(ProcessingInstruction {
                        target: "p".to_string(),
                        data: Some("d".to_string()),
                    }),
                    Content::Element(Element {
                        name: "b".to_string(),
                        attributes: vec![],
                        children: vec![],
                    }),
                ],
            }
        );
    }

    #[test]
    fn test_snapshot_of_text_is_refused() {
        let doc = Document::parse("<a>t</a>").unwrap();
        let text = doc.first_child(doc.document_element().unwrap()).unwrap();
        assert!(matches!(doc.fixed(text), Err(Error::NotElement(_))));
    }
}
