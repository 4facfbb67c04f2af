use std::io::{self, Write};

use crate::access::NodeEdge;
use crate::document::{Document, Node};
use crate::entity::{serialize_attribute, serialize_cdata, serialize_text};
use crate::error::Error;
use crate::xmlvalue::Value;

/// The XML declaration to emit at the start of the output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Declaration {
    /// The encoding to declare, if any. This does not change how the
    /// output is encoded; it is always UTF-8.
    pub encoding: Option<String>,
}

/// Serialization options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SerializeOptions {
    /// Emit an XML declaration before the serialized node.
    pub declaration: Option<Declaration>,
}

/// ## Serialization
impl Document {
    /// Serialize a node and its descendants into a string.
    ///
    /// Serializing the document root writes out all top-level nodes.
    ///
    /// ```rust
    /// let doc = xmlgraft::Document::parse(r#"<a x="1"><![CDATA[raw<data]]></a>"#)?;
    /// assert_eq!(
    ///     doc.to_string(doc.root())?,
    ///     r#"<a x="1"><![CDATA[raw<data]]></a>"#
    /// );
    /// # Ok::<(), xmlgraft::Error>(())
    /// ```
    pub fn to_string(&self, node: Node) -> Result<String, Error> {
        self.to_string_with_options(node, &SerializeOptions::default())
    }

    /// Serialize a node into a string, with options.
    pub fn to_string_with_options(
        &self,
        node: Node,
        options: &SerializeOptions,
    ) -> Result<String, Error> {
        let mut buf = Vec::new();
        self.serialize_write_with_options(node, &mut buf, options)?;
        String::from_utf8(buf).map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    /// Serialize a node into a writer.
    pub fn serialize_write<W: Write>(&self, node: Node, w: &mut W) -> Result<(), Error> {
        self.serialize_write_with_options(node, w, &SerializeOptions::default())
    }

    /// Serialize a node into a writer, with options.
    pub fn serialize_write_with_options<W: Write>(
        &self,
        node: Node,
        w: &mut W,
        options: &SerializeOptions,
    ) -> Result<(), Error> {
        self.check_owned(node)?;
        if let Some(declaration) = &options.declaration {
            write!(w, "<?xml version=\"1.0\"")?;
            if let Some(encoding) = &declaration.encoding {
                write!(w, " encoding=\"{}\"", encoding)?;
            }
            write!(w, "?>")?;
        }
        for edge in self.traverse(node) {
            match edge {
                NodeEdge::Start(node) => self.handle_edge_start(node, w)?,
                NodeEdge::End(node) => self.handle_edge_end(node, w)?,
            }
        }
        Ok(())
    }

    fn handle_edge_start<W: Write>(&self, node: Node, w: &mut W) -> Result<(), Error> {
        match self.value(node) {
            Value::Root => {}
            Value::Element(element) => {
                write!(w, "<{}", self.name_str(element.name()))?;
                for (name_id, value) in element.attributes().iter() {
                    write!(
                        w,
                        " {}=\"{}\"",
                        self.name_str(*name_id),
                        serialize_attribute(value)
                    )?;
                }
                if self.has_children(node) {
                    write!(w, ">")?;
                } else {
                    write!(w, "/>")?;
                }
            }
            Value::Text(text) => {
                write!(w, "{}", serialize_text(text.get()))?;
            }
            Value::CData(text) => {
                write!(w, "<![CDATA[{}]]>", serialize_cdata(text.get()))?;
            }
            Value::Comment(comment) => {
                write!(w, "<!--{}-->", comment.get())?;
            }
            Value::ProcessingInstruction(pi) => match pi.data() {
                Some(data) => write!(w, "<?{} {}?>", pi.target(), data)?,
                None => write!(w, "<?{}?>", pi.target())?,
            },
        }
        Ok(())
    }

    fn handle_edge_end<W: Write>(&self, node: Node, w: &mut W) -> Result<(), Error> {
        if let Value::Element(element) = self.value(node) {
            if self.has_children(node) {
                write!(w, "</{}>", self.name_str(element.name()))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_declaration() {
        let doc = Document::parse("<a/>").unwrap();
        let options = SerializeOptions {
            declaration: Some(Declaration {
                encoding: Some("UTF-8".to_string()),
            }),
        };
        assert_eq!(
            doc.to_string_with_options(doc.root(), &options).unwrap(),
            r#"<?xml version="1.0" encoding="UTF-8"?><a/>"#
        );
    }

    #[test]
    fn test_serialize_foreign_node_is_refused() {
        let doc = Document::parse("<a/>").unwrap();
        let other = Document::parse("<b/>").unwrap();
        let err = doc.to_string(other.root()).unwrap_err();
        assert!(matches!(err, Error::ForeignNode(_)));
    }
}
