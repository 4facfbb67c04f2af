use tracing::{debug, trace};

use crate::access::NodeEdge;
use crate::document::{Document, Node};
use crate::error::Error;
use crate::name::NameId;
use crate::xmlvalue::Value;

/// Where [`Document::merge_fragment_with_options`] inserts the fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertionPoint {
    /// Under the last node directly below the document root. This is
    /// usually the document element, but a trailing comment or processing
    /// instruction is refused as it cannot hold an element.
    #[default]
    LastTopLevelNode,
    /// Under the document element, whatever follows it.
    DocumentElement,
}

/// Options for merging a fragment into a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOptions {
    /// Where the fragment's element goes.
    pub insertion: InsertionPoint,
}

/// ## Merging
///
/// A node can only be attached to the document that created it, so content
/// from another document is brought over by reconstruction: every node is
/// created anew through this document's factories.
impl Document {
    /// Copy the attributes and descendants of `source_node` in `source` onto
    /// `target_node` in this document.
    ///
    /// Attributes are set on `target_node`, overwriting attributes with the
    /// same name. Children are appended after any existing children of
    /// `target_node`, in document order. Text stays text and CDATA sections
    /// stay CDATA sections. Every copied element gets its attributes, also
    /// when it has no children.
    ///
    /// `source` is only read.
    ///
    /// ```rust
    /// let source = xmlgraft::Document::parse(r#"<a x="1"><b y="2"/>text</a>"#)?;
    /// let mut target = xmlgraft::Document::parse("<root/>")?;
    ///
    /// let root = target.document_element()?;
    /// target.deep_copy(root, &source, source.document_element()?)?;
    ///
    /// assert_eq!(
    ///     target.to_string(target.root())?,
    ///     r#"<root x="1"><b y="2"/>text</root>"#
    /// );
    /// # Ok::<(), xmlgraft::Error>(())
    /// ```
    pub fn deep_copy(
        &mut self,
        target_node: Node,
        source: &Document,
        source_node: Node,
    ) -> Result<(), Error> {
        self.check_owned(target_node)?;
        source.check_owned(source_node)?;
        if !self.is_element(target_node) {
            return Err(Error::NotElement(target_node));
        }
        if !source.is_element(source_node) {
            return Err(Error::NotElement(source_node));
        }

        let mut parents: Vec<Node> = Vec::new();
        let mut copied = 0usize;
        for edge in source.traverse(source_node) {
            match edge {
                NodeEdge::Start(node) => {
                    let target = if node == source_node {
                        target_node
                    } else {
                        let parent = parents.last().copied().ok_or_else(|| {
                            Error::InvalidOperation("Copied node has no parent".into())
                        })?;
                        let copy = self.reconstruct(source, node)?;
                        self.append(parent, copy)?;
                        trace!(value_type = ?source.value_type(node), "copied node");
                        copied += 1;
                        copy
                    };
                    if let Value::Element(element) = source.value(node) {
                        self.copy_attributes(target, source, element.attributes().iter())?;
                        parents.push(target);
                    }
                }
                NodeEdge::End(node) => {
                    if source.is_element(node) {
                        parents.pop();
                    }
                }
            }
        }
        debug!(copied, "deep copy done");
        Ok(())
    }

    /// Parse `xml` and append its document element, with all attributes
    /// and descendants, under the last top-level node of this document.
    ///
    /// Returns the newly inserted element.
    ///
    /// Parse errors are returned before this document is touched. If this
    /// document has no top-level node, [`Error::NoInsertionPoint`] is
    /// returned.
    ///
    /// ```rust
    /// let mut target = xmlgraft::Document::parse("<root><existing/></root>")?;
    /// target.merge_fragment(r#"<a x="1"><b>hello</b></a>"#)?;
    /// assert_eq!(
    ///     target.to_string(target.root())?,
    ///     r#"<root><existing/><a x="1"><b>hello</b></a></root>"#
    /// );
    /// # Ok::<(), xmlgraft::Error>(())
    /// ```
    pub fn merge_fragment(&mut self, xml: &str) -> Result<Node, Error> {
        self.merge_fragment_with_options(xml, &MergeOptions::default())
    }

    /// Like [`Document::merge_fragment`], with options.
    ///
    /// There is no rollback: should copying fail halfway, the document is
    /// left partially merged. Merge into a [`Clone`] of the document and
    /// swap it in on success if that matters.
    pub fn merge_fragment_with_options(
        &mut self,
        xml: &str,
        options: &MergeOptions,
    ) -> Result<Node, Error> {
        let source = Document::parse(xml)?;
        let source_element = source.document_element()?;

        let insertion = match options.insertion {
            InsertionPoint::LastTopLevelNode => self
                .last_child(self.root())
                .ok_or(Error::NoInsertionPoint)?,
            InsertionPoint::DocumentElement => self
                .document_element()
                .map_err(|_| Error::NoInsertionPoint)?,
        };

        let name = source
            .element_name(source_element)
            .ok_or(Error::NotElement(source_element))?;
        let element = self.new_element(name);
        if let Err(err) = self.append(insertion, element) {
            self.discard(element);
            return Err(err);
        }
        debug!(element = name, "merging fragment");

        self.deep_copy(element, &source, source_element)?;
        Ok(element)
    }

    fn reconstruct(&mut self, source: &Document, node: Node) -> Result<Node, Error> {
        let copy = match source.value(node) {
            Value::Element(element) => self.new_element(source.name_str(element.name())),
            Value::Text(text) => self.new_text(text.get()),
            Value::CData(text) => self.new_cdata(text.get()),
            Value::Comment(comment) => self.new_comment(comment.get()),
            Value::ProcessingInstruction(pi) => {
                self.new_processing_instruction(pi.target(), pi.data())
            }
            Value::Root => {
                return Err(Error::InvalidOperation(
                    "Cannot copy a document root".into(),
                ));
            }
        };
        Ok(copy)
    }

    fn copy_attributes<'a>(
        &mut self,
        target: Node,
        source: &Document,
        attributes: impl Iterator<Item = (&'a NameId, &'a String)>,
    ) -> Result<(), Error> {
        let attributes = attributes
            .map(|(name_id, value)| (self.add_name(source.name_str(*name_id)), value.clone()))
            .collect::<Vec<_>>();
        let element = self.element_mut(target).ok_or(Error::NotElement(target))?;
        for (name_id, value) in attributes {
            element.set_attribute(name_id, value);
        }
        Ok(())
    }
}
