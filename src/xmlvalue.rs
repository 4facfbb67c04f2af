use vector_map::VecMap;

use crate::name::NameId;

/// The type of the XML node.
///
/// Access it using [`Value::value_type`] or
/// [`Document::value_type`](crate::Document::value_type).
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ValueType {
    /// Document root that holds everything.
    Root,
    /// Element; it has a name and attributes.
    Element,
    /// Text.
    Text,
    /// CDATA section.
    CData,
    /// Comment.
    Comment,
    /// Processing instruction.
    ProcessingInstruction,
}

/// An XML value.
///
/// Access it using [`Document::value`](crate::Document::value) or
/// mutably using [`Document::value_mut`](crate::Document::value_mut).
#[derive(Debug, Clone)]
pub enum Value {
    /// Document root that holds everything. Note that this not the same as
    /// the document element.
    Root,
    /// Element; it has a name and attributes.
    Element(Element),
    /// Text. Escaped on output.
    Text(Text),
    /// CDATA section. Its payload is written out literally, inside
    /// `<![CDATA[` and `]]>` markers.
    CData(Text),
    /// Comment.
    Comment(Comment),
    /// Processing instruction.
    ProcessingInstruction(ProcessingInstruction),
}

impl Value {
    /// Returns the type of the XML value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Root => ValueType::Root,
            Value::Element(_) => ValueType::Element,
            Value::Text(_) => ValueType::Text,
            Value::CData(_) => ValueType::CData,
            Value::Comment(_) => ValueType::Comment,
            Value::ProcessingInstruction(_) => ValueType::ProcessingInstruction,
        }
    }
}

/// A map of NameId to String for attributes, in insertion order.
pub type Attributes = VecMap<NameId, String>;

/// XML element value.
///
/// Example: `<foo/>` or `<foo bar="baz"/>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub(crate) name_id: NameId,
    pub(crate) attributes: Attributes,
}

impl Element {
    pub(crate) fn new(name_id: NameId) -> Self {
        Element {
            name_id,
            attributes: Attributes::new(),
        }
    }

    /// The name of the element.
    pub fn name(&self) -> NameId {
        self.name_id
    }

    /// The attributes of the element.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Get an attribute by name.
    pub fn get_attribute(&self, name_id: NameId) -> Option<&str> {
        self.attributes.get(&name_id).map(|s| s.as_str())
    }

    /// Set an attribute value.
    ///
    /// An existing attribute with the same name keeps its position and gets
    /// the new value.
    ///
    /// ```rust
    /// let mut doc = xmlgraft::Document::parse(r#"<doc a="A"/>"#)?;
    /// let a = doc.name("a").unwrap();
    /// let doc_el = doc.document_element()?;
    /// let element = doc.element_mut(doc_el).unwrap();
    ///
    /// element.set_attribute(a, "B");
    ///
    /// assert_eq!(element.get_attribute(a), Some("B"));
    /// # Ok::<(), xmlgraft::Error>(())
    /// ```
    pub fn set_attribute<S: Into<String>>(&mut self, name_id: NameId, value: S) {
        self.attributes.insert(name_id, value.into());
    }

    /// Remove an attribute.
    pub fn remove_attribute(&mut self, name_id: NameId) {
        self.attributes.remove(&name_id);
    }
}

/// XML text value, also used for the payload of CDATA sections.
///
/// Example: `Bar` in `<foo>Bar</foo>`, or `raw<data` in
/// `<foo><![CDATA[raw<data]]></foo>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub(crate) text: String,
}

impl Text {
    pub(crate) fn new(text: String) -> Self {
        Text { text }
    }

    /// Get the text value.
    pub fn get(&self) -> &str {
        &self.text
    }

    /// Set the text value.
    pub fn set<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }
}

/// XML comment.
///
/// Example: `<!-- foo -->`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub(crate) text: String,
}

impl Comment {
    pub(crate) fn new(text: String) -> Self {
        Comment { text }
    }

    /// Get the comment text.
    pub fn get(&self) -> &str {
        &self.text
    }
}

/// XML processing instruction value.
///
/// Example: `<?foo?>` or `<?foo bar?>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingInstruction {
    pub(crate) target: String,
    pub(crate) data: Option<String>,
}

impl ProcessingInstruction {
    pub(crate) fn new(target: String, data: Option<String>) -> Self {
        ProcessingInstruction { target, data }
    }

    /// Get processing instruction target.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Get processing instruction data.
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }
}
