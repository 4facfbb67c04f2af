use std::borrow::Cow;

use tracing::debug;
use xmlparser::{ElementEnd, StrSpan, TextPos, Token, Tokenizer};

use crate::document::{Document, Node};
use crate::entity::parse_entities;
use crate::error::{Error, ParseError, Span};

struct OpenElement {
    node: Node,
    span: Span,
}

struct DocumentBuilder {
    document: Document,
    current: Node,
    open: Vec<OpenElement>,
}

impl DocumentBuilder {
    fn new() -> Self {
        let document = Document::new();
        let current = document.root();
        DocumentBuilder {
            document,
            current,
            open: Vec::new(),
        }
    }

    fn is_at_root(&self) -> bool {
        self.open.is_empty()
    }

    fn token(&mut self, token: Token<'_>) -> Result<(), Error> {
        match token {
            Token::Declaration { version, .. } => {
                if version.as_str() != "1.0" {
                    return Err(ParseError::UnsupportedVersion(
                        version.as_str().to_string(),
                        version.into(),
                    )
                    .into());
                }
            }
            Token::DtdStart { span, .. } | Token::EmptyDtd { span, .. } => {
                return Err(ParseError::DtdUnsupported(span.into()).into());
            }
            // only seen after DtdStart, which is refused
            Token::EntityDeclaration { .. } | Token::DtdEnd { .. } => {}
            Token::ElementStart {
                prefix,
                local,
                span,
            } => self.open_element(prefix, local, span)?,
            Token::Attribute {
                prefix,
                local,
                value,
                ..
            } => {
                // a repeated attribute overwrites the earlier one
                let value = parse_entities(value.as_str(), value.into())?;
                let name = full_name(prefix.as_str(), local.as_str());
                self.document.set_attribute(self.current, &name, value)?;
            }
            Token::ElementEnd { end, .. } => match end {
                ElementEnd::Open => {}
                ElementEnd::Empty => self.close_element(),
                ElementEnd::Close(prefix, local) => self.close_tag(prefix, local)?,
            },
            Token::Text { text } => {
                if self.is_at_root() {
                    if is_whitespace(text.as_str()) {
                        return Ok(());
                    }
                    return Err(ParseError::ContentOutsideElement(text.into()).into());
                }
                let content = parse_entities(text.as_str(), text.into())?;
                let node = self.document.new_text(&content);
                self.document.append(self.current, node)?;
            }
            Token::Cdata { text, span } => {
                if self.is_at_root() {
                    return Err(ParseError::ContentOutsideElement(span.into()).into());
                }
                let node = self.document.new_cdata(text.as_str());
                self.document.append(self.current, node)?;
            }
            Token::Comment { text, .. } => {
                let node = self.document.new_comment(text.as_str());
                self.document.append(self.current, node)?;
            }
            Token::ProcessingInstruction {
                target, content, ..
            } => {
                let node = self
                    .document
                    .new_processing_instruction(target.as_str(), content.map(|c| c.as_str()));
                self.document.append(self.current, node)?;
            }
        }
        Ok(())
    }

    fn open_element(
        &mut self,
        prefix: StrSpan<'_>,
        local: StrSpan<'_>,
        span: StrSpan<'_>,
    ) -> Result<(), Error> {
        if self.is_at_root() && self.document.document_element().is_ok() {
            return Err(ParseError::ContentOutsideElement(span.into()).into());
        }
        let element = self
            .document
            .new_element(&full_name(prefix.as_str(), local.as_str()));
        self.document.append(self.current, element)?;
        self.open.push(OpenElement {
            node: element,
            span: Span::from_prefix_local(prefix, local),
        });
        self.current = element;
        Ok(())
    }

    fn close_tag(&mut self, prefix: StrSpan<'_>, local: StrSpan<'_>) -> Result<(), Error> {
        let name = full_name(prefix.as_str(), local.as_str());
        let span = Span::from_prefix_local(prefix, local);
        let open_name = match self.open.last() {
            Some(open) => self.document.element_name(open.node).unwrap_or_default(),
            None => "",
        };
        if open_name != name {
            return Err(
                ParseError::InvalidCloseTag(open_name.to_string(), name.into_owned(), span).into(),
            );
        }
        self.close_element();
        Ok(())
    }

    fn close_element(&mut self) {
        self.open.pop();
        self.current = self
            .open
            .last()
            .map(|open| open.node)
            .unwrap_or_else(|| self.document.root());
    }

    fn finish(self, xml: &str) -> Result<Document, Error> {
        if let Some(open) = self.open.last() {
            let name = self
                .document
                .element_name(open.node)
                .unwrap_or_default()
                .to_string();
            return Err(ParseError::UnclosedTag(name, open.span).into());
        }
        if self.document.document_element().is_err() {
            return Err(ParseError::NoElement(Span::new(xml.len(), xml.len())).into());
        }
        Ok(self.document)
    }
}

fn full_name<'a>(prefix: &'a str, local: &'a str) -> Cow<'a, str> {
    if prefix.is_empty() {
        Cow::Borrowed(local)
    } else {
        Cow::Owned(format!("{}:{}", prefix, local))
    }
}

fn is_whitespace(text: &str) -> bool {
    text.chars()
        .all(|c| matches!(c, ' ' | '\t' | '\n' | '\r'))
}

fn offset_of(xml: &str, pos: TextPos) -> usize {
    let mut offset = 0;
    for (row, line) in xml.split_inclusive('\n').enumerate() {
        if row + 1 == pos.row as usize {
            let column = (pos.col as usize).saturating_sub(1);
            return offset + line.chars().take(column).map(char::len_utf8).sum::<usize>();
        }
        offset += line.len();
    }
    xml.len()
}

/// ## Parsing
impl Document {
    /// Parse a string containing a complete XML document into a new
    /// [`Document`].
    ///
    /// The whole text is parsed into memory. Namespaces get no special
    /// treatment: prefixed names are kept as written and `xmlns`
    /// declarations are ordinary attributes. If an element repeats an
    /// attribute, the last value wins.
    ///
    /// ```rust
    /// let doc = xmlgraft::Document::parse("<p>Example</p>")?;
    /// assert_eq!(doc.to_string(doc.root())?, "<p>Example</p>");
    /// # Ok::<(), xmlgraft::Error>(())
    /// ```
    pub fn parse(xml: &str) -> Result<Self, Error> {
        let mut builder = DocumentBuilder::new();
        for token in Tokenizer::from(xml) {
            let token = token.map_err(|e| {
                let offset = offset_of(xml, e.pos());
                ParseError::XmlParser(e, Span::new(offset, offset))
            })?;
            builder.token(token)?;
        }
        let document = builder.finish(xml)?;
        debug!(
            bytes = xml.len(),
            nodes = document.arena().count(),
            "parsed document"
        );
        Ok(document)
    }
}
