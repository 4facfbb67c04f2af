use std::fmt;
use std::ops::Range;

use crate::document::Node;

/// A byte range into the XML text that was parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
}

impl Span {
    pub(crate) fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub(crate) fn from_prefix_local(
        prefix: xmlparser::StrSpan<'_>,
        local: xmlparser::StrSpan<'_>,
    ) -> Self {
        if prefix.as_str().is_empty() {
            local.into()
        } else {
            Span::new(prefix.start(), local.end())
        }
    }

    /// The span as a range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

impl From<xmlparser::StrSpan<'_>> for Span {
    fn from(span: xmlparser::StrSpan<'_>) -> Self {
        Span::new(span.start(), span.end())
    }
}

/// Errors that can occur while parsing XML text.
///
/// Every variant carries the [`Span`] in the input it refers to.
#[derive(Debug)]
pub enum ParseError {
    /// The tokenizer rejected the input.
    XmlParser(xmlparser::Error, Span),
    /// A close tag doesn't match the open tag. Holds the open tag name and
    /// the close tag name.
    InvalidCloseTag(String, String, Span),
    /// The input ended while this element was still open.
    UnclosedTag(String, Span),
    /// The input has no document element.
    NoElement(Span),
    /// Text, CDATA or a second element was found outside the document
    /// element.
    ContentOutsideElement(Span),
    /// Document type declarations are not supported.
    DtdUnsupported(Span),
    /// Only XML version 1.0 is supported.
    UnsupportedVersion(String, Span),
    /// An entity or character reference that cannot be resolved.
    InvalidEntity(String, Span),
    /// An entity reference without a closing `;`.
    UnclosedEntity(String, Span),
}

impl ParseError {
    /// Where in the input the error occurred.
    pub fn span(&self) -> Span {
        match self {
            ParseError::XmlParser(_, span)
            | ParseError::InvalidCloseTag(_, _, span)
            | ParseError::UnclosedTag(_, span)
            | ParseError::NoElement(span)
            | ParseError::ContentOutsideElement(span)
            | ParseError::DtdUnsupported(span)
            | ParseError::UnsupportedVersion(_, span)
            | ParseError::InvalidEntity(_, span)
            | ParseError::UnclosedEntity(_, span) => *span,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::XmlParser(e, _) => write!(f, "{}", e),
            ParseError::InvalidCloseTag(open, close, _) => {
                write!(f, "close tag </{}> does not match open tag <{}>", close, open)
            }
            ParseError::UnclosedTag(name, _) => write!(f, "unclosed tag <{}>", name),
            ParseError::NoElement(_) => write!(f, "no document element"),
            ParseError::ContentOutsideElement(_) => {
                write!(f, "content found outside the document element")
            }
            ParseError::DtdUnsupported(_) => write!(f, "DTD is not supported"),
            ParseError::UnsupportedVersion(version, _) => {
                write!(f, "unsupported XML version {}", version)
            }
            ParseError::InvalidEntity(entity, _) => write!(f, "invalid entity &{};", entity),
            ParseError::UnclosedEntity(entity, _) => write!(f, "unclosed entity &{}", entity),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::XmlParser(e, _) => Some(e),
            _ => None,
        }
    }
}

/// Errors raised by document operations.
#[derive(Debug)]
pub enum Error {
    /// The XML text could not be parsed.
    Parse(ParseError),
    /// The node was expected to be an element.
    NotElement(Node),
    /// The node belongs to a different document.
    ForeignNode(Node),
    /// The document has no document element.
    NoDocumentElement,
    /// The target document has no top-level node to insert under.
    NoInsertionPoint,
    /// The operation would break the structure of the document.
    InvalidOperation(String),
    /// The underlying tree rejected the operation.
    Node(indextree::NodeError),
    /// Writing serialized output failed.
    Io(std::io::Error),
}

impl Error {
    /// The parse error, if this error was caused by malformed XML.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            Error::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "parse error: {}", e),
            Error::NotElement(node) => write!(f, "node {:?} is not an element", node),
            Error::ForeignNode(node) => {
                write!(f, "node {:?} belongs to a different document", node)
            }
            Error::NoDocumentElement => write!(f, "document has no document element"),
            Error::NoInsertionPoint => write!(f, "target document has no top-level node"),
            Error::InvalidOperation(msg) => write!(f, "invalid operation: {}", msg),
            Error::Node(e) => write!(f, "{}", e),
            Error::Io(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(e) => Some(e),
            Error::Node(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for Error {
    #[inline]
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl From<indextree::NodeError> for Error {
    #[inline]
    fn from(e: indextree::NodeError) -> Self {
        Error::Node(e)
    }
}

impl From<std::io::Error> for Error {
    #[inline]
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
