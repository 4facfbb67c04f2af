#![forbid(unsafe_code)]

//! Splice XML fragments into an existing XML document.
//!
//! A [`Document`] owns a tree of nodes and is the only factory for nodes
//! that may be attached to it. Content from another document is brought
//! over by reconstruction: [`Document::deep_copy`] rebuilds the attributes
//! and descendants of a source element under a target element, and
//! [`Document::merge_fragment`] parses a standalone XML document and
//! appends its element under the last top-level node of the target.
//!
//! ```rust
//! use xmlgraft::Document;
//!
//! let mut target = Document::parse("<root><existing/></root>")?;
//! target.merge_fragment(r#"<a x="1"><![CDATA[raw<data]]></a>"#)?;
//!
//! assert_eq!(
//!     target.to_string(target.root())?,
//!     r#"<root><existing/><a x="1"><![CDATA[raw<data]]></a></root>"#
//! );
//! # Ok::<(), xmlgraft::Error>(())
//! ```
//!
//! Everything is synchronous and in memory. There is no rollback: clone the
//! target document first if a failed merge must leave it untouched.

mod access;
mod creation;
mod document;
mod entity;
mod error;
pub mod fixed;
mod idmap;
mod manipulation;
mod merge;
mod name;
mod parse;
#[cfg(any(test, feature = "proptest"))]
pub mod proptest;
mod serialize;
mod valueaccess;
mod xmlvalue;

pub use access::NodeEdge;
pub use document::{Document, DocumentId, Node};
pub use error::{Error, ParseError, Span};
pub use merge::{InsertionPoint, MergeOptions};
pub use name::NameId;
pub use serialize::{Declaration, SerializeOptions};
pub use xmlvalue::{
    Attributes, Comment, Element, ProcessingInstruction, Text, Value, ValueType,
};
