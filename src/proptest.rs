//! Proptest support
//!
//! Proptests allow you to test for *properties* of your code that must hold
//! for arbitrary data. This module generates arbitrary XML fragments as
//! [`fixed::Element`](crate::fixed::Element) values, which can be built into
//! a document and serialized to obtain fragment text.
//!
//! This can be enabled by adding the `proptest` feature to your `Cargo.toml`.
//!
//! The generated trees survive a serialize and parse round trip unchanged:
//! adjacent text nodes are joined, attribute names are unique per element
//! and CDATA payloads never contain `]]>`.

use ahash::HashSet;
use proptest::prelude::*;

use crate::fixed::{Content, Element, ProcessingInstruction};

const ELEMENT_NAMES: &[&str] = &["a", "b", "c", "d", "e"];
const ATTRIBUTE_NAMES: &[&str] = &["q", "r", "s"];
const PI_NAMES: &[&str] = &["pi1", "pi2", "pi3"];
const TEXT: &str = "[a-z <>&\"'\t\n\r]{1,8}";
const ATTRIBUTE_VALUE: &str = "[a-z <>&\"'\t\n\r]{0,8}";
const CDATA: &str = "[a-z <>&\"']{0,8}";
const COMMENT: &str = "[a-z ]{1,8}";
const PI_DATA: &str = "[a-z]{1,8}";

fn arb_attribute() -> impl Strategy<Value = (String, String)> {
    (prop::sample::select(ATTRIBUTE_NAMES), ATTRIBUTE_VALUE)
        .prop_map(|(name, value)| (name.to_string(), value))
}

fn arb_processing_instruction() -> impl Strategy<Value = ProcessingInstruction> {
    (prop::sample::select(PI_NAMES), prop::option::of(PI_DATA)).prop_map(|(target, data)| {
        ProcessingInstruction {
            target: target.to_string(),
            data,
        }
    })
}

fn arb_content() -> impl Strategy<Value = Content> {
    let leaf = prop_oneof![
        TEXT.prop_map(Content::Text),
        CDATA.prop_map(Content::CData),
        COMMENT.prop_map(Content::Comment),
        arb_processing_instruction().prop_map(Content::ProcessingInstruction),
    ];

    leaf.prop_recursive(
        6,   // levels deep
        128, // maximum size of 128 nodes
        8,   // up to 8 items per collection
        |inner| {
            (
                prop::sample::select(ELEMENT_NAMES),
                prop::collection::vec(arb_attribute(), 0..4),
                prop::collection::vec(inner, 0..8),
            )
                .prop_map(|(name, attributes, children)| {
                    Content::Element(element(name, attributes, children))
                })
        },
    )
}

/// Generate a random XML fragment: a single element with arbitrary
/// attributes and content.
pub fn arb_fragment() -> impl Strategy<Value = Element> {
    (
        prop::sample::select(ELEMENT_NAMES),
        prop::collection::vec(arb_attribute(), 0..4),
        prop::collection::vec(arb_content(), 0..8),
    )
        .prop_map(|(name, attributes, children)| element(name, attributes, children))
}

fn element(name: &str, attributes: Vec<(String, String)>, children: Vec<Content>) -> Element {
    Element {
        name: name.to_string(),
        attributes: unduplicate_attributes(attributes),
        children: join_text(children),
    }
}

fn unduplicate_attributes(attributes: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut seen = HashSet::default();
    attributes
        .into_iter()
        .filter(|(name, _)| seen.insert(name.clone()))
        .collect()
}

fn join_text(children: Vec<Content>) -> Vec<Content> {
    let mut joined: Vec<Content> = Vec::with_capacity(children.len());
    for child in children {
        if let (Some(Content::Text(previous)), Content::Text(text)) = (joined.last_mut(), &child) {
            previous.push_str(text);
            continue;
        }
        joined.push(child);
    }
    joined
}
