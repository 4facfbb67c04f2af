use xmlgraft::{Document, Error, NodeEdge, ValueType};

#[test]
fn test_navigation() {
    let doc = Document::parse("<p><a/>text<b/></p>").unwrap();
    let p = doc.document_element().unwrap();
    let a = doc.first_child(p).unwrap();
    let text = doc.next_sibling(a).unwrap();
    let b = doc.last_child(p).unwrap();

    assert_eq!(doc.parent(p), Some(doc.root()));
    assert_eq!(doc.parent(doc.root()), None);
    assert_eq!(doc.previous_sibling(b), Some(text));
    assert_eq!(doc.next_sibling(b), None);
    assert_eq!(doc.children(p).collect::<Vec<_>>(), vec![a, text, b]);
    assert_eq!(doc.ancestors(a).collect::<Vec<_>>(), vec![a, p, doc.root()]);
    assert_eq!(doc.descendants(p).collect::<Vec<_>>(), vec![p, a, text, b]);
    assert!(doc.has_children(p));
    assert!(!doc.has_children(a));
    assert_eq!(doc.value_type(text), ValueType::Text);
    assert_eq!(doc.text_str(text), Some("text"));
}

#[test]
fn test_traverse() {
    let doc = Document::parse("<a><b/><![CDATA[c]]></a>").unwrap();
    let a = doc.document_element().unwrap();
    let b = doc.first_child(a).unwrap();
    let c = doc.last_child(a).unwrap();
    assert_eq!(
        doc.traverse(a).collect::<Vec<_>>(),
        vec![
            NodeEdge::Start(a),
            NodeEdge::Start(b),
            NodeEdge::End(b),
            NodeEdge::Start(c),
            NodeEdge::End(c),
            NodeEdge::End(a),
        ]
    );
}

#[test]
fn test_document_element_of_empty_document() {
    let doc = Document::new();
    assert!(matches!(
        doc.document_element(),
        Err(Error::NoDocumentElement)
    ));
    assert_eq!(doc.last_child(doc.root()), None);
}

#[test]
fn test_attributes_in_document_order() {
    let doc = Document::parse(r#"<a z="1" y="2" x="3"/>"#).unwrap();
    let a = doc.document_element().unwrap();
    assert_eq!(
        doc.attributes(a).collect::<Vec<_>>(),
        vec![("z", "1"), ("y", "2"), ("x", "3")]
    );
    assert_eq!(doc.get_attribute(a, "y"), Some("2"));
}

#[test]
#[should_panic(expected = "node belongs to another document")]
fn test_value_of_foreign_node_panics() {
    let source = Document::parse("<s><a/></s>").unwrap();
    let target = Document::parse("<t><b/></t>").unwrap();
    let a = source.first_child(source.document_element().unwrap()).unwrap();
    target.value(a);
}

#[test]
#[should_panic(expected = "node belongs to another document")]
fn test_children_of_foreign_node_panics() {
    let source = Document::parse("<s><a/></s>").unwrap();
    let target = Document::parse("<t><b/></t>").unwrap();
    let _ = target.children(source.document_element().unwrap());
}
