use rstest::rstest;
use xmlgraft::{Document, Error, InsertionPoint, MergeOptions, ParseError};

#[rstest]
#[case(
    "<root><existing/></root>",
    r#"<a x="1"><b>hello</b></a>"#,
    r#"<root><existing/><a x="1"><b>hello</b></a></root>"#
)]
#[case("<root/>", "<a/>", "<root><a/></root>")]
#[case(
    "<root>text</root>",
    "<a>more</a>",
    "<root>text<a>more</a></root>"
)]
#[case(
    "<!--before--><root/>",
    r#"<a x="1" y="2"/>"#,
    r#"<!--before--><root><a x="1" y="2"/></root>"#
)]
#[case(
    "<root/>",
    r#"<?xml version="1.0"?><a><!--note--><?pi data?></a>"#,
    "<root><a><!--note--><?pi data?></a></root>"
)]
#[case(
    "<root/>",
    "<a>x &amp; y &lt; z</a>",
    "<root><a>x &amp; y &lt; z</a></root>"
)]
fn test_merge_fragment(#[case] target: &str, #[case] fragment: &str, #[case] expected: &str) {
    let mut doc = Document::parse(target).unwrap();
    doc.merge_fragment(fragment).unwrap();
    assert_eq!(doc.to_string(doc.root()).unwrap(), expected);
}

#[test]
fn test_merge_returns_inserted_element() {
    let mut doc = Document::parse("<root><existing/></root>").unwrap();
    let inserted = doc.merge_fragment(r#"<a x="1"/>"#).unwrap();
    let root = doc.document_element().unwrap();
    assert_eq!(doc.last_child(root), Some(inserted));
    assert_eq!(doc.element_name(inserted), Some("a"));
    assert_eq!(doc.get_attribute(inserted, "x"), Some("1"));
    assert!(doc.owns(inserted));
}

#[test]
fn test_merge_keeps_cdata_as_cdata() {
    let mut doc = Document::parse("<root/>").unwrap();
    let a = doc.merge_fragment("<a><![CDATA[raw<data]]></a>").unwrap();
    let cdata = doc.first_child(a).unwrap();
    assert!(doc.is_cdata(cdata));
    assert!(!doc.is_text(cdata));
    assert_eq!(doc.cdata_str(cdata), Some("raw<data"));
    assert_eq!(
        doc.to_string(a).unwrap(),
        "<a><![CDATA[raw<data]]></a>"
    );
}

#[test]
fn test_merge_keeps_empty_cdata() {
    let mut doc = Document::parse("<root/>").unwrap();
    let a = doc.merge_fragment("<a><![CDATA[]]></a>").unwrap();
    let cdata = doc.first_child(a).unwrap();
    assert_eq!(doc.cdata_str(cdata), Some(""));
}

#[test]
fn test_merge_copies_attributes_of_childless_elements() {
    let mut doc = Document::parse("<root/>").unwrap();
    doc.merge_fragment(r#"<a><b x="1"/><c y="2">t</c></a>"#)
        .unwrap();
    assert_eq!(
        doc.to_string(doc.root()).unwrap(),
        r#"<root><a><b x="1"/><c y="2">t</c></a></root>"#
    );
}

#[test]
fn test_merge_duplicate_attribute_last_wins() {
    let mut doc = Document::parse("<root/>").unwrap();
    let a = doc.merge_fragment(r#"<a k="1" j="x" k="2"/>"#).unwrap();
    assert_eq!(doc.get_attribute(a, "k"), Some("2"));
    assert_eq!(
        doc.attributes(a).collect::<Vec<_>>(),
        vec![("k", "2"), ("j", "x")]
    );
}

#[test]
fn test_merge_preserves_depth_and_order() {
    let fragment = "<a><b><c><d>deep</d></c></b><e/><f>1</f><g>2</g></a>";
    let mut doc = Document::parse("<root/>").unwrap();
    let a = doc.merge_fragment(fragment).unwrap();
    let source = Document::parse(fragment).unwrap();
    assert_eq!(
        doc.fixed(a).unwrap(),
        source.fixed(source.document_element().unwrap()).unwrap()
    );
}

#[test]
fn test_merge_deeply_nested_fragment() {
    let depth = 5000;
    let fragment = format!("{}x{}", "<n>".repeat(depth), "</n>".repeat(depth));
    let mut doc = Document::parse("<root/>").unwrap();
    let inserted = doc.merge_fragment(&fragment).unwrap();
    assert_eq!(doc.descendants(inserted).count(), depth + 1);
    assert_eq!(
        doc.to_string(doc.root()).unwrap(),
        format!("<root>{}</root>", fragment)
    );
}

#[test]
fn test_merge_fragments_append_in_order() {
    let mut doc = Document::parse("<root/>").unwrap();
    doc.merge_fragment("<a/>").unwrap();
    doc.merge_fragment("<b/>").unwrap();
    doc.merge_fragment("<c/>").unwrap();
    assert_eq!(
        doc.to_string(doc.root()).unwrap(),
        "<root><a/><b/><c/></root>"
    );
}

#[test]
fn test_merge_malformed_fragment_leaves_target_unchanged() {
    let mut doc = Document::parse("<root><existing/></root>").unwrap();
    let err = doc.merge_fragment("<a><b></a>").unwrap_err();
    assert!(matches!(
        err.parse_error(),
        Some(ParseError::InvalidCloseTag(_, _, _))
    ));
    assert_eq!(
        doc.to_string(doc.root()).unwrap(),
        "<root><existing/></root>"
    );
}

#[test]
fn test_merge_into_empty_document() {
    let mut doc = Document::new();
    let err = doc.merge_fragment("<a/>").unwrap_err();
    assert!(matches!(err, Error::NoInsertionPoint));
    assert!(err.parse_error().is_none());
}

#[test]
fn test_merge_under_trailing_comment_is_refused() {
    let mut doc = Document::parse("<root/><!--trailing-->").unwrap();
    let err = doc.merge_fragment("<a/>").unwrap_err();
    assert!(matches!(err, Error::InvalidOperation(_)));
    assert_eq!(
        doc.to_string(doc.root()).unwrap(),
        "<root/><!--trailing-->"
    );
}

#[test]
fn test_merge_under_document_element_option() {
    let mut doc = Document::parse("<root/><!--trailing-->").unwrap();
    let options = MergeOptions {
        insertion: InsertionPoint::DocumentElement,
    };
    doc.merge_fragment_with_options("<a/>", &options).unwrap();
    assert_eq!(
        doc.to_string(doc.root()).unwrap(),
        "<root><a/></root><!--trailing-->"
    );
}

#[test]
fn test_merge_on_clone_and_swap() {
    let mut doc = Document::parse("<root/>").unwrap();

    let mut attempt = doc.clone();
    assert!(attempt.merge_fragment("<a><b></a>").is_err());

    let mut attempt = doc.clone();
    attempt.merge_fragment("<a/>").unwrap();
    doc = attempt;
    assert_eq!(doc.to_string(doc.root()).unwrap(), "<root><a/></root>");
}

#[test]
fn test_deep_copy_into_existing_element() {
    let source = Document::parse(r#"<s a="1"><t/>text</s>"#).unwrap();
    let mut target = Document::parse(r#"<root a="0" b="2"><old/></root>"#).unwrap();
    let root = target.document_element().unwrap();
    target
        .deep_copy(root, &source, source.document_element().unwrap())
        .unwrap();
    assert_eq!(
        target.to_string(target.root()).unwrap(),
        r#"<root a="1" b="2"><old/><t/>text</root>"#
    );
}

#[test]
fn test_deep_copy_requires_elements() {
    let source = Document::parse("<s>text</s>").unwrap();
    let mut target = Document::parse("<root>text</root>").unwrap();
    let source_element = source.document_element().unwrap();
    let source_text = source.first_child(source_element).unwrap();
    let target_element = target.document_element().unwrap();
    let target_text = target.first_child(target_element).unwrap();

    let err = target
        .deep_copy(target_text, &source, source_element)
        .unwrap_err();
    assert!(matches!(err, Error::NotElement(node) if node == target_text));

    let err = target
        .deep_copy(target_element, &source, source_text)
        .unwrap_err();
    assert!(matches!(err, Error::NotElement(node) if node == source_text));
}

#[test]
fn test_deep_copy_refuses_mixed_up_documents() {
    let source = Document::parse("<s/>").unwrap();
    let mut target = Document::parse("<root/>").unwrap();
    let source_element = source.document_element().unwrap();
    let target_element = target.document_element().unwrap();

    // source node passed as target and the other way around
    let err = target
        .deep_copy(source_element, &source, target_element)
        .unwrap_err();
    assert!(matches!(err, Error::ForeignNode(_)));
}

const DEMO_TARGET: &str = r#"
    <target_xml><message_list><message_type>email</message_type><pager_id>EMAIL0</pager_id><text_message>BOOKED EMAIL DISPATCHED</text_message><message_address>someone@somewhere.com</message_address><report_id>0000</report_id></message_list></target_xml>
            "#;

const DEMO_SOURCE: &str = r#"
    <source_xml><transaction_id>suwillia1348459343995</transaction_id><agent_id>suwillia</agent_id><recording_port><![CDATA[1942:027]]></recording_port><custom_form_message><form_id>29464636</form_id><csv_prefix><![CDATA[]]></csv_prefix><element_list><element name="TI1311864813976" sequence_nr="10" include_when_blank="false"><value><input><![CDATA[]]></input></value><separator><![CDATA[CRLF]]></separator></element><element name="BC1311864384912" sequence_nr="0" include_when_blank="true"><value><input><![CDATA[Yes - immediate assistance (1)]]></input><delivery><![CDATA[BL1311864408224]]></delivery></value><separator><![CDATA[CRLF]]></separator></element></element_list></custom_form_message></source_xml>
            "#;

#[test]
fn test_merge_dispatch_message() {
    let mut doc = Document::parse(DEMO_TARGET).unwrap();
    doc.merge_fragment(DEMO_SOURCE).unwrap();

    let target = DEMO_TARGET.trim();
    let expected = format!(
        "{}{}</target_xml>",
        target.strip_suffix("</target_xml>").unwrap(),
        DEMO_SOURCE.trim()
    );
    assert_eq!(doc.to_string(doc.root()).unwrap(), expected);
}
