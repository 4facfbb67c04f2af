use std::borrow::Cow;

use crate::error::{ParseError, Span};

pub(crate) fn parse_entities(content: &str, span: Span) -> Result<Cow<'_, str>, ParseError> {
    if !content.contains('&') {
        return Ok(Cow::Borrowed(content));
    }
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c != '&' {
            result.push(c);
            continue;
        }
        let mut entity = String::new();
        let mut is_complete = false;
        for c in chars.by_ref() {
            if c == ';' {
                is_complete = true;
                break;
            }
            entity.push(c);
        }
        if !is_complete {
            return Err(ParseError::UnclosedEntity(entity, span));
        }
        match resolve_entity(&entity) {
            Some(c) => result.push(c),
            None => return Err(ParseError::InvalidEntity(entity, span)),
        }
    }
    Ok(Cow::Owned(result))
}

fn resolve_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "apos" => Some('\''),
        "gt" => Some('>'),
        "lt" => Some('<'),
        "quot" => Some('"'),
        _ => {
            let reference = entity.strip_prefix('#')?;
            let (digits, radix) = match reference.strip_prefix('x') {
                Some(hex) => (hex, 16),
                None => (reference, 10),
            };
            // from_str_radix alone would also take a sign
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            let code = u32::from_str_radix(digits, radix).ok()?;
            char::from_u32(code).filter(|c| is_xml_char(*c))
        }
    }
}

// the Char production of XML 1.0
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\u{9}' | '\u{A}' | '\u{D}'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

pub(crate) fn serialize_text(content: &str) -> Cow<'_, str> {
    escape(content, |c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        // a parser would read a raw carriage return as a newline
        '\r' => Some("&#13;"),
        _ => None,
    })
}

pub(crate) fn serialize_attribute(content: &str) -> Cow<'_, str> {
    escape(content, |c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        // attribute value normalization turns raw whitespace into spaces
        '\t' => Some("&#9;"),
        '\n' => Some("&#10;"),
        '\r' => Some("&#13;"),
        _ => None,
    })
}

/// `]]>` cannot appear inside a CDATA section; split the section around it.
pub(crate) fn serialize_cdata(content: &str) -> Cow<'_, str> {
    if content.contains("]]>") {
        Cow::Owned(content.replace("]]>", "]]]]><![CDATA[>"))
    } else {
        Cow::Borrowed(content)
    }
}

fn escape(content: &str, replacement: impl Fn(char) -> Option<&'static str>) -> Cow<'_, str> {
    if !content.chars().any(|c| replacement(c).is_some()) {
        return Cow::Borrowed(content);
    }
    let mut result = String::with_capacity(content.len() + 8);
    for c in content.chars() {
        match replacement(c) {
            Some(escaped) => result.push_str(escaped),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}
