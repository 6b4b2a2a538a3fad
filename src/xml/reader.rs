//
//  perfrepo-client
//  xml/reader.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Builds an [`Element`] tree from a quick-xml event stream.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::{Element, XmlError};

/// Parses `input` into its root element.
///
/// Declarations, comments and processing instructions are skipped.
/// Text is unescaped. Leaf elements keep their text verbatim, including
/// whitespace-only text; elements with children keep it trimmed.
///
/// # Errors
///
/// Fails on malformed markup, mismatched end tags, several root elements or
/// a document without any element.
pub fn parse_document(input: &str) -> Result<Element, XmlError> {
    let mut reader = Reader::from_str(input);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(open_element(&start)?),
            Event::Empty(start) => {
                let element = open_element(&start)?;
                close_element(element, &mut stack, &mut root)?;
            }
            Event::End(_) => {
                let mut element = stack
                    .pop()
                    .ok_or_else(|| XmlError::Malformed("unbalanced end tag".to_string()))?;
                if !element.children.is_empty() {
                    element.text = element.text.trim().to_string();
                }
                close_element(element, &mut stack, &mut root)?;
            }
            Event::Text(text) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&text.unescape()?);
                }
            }
            Event::CData(data) => {
                if let Some(current) = stack.last_mut() {
                    current
                        .text
                        .push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(XmlError::Malformed(
            "unexpected end of document".to_string(),
        ));
    }
    root.ok_or(XmlError::EmptyDocument)
}

fn open_element(start: &BytesStart<'_>) -> Result<Element, XmlError> {
    let mut element = Element::new(String::from_utf8_lossy(start.local_name().as_ref()));
    for attr in start.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn close_element(
    element: Element,
    stack: &mut [Element],
    root: &mut Option<Element>,
) -> Result<(), XmlError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(XmlError::Malformed(format!(
                "second root element <{}>",
                element.name
            )))
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_document() {
        let doc = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
            <test name="t1" uid="u1">
                <description>first &amp; only</description>
                <metrics>
                    <metric name="m1" comparator="LB"/>
                </metrics>
            </test>"#;

        let root = parse_document(doc).unwrap();
        assert_eq!(root.name, "test");
        assert_eq!(root.attr("uid"), Some("u1"));
        assert_eq!(root.child_text("description"), Some("first & only"));
        assert_eq!(root.collection("metrics", "metric").count(), 1);
        assert!(root.text.is_empty());
    }

    #[test]
    fn test_parse_keeps_whitespace_leaf_text() {
        let doc = "<test>\n  <description>   </description>\n  <comment/>\n</test>";
        let root = parse_document(doc).unwrap();
        assert_eq!(root.child_text("description"), Some("   "));
        assert_eq!(root.child_text("comment"), Some(""));
        assert!(root.text.is_empty());
    }

    #[test]
    fn test_parse_unescapes_attributes() {
        let root = parse_document(r#"<tag name="a &lt; b"/>"#).unwrap();
        assert_eq!(root.attr("name"), Some("a < b"));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_document(""), Err(XmlError::EmptyDocument)));
    }

    #[test]
    fn test_parse_truncated_input() {
        assert!(parse_document("<test><metrics>").is_err());
    }

    #[test]
    fn test_parse_mismatched_end_tag() {
        assert!(parse_document("<test></metric>").is_err());
    }
}
