//
//  perfrepo-client
//  xml/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # XML Wire Codec
//!
//! PerfRepo speaks JAXB-flavoured XML. Several of its shapes have no natural
//! structural mapping (maps written as `entry` records, enumerations written as
//! names, timestamps with numeric offsets), so the codec works on an explicit
//! element tree instead of generic serialization:
//!
//! - [`Element`]: a lightweight owned element tree
//! - [`parse_document`]: quick-xml event stream → tree
//! - [`write_document`]: tree → indented text (4 spaces)
//! - [`ToXml`] / [`FromXml`]: conversions implemented by every wire type
//!
//! ## Example
//!
//! ```rust
//! use perfrepo_client::xml::{self, Element};
//!
//! let doc = Element::new("tag").with_attr("name", "nightly");
//! let text = xml::write_document(&doc).unwrap();
//! assert_eq!(text, r#"<tag name="nightly"/>"#);
//!
//! let parsed = xml::parse_document(&text).unwrap();
//! assert_eq!(parsed.attr("name"), Some("nightly"));
//! ```

mod error;
mod reader;
mod writer;

pub use error::{ParseError, XmlError};
pub use reader::parse_document;
pub use writer::write_document;

use std::fmt::Display;
use std::str::FromStr;

/// An owned XML element: name, ordered attributes, child elements and text.
///
/// Whitespace-only text between child elements is dropped while reading, so
/// `text` is only non-empty for leaf elements carrying character data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Local element name
    pub name: String,
    /// Attributes in document order
    pub attributes: Vec<(String, String)>,
    /// Child elements in document order
    pub children: Vec<Element>,
    /// Character data
    pub text: String,
}

impl Element {
    /// Creates an empty element with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Appends an attribute.
    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.push((name.to_string(), value.into()));
        self
    }

    /// Appends an attribute only when `present` holds.
    ///
    /// This is how the `omitempty` attributes of the wire shapes are written:
    /// zero ids and `Unknown` enumerations are left out.
    pub fn with_attr_if(self, present: bool, name: &str, value: impl Into<String>) -> Self {
        if present {
            self.with_attr(name, value)
        } else {
            self
        }
    }

    /// Sets the character data.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Appends a child element.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Appends a child element when one is given.
    pub fn with_optional_child(self, child: Option<Element>) -> Self {
        match child {
            Some(child) => self.with_child(child),
            None => self,
        }
    }

    /// Appends `<name>text</name>`.
    pub fn with_text_child(self, name: &str, text: impl Into<String>) -> Self {
        self.with_child(Element::new(name).with_text(text))
    }

    /// Appends `<name>text</name>` when a text is given.
    pub fn with_optional_text_child(self, name: &str, text: Option<&str>) -> Self {
        match text {
            Some(text) => self.with_text_child(name, text),
            None => self,
        }
    }

    /// Appends `<wrapper>items...</wrapper>`, or nothing when `items` is empty.
    pub fn with_collection(self, wrapper: &str, items: impl IntoIterator<Item = Element>) -> Self {
        let wrapped = Element {
            name: wrapper.to_string(),
            children: items.into_iter().collect(),
            ..Default::default()
        };
        if wrapped.children.is_empty() {
            self
        } else {
            self.with_child(wrapped)
        }
    }

    /// Returns the value of an attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the value of an attribute, or an empty string when it is absent.
    pub fn attr_or_empty(&self, name: &str) -> String {
        self.attr(name).unwrap_or_default().to_string()
    }

    /// Returns the first child element with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Returns the text of the first child element with the given name.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(|child| child.text.as_str())
    }

    /// Iterates `item` elements nested in every `wrapper` child.
    ///
    /// Mirrors the `wrapper>item` collections used throughout the wire model.
    pub fn collection<'a>(
        &'a self,
        wrapper: &'a str,
        item: &'a str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.children
            .iter()
            .filter(move |child| child.name == wrapper)
            .flat_map(move |child| child.children.iter().filter(move |c| c.name == item))
    }

    /// Fails unless this element has the given name.
    pub fn expect_name(&self, name: &str) -> Result<(), XmlError> {
        if self.name == name {
            Ok(())
        } else {
            Err(XmlError::unexpected(name, &self.name))
        }
    }

    /// Parses a plain (numeric) attribute.
    pub fn parse_attr<T>(&self, name: &str) -> Result<Option<T>, XmlError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.attr(name)
            .map(|raw| parse_plain(&self.name, name, raw))
            .transpose()
    }

    /// Parses the text of a plain (numeric) child element.
    pub fn parse_child<T>(&self, name: &str) -> Result<Option<T>, XmlError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.child_text(name)
            .map(|raw| parse_plain(&self.name, name, raw))
            .transpose()
    }

    /// Decodes a custom-coded attribute (enumeration token or timestamp).
    pub fn decode_attr<T>(&self, name: &str) -> Result<Option<T>, XmlError>
    where
        T: FromStr<Err = ParseError>,
    {
        Ok(self.attr(name).map(str::parse).transpose()?)
    }

    /// Decodes the text of a custom-coded child element.
    pub fn decode_child<T>(&self, name: &str) -> Result<Option<T>, XmlError>
    where
        T: FromStr<Err = ParseError>,
    {
        Ok(self.child_text(name).map(str::parse).transpose()?)
    }
}

fn parse_plain<T>(element: &str, field: &str, raw: &str) -> Result<T, XmlError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim().parse().map_err(|e: T::Err| XmlError::InvalidValue {
        element: element.to_string(),
        field: field.to_string(),
        input: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Ties a wire type to the element name it is written as.
pub trait XmlNamed {
    /// Element name used when the value is a document root or collection item.
    const ELEMENT: &'static str;
}

/// Conversion of a wire value into an element tree. Encoding never fails.
pub trait ToXml: XmlNamed {
    /// Writes the attributes and children of `self` into `element`.
    fn write_into(&self, element: Element) -> Element;

    /// Builds the element under its regular name.
    fn to_xml(&self) -> Element {
        self.write_into(Element::new(Self::ELEMENT))
    }
}

/// Conversion of an element tree back into a wire value.
pub trait FromXml: XmlNamed + Sized {
    /// Reads the value from `element` without checking its name.
    fn read_from(element: &Element) -> Result<Self, XmlError>;

    /// Reads the value after checking the element name.
    fn from_xml(element: &Element) -> Result<Self, XmlError> {
        element.expect_name(Self::ELEMENT)?;
        Self::read_from(element)
    }
}

/// Marshals a value into indented XML text.
pub fn to_string<T: ToXml>(value: &T) -> Result<String, XmlError> {
    write_document(&value.to_xml())
}

/// Unmarshals a value from XML text, checking the root element name.
pub fn from_str<T: FromXml>(input: &str) -> Result<T, XmlError> {
    T::from_xml(&parse_document(input)?)
}
