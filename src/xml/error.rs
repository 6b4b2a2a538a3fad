//
//  perfrepo-client
//  xml/error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Error types for the XML wire codec.

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// Failure to decode a custom-coded text value.
///
/// Raised by the enumeration token tables and the JAXB timestamp codec.
/// Both variants carry the offending input text verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The token is not in the enumeration's table.
    #[error("Unable to parse {input:?} as {kind}")]
    Token {
        /// Name of the enumeration (e.g. `"Comparator"`)
        kind: &'static str,
        /// The rejected token
        input: String,
    },

    /// The text is not a JAXB date-time with a numeric offset.
    #[error("Unable to parse {input:?} as a JAXB date-time: {reason}")]
    Timestamp {
        /// The rejected text
        input: String,
        /// Why the text was rejected
        reason: String,
    },
}

/// Error produced while reading or writing an XML document.
///
/// | Variant | Raised when |
/// |---------|-------------|
/// | `Syntax` | quick-xml rejects the token stream |
/// | `Attribute` | an attribute is malformed |
/// | `Io` | the writer fails |
/// | `Malformed` | the tree is unbalanced or has several roots |
/// | `EmptyDocument` | there is no root element at all |
/// | `UnexpectedElement` | an element name is not the one the shape allows |
/// | `InvalidValue` | a numeric field does not parse |
/// | `Parse` | an enumeration token or timestamp does not parse |
#[derive(Error, Debug)]
pub enum XmlError {
    /// The underlying reader rejected the input.
    #[error("Malformed XML: {0}")]
    Syntax(#[from] quick_xml::Error),

    /// An attribute could not be read.
    #[error("Malformed XML attribute: {0}")]
    Attribute(#[from] AttrError),

    /// Writing the document failed.
    #[error("Failed to write XML: {0}")]
    Io(#[from] std::io::Error),

    /// The element structure is inconsistent.
    #[error("Malformed XML: {0}")]
    Malformed(String),

    /// The input holds no root element.
    #[error("XML document has no root element")]
    EmptyDocument,

    /// An element appeared where the wire shape does not allow it.
    #[error("Unexpected element: <{found}>, expected <{expected}>")]
    UnexpectedElement {
        /// The element name(s) allowed at this position
        expected: String,
        /// The element name actually found
        found: String,
    },

    /// A numeric attribute or child text did not parse.
    #[error("Invalid value {input:?} for {field} in <{element}>: {reason}")]
    InvalidValue {
        /// Enclosing element
        element: String,
        /// Attribute or child element name
        field: String,
        /// Raw text
        input: String,
        /// Parser message
        reason: String,
    },

    /// A custom-coded value did not parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl XmlError {
    pub(crate) fn unexpected(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::UnexpectedElement {
            expected: expected.into(),
            found: found.into(),
        }
    }
}
