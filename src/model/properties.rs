//
//  perfrepo-client
//  model/properties.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Report Property Map
//!
//! JAXB writes a `Map<String, ReportProperty>` as a list of entries, each
//! repeating the key inside the value element:
//!
//! ```xml
//! <properties>
//!     <entry>
//!         <key>chart.title</key>
//!         <value name="chart.title" value="Throughput"/>
//!     </entry>
//! </properties>
//! ```
//!
//! Reading takes the pair from the `value` element's `name`/`value`
//! attributes; the `key` text is redundant and ignored. Anything other than
//! `entry` at the top level, or other than `key`/`value` inside an entry, is
//! rejected.

use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};

use crate::xml::{Element, FromXml, ToXml, XmlError, XmlNamed};

/// String-to-string properties of a report.
///
/// Entry order carries no meaning on the wire; a sorted map keeps encoded
/// documents stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap(BTreeMap<String, String>);

impl PropertyMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the wrapper.
    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl Deref for PropertyMap {
    type Target = BTreeMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PropertyMap {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl From<BTreeMap<String, String>> for PropertyMap {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl XmlNamed for PropertyMap {
    const ELEMENT: &'static str = "properties";
}

impl ToXml for PropertyMap {
    fn write_into(&self, element: Element) -> Element {
        self.0.iter().fold(element, |element, (key, value)| {
            element.with_child(
                Element::new("entry")
                    .with_text_child("key", key.as_str())
                    .with_child(
                        Element::new("value")
                            .with_attr("name", key.as_str())
                            .with_attr("value", value.as_str()),
                    ),
            )
        })
    }
}

impl FromXml for PropertyMap {
    fn read_from(element: &Element) -> Result<Self, XmlError> {
        let mut properties = BTreeMap::new();
        for entry in &element.children {
            if entry.name != "entry" {
                return Err(XmlError::unexpected("entry", &entry.name));
            }
            for part in &entry.children {
                match part.name.as_str() {
                    "key" => {}
                    "value" => {
                        properties.insert(part.attr_or_empty("name"), part.attr_or_empty("value"));
                    }
                    other => return Err(XmlError::unexpected("key> or <value", other)),
                }
            }
        }
        Ok(Self(properties))
    }
}
