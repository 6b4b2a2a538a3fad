//
//  perfrepo-client
//  model/report.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Reports and Permissions
//!
//! A [`Report`] is a named, typed collection of properties owned by a user,
//! together with the [`Permission`]s granting access to it.
//!
//! Permissions are written as `<permission>` inside a report but as
//! `<report-permission>` when posted on their own to the add/delete
//! permission endpoints; see [`Permission::to_standalone_xml`].

use crate::xml::{Element, FromXml, ToXml, XmlError, XmlNamed};

use super::enums::{token_element, AccessLevel, AccessType};
use super::properties::PropertyMap;

/// A report definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Server-assigned record id (0 until persisted)
    pub id: i64,
    /// Display name
    pub name: String,
    /// Report type tag (e.g. `"TestReport"`)
    pub report_type: String,
    /// Owning user name
    pub user: String,
    /// Access grants
    pub permissions: Vec<Permission>,
    /// Report properties; keys are unique
    pub properties: PropertyMap,
}

impl Report {
    /// Creates a report without permissions or properties.
    pub fn new(name: impl Into<String>, report_type: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            report_type: report_type.into(),
            user: user.into(),
            ..Default::default()
        }
    }

    /// Sets a property, replacing any previous value of the key.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// An access grant on one report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Permission {
    /// Server-assigned record id (0 until persisted)
    pub id: i64,
    /// Target group (for group-level grants)
    pub group_id: i64,
    /// Report the grant belongs to
    pub report_id: i64,
    /// Target user (for user-level grants)
    pub user_id: i64,
    /// Read or write
    pub access_type: AccessType,
    /// User, group or public
    pub access_level: AccessLevel,
}

impl Permission {
    /// Element name of a permission posted on its own.
    pub const STANDALONE_ELEMENT: &'static str = "report-permission";

    /// Creates a grant on `report_id`.
    pub fn new(report_id: i64, access_type: AccessType, access_level: AccessLevel) -> Self {
        Self {
            report_id,
            access_type,
            access_level,
            ..Default::default()
        }
    }

    /// Builds the `<report-permission>` body of the add/delete permission calls.
    pub fn to_standalone_xml(&self) -> Element {
        self.write_into(Element::new(Self::STANDALONE_ELEMENT))
    }

    /// Whether two grants give the same access to the same audience.
    pub fn grants_same_access(&self, other: &Permission) -> bool {
        self.access_type == other.access_type && self.access_level == other.access_level
    }
}

impl XmlNamed for Report {
    const ELEMENT: &'static str = "report";
}

impl ToXml for Report {
    fn write_into(&self, element: Element) -> Element {
        element
            .with_attr_if(self.id != 0, "id", self.id.to_string())
            .with_attr("name", self.name.as_str())
            .with_attr("type", self.report_type.as_str())
            .with_attr("user", self.user.as_str())
            .with_collection("permissions", self.permissions.iter().map(ToXml::to_xml))
            .with_child(self.properties.to_xml())
    }
}

impl FromXml for Report {
    fn read_from(element: &Element) -> Result<Self, XmlError> {
        Ok(Self {
            id: element.parse_attr("id")?.unwrap_or_default(),
            name: element.attr_or_empty("name"),
            report_type: element.attr_or_empty("type"),
            user: element.attr_or_empty("user"),
            permissions: element
                .collection("permissions", Permission::ELEMENT)
                .map(Permission::from_xml)
                .collect::<Result<_, _>>()?,
            properties: element
                .child(PropertyMap::ELEMENT)
                .map(PropertyMap::from_xml)
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

impl XmlNamed for Permission {
    const ELEMENT: &'static str = "permission";
}

impl ToXml for Permission {
    fn write_into(&self, element: Element) -> Element {
        element
            .with_optional_child(id_child("id", self.id))
            .with_optional_child(id_child("group-id", self.group_id))
            .with_optional_child(id_child("report-id", self.report_id))
            .with_optional_child(id_child("user-id", self.user_id))
            .with_optional_child(token_element("access-type", self.access_type))
            .with_optional_child(token_element("access-level", self.access_level))
    }
}

impl FromXml for Permission {
    fn read_from(element: &Element) -> Result<Self, XmlError> {
        Ok(Self {
            id: element.parse_child("id")?.unwrap_or_default(),
            group_id: element.parse_child("group-id")?.unwrap_or_default(),
            report_id: element.parse_child("report-id")?.unwrap_or_default(),
            user_id: element.parse_child("user-id")?.unwrap_or_default(),
            access_type: element.decode_child("access-type")?.unwrap_or_default(),
            access_level: element.decode_child("access-level")?.unwrap_or_default(),
        })
    }
}

fn id_child(name: &str, id: i64) -> Option<Element> {
    (id != 0).then(|| Element::new(name).with_text(id.to_string()))
}
