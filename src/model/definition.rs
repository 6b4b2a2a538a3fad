//
//  perfrepo-client
//  model/definition.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Test and Metric
//!
//! A [`Test`] is a named performance test definition owned by a group; its
//! [`Metric`]s name the quantities that executions of the test measure.
//!
//! ```xml
//! <test name="t1" groupId="perfrepouser" uid="t1uid">
//!     <description>This is a test object</description>
//!     <metrics>
//!         <metric comparator="LB" name="metric1">
//!             <description>this is a test metric 1</description>
//!         </metric>
//!     </metrics>
//! </test>
//! ```

use crate::xml::{Element, FromXml, ToXml, XmlError, XmlNamed};

use super::enums::{Comparator, WireEnum};

/// A performance test definition.
///
/// `id` is assigned by the server and stays 0 until the test is persisted;
/// `uid` is the caller-chosen stable identifier, unique per server.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Test {
    /// Server-assigned record id (0 until persisted)
    pub id: i64,
    /// Display name
    pub name: String,
    /// Owning group
    pub group_id: String,
    /// Stable unique identifier
    pub uid: String,
    /// Optional free text
    pub description: Option<String>,
    /// Metrics in definition order
    pub metrics: Vec<Metric>,
}

impl Test {
    /// Creates a test definition without metrics.
    pub fn new(name: impl Into<String>, group_id: impl Into<String>, uid: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group_id: group_id.into(),
            uid: uid.into(),
            ..Default::default()
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a metric.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metrics.push(metric);
        self
    }

    /// Finds a metric by name.
    pub fn metric(&self, name: &str) -> Option<&Metric> {
        self.metrics.iter().find(|metric| metric.name == name)
    }
}

/// A measurable quantity of a test. Names are unique within a test.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metric {
    /// Server-assigned record id (0 until persisted)
    pub id: i64,
    /// Name referenced by execution values
    pub name: String,
    /// Whether lower or higher results are better
    pub comparator: Comparator,
    /// Optional free text
    pub description: Option<String>,
}

impl Metric {
    /// Creates a metric.
    pub fn new(name: impl Into<String>, comparator: Comparator) -> Self {
        Self {
            name: name.into(),
            comparator,
            ..Default::default()
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl XmlNamed for Test {
    const ELEMENT: &'static str = "test";
}

impl ToXml for Test {
    fn write_into(&self, element: Element) -> Element {
        element
            .with_attr("name", self.name.as_str())
            .with_attr("groupId", self.group_id.as_str())
            .with_attr_if(self.id != 0, "id", self.id.to_string())
            .with_attr("uid", self.uid.as_str())
            .with_optional_text_child("description", self.description.as_deref())
            .with_collection("metrics", self.metrics.iter().map(ToXml::to_xml))
    }
}

impl FromXml for Test {
    fn read_from(element: &Element) -> Result<Self, XmlError> {
        Ok(Self {
            id: element.parse_attr("id")?.unwrap_or_default(),
            name: element.attr_or_empty("name"),
            group_id: element.attr_or_empty("groupId"),
            uid: element.attr_or_empty("uid"),
            description: element.child_text("description").map(str::to_string),
            metrics: element
                .collection("metrics", Metric::ELEMENT)
                .map(Metric::from_xml)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl XmlNamed for Metric {
    const ELEMENT: &'static str = "metric";
}

impl ToXml for Metric {
    fn write_into(&self, element: Element) -> Element {
        element
            .with_attr_if(!self.comparator.is_unknown(), "comparator", self.comparator.token())
            .with_attr("name", self.name.as_str())
            .with_attr_if(self.id != 0, "id", self.id.to_string())
            .with_optional_text_child("description", self.description.as_deref())
    }
}

impl FromXml for Metric {
    fn read_from(element: &Element) -> Result<Self, XmlError> {
        Ok(Self {
            id: element.parse_attr("id")?.unwrap_or_default(),
            name: element.attr_or_empty("name"),
            comparator: element.decode_attr("comparator")?.unwrap_or_default(),
            description: element.child_text("description").map(str::to_string),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml;

    fn sample() -> Test {
        Test::new("t1", "perfrepouser", "t1uid")
            .with_description("This is a test object")
            .with_metric(Metric::new("metric1", Comparator::LowerBetter).with_description("m1"))
            .with_metric(Metric::new("metric2", Comparator::LowerBetter))
            .with_metric(Metric::new("multimetric", Comparator::HigherBetter))
    }

    #[test]
    fn test_encode_omits_unset_fields() {
        let text = xml::to_string(&Test::new("t1", "g", "u")).unwrap();
        assert_eq!(text, r#"<test name="t1" groupId="g" uid="u"/>"#);
    }

    #[test]
    fn test_encode_metric_attributes() {
        let element = sample().to_xml();
        let metric = element.collection("metrics", "metric").next().unwrap();
        assert_eq!(metric.attr("comparator"), Some("LB"));
        assert_eq!(metric.attr("name"), Some("metric1"));
        assert_eq!(metric.attr("id"), None);
        assert_eq!(metric.child_text("description"), Some("m1"));
    }

    #[test]
    fn test_round_trip() {
        let mut test = sample();
        test.id = 42;
        test.metrics[0].id = 7;
        let decoded: Test = xml::from_str(&xml::to_string(&test).unwrap()).unwrap();
        assert_eq!(decoded, test);
    }

    #[test]
    fn test_round_trip_keeps_blank_description() {
        let test = Test::new("t1", "g", "u").with_description("   ");
        let decoded: Test = xml::from_str(&xml::to_string(&test).unwrap()).unwrap();
        assert_eq!(decoded.description.as_deref(), Some("   "));
    }

    #[test]
    fn test_decode_server_response() {
        let doc = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
            <test groupId="perfrepouser" id="12" name="t1" uid="t1uid">
                <description>desc</description>
                <metrics>
                    <metric comparator="HB" id="30" name="multimetric">
                        <description>many</description>
                    </metric>
                </metrics>
                <testExecutions/>
            </test>"#;
        let test: Test = xml::from_str(doc).unwrap();
        assert_eq!(test.id, 12);
        assert_eq!(test.group_id, "perfrepouser");
        assert_eq!(test.metrics.len(), 1);
        assert_eq!(test.metric("multimetric").unwrap().comparator, Comparator::HigherBetter);
        assert_eq!(test.metrics[0].id, 30);
    }

    #[test]
    fn test_decode_rejects_bad_comparator() {
        let doc = r#"<metric comparator="MB" name="m"/>"#;
        let err = xml::from_str::<Metric>(doc).unwrap_err();
        assert!(matches!(err, XmlError::Parse(_)));
        assert!(err.to_string().contains("MB"));
    }

    #[test]
    fn test_decode_rejects_wrong_root() {
        assert!(matches!(
            xml::from_str::<Test>("<report/>"),
            Err(XmlError::UnexpectedElement { .. })
        ));
    }
}
