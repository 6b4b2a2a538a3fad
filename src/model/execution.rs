//
//  perfrepo-client
//  model/execution.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Test Executions
//!
//! A [`TestExecution`] is one run of a [`Test`](super::Test). It carries the
//! run's parameters and tags plus one [`Value`] per measured result. Values
//! of the same metric must be told apart by their own parameters; the server
//! rejects an execution holding two unparameterized values of one metric.
//!
//! ```xml
//! <testExecution name="execution1" testId="12" testUid="" started="2016-07-07T00:00:00+00:00">
//!     <parameters>
//!         <parameter name="param1" value="value1"/>
//!     </parameters>
//!     <tags>
//!         <tag name="tag1"/>
//!     </tags>
//!     <values>
//!         <value metricName="multimetric" result="20">
//!             <parameters>
//!                 <parameter name="client" value="1"/>
//!             </parameters>
//!         </value>
//!     </values>
//! </testExecution>
//! ```

use std::collections::BTreeMap;

use crate::xml::{Element, FromXml, ToXml, XmlError, XmlNamed};

use super::enums::{Comparator, WireEnum};
use super::time::JaxbTime;

/// One run of a test.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestExecution {
    /// Server-assigned record id (0 until persisted)
    pub id: i64,
    /// Display name
    pub name: String,
    /// Id of the owning test
    pub test_id: i64,
    /// UID of the owning test
    pub test_uid: String,
    /// When the run started
    pub started: Option<JaxbTime>,
    /// Optional free text
    pub comment: Option<String>,
    /// Run parameters
    pub parameters: Vec<Parameter>,
    /// Tags attached to the run
    pub tags: Vec<Tag>,
    /// Measured results
    pub values: Vec<Value>,
}

impl TestExecution {
    /// Returns a copy of the tags sorted by name.
    pub fn sorted_tags(&self) -> Vec<Tag> {
        let mut tags = self.tags.clone();
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        tags
    }

    /// Returns a copy of the parameters sorted by name.
    pub fn sorted_parameters(&self) -> Vec<Parameter> {
        let mut parameters = self.parameters.clone();
        parameters.sort_by(|a, b| a.name.cmp(&b.name));
        parameters
    }

    /// Parameters as a name → value map.
    pub fn parameters_map(&self) -> BTreeMap<String, String> {
        self.parameters
            .iter()
            .map(|p| (p.name.clone(), p.value.clone()))
            .collect()
    }
}

/// A name/value pair written as attributes.
///
/// Used both for execution parameters and for the parameters that tell
/// apart several values of one metric.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Parameter {
    /// Parameter name
    pub name: String,
    /// Parameter value
    pub value: String,
}

impl Parameter {
    /// Creates a parameter.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A label attached to an execution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Tag {
    /// Server-assigned record id (0 until persisted)
    pub id: i64,
    /// Tag text
    pub name: String,
}

impl Tag {
    /// Creates an unpersisted tag.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
        }
    }
}

/// One measured result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Value {
    /// Name of a metric defined on the owning test
    pub metric_name: String,
    /// Measured number
    pub result: f64,
    /// Parameters distinguishing several values of the same metric
    pub parameters: Vec<Parameter>,
    /// Optional comparator override
    pub metric_comparator: Comparator,
}

impl Value {
    /// Creates an unparameterized value.
    pub fn new(metric_name: impl Into<String>, result: f64) -> Self {
        Self {
            metric_name: metric_name.into(),
            result,
            ..Default::default()
        }
    }

    /// Appends a distinguishing parameter.
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push(Parameter::new(name, value));
        self
    }
}

/// Binary content attached to a persisted execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attachment {
    /// Raw bytes
    pub content: Vec<u8>,
    /// MIME type of the content
    pub content_type: String,
    /// File name the server stores the content under
    pub target_file_name: String,
}

impl Attachment {
    /// Creates an attachment.
    pub fn new(
        content: impl Into<Vec<u8>>,
        content_type: impl Into<String>,
        target_file_name: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            content_type: content_type.into(),
            target_file_name: target_file_name.into(),
        }
    }
}

impl XmlNamed for TestExecution {
    const ELEMENT: &'static str = "testExecution";
}

impl ToXml for TestExecution {
    fn write_into(&self, element: Element) -> Element {
        let element = element
            .with_attr("name", self.name.as_str())
            .with_attr_if(self.id != 0, "id", self.id.to_string())
            .with_attr("testId", self.test_id.to_string())
            .with_attr("testUid", self.test_uid.as_str());
        let element = match &self.started {
            Some(started) => element.with_attr("started", started.to_string()),
            None => element,
        };
        element
            .with_optional_text_child("comment", self.comment.as_deref())
            .with_collection("parameters", self.parameters.iter().map(ToXml::to_xml))
            .with_collection("tags", self.tags.iter().map(ToXml::to_xml))
            .with_collection("values", self.values.iter().map(ToXml::to_xml))
    }
}

impl FromXml for TestExecution {
    fn read_from(element: &Element) -> Result<Self, XmlError> {
        Ok(Self {
            id: element.parse_attr("id")?.unwrap_or_default(),
            name: element.attr_or_empty("name"),
            test_id: element.parse_attr("testId")?.unwrap_or_default(),
            test_uid: element.attr_or_empty("testUid"),
            started: element.decode_attr("started")?,
            comment: element.child_text("comment").map(str::to_string),
            parameters: read_parameters(element)?,
            tags: element
                .collection("tags", Tag::ELEMENT)
                .map(Tag::from_xml)
                .collect::<Result<_, _>>()?,
            values: element
                .collection("values", Value::ELEMENT)
                .map(Value::from_xml)
                .collect::<Result<_, _>>()?,
        })
    }
}

fn read_parameters(element: &Element) -> Result<Vec<Parameter>, XmlError> {
    element
        .collection("parameters", Parameter::ELEMENT)
        .map(Parameter::from_xml)
        .collect()
}

impl XmlNamed for Parameter {
    const ELEMENT: &'static str = "parameter";
}

impl ToXml for Parameter {
    fn write_into(&self, element: Element) -> Element {
        element
            .with_attr("name", self.name.as_str())
            .with_attr("value", self.value.as_str())
    }
}

impl FromXml for Parameter {
    fn read_from(element: &Element) -> Result<Self, XmlError> {
        Ok(Self::new(element.attr_or_empty("name"), element.attr_or_empty("value")))
    }
}

impl XmlNamed for Tag {
    const ELEMENT: &'static str = "tag";
}

impl ToXml for Tag {
    fn write_into(&self, element: Element) -> Element {
        element
            .with_attr_if(self.id != 0, "id", self.id.to_string())
            .with_attr("name", self.name.as_str())
    }
}

impl FromXml for Tag {
    fn read_from(element: &Element) -> Result<Self, XmlError> {
        Ok(Self {
            id: element.parse_attr("id")?.unwrap_or_default(),
            name: element.attr_or_empty("name"),
        })
    }
}

impl XmlNamed for Value {
    const ELEMENT: &'static str = "value";
}

impl ToXml for Value {
    fn write_into(&self, element: Element) -> Element {
        element
            .with_attr_if(
                !self.metric_comparator.is_unknown(),
                "metricComparator",
                self.metric_comparator.token(),
            )
            .with_attr("metricName", self.metric_name.as_str())
            .with_attr("result", self.result.to_string())
            .with_collection("parameters", self.parameters.iter().map(ToXml::to_xml))
    }
}

impl FromXml for Value {
    fn read_from(element: &Element) -> Result<Self, XmlError> {
        Ok(Self {
            metric_name: element.attr_or_empty("metricName"),
            result: element.parse_attr("result")?.unwrap_or_default(),
            parameters: read_parameters(element)?,
            metric_comparator: element.decode_attr("metricComparator")?.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml;
    use chrono::{FixedOffset, TimeZone};

    fn sample() -> TestExecution {
        let offset = FixedOffset::east_opt(3600).unwrap();
        TestExecution {
            id: 5,
            name: "execution1".to_string(),
            test_id: 12,
            test_uid: "t1uid".to_string(),
            started: Some(JaxbTime::new(offset.with_ymd_and_hms(2016, 7, 10, 8, 0, 0).unwrap())),
            comment: Some("nightly run".to_string()),
            parameters: vec![Parameter::new("param2", "value2"), Parameter::new("param1", "value1")],
            tags: vec![Tag::new("tag2"), Tag { id: 3, name: "tag1".to_string() }],
            values: vec![
                Value::new("metric1", 12.0),
                Value::new("multimetric", 20.5).with_parameter("client", "1"),
                Value {
                    metric_comparator: Comparator::HigherBetter,
                    ..Value::new("multimetric", 40.0).with_parameter("client", "2")
                },
            ],
        }
    }

    #[test]
    fn test_encode_attributes() {
        let element = sample().to_xml();
        assert_eq!(element.attr("testId"), Some("12"));
        assert_eq!(element.attr("started"), Some("2016-07-10T08:00:00+01:00"));
        let values: Vec<_> = element.collection("values", "value").collect();
        assert_eq!(values[0].attr("result"), Some("12"));
        assert_eq!(values[0].attr("metricComparator"), None);
        assert_eq!(values[1].attr("result"), Some("20.5"));
        assert_eq!(values[2].attr("metricComparator"), Some("HB"));
    }

    #[test]
    fn test_encode_unpersisted_execution() {
        let execution = TestExecution {
            name: "e".to_string(),
            test_id: 9,
            ..Default::default()
        };
        let text = xml::to_string(&execution).unwrap();
        assert_eq!(text, r#"<testExecution name="e" testId="9" testUid=""/>"#);
    }

    #[test]
    fn test_round_trip() {
        let execution = sample();
        let decoded: TestExecution = xml::from_str(&xml::to_string(&execution).unwrap()).unwrap();
        assert_eq!(decoded, execution);
        assert_eq!(
            decoded.started.unwrap().to_string(),
            execution.started.unwrap().to_string()
        );
    }

    #[test]
    fn test_decode_rejects_bad_timestamp() {
        let doc = r#"<testExecution name="e" testId="1" started="10/07/2016"/>"#;
        let err = xml::from_str::<TestExecution>(doc).unwrap_err();
        assert!(err.to_string().contains("10/07/2016"));
    }

    #[test]
    fn test_decode_rejects_bad_result() {
        let doc = r#"<testExecution name="e"><values><value metricName="m" result="fast"/></values></testExecution>"#;
        assert!(matches!(
            xml::from_str::<TestExecution>(doc),
            Err(XmlError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_sorted_helpers() {
        let execution = sample();
        let tags: Vec<_> = execution.sorted_tags().into_iter().map(|t| t.name).collect();
        assert_eq!(tags, vec!["tag1", "tag2"]);
        let params: Vec<_> = execution
            .sorted_parameters()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(params, vec!["param1", "param2"]);
        assert_eq!(execution.tags[0].name, "tag2");
    }

    #[test]
    fn test_parameters_map() {
        let map = sample().parameters_map();
        assert_eq!(map.get("param1").map(String::as_str), Some("value1"));
        assert_eq!(map.len(), 2);
    }
}
