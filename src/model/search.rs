//
//  perfrepo-client
//  model/search.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Test Execution Search
//!
//! [`TestExecutionSearch`] is the request body of
//! `POST /testExecution/search`; every criterion left unset is omitted from
//! the document. Results come back as [`TestExecutions`].

use crate::xml::{Element, FromXml, ToXml, XmlError, XmlNamed};

use super::enums::{token_element, GroupFilter, OrderBy};
use super::execution::TestExecution;
use super::time::JaxbTime;

/// Search criteria for test executions.
///
/// ```rust
/// use perfrepo_client::model::{CriteriaParameter, TestExecutionSearch};
///
/// let criteria = TestExecutionSearch {
///     tags: Some("tag2".to_string()),
///     parameters: vec![CriteriaParameter::new("param1", "value1")],
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestExecutionSearch {
    pub group_filter: GroupFilter,
    /// Restrict to these execution ids
    pub ids: Vec<i64>,
    pub label_parameter: Option<String>,
    /// Index of the first result
    pub limit_from: Option<u32>,
    /// Maximum number of results
    pub how_many: Option<u32>,
    pub order_by: OrderBy,
    pub order_by_parameter: Option<String>,
    /// Execution parameters that must match
    pub parameters: Vec<CriteriaParameter>,
    pub executed_after: Option<JaxbTime>,
    pub executed_before: Option<JaxbTime>,
    /// Tag expression (e.g. `"tag1 tag2"`)
    pub tags: Option<String>,
    pub test_name: Option<String>,
    pub test_uid: Option<String>,
}

/// A parameter criterion, written with child elements rather than attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CriteriaParameter {
    pub name: String,
    pub value: String,
}

impl CriteriaParameter {
    /// Creates a criterion.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Search results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestExecutions {
    pub executions: Vec<TestExecution>,
}

impl XmlNamed for TestExecutionSearch {
    const ELEMENT: &'static str = "test-execution-search";
}

impl ToXml for TestExecutionSearch {
    fn write_into(&self, element: Element) -> Element {
        let text = |name: &str, value: Option<String>| value.map(|v| Element::new(name).with_text(v));

        element
            .with_optional_child(token_element("group-filter", self.group_filter))
            .with_collection(
                "ids",
                self.ids
                    .iter()
                    .map(|id| Element::new("id").with_text(id.to_string())),
            )
            .with_optional_child(text("labelParameter", self.label_parameter.clone()))
            .with_optional_child(text("limit-from", self.limit_from.map(|n| n.to_string())))
            .with_optional_child(text("how-many", self.how_many.map(|n| n.to_string())))
            .with_optional_child(token_element("order-by", self.order_by))
            .with_optional_child(text("orderByParameter", self.order_by_parameter.clone()))
            .with_collection("parameters", self.parameters.iter().map(ToXml::to_xml))
            .with_optional_child(text("executed-after", self.executed_after.map(|t| t.to_string())))
            .with_optional_child(text("executed-before", self.executed_before.map(|t| t.to_string())))
            .with_optional_child(text("tags", self.tags.clone()))
            .with_optional_child(text("test-name", self.test_name.clone()))
            .with_optional_child(text("test-uid", self.test_uid.clone()))
    }
}

impl XmlNamed for CriteriaParameter {
    const ELEMENT: &'static str = "parameter";
}

impl ToXml for CriteriaParameter {
    fn write_into(&self, element: Element) -> Element {
        element
            .with_text_child("name", self.name.as_str())
            .with_text_child("value", self.value.as_str())
    }
}

impl FromXml for CriteriaParameter {
    fn read_from(element: &Element) -> Result<Self, XmlError> {
        Ok(Self::new(
            element.child_text("name").unwrap_or_default(),
            element.child_text("value").unwrap_or_default(),
        ))
    }
}

impl XmlNamed for TestExecutions {
    const ELEMENT: &'static str = "testExecutions";
}

impl FromXml for TestExecutions {
    fn read_from(element: &Element) -> Result<Self, XmlError> {
        Ok(Self {
            executions: element
                .children
                .iter()
                .filter(|child| child.name == TestExecution::ELEMENT)
                .map(TestExecution::from_xml)
                .collect::<Result<_, _>>()?,
        })
    }
}
