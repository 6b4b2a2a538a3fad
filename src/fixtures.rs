//
//  perfrepo-client
//  fixtures.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Test Data Fixtures
//!
//! Builders for the entities used by end-to-end runs against a live server.
//! Names and UIDs get a random lowercase suffix so that repeated runs do not
//! collide. The random source is owned by [`Fixtures`]; pass a seeded RNG
//! for reproducible data.
//!
//! ```rust
//! use perfrepo_client::fixtures::Fixtures;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut fixtures = Fixtures::new(StdRng::seed_from_u64(7));
//! let test = fixtures.test("t1");
//! assert!(test.name.starts_with("t1"));
//! assert_eq!(test.metrics.len(), 3);
//! ```

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::model::{
    Comparator, JaxbTime, Metric, Parameter, Report, Tag, Test, TestExecution, Value,
};

/// Group that owns fixture tests.
pub const CLIENT_GROUP: &str = "perfrepouser";
/// Report type of fixture reports.
pub const REPORT_TYPE: &str = "TestReport";

const SUFFIX_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 8;

/// Fixture factory over a random source.
#[derive(Debug, Clone)]
pub struct Fixtures<R: Rng> {
    rng: R,
}

impl Fixtures<ThreadRng> {
    /// Fixtures drawing from the thread-local generator.
    pub fn thread_local() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> Fixtures<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Eight random lowercase letters.
    pub fn random_suffix(&mut self) -> String {
        (0..SUFFIX_LEN)
            .map(|_| SUFFIX_LETTERS[self.rng.random_range(0..SUFFIX_LETTERS.len())] as char)
            .collect()
    }

    /// A test with metrics `metric1` (LB), `metric2` (LB) and `multimetric` (HB).
    pub fn test(&mut self, name: &str) -> Test {
        let salt = self.random_suffix();
        Test::new(
            format!("{}{}", name, salt),
            CLIENT_GROUP,
            format!("{}uid{}", name, salt),
        )
        .with_description("This is a test object")
        .with_metric(
            Metric::new("metric1", Comparator::LowerBetter)
                .with_description("this is a test metric 1"),
        )
        .with_metric(
            Metric::new("metric2", Comparator::LowerBetter)
                .with_description("this is a test metric 2"),
        )
        .with_metric(
            Metric::new("multimetric", Comparator::HigherBetter)
                .with_description("this is a metric with multiple values"),
        )
    }

    /// An execution started now, with parameters `param1`/`param2` and tags
    /// `tag1`/`tag2`.
    pub fn default_execution(&mut self, test_id: i64) -> TestExecution {
        self.execution(
            test_id,
            Some(JaxbTime::now()),
            vec![
                Parameter::new("param1", "value1"),
                Parameter::new("param2", "value2"),
            ],
            vec![Tag::new("tag1"), Tag::new("tag2")],
        )
    }

    /// An execution of `test_id` with one value each of `metric1` and
    /// `metric2` and two `multimetric` values told apart by `client`.
    pub fn execution(
        &mut self,
        test_id: i64,
        started: Option<JaxbTime>,
        parameters: Vec<Parameter>,
        tags: Vec<Tag>,
    ) -> TestExecution {
        TestExecution {
            test_id,
            name: format!("execution{}", self.random_suffix()),
            started,
            parameters,
            tags,
            values: vec![
                Value::new("metric1", 12.0),
                Value::new("metric2", 8.0),
                Value::new("multimetric", 20.0).with_parameter("client", "1"),
                Value::new("multimetric", 40.0).with_parameter("client", "2"),
            ],
            ..Default::default()
        }
    }

    /// A smaller execution whose parameter and tag differ from
    /// [`default_execution`](Self::default_execution).
    pub fn reduced_execution(&mut self, test_id: i64) -> TestExecution {
        TestExecution {
            test_id,
            name: format!("reduced execution{}", self.random_suffix()),
            started: Some(JaxbTime::now()),
            parameters: vec![Parameter::new("param1", "differentValue")],
            tags: vec![Tag::new("differentTag")],
            values: vec![
                Value::new("metric1", 7.0),
                Value::new("multimetric", 77.0).with_parameter("client", "30"),
            ],
            ..Default::default()
        }
    }

    /// An execution the server must reject: two `multimetric` values with
    /// no parameters to tell them apart.
    pub fn invalid_execution(&mut self, test_id: i64) -> TestExecution {
        TestExecution {
            test_id,
            name: format!("execution{}", self.random_suffix()),
            started: Some(JaxbTime::now()),
            values: vec![
                Value::new("multimetric", 20.0),
                Value::new("multimetric", 40.0),
            ],
            ..Default::default()
        }
    }

    /// A report owned by `user` with property `property1 = value`.
    pub fn report(&mut self, name: &str, user: &str) -> Report {
        Report::new(format!("{}{}", name, self.random_suffix()), REPORT_TYPE, user)
            .with_property("property1", "value")
    }
}
