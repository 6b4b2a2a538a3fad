//
//  perfrepo-client
//  model/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Wire Model
//!
//! Entities exchanged with the PerfRepo REST API, each with its XML codec.
//!
//! ## Entities
//!
//! | Type | Root element |
//! |------|--------------|
//! | [`Test`] | `test` |
//! | [`Metric`] | `metric` |
//! | [`TestExecution`] | `testExecution` |
//! | [`TestExecutionSearch`] | `test-execution-search` |
//! | [`TestExecutions`] | `testExecutions` |
//! | [`Report`] | `report` |
//! | [`Permission`] | `permission` / `report-permission` |
//!
//! Enumerations are token tables implementing [`WireEnum`]; each has an
//! `Unknown` sentinel that is the default and is never written.

mod definition;
mod enums;
mod execution;
mod properties;
mod report;
mod search;
mod time;

pub use definition::{Metric, Test};
pub use enums::{AccessLevel, AccessType, Comparator, GroupFilter, OrderBy, WireEnum};
pub use execution::{Attachment, Parameter, Tag, TestExecution, Value};
pub use properties::PropertyMap;
pub use report::{Permission, Report};
pub use search::{CriteriaParameter, TestExecutionSearch, TestExecutions};
pub use time::JaxbTime;

pub use crate::xml::ParseError;
