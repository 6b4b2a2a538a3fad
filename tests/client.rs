//
//  perfrepo-client
//  tests/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Request/response behaviour of the client against a mock server.

use mockito::{Matcher, Server, ServerGuard};
use perfrepo_client::api::{api_error, is_not_found, ApiError, PerfRepoClient};
use perfrepo_client::model::{
    AccessLevel, AccessType, Attachment, Comparator, CriteriaParameter, Metric, Permission,
    Report, Test, TestExecution, TestExecutionSearch, Value,
};

const AUTH: &str = "Basic cGVyZnJlcG91c2VyOnBlcmZyZXBvdXNlcjEu";
const ROOT: &str = "/testing-repo/rest";

async fn setup() -> (ServerGuard, PerfRepoClient) {
    let server = Server::new_async().await;
    let client = PerfRepoClient::new(
        &format!("{}/testing-repo", server.url()),
        "perfrepouser",
        "perfrepouser1.",
    )
    .unwrap();
    (server, client)
}

fn path(suffix: &str) -> String {
    format!("{}{}", ROOT, suffix)
}

fn sample_test() -> Test {
    Test::new("t1", "perfrepouser", "t1uid")
        .with_description("This is a test object")
        .with_metric(Metric::new("metric1", Comparator::LowerBetter))
}

#[tokio::test]
async fn test_create_test_returns_id() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("POST", path("/test/create").as_str())
        .match_header("authorization", AUTH)
        .match_header("content-type", "text/xml")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"<test name="t1" groupId="perfrepouser" uid="t1uid">"#.to_string()),
            Matcher::Regex(r#"<metric comparator="LB" name="metric1"/>"#.to_string()),
        ]))
        .with_status(201)
        .with_body("12")
        .create_async()
        .await;

    assert_eq!(client.create_test(&sample_test()).await.unwrap(), 12);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unexpected_status_carries_url_status_and_body() {
    let (mut server, client) = setup().await;
    server
        .mock("POST", path("/test/create").as_str())
        .with_status(400)
        .with_body("Test with this UID already exists")
        .create_async()
        .await;

    let err = client.create_test(&sample_test()).await.unwrap_err();
    assert!(!is_not_found(&err));
    let message = format!("{:#}", err);
    assert!(message.starts_with("Failed to create test"));
    assert!(message.contains(&path("/test/create")));
    assert!(message.contains("400 Bad Request"));
    assert!(message.contains("Test with this UID already exists"));
}

#[tokio::test]
async fn test_create_with_success_status_but_no_id() {
    let (mut server, client) = setup().await;
    server
        .mock("POST", path("/test/create").as_str())
        .with_status(201)
        .with_body("created")
        .create_async()
        .await;

    let err = client.create_test(&sample_test()).await.unwrap_err();
    assert!(matches!(api_error(&err), Some(ApiError::InvalidId { .. })));
}

#[tokio::test]
async fn test_get_test_decodes_entity() {
    let (mut server, client) = setup().await;
    server
        .mock("GET", path("/test/id/12").as_str())
        .match_header("authorization", AUTH)
        .with_status(200)
        .with_header("content-type", "text/xml")
        .with_body(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<test groupId="perfrepouser" id="12" name="t1" uid="t1uid">
    <description>This is a test object</description>
    <metrics>
        <metric comparator="LB" id="30" name="metric1"/>
        <metric comparator="HB" id="31" name="multimetric"/>
    </metrics>
</test>"#,
        )
        .create_async()
        .await;

    let test = client.get_test(12).await.unwrap();
    assert_eq!(test.id, 12);
    assert_eq!(test.uid, "t1uid");
    assert_eq!(test.description.as_deref(), Some("This is a test object"));
    assert_eq!(test.metrics.len(), 2);
    assert_eq!(
        test.metric("multimetric").map(|m| m.comparator),
        Some(Comparator::HigherBetter)
    );
}

#[tokio::test]
async fn test_empty_body_is_not_found() {
    let (mut server, client) = setup().await;
    server
        .mock("GET", path("/test/id/99").as_str())
        .with_status(200)
        .create_async()
        .await;
    server
        .mock("GET", path("/testExecution/98").as_str())
        .with_status(200)
        .create_async()
        .await;
    server
        .mock("GET", path("/report/id/97").as_str())
        .with_status(200)
        .create_async()
        .await;

    let err = client.get_test(99).await.unwrap_err();
    assert!(is_not_found(&err));
    assert!(format!("{:#}", err).contains("doesn't exist"));
    assert!(is_not_found(&client.get_test_execution(98).await.unwrap_err()));
    assert!(is_not_found(&client.get_report(97).await.unwrap_err()));
}

#[tokio::test]
async fn test_empty_body_is_not_found_for_every_read() {
    let (mut server, client) = setup().await;
    for suffix in ["/metric/96", "/test/uid/gone", "/testExecution/attachment/95"] {
        server
            .mock("GET", path(suffix).as_str())
            .with_status(200)
            .create_async()
            .await;
    }

    let err = client.get_metric(96).await.unwrap_err();
    assert!(is_not_found(&err));
    let err = client.get_test_by_uid("gone").await.unwrap_err();
    assert!(is_not_found(&err));
    let err = client.get_attachment(95).await.unwrap_err();
    assert!(is_not_found(&err));
    assert!(matches!(
        api_error(&err),
        Some(ApiError::NotFound { url }) if url.ends_with("/testExecution/attachment/95")
    ));
}

#[tokio::test]
async fn test_connection_failure_is_network_error() {
    // bind then drop to get a port nothing listens on
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = PerfRepoClient::new(
        &format!("http://127.0.0.1:{}/testing-repo", port),
        "perfrepouser",
        "perfrepouser1.",
    )
    .unwrap();

    let err = client.get_test(1).await.unwrap_err();
    assert!(!is_not_found(&err));
    assert!(matches!(api_error(&err), Some(ApiError::Network(_))));
    assert_eq!(api_error(&err).and_then(ApiError::status), None);
}

#[tokio::test]
async fn test_get_test_by_uid() {
    let (mut server, client) = setup().await;
    server
        .mock("GET", path("/test/uid/t1uid").as_str())
        .with_status(200)
        .with_body(r#"<test groupId="perfrepouser" id="12" name="t1" uid="t1uid"/>"#)
        .create_async()
        .await;

    assert_eq!(client.get_test_by_uid("t1uid").await.unwrap().id, 12);
}

#[tokio::test]
async fn test_delete_test_expects_no_content() {
    let (mut server, client) = setup().await;
    let deleted = server
        .mock("DELETE", path("/test/id/12").as_str())
        .match_header("authorization", AUTH)
        .with_status(204)
        .create_async()
        .await;
    server
        .mock("DELETE", path("/test/id/13").as_str())
        .with_status(200)
        .create_async()
        .await;

    client.delete_test(12).await.unwrap();
    deleted.assert_async().await;

    let err = client.delete_test(13).await.unwrap_err();
    assert_eq!(
        api_error(&err).and_then(ApiError::status).map(|s| s.as_u16()),
        Some(200)
    );
}

#[tokio::test]
async fn test_add_and_get_metric() {
    let (mut server, client) = setup().await;
    server
        .mock("POST", path("/test/id/12/addMetric").as_str())
        .match_body(Matcher::Regex(r#"<metric comparator="HB" name="metric3">"#.to_string()))
        .with_status(201)
        .with_body("33")
        .create_async()
        .await;
    server
        .mock("GET", path("/metric/33").as_str())
        .with_status(200)
        .with_body(r#"<metric comparator="HB" id="33" name="metric3"><description>third</description></metric>"#)
        .create_async()
        .await;

    let metric = Metric::new("metric3", Comparator::HigherBetter).with_description("third");
    let id = client.add_metric(12, &metric).await.unwrap();
    assert_eq!(id, 33);

    let stored = client.get_metric(id).await.unwrap();
    assert_eq!(stored.name, "metric3");
    assert_eq!(stored.description.as_deref(), Some("third"));
}

#[tokio::test]
async fn test_create_and_update_execution() {
    let (mut server, client) = setup().await;
    server
        .mock("POST", path("/testExecution/create").as_str())
        .match_header("content-type", "text/xml")
        .match_body(Matcher::Regex(r#"<value metricName="metric1" result="12"/>"#.to_string()))
        .with_status(201)
        .with_body("40")
        .create_async()
        .await;
    let update = server
        .mock("POST", path("/testExecution/update/40").as_str())
        .match_body(Matcher::Regex(r#"id="40""#.to_string()))
        .with_status(201)
        .with_body("40")
        .create_async()
        .await;

    let mut execution = TestExecution {
        name: "execution1".to_string(),
        test_id: 12,
        values: vec![Value::new("metric1", 12.0)],
        ..Default::default()
    };
    execution.id = client.create_test_execution(&execution).await.unwrap();
    assert_eq!(execution.id, 40);

    execution.comment = Some("rerun".to_string());
    assert_eq!(client.update_test_execution(&execution).await.unwrap(), 40);
    update.assert_async().await;
}

#[tokio::test]
async fn test_update_without_id_sends_nothing() {
    let (mut server, client) = setup().await;
    let any = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let err = client
        .update_test_execution(&TestExecution::default())
        .await
        .unwrap_err();
    assert!(matches!(api_error(&err), Some(ApiError::MissingId { .. })));

    let err = client.update_report(&Report::default()).await.unwrap_err();
    assert!(matches!(api_error(&err), Some(ApiError::MissingId { .. })));
    any.assert_async().await;
}

#[tokio::test]
async fn test_rejected_execution() {
    let (mut server, client) = setup().await;
    server
        .mock("POST", path("/testExecution/create").as_str())
        .with_status(500)
        .with_body("Multiple values for metric multimetric")
        .create_async()
        .await;

    let execution = TestExecution {
        name: "invalid".to_string(),
        test_id: 12,
        values: vec![Value::new("multimetric", 20.0), Value::new("multimetric", 40.0)],
        ..Default::default()
    };
    let err = client.create_test_execution(&execution).await.unwrap_err();
    assert!(format!("{:#}", err).contains("multimetric"));
}

#[tokio::test]
async fn test_search_executions() {
    let (mut server, client) = setup().await;
    server
        .mock("POST", path("/testExecution/search").as_str())
        .match_header("content-type", "text/xml")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("<tags>tag2</tags>".to_string()),
            Matcher::Regex("<name>param1</name>".to_string()),
            Matcher::Regex("<test-uid>t1uid</test-uid>".to_string()),
        ]))
        .with_status(200)
        .with_body(
            r#"<testExecutions>
    <testExecution id="40" name="e1" testId="12" testUid="t1uid"/>
    <testExecution id="41" name="e2" testId="12" testUid="t1uid"/>
</testExecutions>"#,
        )
        .create_async()
        .await;

    let criteria = TestExecutionSearch {
        tags: Some("tag2".to_string()),
        parameters: vec![CriteriaParameter::new("param1", "value1")],
        test_uid: Some("t1uid".to_string()),
        ..Default::default()
    };
    let found = client.search_test_executions(&criteria).await.unwrap();
    let ids: Vec<i64> = found.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![40, 41]);
}

#[tokio::test]
async fn test_search_with_empty_body() {
    let (mut server, client) = setup().await;
    server
        .mock("POST", path("/testExecution/search").as_str())
        .with_status(200)
        .create_async()
        .await;

    let found = client
        .search_test_executions(&TestExecutionSearch::default())
        .await
        .unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn test_attachment_upload_headers() {
    let (mut server, client) = setup().await;
    let upload = server
        .mock("POST", path("/testExecution/40/addAttachment").as_str())
        .match_header("authorization", AUTH)
        .match_header("content-type", "text/plain")
        .match_header("filename", "attachment1.txt")
        .match_body("This is a test attachment")
        .with_status(201)
        .with_body("7")
        .create_async()
        .await;

    let attachment = Attachment::new(
        "This is a test attachment".as_bytes(),
        "text/plain",
        "attachment1.txt",
    );
    assert_eq!(client.create_attachment(40, &attachment).await.unwrap(), 7);
    upload.assert_async().await;
}

#[tokio::test]
async fn test_attachment_download() {
    let (mut server, client) = setup().await;
    server
        .mock("GET", path("/testExecution/attachment/7").as_str())
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_header("content-disposition", "attachment; filename=attachment1.txt")
        .with_body("This is a test attachment")
        .create_async()
        .await;

    let attachment = client.get_attachment(7).await.unwrap();
    assert_eq!(attachment.content, b"This is a test attachment");
    assert_eq!(attachment.content_type, "text/plain");
    assert_eq!(attachment.target_file_name, "attachment1.txt");
}

#[tokio::test]
async fn test_report_lifecycle() {
    let (mut server, client) = setup().await;
    server
        .mock("POST", path("/report/create").as_str())
        .match_body(Matcher::Regex(r#"<value name="property1" value="value"/>"#.to_string()))
        .with_status(201)
        .with_body("4")
        .create_async()
        .await;
    server
        .mock("POST", path("/report/update/4").as_str())
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("<key>property1</key>".to_string()),
            Matcher::Regex("<key>property2</key>".to_string()),
        ]))
        .with_status(201)
        .with_body("4")
        .create_async()
        .await;
    server
        .mock("GET", path("/report/id/4").as_str())
        .with_status(200)
        .with_body(
            r#"<report id="4" name="r1" type="TestReport" user="perfrepouser">
    <properties>
        <entry><key>property1</key><value name="property1" value="value"/></entry>
        <entry><key>property2</key><value name="property2" value="value"/></entry>
    </properties>
</report>"#,
        )
        .create_async()
        .await;
    server
        .mock("DELETE", path("/report/id/4").as_str())
        .with_status(204)
        .create_async()
        .await;

    let mut report =
        Report::new("r1", "TestReport", "perfrepouser").with_property("property1", "value");
    report.id = client.create_report(&report).await.unwrap();

    report.properties.insert("property2".to_string(), "value".to_string());
    assert_eq!(client.update_report(&report).await.unwrap(), 4);

    let stored = client.get_report(4).await.unwrap();
    assert_eq!(stored.properties, report.properties);

    client.delete_report(4).await.unwrap();
}

#[tokio::test]
async fn test_report_permissions_expect_ok() {
    let (mut server, client) = setup().await;
    let add = server
        .mock("POST", path("/report/id/4/addPermission").as_str())
        .match_header("content-type", "text/xml")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("<report-permission>".to_string()),
            Matcher::Regex("<access-type>READ</access-type>".to_string()),
            Matcher::Regex("<access-level>PUBLIC</access-level>".to_string()),
        ]))
        .with_status(200)
        .create_async()
        .await;
    let remove = server
        .mock("POST", path("/report/id/4/deletePermission").as_str())
        .match_body(Matcher::Regex("<report-id>4</report-id>".to_string()))
        .with_status(200)
        .create_async()
        .await;

    let permission = Permission::new(4, AccessType::Read, AccessLevel::Public);
    client.add_report_permission(&permission).await.unwrap();
    client.delete_report_permission(&permission).await.unwrap();
    add.assert_async().await;
    remove.assert_async().await;
}

#[tokio::test]
async fn test_report_permission_rejects_created() {
    let (mut server, client) = setup().await;
    server
        .mock("POST", path("/report/id/4/addPermission").as_str())
        .with_status(201)
        .create_async()
        .await;

    let permission = Permission::new(4, AccessType::Write, AccessLevel::User);
    let err = client.add_report_permission(&permission).await.unwrap_err();
    assert!(format!("{:#}", err).contains("201"));
}

#[tokio::test]
async fn test_server_version() {
    let (mut server, client) = setup().await;
    server
        .mock("GET", path("/info/version").as_str())
        .match_header("authorization", AUTH)
        .with_status(200)
        .with_body("1.5")
        .create_async()
        .await;

    assert_eq!(client.server_version().await.unwrap(), "1.5");
}
