/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_endpoint::{set_endpoint_resolver, DefaultAwsEndpointResolver};
use aws_http::user_agent::AwsUserAgent;
use aws_http::AwsErrorRetryPolicy;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::{Client, SdkError};
use aws_types::region::Region;
use bytes::Bytes;
use http::header::{CONTENT_TYPE, USER_AGENT};
use http::{Response, Uri};
use smithy_http::body::SdkBody;
use smithy_http::operation;
use smithy_http::operation::{Metadata, Operation};
use smithy_http::response::ParseStrictResponse;
use smithy_types::retry::{ErrorKind, ProvideErrorKind};
use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;

#[derive(Debug)]
struct TestError {
    code: String,
}

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl std::error::Error for TestError {}

impl ProvideErrorKind for TestError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        Some(&self.code)
    }
}

#[derive(Clone)]
struct TestOperationParser;

impl ParseStrictResponse for TestOperationParser {
    type Output = Result<String, TestError>;

    fn parse(&self, response: &Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            Ok(String::from_utf8_lossy(response.body()).to_string())
        } else {
            Err(TestError {
                code: String::from_utf8_lossy(response.body()).to_string(),
            })
        }
    }
}

fn test_operation(region: Option<Region>) -> Operation<TestOperationParser, AwsErrorRetryPolicy> {
    let req = operation::Request::new(
        http::Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, "application/x-amz-json-1.1")
            .body(SdkBody::from(r#"{"AliasId":"alias-1"}"#))
            .unwrap(),
    )
    .augment(|req, conf| {
        set_endpoint_resolver(
            conf,
            Arc::new(DefaultAwsEndpointResolver::for_service("test-service")),
        );
        if let Some(region) = region {
            conf.insert(region);
        }
        conf.insert(AwsUserAgent::for_tests());
        Result::<_, Infallible>::Ok(req)
    })
    .unwrap();
    Operation::new(req, TestOperationParser)
        .with_metadata(Metadata::new("TestOperation", "test-service"))
        .with_retry_policy(AwsErrorRetryPolicy::new())
}

#[tokio::test]
async fn e2e_test() {
    let _ = tracing_subscriber::fmt::try_init();
    let expected_req = http::Request::builder()
        .method("POST")
        .header(USER_AGENT, "aws-sdk-rust/0.123.test os/windows lang/rust")
        .header(
            "x-amz-user-agent",
            "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows lang/rust",
        )
        .header(CONTENT_TYPE, "application/x-amz-json-1.1")
        .uri(Uri::from_static(
            "https://test-service.test-region.amazonaws.com/",
        ))
        .body(SdkBody::from(r#"{ "AliasId": "alias-1" }"#))
        .unwrap();
    let events = vec![(
        expected_req,
        http::Response::builder()
            .status(200)
            .body("response body")
            .unwrap(),
    )];
    let conn = TestConnection::new(events);
    let client = Client::new(conn.clone());
    let resp = client
        .call(test_operation(Some(Region::new("test-region"))))
        .await
        .expect("successful operation");
    assert_eq!(resp, "response body");

    assert_eq!(conn.requests().len(), 1);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn service_errors_keep_the_raw_response() {
    let conn = TestConnection::new(vec![(
        http::Request::new(SdkBody::empty()),
        http::Response::builder()
            .status(400)
            .body("ThrottlingException")
            .unwrap(),
    )]);
    let client = Client::new(conn.clone());
    let err = client
        .call_raw(test_operation(Some(Region::new("test-region"))))
        .await
        .expect_err("service returned a 400");
    match err {
        SdkError::ServiceError { raw, err } => {
            assert_eq!(raw.status(), 400);
            assert_eq!(err.code, "ThrottlingException");
        }
        other => panic!("expected a service error, got {:?}", other),
    }
}

#[tokio::test]
async fn missing_region_is_a_construction_failure() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let client = Client::new(conn.clone());
    let err = client
        .call(test_operation(None))
        .await
        .expect_err("no region was configured");
    assert!(matches!(err, SdkError::ConstructionFailure(_)));
    assert!(conn.requests().is_empty());
}

#[tokio::test]
async fn exhausted_connection_is_a_dispatch_failure() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let client = Client::new(conn);
    let err = client
        .call(test_operation(Some(Region::new("test-region"))))
        .await
        .expect_err("no responses were loaded");
    assert!(matches!(err, SdkError::DispatchFailure(_)));
}
