/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::header::{HeaderName, CONTENT_TYPE};
use http::Request;
use protocol_test_helpers::{assert_ok, validate_body, MediaType};
use smithy_http::body::SdkBody;
use std::future::Ready;
use std::ops::Deref;
use std::sync::{Arc, Mutex, MutexGuard};
use std::task::{Context, Poll};
use tower::BoxError;

type ConnectVec<B> = Vec<(http::Request<SdkBody>, http::Response<B>)>;

/// A request received by a [`TestConnection`] paired with the request it was expected to be
#[derive(Debug)]
pub struct ValidateRequest {
    pub expected: http::Request<SdkBody>,
    pub actual: http::Request<SdkBody>,
}

impl ValidateRequest {
    /// Panics unless the actual request matches the expectation
    ///
    /// Every header on the expected request must be present unless named in `ignore_headers`.
    /// Bodies are compared according to the expected `Content-Type`: JSON bodies structurally and
    /// form bodies parameter by parameter.
    pub fn assert_matches(&self, ignore_headers: &[HeaderName]) {
        let (actual, expected) = (&self.actual, &self.expected);
        for (name, value) in expected.headers() {
            if !ignore_headers.contains(name) {
                let actual_header = actual
                    .headers()
                    .get(name)
                    .unwrap_or_else(|| panic!("Header {:?} missing", name));
                assert_eq!(actual_header, value, "Header mismatch for {:?}", name);
            }
        }
        let media_type = expected
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .map(MediaType::from)
            .unwrap_or(MediaType::Other);
        let expected_body = expected.body().bytes().unwrap_or(&[]);
        match std::str::from_utf8(expected_body) {
            Ok(expected_body) => assert_ok(validate_body(
                actual.body().bytes().unwrap_or(&[]),
                expected_body,
                media_type,
            )),
            Err(_) => assert_eq!(actual.body().bytes(), expected.body().bytes()),
        }
        assert_eq!(actual.uri(), expected.uri());
        assert_eq!(actual.method(), expected.method());
    }
}

/// TestConnection for use with a [`aws_hyper::Client`](crate::Client)
///
/// A basic test connection. It will:
/// - Respond to requests with a preloaded series of responses
/// - Record requests for future examination
///
/// Usage example:
/// ```rust
/// use aws_hyper::test_connection::TestConnection;
/// use smithy_http::body::SdkBody;
/// let events = vec![(
///    http::Request::new(SdkBody::from("request body")),
///    http::Response::builder()
///        .status(200)
///        .body("response body")
///        .unwrap(),
/// )];
/// let conn = TestConnection::new(events);
/// let client = aws_hyper::Client::new(conn);
/// ```
#[derive(Clone, Debug)]
pub struct TestConnection<B> {
    data: Arc<Mutex<ConnectVec<B>>>,
    requests: Arc<Mutex<Vec<ValidateRequest>>>,
}

impl<B> TestConnection<B> {
    pub fn new(mut data: ConnectVec<B>) -> Self {
        data.reverse();
        TestConnection {
            data: Arc::new(Mutex::new(data)),
            requests: Default::default(),
        }
    }

    pub fn requests(&self) -> impl Deref<Target = Vec<ValidateRequest>> + '_ {
        lock(&self.requests)
    }

    /// Panics unless every expected request was received and matched
    pub fn assert_requests_match(&self, ignore_headers: &[HeaderName]) {
        for req in self.requests().iter() {
            req.assert_matches(ignore_headers)
        }
        let remaining = lock(&self.data).len();
        assert_eq!(remaining, 0, "{} expected requests were never sent", remaining);
    }
}

// A poisoned lock means another test thread already panicked; the data is still usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<B: Into<hyper::Body>> tower::Service<http::Request<SdkBody>> for TestConnection<B> {
    type Response = http::Response<hyper::Body>;
    type Error = BoxError;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, actual: Request<SdkBody>) -> Self::Future {
        if let Some((expected, resp)) = lock(&self.data).pop() {
            lock(&self.requests).push(ValidateRequest { expected, actual });
            std::future::ready(Ok(resp.map(|body| body.into())))
        } else {
            std::future::ready(Err("No more data".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_connection::TestConnection;
    use http::header::CONTENT_TYPE;
    use smithy_http::body::SdkBody;
    use tower::{BoxError, Service};

    /// Validate that the `TestConnection` meets the required trait bounds to be used with a aws-hyper service
    #[test]
    fn meets_trait_bounds() {
        fn check() -> impl tower::Service<
            http::Request<SdkBody>,
            Response = http::Response<hyper::Body>,
            Error = BoxError,
            Future = impl Send,
        > + Clone {
            TestConnection::<String>::new(vec![])
        }
        let _ = check();
    }

    #[tokio::test]
    async fn json_bodies_compare_structurally() {
        let expected = http::Request::builder()
            .header(CONTENT_TYPE, "application/x-amz-json-1.1")
            .uri("https://gamelift.us-east-1.amazonaws.com/")
            .body(SdkBody::from(r#"{"AliasId": "alias-1", "Limit": 2}"#))
            .unwrap();
        let mut conn = TestConnection::new(vec![(
            expected,
            http::Response::builder().status(200).body("{}").unwrap(),
        )]);
        let actual = http::Request::builder()
            .header(CONTENT_TYPE, "application/x-amz-json-1.1")
            .uri("https://gamelift.us-east-1.amazonaws.com/")
            .body(SdkBody::from(r#"{"Limit":2,"AliasId":"alias-1"}"#))
            .unwrap();
        let resp = conn.call(actual).await.expect("one response was loaded");
        assert_eq!(resp.status(), 200);
        conn.assert_requests_match(&[]);
        assert!(conn.call(http::Request::new(SdkBody::empty())).await.is_err());
    }
}
