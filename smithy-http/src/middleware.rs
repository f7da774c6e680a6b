/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! This modules defines the core, framework agnostic, HTTP middleware interface
//! used by the SDK

use crate::operation;
use crate::response::ParseHttpResponse;
use crate::result::{SdkError, SdkSuccess};
use bytes::{Buf, Bytes};
use http_body::Body;
use std::error::Error;

type BoxError = Box<dyn Error + Send + Sync>;

/// [`MapRequest`] defines a synchronous middleware that transforms an [`operation::Request`].
///
/// Typically, these middleware will read configuration from the `PropertyBag` and use it to
/// augment the request. Endpoint resolution and the user agent are both expressed as `MapRequest`.
///
/// ```rust
/// # use smithy_http::middleware::MapRequest;
/// # use std::convert::Infallible;
/// # use smithy_http::operation;
/// use http::header::{HeaderName, HeaderValue};
/// struct AddHeader(HeaderName, HeaderValue);
/// /// Signaling struct added to the request property bag if a header should be added
/// struct NeedsHeader;
/// impl MapRequest for AddHeader {
///     type Error = Infallible;
///     fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error> {
///         request.augment(|mut request, properties| {
///             if properties.get::<NeedsHeader>().is_some() {
///                 request.headers_mut().append(
///                     self.0.clone(),
///                     self.1.clone(),
///                 );
///             }
///             Ok(request)
///         })
///     }
/// }
/// ```
pub trait MapRequest {
    /// The Error type returned by this operation.
    ///
    /// If this middleware never fails use [std::convert::Infallible] or similar.
    type Error: Into<BoxError>;

    /// Apply this middleware to a request.
    ///
    /// Typically, implementations will use [`request.augment`](crate::operation::Request::augment)
    /// to be able to transform an owned `http::Request`.
    fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error>;
}

/// Load a response using `handler` to parse the results.
///
/// This function is intended to be used on the response side of a middleware chain.
///
/// Success and failure will be split and mapped into `SdkSuccess` and `SdkError`.
/// Generic Parameters:
/// - `B`: The Response Body
/// - `O`: The Http response handler that returns `Result<T, E>`
/// - `T`/`E`: `Result<T, E>` returned by `handler`.
pub async fn load_response<B, T, E, O>(
    mut response: http::Response<B>,
    handler: &O,
) -> Result<SdkSuccess<T, B>, SdkError<E, B>>
where
    B: http_body::Body + Unpin + From<Bytes>,
    B::Error: Into<BoxError>,
    O: ParseHttpResponse<B, Output = Result<T, E>>,
{
    if let Some(parsed_response) = handler.parse_unloaded(&mut response) {
        return sdk_result(parsed_response, response);
    }

    let body = match read_body(response.body_mut()).await {
        Ok(body) => body,
        Err(e) => {
            return Err(SdkError::ResponseError {
                raw: response,
                err: e.into(),
            });
        }
    };

    let response = response.map(|_| Bytes::from(body));
    let parsed = handler.parse_loaded(&response);
    sdk_result(parsed, response.map(B::from))
}

async fn read_body<B: http_body::Body + Unpin>(body: &mut B) -> Result<Vec<u8>, B::Error> {
    let mut output = Vec::new();
    while let Some(buf) = body.data().await {
        let mut buf = buf?;
        while buf.has_remaining() {
            output.extend_from_slice(buf.chunk());
            buf.advance(buf.chunk().len())
        }
    }
    Ok(output)
}

/// Convert a `Result<T, E>` into an `SdkResult` that includes the raw HTTP response
fn sdk_result<T, E, B>(
    parsed: Result<T, E>,
    raw: http::Response<B>,
) -> Result<SdkSuccess<T, B>, SdkError<E, B>> {
    match parsed {
        Ok(parsed) => Ok(SdkSuccess { raw, parsed }),
        Err(err) => Err(SdkError::ServiceError { raw, err }),
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::middleware::{load_response, MapRequest};
    use crate::operation;
    use crate::response::ParseStrictResponse;
    use crate::result::SdkError;
    use bytes::Bytes;
    use http::HeaderValue;
    use std::convert::Infallible;

    struct Stamp(&'static str);

    impl MapRequest for Stamp {
        type Error = Infallible;

        fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error> {
            request.augment(|mut req, _| {
                req.headers_mut()
                    .append("x-stage", HeaderValue::from_static(self.0));
                Ok(req)
            })
        }
    }

    #[test]
    fn stages_compose() {
        let request = operation::Request::new(http::Request::new(SdkBody::empty()));
        let request = Stamp("a")
            .apply(request)
            .and_then(|req| Stamp("b").apply(req))
            .expect("infallible");
        let stamps: Vec<_> = request
            .http()
            .headers()
            .get_all("x-stage")
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect();
        assert_eq!(stamps, vec!["a", "b"]);
    }

    struct Utf8Body;

    impl ParseStrictResponse for Utf8Body {
        type Output = Result<String, u16>;

        fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
            if response.status().is_success() {
                Ok(String::from_utf8_lossy(response.body()).to_string())
            } else {
                Err(response.status().as_u16())
            }
        }
    }

    #[tokio::test]
    async fn load_response_reads_the_whole_body() {
        let response = http::Response::new(SdkBody::from("{\"AliasId\":\"alias-1\"}"));
        let success = load_response(response, &Utf8Body)
            .await
            .expect("success response");
        assert_eq!(success.parsed, "{\"AliasId\":\"alias-1\"}");
        assert_eq!(
            success.raw.body().bytes(),
            Some("{\"AliasId\":\"alias-1\"}".as_bytes())
        );
    }

    #[tokio::test]
    async fn load_response_splits_service_errors() {
        let response = http::Response::builder()
            .status(400)
            .body(SdkBody::from("{}"))
            .unwrap();
        match load_response(response, &Utf8Body).await {
            Err(SdkError::ServiceError { err, raw }) => {
                assert_eq!(err, 400);
                assert_eq!(raw.status(), 400);
            }
            other => panic!("expected a service error, got {:?}", other.map(|s| s.parsed)),
        }
    }
}
