/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::header::ToStrError;
use http::{HeaderMap, HeaderValue};
use serde_json::{Map, Value};

/// The first of `names` present in `body` as a string. Members of any other JSON type are skipped.
fn string_member<'a>(body: &'a Map<String, Value>, names: &[&str]) -> Option<&'a str> {
    names
        .iter()
        .find_map(|name| body.get(*name).and_then(Value::as_str))
}

fn sanitize_error_code(error_code: &str) -> &str {
    // Trim a trailing URL from the error code, beginning with a `:`
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };

    // Trim a prefixing namespace from the error code, beginning with a `#`
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

fn header_value(value: Option<&HeaderValue>) -> Result<Option<&str>, ToStrError> {
    value.map(|v| v.to_str()).transpose()
}

fn error_type_from_header(headers: &HeaderMap<HeaderValue>) -> Option<&str> {
    header_value(headers.get("X-Amzn-Errortype")).ok().flatten()
}

fn request_id(headers: &HeaderMap<HeaderValue>) -> Option<&str> {
    header_value(headers.get("X-Amzn-Requestid")).ok().flatten()
}

/// Extract the generic error (code, message and request id) from an AWS JSON error response
///
/// The code comes from the `x-amzn-errortype` header when present, otherwise from the `__type`
/// or `code` body member. A body that is not a JSON object still yields the header fields.
pub fn parse_generic_error(response: &http::Response<Bytes>) -> smithy_types::Error {
    let body = match serde_json::from_slice::<Value>(response.body()) {
        Ok(Value::Object(body)) => body,
        _ => Map::new(),
    };
    let mut err_builder = smithy_types::Error::builder();
    let code = error_type_from_header(response.headers())
        .or_else(|| string_member(&body, &["__type", "code"]));
    if let Some(code) = code {
        err_builder = err_builder.code(sanitize_error_code(code));
    }
    if let Some(message) = string_member(&body, &["message", "Message", "errorMessage"]) {
        err_builder = err_builder.message(message);
    }
    if let Some(request_id) = request_id(response.headers()) {
        err_builder = err_builder.request_id(request_id);
    }
    err_builder.build()
}

#[cfg(test)]
mod test {
    use crate::json_errors::{parse_generic_error, sanitize_error_code};
    use bytes::Bytes;

    #[test]
    fn generic_error() {
        let response = http::Response::builder()
            .header("X-Amzn-Requestid", "1234")
            .body(Bytes::from_static(
                br#"{ "__type": "FooError", "message": "Go to foo" }"#,
            ))
            .unwrap();
        assert_eq!(
            parse_generic_error(&response),
            smithy_types::Error::builder()
                .code("FooError")
                .message("Go to foo")
                .request_id("1234")
                .build()
        )
    }

    #[test]
    fn error_type() {
        let error_response = http::Response::new(Bytes::from_static(
            br#"{ "__type": "FooError" }"#,
        ));
        assert_eq!(parse_generic_error(&error_response).code(), Some("FooError"));

        let code_response = http::Response::new(Bytes::from_static(br#"{ "code": "BarError" }"#));
        assert_eq!(parse_generic_error(&code_response).code(), Some("BarError"));
    }

    #[test]
    fn header_takes_precedence_over_body() {
        let response = http::Response::builder()
            .header("x-amzn-errortype", "HeaderError:http://internal.amazon.com/")
            .body(Bytes::from_static(
                br#"{ "__type": "BodyError", "Message": "capitalized" }"#,
            ))
            .unwrap();
        let err = parse_generic_error(&response);
        assert_eq!(err.code(), Some("HeaderError"));
        assert_eq!(err.message(), Some("capitalized"));
    }

    #[test]
    fn unparsable_bodies_yield_an_empty_error() {
        let response = http::Response::new(Bytes::from_static(b"<html>502</html>"));
        assert_eq!(parse_generic_error(&response), smithy_types::Error::builder().build());
    }

    #[test]
    fn mistyped_members_are_skipped() {
        let response = http::Response::new(Bytes::from_static(
            br#"{ "__type": "com.amazonaws.gamelift#NotFoundException", "message": {}, "Message": "No fleet fleet-1" }"#,
        ));
        let err = parse_generic_error(&response);
        assert_eq!(err.code(), Some("NotFoundException"));
        assert_eq!(err.message(), Some("No fleet fleet-1"));

        let response = http::Response::new(Bytes::from_static(
            br#"{ "__type": 42, "code": "ConflictException", "message": null }"#,
        ));
        let err = parse_generic_error(&response);
        assert_eq!(err.code(), Some("ConflictException"));
        assert_eq!(err.message(), None);
    }

    #[test]
    fn non_object_bodies_yield_header_fields() {
        let response = http::Response::builder()
            .header("x-amzn-errortype", "InternalServiceException")
            .header("x-amzn-requestid", "req-1")
            .body(Bytes::from_static(br#"["not", "an", "object"]"#))
            .unwrap();
        let err = parse_generic_error(&response);
        assert_eq!(err.code(), Some("InternalServiceException"));
        assert_eq!(err.request_id(), Some("req-1"));
        assert_eq!(err.message(), None);
    }

    #[test]
    fn sanitize_namespace_and_url() {
        assert_eq!(
            sanitize_error_code("aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"),
            "FooError"
        );
        assert_eq!(sanitize_error_code("FooError:http://internal.amazon.com/"), "FooError");
        assert_eq!(
            sanitize_error_code("com.amazonaws.gamelift#NotFoundException"),
            "NotFoundException"
        );
        assert_eq!(sanitize_error_code("FooError"), "FooError");
    }
}
