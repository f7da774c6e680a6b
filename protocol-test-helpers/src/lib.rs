/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use assert_json_diff::assert_json_eq_no_panic;
use http::Request;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProtocolTestFailure {
    #[error("missing body param: expected `{expected}`, found {found:?}")]
    MissingBodyParam {
        expected: String,
        found: Vec<String>,
    },
    #[error("forbidden body param present: `{expected}`")]
    ForbiddenBodyParam { expected: String },
    #[error("required body param missing: `{expected}`")]
    RequiredBodyParam { expected: String },
    #[error("body params differ: expected {expected:?}, found {found:?}")]
    BodyParamsMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("invalid header value for key `{key}`: expected `{expected}`, found `{found}`")]
    InvalidHeader {
        key: String,
        expected: String,
        found: String,
    },
    #[error("missing required header: `{expected}`")]
    MissingHeader { expected: String },

    #[error("body did not match. Hint:\n{hint}")]
    BodyDidNotMatch {
        expected: String,
        found: String,
        hint: String,
    },
    #[error("expected body to be valid {expected} but instead: {found}")]
    InvalidBodyFormat { expected: String, found: String },
}

/// Check that the protocol test succeeded & print the pretty error
/// if it did not
///
/// The primary motivation is making multiline debug output
/// readable & using the cleaner Display implementation
#[track_caller]
pub fn assert_ok(inp: Result<(), ProtocolTestFailure>) {
    match inp {
        Ok(_) => (),
        Err(e) => {
            eprintln!("{}", e);
            panic!("Protocol test failed");
        }
    }
}

#[derive(Eq, PartialEq, Hash)]
struct FormParam<'a> {
    key: &'a str,
    value: Option<&'a str>,
}

impl<'a> FormParam<'a> {
    fn parse(s: &'a str) -> Self {
        let mut parsed = s.splitn(2, '=');
        FormParam {
            key: parsed.next().unwrap_or_default(),
            value: parsed.next(),
        }
    }
}

fn body_str<B: AsRef<[u8]>>(body: &B) -> &str {
    std::str::from_utf8(body.as_ref()).unwrap_or_default()
}

/// Split a form-encoded body into its `key=value` pairs, in order
pub fn form_params(body: &str) -> Vec<&str> {
    body.split('&').filter(|param| !param.is_empty()).collect()
}

/// Decode the pairs of a form-encoded body into `(key, value)` tuples, in order
pub fn decoded_form_params(body: &str) -> Vec<(String, String)> {
    form_params(body)
        .into_iter()
        .map(|param| {
            let param = FormParam::parse(param);
            let decode = |s: &str| {
                urlencoding::decode(s)
                    .map(|s| s.to_string())
                    .unwrap_or_else(|_| s.to_string())
            };
            (decode(param.key), decode(param.value.unwrap_or_default()))
        })
        .collect()
}

/// Validate that every `expected_params` pair appears in the form-encoded body
pub fn validate_body_params<B: AsRef<[u8]>>(
    request: &Request<B>,
    expected_params: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_params: HashSet<&str> = form_params(body_str(request.body())).into_iter().collect();
    for param in expected_params {
        if !actual_params.contains(param) {
            return Err(ProtocolTestFailure::MissingBodyParam {
                expected: param.to_string(),
                found: actual_params.iter().map(|s| s.to_string()).collect(),
            });
        }
    }
    Ok(())
}

/// Validate that the form-encoded body holds exactly `expected_params`, in this order
pub fn validate_exact_body_params<B: AsRef<[u8]>>(
    request: &Request<B>,
    expected_params: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual = form_params(body_str(request.body()));
    if actual != expected_params {
        return Err(ProtocolTestFailure::BodyParamsMismatch {
            expected: expected_params.iter().map(|s| s.to_string()).collect(),
            found: actual.iter().map(|s| s.to_string()).collect(),
        });
    }
    Ok(())
}

fn body_keys(body: &str) -> HashSet<&str> {
    form_params(body)
        .into_iter()
        .map(|param| FormParam::parse(param).key)
        .collect()
}

pub fn forbid_body_params<B: AsRef<[u8]>>(
    request: &Request<B>,
    forbid_keys: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_keys = body_keys(body_str(request.body()));
    for key in forbid_keys {
        if actual_keys.contains(*key) {
            return Err(ProtocolTestFailure::ForbiddenBodyParam {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

pub fn require_body_params<B: AsRef<[u8]>>(
    request: &Request<B>,
    require_keys: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_keys = body_keys(body_str(request.body()));
    for key in require_keys {
        if !actual_keys.contains(*key) {
            return Err(ProtocolTestFailure::RequiredBodyParam {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_headers<B>(
    request: &Request<B>,
    expected_headers: &[(&str, &str)],
) -> Result<(), ProtocolTestFailure> {
    for (key, expected_value) in expected_headers {
        // Protocol tests store header lists as comma-delimited
        if !request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::MissingHeader {
                expected: key.to_string(),
            });
        }
        let actual_value: String = request
            .headers()
            .get_all(*key)
            .iter()
            .map(|hv| hv.to_str().unwrap_or("<non-utf8 header>"))
            .collect::<Vec<_>>()
            .join(", ");
        if *expected_value != actual_value {
            return Err(ProtocolTestFailure::InvalidHeader {
                key: key.to_string(),
                expected: expected_value.to_string(),
                found: actual_value,
            });
        }
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MediaType {
    /// Json media types are deserialized and compared
    Json,
    /// Form-encoded bodies are compared pair by pair after percent-decoding
    UrlEncodedForm,
    /// Other media types are compared literally
    Other,
}

impl<T: AsRef<str>> From<T> for MediaType {
    fn from(inp: T) -> Self {
        match inp.as_ref() {
            "application/json" | "application/x-amz-json-1.1" | "application/x-amz-json-1.0" => {
                MediaType::Json
            }
            "application/x-www-form-urlencoded" => MediaType::UrlEncodedForm,
            _ => MediaType::Other,
        }
    }
}

pub fn validate_body<T: AsRef<[u8]>>(
    actual_body: T,
    expected_body: &str,
    media_type: MediaType,
) -> Result<(), ProtocolTestFailure> {
    let body_str = std::str::from_utf8(actual_body.as_ref());
    match (media_type, body_str) {
        (MediaType::Json, Ok(actual_body)) => try_json_eq(actual_body, expected_body),
        (MediaType::Json, Err(_)) => Err(ProtocolTestFailure::InvalidBodyFormat {
            expected: "json".to_owned(),
            found: "input was not valid UTF-8".to_owned(),
        }),
        (MediaType::UrlEncodedForm, Ok(actual_body)) => {
            let (actual, expected) = (
                decoded_form_params(actual_body),
                decoded_form_params(expected_body),
            );
            if actual == expected {
                Ok(())
            } else {
                Err(ProtocolTestFailure::BodyDidNotMatch {
                    expected: expected_body.to_string(),
                    found: actual_body.to_string(),
                    hint: format!("expected {:?}\nfound    {:?}", expected, actual),
                })
            }
        }
        (_, Ok(actual_body)) => {
            if actual_body == expected_body {
                Ok(())
            } else {
                Err(ProtocolTestFailure::BodyDidNotMatch {
                    expected: expected_body.to_string(),
                    found: actual_body.to_string(),
                    hint: "".to_string(),
                })
            }
        }
        (_, Err(_)) => Err(ProtocolTestFailure::InvalidBodyFormat {
            expected: "utf-8".to_owned(),
            found: "input was not valid UTF-8".to_owned(),
        }),
    }
}

fn try_json_eq(actual: &str, expected: &str) -> Result<(), ProtocolTestFailure> {
    let actual_json: serde_json::Value =
        serde_json::from_str(actual).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
            expected: "json".to_owned(),
            found: e.to_string() + actual,
        })?;
    let expected_json: serde_json::Value =
        serde_json::from_str(expected).expect("expected value must be valid JSON");
    match assert_json_eq_no_panic(&actual_json, &expected_json) {
        Ok(()) => Ok(()),
        Err(message) => Err(ProtocolTestFailure::BodyDidNotMatch {
            expected: expected.to_string(),
            found: actual.to_string(),
            hint: message,
        }),
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        decoded_form_params, forbid_body_params, require_body_params, validate_body,
        validate_body_params, validate_exact_body_params, validate_headers, MediaType,
        ProtocolTestFailure,
    };
    use http::Request;

    fn form_request(body: &'static str) -> Request<&'static str> {
        Request::builder().uri("/").body(body).unwrap()
    }

    #[test]
    fn test_validate_empty_body_params() {
        let request = form_request("");
        validate_body_params(&request, &[]).expect("no required params should pass");
        validate_body_params(&request, &["a"])
            .err()
            .expect("no params provided");
    }

    #[test]
    fn test_validate_body_params() {
        let request = form_request("a=b&c&d=efg&hello=a%20b");
        validate_body_params(&request, &["a=b"]).expect("a=b is in the body");
        validate_body_params(&request, &["c", "a=b"]).expect("both params are in the body");
        validate_body_params(&request, &["a=b", "c", "d=efg", "hello=a%20b"])
            .expect("all params are in the body");

        validate_body_params(&request, &["a"]).expect_err("no parameter should match");
        validate_body_params(&request, &["a=bc"]).expect_err("no parameter should match");
        validate_body_params(&request, &["hell=a%20"]).expect_err("no parameter should match");
    }

    #[test]
    fn test_validate_exact_body_params() {
        let request = form_request("Action=A&Version=1&B=2");
        validate_exact_body_params(&request, &["Action=A", "Version=1", "B=2"])
            .expect("identical");
        validate_exact_body_params(&request, &["Action=A", "B=2", "Version=1"])
            .expect_err("order matters");
        validate_exact_body_params(&request, &["Action=A", "Version=1"])
            .expect_err("extra params fail");
    }

    #[test]
    fn test_forbid_body_param() {
        let request = form_request("a=b&c&d=efg&hello=a%20b");
        forbid_body_params(&request, &["a"]).expect_err("a is a body param");
        forbid_body_params(&request, &["not_included"]).expect("param not included");
        forbid_body_params(&request, &["a=b"]).expect("should be matching against keys");
        forbid_body_params(&request, &["c"]).expect_err("c is a body param");
    }

    #[test]
    fn test_require_body_param() {
        let request = form_request("a=b&c&d=efg&hello=a%20b");
        require_body_params(&request, &["a"]).expect("a is a body param");
        require_body_params(&request, &["not_included"]).expect_err("param not included");
        require_body_params(&request, &["a=b"]).expect_err("should be matching against keys");
        require_body_params(&request, &["c"]).expect("c is a body param");
    }

    #[test]
    fn test_decoded_form_params() {
        assert_eq!(
            decoded_form_params("Marker=a%20b&Filters.Filter.1.Name=x%3Dy"),
            vec![
                ("Marker".to_string(), "a b".to_string()),
                ("Filters.Filter.1.Name".to_string(), "x=y".to_string())
            ]
        );
    }

    #[test]
    fn test_validate_headers() {
        let request = Request::builder()
            .uri("/")
            .header("X-Foo", "foo")
            .header("X-Foo-List", "foo")
            .header("X-Foo-List", "bar")
            .header("X-Inline", "inline, other")
            .body(())
            .unwrap();

        validate_headers(&request, &[("X-Foo", "foo")]).expect("header present");
        validate_headers(&request, &[("X-Foo", "Foo")]).expect_err("case sensitive");
        validate_headers(&request, &[("x-foo-list", "foo, bar")]).expect("list concat");
        validate_headers(&request, &[("X-Foo-List", "foo")])
            .expect_err("all list members must be specified");
        validate_headers(&request, &[("X-Inline", "inline, other")])
            .expect("inline header lists also work");
        assert_eq!(
            validate_headers(&request, &[("missing", "value")]),
            Err(ProtocolTestFailure::MissingHeader {
                expected: "missing".to_owned()
            })
        );
    }

    #[test]
    fn test_validate_json_body() {
        let expected = r#"{"abc": 5 }"#;
        let actual = r#"   {"abc":   5 }"#;
        validate_body(&actual, expected, MediaType::Json).expect("inputs matched as JSON");

        let expected = r#"{"abc": 5 }"#;
        let actual = r#"   {"abc":   6 }"#;
        validate_body(&actual, expected, MediaType::Json).expect_err("bodies do not match");
    }

    #[test]
    fn test_validate_form_body() {
        validate_body(
            "Action=A&Marker=a%20b",
            "Action=A&Marker=a+b".replace('+', "%20").as_str(),
            MediaType::from("application/x-www-form-urlencoded"),
        )
        .expect("decoded pairs match");
        validate_body("Action=A&B=1", "Action=A&B=2", MediaType::UrlEncodedForm)
            .expect_err("values differ");
    }

    #[test]
    fn test_validate_non_json_body() {
        let expected = r#"asdf"#;
        let actual = r#"asdf "#;
        validate_body(&actual, expected, MediaType::from("something/else"))
            .expect_err("bodies do not match");

        validate_body(&expected, expected, MediaType::from("something/else"))
            .expect("inputs matched exactly")
    }
}
