/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Conversion of a modeled request into an HTTP request.

use crate::operation::{self, BuildError};

/// A marshaller turns one request type into an [`operation::Request`].
///
/// Marshallers are stateless. The produced request carries the method, path, headers, and body
/// but no endpoint: the endpoint is filled in later by the endpoint middleware.
pub trait Marshall<I> {
    /// Marshall `input`. Fails when a field cannot be represented on the wire.
    fn marshall(&self, input: &I) -> Result<operation::Request, BuildError>;

    /// Marshall an optional input. An absent input fails with [`BuildError::MissingInput`].
    fn try_marshall(&self, input: Option<&I>) -> Result<operation::Request, BuildError> {
        match input {
            Some(input) => self.marshall(input),
            None => Err(BuildError::MissingInput),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::marshall::Marshall;
    use crate::operation::{self, BuildError};

    struct Echo;

    impl Marshall<String> for Echo {
        fn marshall(&self, input: &String) -> Result<operation::Request, BuildError> {
            let request = http::Request::builder()
                .method("POST")
                .uri("/")
                .body(SdkBody::from(input.clone()))?;
            Ok(operation::Request::new(request))
        }
    }

    #[test]
    fn missing_input_is_rejected() {
        let err = Echo.try_marshall(None).expect_err("no input");
        assert!(matches!(err, BuildError::MissingInput));
        assert!(err.to_string().starts_with("Invalid argument passed to marshall(...)"));
    }

    #[test]
    fn present_input_is_marshalled() {
        let input = "Action=Test".to_string();
        let request = Echo.try_marshall(Some(&input)).expect("valid input");
        assert_eq!(request.http().body().bytes(), Some("Action=Test".as_bytes()));
        assert_eq!(request.http().method(), http::Method::POST);
    }
}
