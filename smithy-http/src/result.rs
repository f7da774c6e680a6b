/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

type BoxError = Box<dyn Error + Send + Sync>;

/// Successful Sdk Result
///
/// Transport implementations type alias this type, plugging in a concrete body, eg:
/// ```rust
/// # mod hyper {
/// #    pub struct Body;
/// # }
/// type SdkSuccess<O> = smithy_http::result::SdkSuccess<O, hyper::Body>;
/// ```
#[derive(Debug)]
pub struct SdkSuccess<O, B> {
    pub raw: http::Response<B>,
    pub parsed: O,
}

/// Failing Sdk Result
///
/// Transport implementations type alias this type by specifying a concrete body:
/// ```rust
/// # mod hyper {
/// #    pub struct Body;
/// # }
/// type SdkError<E> = smithy_http::result::SdkError<E, hyper::Body>;
/// ```
#[derive(Debug)]
pub enum SdkError<E, B> {
    /// The request failed during construction. It was not dispatched over the network.
    ConstructionFailure(BoxError),

    /// The request failed during dispatch. An HTTP response was not received. The request MAY
    /// have been sent.
    DispatchFailure(BoxError),

    /// A response was received but it was not parseable according the the protocol (for example
    /// the server hung up while the body was being read)
    ResponseError {
        raw: http::Response<B>,
        err: BoxError,
    },

    /// An error response was received from the service
    ServiceError { raw: http::Response<B>, err: E },
}

impl<E, B> SdkError<E, B> {
    /// The modeled service error, if the service returned one
    pub fn service_error(&self) -> Option<&E> {
        match self {
            SdkError::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }

    /// Convert into the modeled service error, if the service returned one
    pub fn into_service_error(self) -> Result<E, Self> {
        match self {
            SdkError::ServiceError { err, .. } => Ok(err),
            other => Err(other),
        }
    }

    /// The raw HTTP response, when one was received
    pub fn raw_response(&self) -> Option<&http::Response<B>> {
        match self {
            SdkError::ResponseError { raw, .. } | SdkError::ServiceError { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

impl<E, B> Display for SdkError<E, B>
where
    E: Error,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::ConstructionFailure(err) => write!(f, "failed to construct request: {}", err),
            SdkError::DispatchFailure(err) => write!(f, "dispatch failure: {}", err),
            SdkError::ResponseError { err, .. } => write!(f, "response error: {}", err),
            SdkError::ServiceError { err, .. } => write!(f, "{}", err),
        }
    }
}

impl<E, B> Error for SdkError<E, B>
where
    E: Error + 'static,
    B: Debug,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SdkError::ConstructionFailure(err)
            | SdkError::DispatchFailure(err)
            | SdkError::ResponseError { err, .. } => Some(err.as_ref()),
            SdkError::ServiceError { err, .. } => Some(err),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::result::SdkError;
    use std::error::Error;

    #[derive(Debug)]
    struct Modeled;

    impl std::fmt::Display for Modeled {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "NotFoundException")
        }
    }

    impl Error for Modeled {}

    #[test]
    fn service_errors_expose_the_raw_response() {
        let err: SdkError<Modeled, &'static str> = SdkError::ServiceError {
            raw: http::Response::builder().status(400).body("{}").unwrap(),
            err: Modeled,
        };
        assert_eq!(err.to_string(), "NotFoundException");
        assert_eq!(err.raw_response().unwrap().status(), 400);
        assert!(err.service_error().is_some());
        assert!(err.into_service_error().is_ok());
    }

    #[test]
    fn construction_failures_have_no_response() {
        let err: SdkError<Modeled, ()> = SdkError::ConstructionFailure("bad field".into());
        assert!(err.raw_response().is_none());
        assert_eq!(err.to_string(), "failed to construct request: bad field");
        assert_eq!(err.source().unwrap().to_string(), "bad field");
    }
}
