/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::body::SdkBody;
use crate::property_bag::PropertyBag;
use std::borrow::Cow;
use std::error::Error;
use thiserror::Error;

type BoxError = Box<dyn Error + Send + Sync>;

/// Static metadata describing an operation: its name and the service that owns it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct Parts<H, R> {
    pub response_handler: H,
    pub retry_policy: R,
    pub metadata: Option<Metadata>,
}

/// An error occurred attempting to build an `Operation` from an input
///
/// These are almost always due to user error caused by limitations of specific fields due to
/// protocol serialization (eg. fields that can only be a subset ASCII because they are serialized
/// as the name of an HTTP header)
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum BuildError {
    /// No input was provided to the marshaller.
    #[error("Invalid argument passed to marshall(...): no input was provided")]
    MissingInput,

    #[error("{field} was missing. {details}")]
    MissingField {
        field: &'static str,
        details: &'static str,
    },

    #[error("Invalid field in input: {field} (Details: {details})")]
    InvalidField {
        field: &'static str,
        details: String,
    },

    #[error("Failed to serialize request: {0}")]
    SerializationError(#[source] BoxError),

    #[error("Invalid URI: {0}")]
    InvalidUri(#[from] http::uri::InvalidUri),

    #[error("Error during request construction: {0}")]
    Other(#[source] BoxError),
}

impl From<http::Error> for BuildError {
    fn from(err: http::Error) -> Self {
        BuildError::Other(err.into())
    }
}

/// A marshalled request, its response handler, and the policy used to classify failures.
#[derive(Debug)]
pub struct Operation<H, R> {
    request: Request,
    parts: Parts<H, R>,
}

impl<H, R> Operation<H, R> {
    pub fn into_request_response(self) -> (Request, Parts<H, R>) {
        (self.request, self.parts)
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn request_mut(&mut self) -> &mut Request {
        &mut self.request
    }

    pub fn properties_mut(&mut self) -> &mut PropertyBag {
        self.request.properties_mut()
    }

    pub fn properties(&self) -> &PropertyBag {
        self.request.properties()
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.parts.metadata = Some(metadata);
        self
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.parts.metadata.as_ref()
    }

    pub fn with_retry_policy<R2>(self, retry_policy: R2) -> Operation<H, R2> {
        Operation {
            request: self.request,
            parts: Parts {
                response_handler: self.parts.response_handler,
                retry_policy,
                metadata: self.parts.metadata,
            },
        }
    }

    pub fn retry_policy(&self) -> &R {
        &self.parts.retry_policy
    }
}

impl<H> Operation<H, ()> {
    pub fn new(request: Request, response_handler: H) -> Self {
        Operation {
            request,
            parts: Parts {
                response_handler,
                retry_policy: (),
                metadata: None,
            },
        }
    }
}

/// Operation request type that associates a property bag with an underlying HTTP request.
/// This type represents the request in the Tower `Service` in middleware so that middleware
/// can share information with each other via the properties.
#[derive(Debug)]
pub struct Request {
    /// The underlying HTTP Request
    inner: http::Request<SdkBody>,

    /// Property bag of configuration options
    ///
    /// Middleware can read and write from the property bag and use its
    /// contents to augment the request (see [`Request::augment`](Request::augment))
    properties: PropertyBag,
}

impl Request {
    /// Creates a new operation `Request` with the given `inner` HTTP request.
    pub fn new(inner: http::Request<SdkBody>) -> Self {
        Request {
            inner,
            properties: PropertyBag::new(),
        }
    }

    /// Creates a new operation `Request` from its parts.
    pub fn from_parts(inner: http::Request<SdkBody>, properties: PropertyBag) -> Self {
        Request { inner, properties }
    }

    /// Allows modification of the HTTP request and associated properties with a fallible closure.
    pub fn augment<T>(
        self,
        f: impl FnOnce(http::Request<SdkBody>, &mut PropertyBag) -> Result<http::Request<SdkBody>, T>,
    ) -> Result<Request, T> {
        let Request {
            inner,
            mut properties,
        } = self;
        let inner = f(inner, &mut properties)?;
        Ok(Request { inner, properties })
    }

    /// Gives mutable access to the properties.
    pub fn properties_mut(&mut self) -> &mut PropertyBag {
        &mut self.properties
    }

    /// Gives readonly access to the properties.
    pub fn properties(&self) -> &PropertyBag {
        &self.properties
    }

    /// Gives mutable access to the underlying HTTP request.
    pub fn http_mut(&mut self) -> &mut http::Request<SdkBody> {
        &mut self.inner
    }

    /// Gives readonly access to the underlying HTTP request.
    pub fn http(&self) -> &http::Request<SdkBody> {
        &self.inner
    }

    /// Consumes the operation `Request` and returns the underlying HTTP request and properties.
    pub fn into_parts(self) -> (http::Request<SdkBody>, PropertyBag) {
        (self.inner, self.properties)
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::operation::{BuildError, Metadata, Operation, Request};
    use http::header::{AUTHORIZATION, CONTENT_LENGTH};
    use http::Uri;

    #[test]
    fn augment_can_touch_request_and_properties() {
        let mut request = Request::new(
            http::Request::builder()
                .uri(Uri::from_static("http://www.amazon.com"))
                .body(SdkBody::from("hello world!"))
                .expect("valid request"),
        );
        request.properties_mut().insert("hello");
        let request = request
            .augment(|mut req, props| {
                let value = *props.get::<&'static str>().unwrap();
                req.headers_mut()
                    .insert(AUTHORIZATION, value.parse().unwrap());
                props.insert(5_u32);
                Result::<_, BuildError>::Ok(req)
            })
            .expect("augment should succeed");
        assert_eq!(request.properties().get::<u32>(), Some(&5));
        let (http, _props) = request.into_parts();
        assert_eq!(http.headers().get(AUTHORIZATION).unwrap(), "hello");
        assert!(http.headers().get(CONTENT_LENGTH).is_none());
    }

    #[test]
    fn failed_augment_propagates() {
        let request = Request::new(http::Request::new(SdkBody::empty()));
        let result = request.augment(|_req, _props| Err(BuildError::MissingInput));
        assert!(matches!(result, Err(BuildError::MissingInput)));
    }

    #[test]
    fn retry_policy_and_metadata_are_carried() {
        let op = Operation::new(Request::new(http::Request::new(SdkBody::empty())), ())
            .with_metadata(Metadata::new("DescribeAlias", "gamelift"))
            .with_retry_policy("policy");
        assert_eq!(op.metadata().unwrap().name(), "DescribeAlias");
        assert_eq!(op.metadata().unwrap().service(), "gamelift");
        assert_eq!(*op.retry_policy(), "policy");
    }

    #[test]
    fn missing_input_message() {
        assert_eq!(
            BuildError::MissingInput.to_string(),
            "Invalid argument passed to marshall(...): no input was provided"
        );
    }
}
