/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Protocol-agnostic types shared by generated service clients.

pub mod instant;
pub mod primitive;
pub mod retry;

pub use crate::instant::Instant;

use crate::retry::{ErrorKind, ProvideErrorKind};
use std::fmt;
use std::fmt::{Display, Formatter};

/// Generic Error type
///
/// For many services, Errors are modeled. However, many services only partially model errors or don't
/// model errors at all. In these cases, the SDK will return this generic error type to expose the
/// `code`, `message` and `request_id`.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct Error {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

/// Builder for [`Error`]
#[derive(Debug, Default)]
pub struct Builder {
    inner: Error,
}

impl Builder {
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.inner.message = Some(message.into());
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.inner.code = Some(code.into());
        self
    }

    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    pub fn set_code(&mut self, code: Option<String>) -> &mut Self {
        self.inner.code = code;
        self
    }

    pub fn set_message(&mut self, message: Option<String>) -> &mut Self {
        self.inner.message = message;
        self
    }

    pub fn set_request_id(&mut self, request_id: Option<String>) -> &mut Self {
        self.inner.request_id = request_id;
        self
    }

    pub fn build(self) -> Error {
        self.inner
    }
}

impl Error {
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn into_builder(self) -> Builder {
        Builder { inner: self }
    }
}

impl ProvideErrorKind for Error {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        Error::code(self)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(req_id) = &self.request_id {
            fmt.field("request_id", req_id);
        }
        fmt.finish()
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use crate::retry::ProvideErrorKind;
    use crate::Error;

    #[test]
    fn display_only_includes_present_fields() {
        let err = Error::builder().code("NotFoundException").build();
        assert_eq!(format!("{}", err), "Error { code: \"NotFoundException\" }");

        let err = Error::builder()
            .code("InternalServiceException")
            .message("try again")
            .request_id("abc-123")
            .build();
        assert_eq!(
            format!("{}", err),
            "Error { code: \"InternalServiceException\", message: \"try again\", request_id: \"abc-123\" }"
        );
    }

    #[test]
    fn generic_errors_are_never_modeled_as_retryable() {
        let err = Error::builder().code("Throttling").build();
        assert_eq!(err.retryable_error_kind(), None);
        assert_eq!(ProvideErrorKind::code(&err), Some("Throttling"));
    }
}
