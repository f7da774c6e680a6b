/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod user_agent;

use smithy_http::retry::ClassifyResponse;
use smithy_types::retry::{ErrorKind, ProvideErrorKind, RetryKind};
use std::time::Duration;

/// Classifies failed GameLift and RDS responses
///
/// Checked in order, first match wins:
/// 1. an `x-amz-retry-after` header, in milliseconds
/// 2. the retryable kind reported by the modeled error
/// 3. the error code, see [`kind_for_code`]
/// 4. the HTTP status, see [`kind_for_status`]
///
/// Nothing acts on the result beyond logging it: the clients never retry.
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct AwsErrorRetryPolicy;

impl AwsErrorRetryPolicy {
    pub fn new() -> Self {
        AwsErrorRetryPolicy
    }
}

/// Retry kind for an error code that wasn't modeled as retryable
///
/// GameLift reports throttling as `ThrottlingException` in the JSON `__type`. RDS uses the
/// awsQuery codes `Throttling` and `RequestLimitExceeded`. GameLift's `LimitExceededException`
/// is a resource quota, not a rate limit, so it is not retryable.
pub fn kind_for_code(code: &str) -> Option<ErrorKind> {
    match code {
        "ThrottlingException" | "Throttling" | "RequestLimitExceeded" | "TooManyRequestsException" => {
            Some(ErrorKind::ThrottlingError)
        }
        "RequestTimeout" | "RequestTimeoutException" | "ServiceUnavailable" => {
            Some(ErrorKind::TransientError)
        }
        "InternalServiceException" | "InternalFailure" => Some(ErrorKind::ServerError),
        _ => None,
    }
}

/// Retry kind for a status code when the error code didn't decide it
pub fn kind_for_status(status: http::StatusCode) -> Option<ErrorKind> {
    match status.as_u16() {
        408 => Some(ErrorKind::TransientError),
        429 => Some(ErrorKind::ThrottlingError),
        500 | 502 | 503 | 504 => Some(ErrorKind::ServerError),
        _ => None,
    }
}

fn retry_after(headers: &http::HeaderMap) -> Option<Duration> {
    let millis = headers.get("x-amz-retry-after")?.to_str().ok()?.parse::<u64>().ok()?;
    Some(Duration::from_millis(millis))
}

impl ClassifyResponse for AwsErrorRetryPolicy {
    fn classify<E, B>(&self, err: E, response: &http::Response<B>) -> RetryKind
    where
        E: ProvideErrorKind,
    {
        if let Some(delay) = retry_after(response.headers()) {
            return RetryKind::Explicit(delay);
        }
        err.retryable_error_kind()
            .or_else(|| err.code().and_then(kind_for_code))
            .or_else(|| kind_for_status(response.status()))
            .map(RetryKind::Error)
            .unwrap_or(RetryKind::NotRetryable)
    }
}

#[cfg(test)]
mod test {
    use crate::{kind_for_code, AwsErrorRetryPolicy};
    use smithy_http::retry::ClassifyResponse;
    use smithy_types::retry::{ErrorKind, ProvideErrorKind, RetryKind};
    use std::time::Duration;

    /// A GameLift exception that carries a code but no modeled retry kind
    struct ServiceException(&'static str);

    impl ProvideErrorKind for ServiceException {
        fn retryable_error_kind(&self) -> Option<ErrorKind> {
            None
        }

        fn code(&self) -> Option<&str> {
            Some(self.0)
        }
    }

    struct Unparsed;

    impl ProvideErrorKind for Unparsed {
        fn retryable_error_kind(&self) -> Option<ErrorKind> {
            None
        }

        fn code(&self) -> Option<&str> {
            None
        }
    }

    fn response(status: u16) -> http::Response<&'static str> {
        http::Response::builder().status(status).body("{}").unwrap()
    }

    #[test]
    fn gamelift_domain_errors_are_not_retryable() {
        let policy = AwsErrorRetryPolicy::new();
        for code in &[
            "NotFoundException",
            "ConflictException",
            "GameSessionFullException",
            "InvalidFleetStatusException",
            "FleetCapacityExceededException",
            "LimitExceededException",
        ] {
            assert_eq!(
                policy.classify(ServiceException(*code), &response(400)),
                RetryKind::NotRetryable,
                "{}",
                code
            );
        }
    }

    #[test]
    fn throttling_codes_from_both_protocols() {
        let policy = AwsErrorRetryPolicy::new();
        assert_eq!(
            policy.classify(ServiceException("ThrottlingException"), &response(400)),
            RetryKind::Error(ErrorKind::ThrottlingError)
        );
        let rds = smithy_types::Error::builder().code("Throttling").build();
        assert_eq!(
            policy.classify(&rds, &response(400)),
            RetryKind::Error(ErrorKind::ThrottlingError)
        );
    }

    #[test]
    fn unmodeled_internal_errors_are_server_errors() {
        // the header carries the code when the body couldn't be parsed into a modeled error
        let generic = smithy_types::Error::builder()
            .code("InternalServiceException")
            .build();
        assert_eq!(
            AwsErrorRetryPolicy::new().classify(&generic, &response(400)),
            RetryKind::Error(ErrorKind::ServerError)
        );
        assert_eq!(kind_for_code("InternalFailure"), Some(ErrorKind::ServerError));
        assert_eq!(kind_for_code("ServiceUnavailable"), Some(ErrorKind::TransientError));
        assert_eq!(kind_for_code("ReservedDBInstancesOfferingNotFound"), None);
    }

    #[test]
    fn status_decides_when_the_code_does_not() {
        let policy = AwsErrorRetryPolicy::new();
        assert_eq!(
            policy.classify(Unparsed, &response(503)),
            RetryKind::Error(ErrorKind::ServerError)
        );
        assert_eq!(
            policy.classify(Unparsed, &response(429)),
            RetryKind::Error(ErrorKind::ThrottlingError)
        );
        assert_eq!(
            policy.classify(Unparsed, &response(408)),
            RetryKind::Error(ErrorKind::TransientError)
        );
        assert_eq!(policy.classify(Unparsed, &response(400)), RetryKind::NotRetryable);
        assert_eq!(
            policy.classify(ServiceException("NotFoundException"), &response(502)),
            RetryKind::Error(ErrorKind::ServerError)
        );
    }

    #[test]
    fn modeled_kind_wins_over_code() {
        struct InternalServiceException;
        impl ProvideErrorKind for InternalServiceException {
            fn retryable_error_kind(&self) -> Option<ErrorKind> {
                Some(ErrorKind::ServerError)
            }

            fn code(&self) -> Option<&str> {
                // not consulted once the modeled kind is known
                Some("ThrottlingException")
            }
        }
        assert_eq!(
            AwsErrorRetryPolicy::new().classify(InternalServiceException, &response(400)),
            RetryKind::Error(ErrorKind::ServerError)
        );
    }

    #[test]
    fn retry_after_header_wins() {
        let throttled = http::Response::builder()
            .status(400)
            .header("x-amz-retry-after", "1500")
            .body("{}")
            .unwrap();
        assert_eq!(
            AwsErrorRetryPolicy::new().classify(ServiceException("GameSessionFullException"), &throttled),
            RetryKind::Explicit(Duration::from_millis(1500))
        );
        let garbled = http::Response::builder()
            .status(400)
            .header("x-amz-retry-after", "soon")
            .body("{}")
            .unwrap();
        assert_eq!(
            AwsErrorRetryPolicy::new().classify(Unparsed, &garbled),
            RetryKind::NotRetryable
        );
    }
}
