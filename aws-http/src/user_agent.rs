/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::os_shim_internal::Env;
use http::header::{HeaderName, InvalidHeaderValue, USER_AGENT};
use http::HeaderValue;
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use std::borrow::Cow;
use std::convert::TryFrom;
use std::fmt;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// AWS User Agent
///
/// This struct should be inserted into the [`PropertyBag`](smithy_http::operation::Request::properties)
/// during operation construction. [`UserAgentStage`](UserAgentStage) reads `AwsUserAgent`
/// from the property bag and sets the `User-Agent` and `x-amz-user-agent` headers.
#[derive(Clone, Debug)]
pub struct AwsUserAgent {
    sdk_metadata: SdkMetadata,
    api_metadata: ApiMetadata,
    os_metadata: OsMetadata,
    exec_env_metadata: Option<ExecEnvMetadata>,
    app_name: Option<Cow<'static, str>>,
}

impl AwsUserAgent {
    /// Load a User Agent configuration from the environment
    ///
    /// `AWS_EXECUTION_ENV`, when set, is reported as `exec-env/<value>`.
    pub fn new_from_environment(env: &Env, api_metadata: ApiMetadata) -> Self {
        let sdk_metadata = SdkMetadata {
            name: "rust",
            version: env!("CARGO_PKG_VERSION"),
        };
        let exec_env_metadata = env
            .get("AWS_EXECUTION_ENV")
            .ok()
            .map(|name| ExecEnvMetadata { name });
        AwsUserAgent {
            sdk_metadata,
            api_metadata,
            os_metadata: OsMetadata {
                os_family: OsFamily::from_os(std::env::consts::OS),
            },
            exec_env_metadata,
            app_name: None,
        }
    }

    /// For test purposes, construct an environment-independent User Agent
    ///
    /// Without this, running CI on a different platform would produce different user agent strings
    pub fn for_tests() -> Self {
        Self {
            sdk_metadata: SdkMetadata {
                name: "rust",
                version: "0.123.test",
            },
            api_metadata: ApiMetadata {
                service_id: "test-service",
                version: "0.123",
            },
            os_metadata: OsMetadata {
                os_family: OsFamily::Windows,
            },
            exec_env_metadata: None,
            app_name: None,
        }
    }

    /// Append `app/<name>` to the `x-amz-user-agent` header
    pub fn with_app_name(mut self, app_name: impl Into<Cow<'static, str>>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Generate a new-style user agent style header
    ///
    /// This header should be set at `x-amz-user-agent`
    pub fn aws_ua_header(&self) -> String {
        /*
        ua-string = sdk-metadata RWS
                    [api-metadata RWS]
                    os-metadata RWS
                    language-metadata RWS
                    [env-metadata RWS]
                    [appId]
        */
        let mut parts = vec![
            self.sdk_metadata.to_string(),
            self.api_metadata.to_string(),
            self.os_metadata.to_string(),
            LANGUAGE_METADATA.to_string(),
        ];
        if let Some(env_meta) = &self.exec_env_metadata {
            parts.push(env_meta.to_string());
        }
        if let Some(app_name) = &self.app_name {
            parts.push(format!("app/{}", app_name));
        }
        parts.join(" ")
    }

    /// Generate an old-style User-Agent header for backward compatibility
    ///
    /// This header is intended to be set at `User-Agent`
    pub fn ua_header(&self) -> String {
        format!(
            "{} {} {}",
            self.sdk_metadata, self.os_metadata, LANGUAGE_METADATA
        )
    }
}

const LANGUAGE_METADATA: &str = "lang/rust";

#[derive(Clone, Copy, Debug)]
struct SdkMetadata {
    name: &'static str,
    version: &'static str,
}

impl Display for SdkMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "aws-sdk-{}/{}", self.name, self.version)
    }
}

/// The service name and API version reported in `api/<service>/<version>`
#[derive(Clone, Copy, Debug)]
pub struct ApiMetadata {
    service_id: &'static str,
    version: &'static str,
}

impl ApiMetadata {
    pub const fn new(service_id: &'static str, version: &'static str) -> Self {
        Self {
            service_id,
            version,
        }
    }
}

impl Display for ApiMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "api/{}/{}", self.service_id, self.version)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum OsFamily {
    Windows,
    Linux,
    Macos,
    Android,
    Ios,
    Other,
}

impl OsFamily {
    fn from_os(os: &str) -> Self {
        match os {
            "windows" => OsFamily::Windows,
            "linux" => OsFamily::Linux,
            "macos" => OsFamily::Macos,
            "android" => OsFamily::Android,
            "ios" => OsFamily::Ios,
            _ => OsFamily::Other,
        }
    }
}

#[derive(Clone, Debug)]
struct OsMetadata {
    os_family: OsFamily,
}

impl Display for OsMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let os_family = match self.os_family {
            OsFamily::Windows => "windows",
            OsFamily::Linux => "linux",
            OsFamily::Macos => "macos",
            OsFamily::Android => "android",
            OsFamily::Ios => "ios",
            OsFamily::Other => "other",
        };
        write!(f, "os/{}", os_family)
    }
}

#[derive(Clone, Debug)]
struct ExecEnvMetadata {
    name: String,
}

impl Display for ExecEnvMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "exec-env/{}", &self.name)
    }
}

#[non_exhaustive]
#[derive(Default, Clone, Debug)]
pub struct UserAgentStage;

impl UserAgentStage {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Error)]
pub enum UserAgentStageError {
    #[error("User agent missing from property bag")]
    UserAgentMissing,
    #[error("Provided user agent header was invalid")]
    InvalidHeader(#[from] InvalidHeaderValue),
}

const X_AMZ_USER_AGENT: &str = "x-amz-user-agent";

impl MapRequest for UserAgentStage {
    type Error = UserAgentStageError;

    fn apply(&self, request: Request) -> Result<Request, Self::Error> {
        request.augment(|mut req, conf| {
            let ua = conf
                .get::<AwsUserAgent>()
                .ok_or(UserAgentStageError::UserAgentMissing)?;
            req.headers_mut()
                .append(USER_AGENT, HeaderValue::try_from(ua.ua_header())?);
            req.headers_mut().append(
                HeaderName::from_static(X_AMZ_USER_AGENT),
                HeaderValue::try_from(ua.aws_ua_header())?,
            );

            Ok(req)
        })
    }
}

#[cfg(test)]
mod test {
    use crate::user_agent::{
        ApiMetadata, AwsUserAgent, OsFamily, OsMetadata, UserAgentStage, UserAgentStageError,
        X_AMZ_USER_AGENT,
    };
    use aws_types::os_shim_internal::Env;
    use http::header::USER_AGENT;
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;

    fn make_deterministic(ua: &mut AwsUserAgent) {
        // hard code some variable things for a deterministic test
        ua.sdk_metadata.version = "0.1";
        ua.os_metadata = OsMetadata {
            os_family: OsFamily::Macos,
        };
    }

    #[test]
    fn generate_a_valid_ua() {
        let mut ua = AwsUserAgent::new_from_environment(
            &Env::from_slice(&[]),
            ApiMetadata::new("gamelift", "2015-10-01"),
        );
        make_deterministic(&mut ua);
        assert_eq!(
            ua.aws_ua_header(),
            "aws-sdk-rust/0.1 api/gamelift/2015-10-01 os/macos lang/rust"
        );
        assert_eq!(ua.ua_header(), "aws-sdk-rust/0.1 os/macos lang/rust");
    }

    #[test]
    fn generate_a_valid_ua_with_execution_env() {
        let mut ua = AwsUserAgent::new_from_environment(
            &Env::from_slice(&[("AWS_EXECUTION_ENV", "lambda")]),
            ApiMetadata::new("rds", "2014-10-31"),
        );
        make_deterministic(&mut ua);
        assert_eq!(
            ua.aws_ua_header(),
            "aws-sdk-rust/0.1 api/rds/2014-10-31 os/macos lang/rust exec-env/lambda"
        );
        assert_eq!(ua.ua_header(), "aws-sdk-rust/0.1 os/macos lang/rust");
    }

    #[test]
    fn generate_a_valid_ua_with_app_name() {
        let ua = AwsUserAgent::for_tests().with_app_name("my_app");
        assert_eq!(
            ua.aws_ua_header(),
            "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows lang/rust app/my_app"
        );
    }

    #[test]
    fn os_family_detection() {
        assert_eq!(OsFamily::from_os("linux"), OsFamily::Linux);
        assert_eq!(OsFamily::from_os("freebsd"), OsFamily::Other);
    }

    #[test]
    fn ua_stage_adds_headers() {
        let stage = UserAgentStage::new();
        let req = operation::Request::new(http::Request::new(SdkBody::from("some body")));
        let err = stage
            .apply(req)
            .expect_err("adding UA should fail without a UA set");
        assert!(matches!(err, UserAgentStageError::UserAgentMissing));
        let mut req = operation::Request::new(http::Request::new(SdkBody::from("some body")));
        req.properties_mut().insert(AwsUserAgent::for_tests());
        let req = stage.apply(req).expect("setting user agent should succeed");
        let (req, _) = req.into_parts();
        assert_eq!(
            req.headers()
                .get(USER_AGENT)
                .expect("UA header should be set"),
            "aws-sdk-rust/0.123.test os/windows lang/rust"
        );
        assert_eq!(
            req.headers()
                .get(X_AMZ_USER_AGENT)
                .expect("UA header should be set"),
            "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows lang/rust"
        );
    }

    #[test]
    fn invalid_app_name_is_rejected() {
        let stage = UserAgentStage::new();
        let mut req = operation::Request::new(http::Request::new(SdkBody::empty()));
        req.properties_mut()
            .insert(AwsUserAgent::for_tests().with_app_name("bad\nname"));
        let err = stage.apply(req).expect_err("newlines are not valid in headers");
        assert!(matches!(err, UserAgentStageError::InvalidHeader(_)));
    }
}
