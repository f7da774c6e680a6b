/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::uri::{Authority, InvalidUri, PathAndQuery, Scheme, Uri};
use std::str::FromStr;
use thiserror::Error;

/// A user supplied endpoint could not be used
#[derive(Debug, Error)]
pub enum InvalidEndpoint {
    #[error("endpoint is not a valid URI: {0}")]
    InvalidUri(#[from] InvalidUri),

    #[error("endpoint `{0}` does not contain a host")]
    MissingHost(String),
}

/// API Endpoint
///
/// This implements an API endpoint as specified in the
/// [Smithy Endpoint Specification](https://awslabs.github.io/smithy/1.0/spec/core/endpoint-traits.html)
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Endpoint {
    uri: http::Uri,

    /// If true, endpointPrefix is ignored when setting the endpoint on a request
    immutable: bool,
}

impl Endpoint {
    /// Create a new endpoint from a URI
    ///
    /// Certain protocols will attempt to prefix additional information onto an endpoint. If you
    /// wish to ignore these prefixes (for example, when communicating with localhost), set `immutable` to `true`.
    pub fn mutable(uri: Uri) -> Self {
        Endpoint {
            uri,
            immutable: false,
        }
    }

    /// Create a new immutable endpoint from a URI
    ///
    /// ```rust
    /// # use smithy_http::endpoint::Endpoint;
    /// use http::Uri;
    /// let endpoint = Endpoint::immutable(Uri::from_static("http://localhost:8000"));
    /// ```
    pub fn immutable(uri: Uri) -> Self {
        Endpoint {
            uri,
            immutable: true,
        }
    }

    /// Parse an endpoint supplied by a user
    ///
    /// Users may pass either a bare host (`gamelift.us-east-1.amazonaws.com`) or a full URL
    /// including the scheme. When no scheme is present, `https` is used. The resulting endpoint
    /// is immutable.
    pub fn from_user_input(endpoint: &str) -> Result<Self, InvalidEndpoint> {
        let endpoint = endpoint.trim();
        let uri = if endpoint.contains("://") {
            Uri::from_str(endpoint)?
        } else {
            Uri::from_str(&format!("https://{}", endpoint))?
        };
        if uri.host().map(str::is_empty).unwrap_or(true) {
            return Err(InvalidEndpoint::MissingHost(endpoint.to_string()));
        }
        Ok(Endpoint::immutable(uri))
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn is_immutable(&self) -> bool {
        self.immutable
    }

    /// Sets the endpoint on `uri`, potentially applying the specified `prefix` in the process.
    ///
    /// The path and query of `uri` are preserved. The scheme and authority are replaced.
    pub fn set_endpoint(&self, uri: &mut http::Uri, prefix: Option<&str>) {
        let prefix = prefix.filter(|_| !self.immutable).unwrap_or_default();
        let authority = self
            .uri
            .authority()
            .as_ref()
            .map(|auth| auth.as_str())
            .unwrap_or("");
        let authority = if !prefix.is_empty() {
            Authority::from_str(&format!("{}{}", prefix, authority))
        } else {
            Authority::from_str(authority)
        }
        .expect("authority was already valid and the prefix is a valid host label");
        let scheme = *self.uri.scheme().as_ref().unwrap_or(&&Scheme::HTTPS);
        let new_uri = Uri::builder()
            .authority(authority)
            .scheme(scheme.clone())
            .path_and_query(Self::merge_paths(&self.uri, uri).as_ref())
            .build()
            .expect("valid uri");
        *uri = new_uri;
    }

    // Query strings on the endpoint are dropped: the request's own query always wins.
    fn merge_paths<'a>(endpoint: &'a Uri, uri: &'a Uri) -> std::borrow::Cow<'a, str> {
        let endpoint_path = endpoint.path();
        let uri_path_and_query = uri
            .path_and_query()
            .map(PathAndQuery::as_str)
            .unwrap_or("");
        if endpoint_path.is_empty() || endpoint_path == "/" {
            if uri_path_and_query.is_empty() {
                "/".into()
            } else {
                uri_path_and_query.into()
            }
        } else {
            let ep_no_slash = endpoint_path.strip_suffix('/').unwrap_or(endpoint_path);
            let uri_path_no_slash = uri_path_and_query
                .strip_prefix('/')
                .unwrap_or(uri_path_and_query);
            format!("{}/{}", ep_no_slash, uri_path_no_slash).into()
        }
    }
}

#[cfg(test)]
mod test {
    use crate::endpoint::{Endpoint, InvalidEndpoint};
    use http::Uri;

    #[test]
    fn prefix_endpoint() {
        let ep = Endpoint::mutable(Uri::from_static("https://us-east-1.gamelift.amazonaws.com"));
        let mut uri = Uri::from_static("/?action=Action");
        ep.set_endpoint(&mut uri, Some("subregion."));
        assert_eq!(
            uri,
            Uri::from_static("https://subregion.us-east-1.gamelift.amazonaws.com/?action=Action")
        );
    }

    #[test]
    fn immutable_endpoint_ignores_prefix() {
        let ep = Endpoint::immutable(Uri::from_static("http://localhost:8000"));
        let mut uri = Uri::from_static("/");
        ep.set_endpoint(&mut uri, Some("subregion."));
        assert_eq!(uri, Uri::from_static("http://localhost:8000/"));
    }

    #[test]
    fn endpoint_with_path() {
        let ep = Endpoint::immutable(Uri::from_static("http://localhost:8000/proxy/"));
        let mut uri = Uri::from_static("/?k=v");
        ep.set_endpoint(&mut uri, None);
        assert_eq!(uri, Uri::from_static("http://localhost:8000/proxy/?k=v"));
    }

    #[test]
    fn user_input_without_scheme_defaults_to_https() {
        let ep = Endpoint::from_user_input("gamelift.us-east-1.amazonaws.com").unwrap();
        assert_eq!(
            ep.uri(),
            &Uri::from_static("https://gamelift.us-east-1.amazonaws.com")
        );
        assert!(ep.is_immutable());

        let ep = Endpoint::from_user_input("http://localhost:9000").unwrap();
        assert_eq!(ep.uri(), &Uri::from_static("http://localhost:9000"));
    }

    #[test]
    fn invalid_user_input() {
        assert!(matches!(
            Endpoint::from_user_input("https://"),
            Err(InvalidEndpoint::InvalidUri(_)) | Err(InvalidEndpoint::MissingHost(_))
        ));
        assert!(Endpoint::from_user_input("not a host").is_err());
    }
}
