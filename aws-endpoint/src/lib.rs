/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::region::Region;
use http::Uri;
use smithy_http::endpoint::Endpoint;
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use smithy_http::property_bag::PropertyBag;
use std::error::Error;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

pub type BoxError = Box<dyn Error + Send + Sync>;

/// Resolve the endpoint requests are sent to
///
/// The region is optional: an explicit endpoint override does not need one, while the default
/// resolver fails without it.
pub trait ResolveAwsEndpoint: Send + Sync {
    fn resolve_endpoint(&self, region: Option<&Region>) -> Result<Endpoint, BoxError>;
}

/// An explicitly configured endpoint is used for every region
impl ResolveAwsEndpoint for Endpoint {
    fn resolve_endpoint(&self, _region: Option<&Region>) -> Result<Endpoint, BoxError> {
        Ok(self.clone())
    }
}

/// Endpoint resolver producing `https://{endpoint_prefix}.{region}.{dns_suffix}`
///
/// Regions in the `aws-cn` partition (any region starting with `cn-`) use `amazonaws.com.cn`,
/// all others use `amazonaws.com`.
#[derive(Clone, Debug)]
pub struct DefaultAwsEndpointResolver {
    endpoint_prefix: &'static str,
}

impl DefaultAwsEndpointResolver {
    pub fn for_service(endpoint_prefix: &'static str) -> Self {
        DefaultAwsEndpointResolver { endpoint_prefix }
    }

    fn dns_suffix(region: &Region) -> &'static str {
        if region.as_ref().starts_with("cn-") {
            "amazonaws.com.cn"
        } else {
            "amazonaws.com"
        }
    }
}

impl ResolveAwsEndpoint for DefaultAwsEndpointResolver {
    fn resolve_endpoint(&self, region: Option<&Region>) -> Result<Endpoint, BoxError> {
        let region = region.ok_or(AwsEndpointStageError::NoRegion)?;
        let uri = Uri::from_str(&format!(
            "https://{}.{}.{}",
            self.endpoint_prefix,
            region,
            Self::dns_suffix(region)
        ))?;
        Ok(Endpoint::mutable(uri))
    }
}

type AwsEndpointResolver = Arc<dyn ResolveAwsEndpoint>;

pub fn get_endpoint_resolver(properties: &PropertyBag) -> Option<&AwsEndpointResolver> {
    properties.get()
}

pub fn set_endpoint_resolver(properties: &mut PropertyBag, provider: AwsEndpointResolver) {
    properties.insert(provider);
}

/// Middleware Stage to Add an Endpoint to a Request
///
/// AwsEndpointStage implements [`MapRequest`](smithy_http::middleware::MapRequest). It will:
/// 1. Load an endpoint provider from the property bag.
/// 2. Load an endpoint given the [`Region`](aws_types::region::Region) in the property bag.
/// 3. Apply the endpoint to the URI in the request
#[derive(Clone, Debug)]
pub struct AwsEndpointStage;

#[derive(Debug, Error)]
pub enum AwsEndpointStageError {
    #[error("no endpoint resolver was configured")]
    NoEndpointResolver,

    #[error("a region must be set when no endpoint override is configured")]
    NoRegion,

    #[error("failed to resolve endpoint: {0}")]
    EndpointResolutionError(BoxError),
}

impl MapRequest for AwsEndpointStage {
    type Error = AwsEndpointStageError;

    fn apply(&self, request: Request) -> Result<Request, Self::Error> {
        request.augment(|mut http_req, props| {
            let provider =
                get_endpoint_resolver(props).ok_or(AwsEndpointStageError::NoEndpointResolver)?;
            let region = props.get::<Region>();
            let endpoint = provider.resolve_endpoint(region).map_err(|err| {
                match err.downcast::<AwsEndpointStageError>() {
                    Ok(stage_err) => *stage_err,
                    Err(other) => AwsEndpointStageError::EndpointResolutionError(other),
                }
            })?;
            tracing::debug!(endpoint = ?endpoint, base_region = ?region, "resolved endpoint");
            endpoint.set_endpoint(http_req.uri_mut(), None);
            Ok(http_req)
        })
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use http::header::HOST;
    use http::Uri;

    use aws_types::region::Region;
    use smithy_http::body::SdkBody;
    use smithy_http::endpoint::Endpoint;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;

    use crate::{
        set_endpoint_resolver, AwsEndpointStage, AwsEndpointStageError,
        DefaultAwsEndpointResolver, ResolveAwsEndpoint,
    };

    fn request_with(region: Option<Region>, resolver: Arc<dyn ResolveAwsEndpoint>) -> operation::Request {
        let req = http::Request::builder()
            .uri("/")
            .body(SdkBody::from("{}"))
            .unwrap();
        let mut req = operation::Request::new(req);
        {
            let props = req.properties_mut();
            if let Some(region) = region {
                props.insert(region);
            }
            set_endpoint_resolver(props, resolver);
        }
        req
    }

    #[test]
    fn default_endpoint_updates_request() {
        let req = request_with(
            Some(Region::new("us-east-1")),
            Arc::new(DefaultAwsEndpointResolver::for_service("gamelift")),
        );
        let req = AwsEndpointStage.apply(req).expect("should succeed");
        let (req, _conf) = req.into_parts();
        assert_eq!(
            req.uri(),
            &Uri::from_static("https://gamelift.us-east-1.amazonaws.com/")
        );
        assert!(req.headers().get(HOST).is_none());
    }

    #[test]
    fn china_regions_use_the_cn_suffix() {
        let endpoint = DefaultAwsEndpointResolver::for_service("rds")
            .resolve_endpoint(Some(&Region::new("cn-north-1")))
            .unwrap();
        assert_eq!(
            endpoint.uri(),
            &Uri::from_static("https://rds.cn-north-1.amazonaws.com.cn")
        );
    }

    #[test]
    fn missing_region_fails() {
        let req = request_with(
            None,
            Arc::new(DefaultAwsEndpointResolver::for_service("gamelift")),
        );
        let err = AwsEndpointStage.apply(req).expect_err("no region");
        assert!(matches!(err, AwsEndpointStageError::NoRegion));
    }

    #[test]
    fn override_ignores_region() {
        let req = request_with(
            None,
            Arc::new(Endpoint::immutable(Uri::from_static("http://localhost:8000"))),
        );
        let req = AwsEndpointStage.apply(req).expect("should succeed");
        assert_eq!(req.http().uri(), &Uri::from_static("http://localhost:8000/"));
    }

    #[test]
    fn missing_resolver_fails() {
        let req = operation::Request::new(http::Request::new(SdkBody::empty()));
        let err = AwsEndpointStage.apply(req).expect_err("no resolver");
        assert!(matches!(err, AwsEndpointStageError::NoEndpointResolver));
    }

    #[test]
    fn invalid_region_is_a_resolution_error() {
        let req = request_with(
            Some(Region::new("not a region")),
            Arc::new(DefaultAwsEndpointResolver::for_service("gamelift")),
        );
        let err = AwsEndpointStage.apply(req).expect_err("invalid host");
        assert!(matches!(
            err,
            AwsEndpointStageError::EndpointResolutionError(_)
        ));
    }
}
