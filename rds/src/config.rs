/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_endpoint::{set_endpoint_resolver, DefaultAwsEndpointResolver, ResolveAwsEndpoint};
use aws_http::user_agent::{ApiMetadata, AwsUserAgent};
use aws_types::os_shim_internal::Env;
use aws_types::region::{EnvironmentProvider, ProvideRegion, Region};
use smithy_http::endpoint::{Endpoint, InvalidEndpoint};
use smithy_http::property_bag::PropertyBag;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Endpoint prefix used to resolve `https://rds.{region}.amazonaws.com`
pub const ENDPOINT_PREFIX: &str = "rds";

pub(crate) const API_METADATA: ApiMetadata = ApiMetadata::new("rds", crate::API_VERSION);

/// Service configuration for Amazon RDS operations
#[derive(Clone)]
pub struct Config {
    pub(crate) region: Option<Region>,
    pub(crate) endpoint_resolver: Arc<dyn ResolveAwsEndpoint>,
    pub(crate) app_name: Option<Cow<'static, str>>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("region", &self.region)
            .field("app_name", &self.app_name)
            .finish()
    }
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Load configuration from the process environment
    ///
    /// The region is read from `AWS_REGION`, then `AWS_DEFAULT_REGION`.
    pub fn from_env() -> Self {
        Builder::default().region(EnvironmentProvider::new()).build()
    }

    /// Load configuration from an explicit environment
    pub fn from_environment(env: Env) -> Self {
        Builder::default()
            .region(EnvironmentProvider::with_env(env))
            .build()
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    pub(crate) fn set_region(&mut self, region: Region) {
        self.region = Some(region);
    }

    pub(crate) fn set_endpoint(&mut self, endpoint: &str) -> Result<(), InvalidEndpoint> {
        self.endpoint_resolver = Arc::new(Endpoint::from_user_input(endpoint)?);
        Ok(())
    }

    /// Store everything the middleware stages need in the request's property bag
    pub(crate) fn configure_request(&self, properties: &mut PropertyBag) {
        if let Some(region) = &self.region {
            properties.insert(region.clone());
        }
        set_endpoint_resolver(properties, self.endpoint_resolver.clone());
        let mut user_agent =
            AwsUserAgent::new_from_environment(&Env::real(), API_METADATA);
        if let Some(app_name) = &self.app_name {
            user_agent = user_agent.with_app_name(app_name.clone());
        }
        properties.insert(user_agent);
    }
}

#[derive(Default)]
pub struct Builder {
    region: Option<Region>,
    endpoint_resolver: Option<Arc<dyn ResolveAwsEndpoint>>,
    app_name: Option<Cow<'static, str>>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(mut self, region_provider: impl ProvideRegion) -> Self {
        self.region = region_provider.region();
        self
    }

    /// Override endpoint resolution, for example to target a local test server
    ///
    /// An [`Endpoint`] can be passed directly to use it for every region.
    pub fn endpoint_resolver(mut self, endpoint_resolver: impl ResolveAwsEndpoint + 'static) -> Self {
        self.endpoint_resolver = Some(Arc::new(endpoint_resolver));
        self
    }

    pub fn app_name(mut self, app_name: impl Into<Cow<'static, str>>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn build(self) -> Config {
        Config {
            region: self.region,
            endpoint_resolver: self.endpoint_resolver.unwrap_or_else(|| {
                Arc::new(DefaultAwsEndpointResolver::for_service(ENDPOINT_PREFIX))
            }),
            app_name: self.app_name,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::config::Config;
    use aws_endpoint::get_endpoint_resolver;
    use aws_http::user_agent::AwsUserAgent;
    use aws_types::os_shim_internal::Env;
    use aws_types::region::Region;
    use http::Uri;
    use smithy_http::property_bag::PropertyBag;

    #[test]
    fn default_region_is_a_fallback() {
        let conf = Config::from_environment(Env::from_slice(&[("AWS_DEFAULT_REGION", "ap-south-1")]));
        assert_eq!(conf.region(), Some(&Region::new("ap-south-1")));
    }

    #[test]
    fn china_regions_use_their_own_dns_suffix() {
        let conf = Config::builder().region(Region::new("cn-north-1")).build();
        let mut props = PropertyBag::new();
        conf.configure_request(&mut props);
        let endpoint = get_endpoint_resolver(&props)
            .expect("resolver is always set")
            .resolve_endpoint(props.get::<Region>())
            .unwrap();
        assert_eq!(
            endpoint.uri(),
            &Uri::from_static("https://rds.cn-north-1.amazonaws.com.cn")
        );
        assert!(props
            .get::<AwsUserAgent>()
            .expect("user agent is always set")
            .aws_ua_header()
            .contains("api/rds/2014-10-31"));
    }

    #[test]
    fn endpoint_override_keeps_the_scheme() {
        let mut conf = Config::builder().region(Region::new("us-east-1")).build();
        conf.set_endpoint("http://localhost:4566").unwrap();
        let endpoint = conf
            .endpoint_resolver
            .resolve_endpoint(conf.region())
            .unwrap();
        assert_eq!(endpoint.uri(), &Uri::from_static("http://localhost:4566"));
        assert!(endpoint.is_immutable());
    }
}
