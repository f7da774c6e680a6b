/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::config::Config;
use aws_hyper::{HttpsClient, SdkError};
use aws_types::region::Region;
use smithy_http::body::SdkBody;
use smithy_http::endpoint::InvalidEndpoint;
use std::error::Error;

type BoxError = Box<dyn Error + Send + Sync>;

/// The Amazon RDS operations supported by this crate
#[async_trait::async_trait]
pub trait Rds {
    /// Route subsequent requests to `region`
    fn set_region(&mut self, region: Region);

    /// Send subsequent requests to `endpoint` instead of the regional endpoint
    fn set_endpoint(&mut self, endpoint: &str) -> Result<(), InvalidEndpoint>;

    /// Lists available reserved DB instance offerings.
    async fn describe_reserved_db_instances_offerings(
        &self,
        input: crate::input::DescribeReservedDbInstancesOfferingsInput,
    ) -> Result<
        crate::output::DescribeReservedDbInstancesOfferingsOutput,
        SdkError<crate::error::DescribeReservedDbInstancesOfferingsError>,
    >;
}

/// An RDS client
///
/// Dropping the client releases its connector.
#[derive(Clone, Debug)]
pub struct Client<C = HttpsClient> {
    client: aws_hyper::Client<C>,
    conf: Config,
}

impl Client {
    pub fn from_conf(conf: Config) -> Self {
        Client {
            client: aws_hyper::Client::https(),
            conf,
        }
    }

    pub fn from_env() -> Self {
        Self::from_conf(Config::from_env())
    }
}

impl<C> Client<C> {
    pub fn from_conf_conn(conf: Config, conn: C) -> Self {
        Client {
            client: aws_hyper::Client::new(conn),
            conf,
        }
    }

    pub fn conf(&self) -> &Config {
        &self.conf
    }
}

#[async_trait::async_trait]
impl<C> Rds for Client<C>
where
    C: tower::Service<http::Request<SdkBody>, Response = http::Response<hyper::Body>>
        + Send
        + Sync
        + Clone
        + 'static,
    C::Error: Into<BoxError> + Send + Sync + 'static,
    C::Future: Send + 'static,
{
    fn set_region(&mut self, region: Region) {
        self.conf.set_region(region);
    }

    fn set_endpoint(&mut self, endpoint: &str) -> Result<(), InvalidEndpoint> {
        self.conf.set_endpoint(endpoint)
    }

    async fn describe_reserved_db_instances_offerings(
        &self,
        input: crate::input::DescribeReservedDbInstancesOfferingsInput,
    ) -> Result<
        crate::output::DescribeReservedDbInstancesOfferingsOutput,
        SdkError<crate::error::DescribeReservedDbInstancesOfferingsError>,
    > {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }
}
