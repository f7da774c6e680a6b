/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! <fullname>Amazon Relational Database Service</fullname>
//!
//! This crate implements `DescribeReservedDBInstancesOfferings` from the Amazon RDS API (version
//! `2014-10-31`) over the AWS Query protocol. Requests are form-encoded by
//! [`DescribeReservedDbInstancesOfferingsMarshaller`](query_ser::DescribeReservedDbInstancesOfferingsMarshaller)
//! and responses are decoded from XML.
//!
//! ```no_run
//! # #[cfg(feature = "client")]
//! # async fn docs() -> Result<(), Box<dyn std::error::Error>> {
//! use rds::{Client, Config, Rds, Region};
//! use rds::input::DescribeReservedDbInstancesOfferingsInput;
//!
//! let client = Client::from_conf(Config::builder().region(Region::new("us-east-1")).build());
//! let input = DescribeReservedDbInstancesOfferingsInput::builder()
//!     .db_instance_class("db.m4.large")
//!     .multi_az(true)
//!     .build()?;
//! let offerings = client.describe_reserved_db_instances_offerings(input).await?;
//! println!("{:?}", offerings.reserved_db_instances_offerings);
//! # Ok(())
//! # }
//! ```

#![allow(clippy::module_inception)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::new_without_default)]

#[cfg(feature = "client")]
mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod operation;
mod operation_deser;
pub mod output;
pub mod query_ser;
mod xml_deser;

pub static PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const API_VERSION: &str = "2014-10-31";

#[cfg(feature = "client")]
pub use client::{Client, Rds};
pub use config::{Config, ENDPOINT_PREFIX};
pub use aws_types::region::Region;
pub use smithy_http::endpoint::Endpoint;
