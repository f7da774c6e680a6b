/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! <fullname>Amazon GameLift Service</fullname>
//!
//! Amazon GameLift hosts session-based multiplayer game servers. This crate exposes the GameLift
//! API (version `2015-10-01`) over the AWS JSON 1.1 protocol.
//!
//! Each operation has an input with a validating builder, an output and an error type. With the
//! `client` feature (enabled by default), [`Client`] implements the [`GameLift`] trait and
//! dispatches operations over HTTPS.
//!
//! ```no_run
//! # #[cfg(feature = "client")]
//! # async fn docs() -> Result<(), Box<dyn std::error::Error>> {
//! use gamelift::{Client, Config, GameLift, Region};
//! use gamelift::input::DescribeAliasInput;
//!
//! let conf = Config::builder().region(Region::new("us-east-1")).build();
//! let client = Client::from_conf(conf);
//! let alias = client
//!     .describe_alias(DescribeAliasInput::builder().alias_id("alias-1234").build()?)
//!     .await?;
//! println!("{:?}", alias.alias);
//! # Ok(())
//! # }
//! ```

#![allow(clippy::module_inception)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::large_enum_variant)]
#![allow(clippy::wrong_self_convention)]
#![allow(clippy::should_implement_trait)]

#[cfg(feature = "client")]
mod client;
pub mod config;
pub mod error;
pub mod input;
mod json_errors;
mod json_ser;
pub mod model;
pub mod operation;
mod operation_deser;
pub mod output;
mod serde_util;

pub static PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const API_VERSION: &str = "2015-10-01";

#[cfg(feature = "client")]
pub use client::{Client, GameLift};
pub use config::{Config, ENDPOINT_PREFIX};
pub use aws_types::region::Region;
pub use smithy_http::endpoint::Endpoint;
