/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_http::AwsErrorRetryPolicy;
use http::header::{HeaderName, CONTENT_LENGTH, CONTENT_TYPE};
use serde::Serialize;
use smithy_http::body::SdkBody;
use smithy_http::operation;
use smithy_http::operation::{BuildError, Metadata, Operation};

const CONTENT_TYPE_JSON_1_1: &str = "application/x-amz-json-1.1";
const TARGET_PREFIX: &str = "GameLift";

/// Build the AWS JSON 1.1 request for `operation_name`: `POST /` with the serialized input as body
pub(crate) fn build_request(
    operation_name: &str,
    body: Vec<u8>,
) -> Result<http::Request<SdkBody>, BuildError> {
    let request = http::Request::builder()
        .method("POST")
        .uri("/")
        .header(CONTENT_TYPE, CONTENT_TYPE_JSON_1_1)
        .header(
            HeaderName::from_static("x-amz-target"),
            format!("{}.{}", TARGET_PREFIX, operation_name),
        )
        .header(CONTENT_LENGTH, body.len())
        .body(SdkBody::from(body))?;
    Ok(request)
}

pub(crate) fn make_operation<I, O>(
    input: &I,
    operation_name: &'static str,
    handler: O,
    config: &crate::config::Config,
) -> Result<Operation<O, AwsErrorRetryPolicy>, BuildError>
where
    I: Serialize,
{
    let body = crate::serde_util::to_body(input)
        .map_err(|err| BuildError::SerializationError(err.into()))?;
    let mut request = operation::Request::new(build_request(operation_name, body)?);
    config.configure_request(request.properties_mut());
    Ok(Operation::new(request, handler)
        .with_metadata(Metadata::new(operation_name, "gamelift"))
        .with_retry_policy(AwsErrorRetryPolicy::new()))
}

#[cfg(test)]
mod test {
    use crate::config::Config;
    use crate::input::{CreateAliasInput, DescribeFleetEventsInput, ListAliasesInput};
    use crate::model::{RoutingStrategy, RoutingStrategyType};
    use aws_types::region::Region;
    use protocol_test_helpers::{assert_ok, validate_body, validate_headers, MediaType};
    use smithy_http::operation::BuildError;
    use smithy_types::Instant;

    fn conf() -> Config {
        Config::builder().region(Region::new("us-east-1")).build()
    }

    #[test]
    fn empty_input_serializes_to_empty_object() {
        let input = ListAliasesInput::builder().build().unwrap();
        let op = input.make_operation(&conf()).expect("valid operation");
        let req = op.request().http();
        assert_eq!(req.method(), "POST");
        assert_eq!(req.uri(), "/");
        assert_ok(validate_headers(
            req,
            &[
                ("content-type", "application/x-amz-json-1.1"),
                ("x-amz-target", "GameLift.ListAliases"),
                ("content-length", "2"),
            ],
        ));
        assert_eq!(req.body().bytes(), Some("{}".as_bytes()));
        assert_eq!(op.metadata().unwrap().name(), "ListAliases");
        assert_eq!(op.metadata().unwrap().service(), "gamelift");
    }

    #[test]
    fn members_use_wire_names() {
        let input = CreateAliasInput::builder()
            .name("prod")
            .routing_strategy(
                RoutingStrategy::builder()
                    .r#type(RoutingStrategyType::Terminal)
                    .message("down for maintenance")
                    .build(),
            )
            .build()
            .unwrap();
        let op = input.make_operation(&conf()).unwrap();
        assert_ok(validate_body(
            op.request().http().body().bytes().unwrap(),
            r#"{"Name":"prod","RoutingStrategy":{"Type":"TERMINAL","Message":"down for maintenance"}}"#,
            MediaType::Json,
        ));
    }

    #[test]
    fn timestamps_are_epoch_seconds() {
        let input = DescribeFleetEventsInput::builder()
            .fleet_id("fleet-1")
            .start_time(Instant::from_secs(1_455_148_800))
            .limit(10)
            .build()
            .unwrap();
        let op = input.make_operation(&conf()).unwrap();
        assert_ok(validate_body(
            op.request().http().body().bytes().unwrap(),
            r#"{"FleetId":"fleet-1","StartTime":1455148800,"Limit":10}"#,
            MediaType::Json,
        ));
    }

    #[test]
    fn required_members_are_validated() {
        let err = CreateAliasInput::builder()
            .name("prod")
            .build()
            .expect_err("routing strategy is required");
        assert!(matches!(
            err,
            BuildError::MissingField {
                field: "routing_strategy",
                ..
            }
        ));
    }
}
