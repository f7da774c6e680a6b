/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_hyper::test_connection::TestConnection;
use aws_hyper::SdkError;
use gamelift::error::{
    CreateGameSessionErrorKind, CreatePlayerSessionErrorKind, DeleteFleetErrorKind,
    DescribeAliasErrorKind, UpdateGameSessionErrorKind,
};
use gamelift::input::{
    CreateBuildInput, CreateGameSessionInput, CreatePlayerSessionInput,
    CreatePlayerSessionsInput, DeleteAliasInput, DeleteFleetInput, DescribeAliasInput,
    DescribeBuildInput, ListFleetsInput, UpdateBuildInput, UpdateGameSessionInput,
};
use gamelift::model::{BuildStatus, GameProperty, RoutingStrategyType};
use gamelift::{Client, Config, GameLift, Region};
use http::Uri;
use smithy_http::body::SdkBody;
use smithy_types::retry::{ErrorKind, ProvideErrorKind};
use smithy_types::Instant;

fn conf() -> Config {
    Config::builder().region(Region::new("us-east-1")).build()
}

fn expected_request(target: &str, body: &'static str) -> http::Request<SdkBody> {
    http::Request::builder()
        .method("POST")
        .header("content-type", "application/x-amz-json-1.1")
        .header("x-amz-target", target)
        .uri(Uri::from_static("https://gamelift.us-east-1.amazonaws.com/"))
        .body(SdkBody::from(body))
        .unwrap()
}

fn error_response(code: &str, message: &str) -> http::Response<String> {
    http::Response::builder()
        .status(400)
        .header("x-amzn-requestid", "req-err")
        .body(format!(
            r#"{{"__type":"com.amazonaws.gamelift#{}","message":"{}"}}"#,
            code, message
        ))
        .unwrap()
}

const BUILD_BODY: &str = r#"{"Build":{"BuildId":"build-1","Name":"server","Version":"1.0","Status":"READY","SizeOnDisk":1048576,"CreationTime":1.4551488E9}}"#;

fn assert_build(build: Option<gamelift::model::Build>) {
    let build = build.expect("build was returned");
    assert_eq!(build.build_id.as_deref(), Some("build-1"));
    assert_eq!(build.name.as_deref(), Some("server"));
    assert_eq!(build.version.as_deref(), Some("1.0"));
    assert_eq!(build.status, Some(BuildStatus::Ready));
    assert_eq!(build.size_on_disk, Some(1_048_576));
    assert_eq!(build.creation_time, Some(Instant::from_secs(1_455_148_800)));
}

#[tokio::test]
async fn describe_alias() {
    let conn = TestConnection::new(vec![(
        expected_request("GameLift.DescribeAlias", r#"{"AliasId":"alias-1"}"#),
        http::Response::builder()
            .status(200)
            .header("x-amzn-requestid", "c5e3a1d5-0000-4000-8000-000000000001")
            .body(r#"{"Alias":{"AliasId":"alias-1","Name":"prod","RoutingStrategy":{"Type":"SIMPLE","FleetId":"fleet-1"},"CreationTime":1.4551488E9}}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(conf(), conn.clone());
    let output = client
        .describe_alias(DescribeAliasInput::builder().alias_id("alias-1").build().unwrap())
        .await
        .expect("request should succeed");
    let alias = output.alias.expect("alias was returned");
    assert_eq!(alias.name.as_deref(), Some("prod"));
    let strategy = alias.routing_strategy.unwrap();
    assert_eq!(strategy.r#type, Some(RoutingStrategyType::Simple));
    assert_eq!(strategy.fleet_id.as_deref(), Some("fleet-1"));
    assert_eq!(alias.creation_time, Some(Instant::from_secs(1_455_148_800)));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn modeled_errors_are_parsed() {
    let conn = TestConnection::new(vec![(
        expected_request("GameLift.DescribeAlias", r#"{"AliasId":"alias-404"}"#),
        http::Response::builder()
            .status(400)
            .header("x-amzn-requestid", "req-1")
            .body(r#"{"__type":"com.amazonaws.gamelift#NotFoundException","message":"No alias alias-404"}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(conf(), conn.clone());
    let err = client
        .describe_alias(DescribeAliasInput::builder().alias_id("alias-404").build().unwrap())
        .await
        .expect_err("alias does not exist");
    let err = err.into_service_error().expect("modeled error");
    assert!(err.is_not_found_exception());
    assert_eq!(err.message(), Some("No alias alias-404"));
    assert_eq!(err.request_id(), Some("req-1"));
    assert_eq!(err.retryable_error_kind(), None);
    match err.kind {
        DescribeAliasErrorKind::NotFoundException(inner) => {
            assert_eq!(inner.to_string(), "NotFoundException: No alias alias-404")
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
}

#[tokio::test]
async fn internal_errors_are_retryable() {
    let conn = TestConnection::new(vec![(
        http::Request::new(SdkBody::empty()),
        http::Response::builder()
            .status(500)
            .header("x-amzn-errortype", "InternalServiceException:http://internal.amazon.com/")
            .body(r#"{"Message":"try again"}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(conf(), conn);
    let input = CreateGameSessionInput::builder()
        .alias_id("alias-1")
        .maximum_player_session_count(8)
        .game_properties(GameProperty::builder().key("mode").value("ranked").build().unwrap())
        .build()
        .unwrap();
    let err = client
        .create_game_session(input)
        .await
        .expect_err("service failed")
        .into_service_error()
        .expect("modeled error");
    assert!(matches!(
        err.kind,
        CreateGameSessionErrorKind::InternalServiceException(_)
    ));
    assert_eq!(err.retryable_error_kind(), Some(ErrorKind::ServerError));
    assert_eq!(err.message(), Some("try again"));
}

#[tokio::test]
async fn unknown_error_codes_are_unhandled() {
    let conn = TestConnection::new(vec![(
        http::Request::new(SdkBody::empty()),
        http::Response::builder()
            .status(400)
            .body(r#"{"__type":"ThrottlingException"}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(conf(), conn);
    let err = client
        .list_fleets(ListFleetsInput::builder().build().unwrap())
        .await
        .expect_err("throttled")
        .into_service_error()
        .expect("service error");
    assert_eq!(err.code(), Some("ThrottlingException"));
    assert!(matches!(
        err.kind,
        gamelift::error::ListFleetsErrorKind::Unhandled(_)
    ));
}

#[tokio::test]
async fn empty_bodies_parse_as_empty_outputs() {
    let conn = TestConnection::new(vec![(
        expected_request("GameLift.DeleteAlias", r#"{"AliasId":"alias-1"}"#),
        http::Response::builder().status(200).body("").unwrap(),
    )]);
    let client = Client::from_conf_conn(conf(), conn.clone());
    client
        .delete_alias(DeleteAliasInput::builder().alias_id("alias-1").build().unwrap())
        .await
        .expect("delete succeeds");
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn malformed_responses_are_unhandled() {
    let conn = TestConnection::new(vec![(
        http::Request::new(SdkBody::empty()),
        // last `}` replaced with a space
        http::Response::builder()
            .status(200)
            .body(r#"{"PlayerSessions":[] "#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(conf(), conn);
    let input = CreatePlayerSessionsInput::builder()
        .game_session_id("gsess-1")
        .player_ids("player-1")
        .player_ids("player-2")
        .build()
        .unwrap();
    let err = client
        .create_player_sessions(input)
        .await
        .expect_err("response was malformed");
    assert!(matches!(
        err.service_error().map(|e| &e.kind),
        Some(gamelift::error::CreatePlayerSessionsErrorKind::Unhandled(_))
    ));
}

#[tokio::test]
async fn endpoint_and_region_setters() {
    let conn = TestConnection::new(vec![
        (
            http::Request::builder()
                .method("POST")
                .uri(Uri::from_static("https://gamelift.eu-west-1.amazonaws.com/"))
                .body(SdkBody::from(r#"{}"#))
                .unwrap(),
            http::Response::builder().status(200).body("{}").unwrap(),
        ),
        (
            http::Request::builder()
                .method("POST")
                .uri(Uri::from_static("http://localhost:9000/"))
                .body(SdkBody::from(r#"{}"#))
                .unwrap(),
            http::Response::builder().status(200).body("{}").unwrap(),
        ),
    ]);
    let mut client = Client::from_conf_conn(Config::builder().build(), conn.clone());

    // without a region or endpoint the request can't be constructed
    let err = client
        .list_fleets(ListFleetsInput::builder().build().unwrap())
        .await
        .expect_err("no region");
    assert!(matches!(err, SdkError::ConstructionFailure(_)));

    client.set_region(Region::new("eu-west-1"));
    client
        .list_fleets(ListFleetsInput::builder().build().unwrap())
        .await
        .expect("regional endpoint");

    client
        .set_endpoint("http://localhost:9000")
        .expect("valid endpoint");
    client
        .list_fleets(ListFleetsInput::builder().build().unwrap())
        .await
        .expect("endpoint override");
    assert!(client.set_endpoint("https://").is_err());

    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn create_build() {
    let conn = TestConnection::new(vec![(
        expected_request("GameLift.CreateBuild", r#"{"Name":"server","Version":"1.0"}"#),
        http::Response::builder()
            .status(200)
            .body(r#"{"Build":{"BuildId":"build-1","Name":"server","Version":"1.0","Status":"READY","SizeOnDisk":1048576,"CreationTime":1.4551488E9},"UploadCredentials":{"AccessKeyId":"AKID","SecretAccessKey":"secret","SessionToken":"token"},"StorageLocation":{"Bucket":"uploads","Key":"build-1.zip"}}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(conf(), conn.clone());
    let output = client
        .create_build(
            CreateBuildInput::builder()
                .name("server")
                .version("1.0")
                .build()
                .unwrap(),
        )
        .await
        .expect("request should succeed");
    assert_build(output.build);
    let credentials = output.upload_credentials.expect("credentials were returned");
    assert_eq!(credentials.access_key_id.as_deref(), Some("AKID"));
    assert_eq!(credentials.session_token.as_deref(), Some("token"));
    let location = output.storage_location.expect("location was returned");
    assert_eq!(location.bucket.as_deref(), Some("uploads"));
    assert_eq!(location.key.as_deref(), Some("build-1.zip"));
    assert_eq!(location.role_arn, None);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn describe_build() {
    let conn = TestConnection::new(vec![(
        expected_request("GameLift.DescribeBuild", r#"{"BuildId":"build-1"}"#),
        http::Response::builder().status(200).body(BUILD_BODY).unwrap(),
    )]);
    let client = Client::from_conf_conn(conf(), conn.clone());
    let output = client
        .describe_build(DescribeBuildInput::builder().build_id("build-1").build().unwrap())
        .await
        .expect("request should succeed");
    assert_build(output.build);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn update_build() {
    let conn = TestConnection::new(vec![(
        expected_request(
            "GameLift.UpdateBuild",
            r#"{"BuildId":"build-1","Name":"server","Version":"1.0"}"#,
        ),
        http::Response::builder().status(200).body(BUILD_BODY).unwrap(),
    )]);
    let client = Client::from_conf_conn(conf(), conn.clone());
    let output = client
        .update_build(
            UpdateBuildInput::builder()
                .build_id("build-1")
                .name("server")
                .version("1.0")
                .build()
                .unwrap(),
        )
        .await
        .expect("request should succeed");
    assert_build(output.build);
    conn.assert_requests_match(&[]);
}

fn create_player_session() -> CreatePlayerSessionInput {
    CreatePlayerSessionInput::builder()
        .game_session_id("gsess-1")
        .player_id("player-1")
        .build()
        .unwrap()
}

fn create_game_session() -> CreateGameSessionInput {
    CreateGameSessionInput::builder()
        .fleet_id("fleet-1")
        .maximum_player_session_count(4)
        .build()
        .unwrap()
}

#[tokio::test]
async fn game_session_full() {
    let conn = TestConnection::new(vec![(
        expected_request(
            "GameLift.CreatePlayerSession",
            r#"{"GameSessionId":"gsess-1","PlayerId":"player-1"}"#,
        ),
        error_response("GameSessionFullException", "gsess-1 is full"),
    )]);
    let client = Client::from_conf_conn(conf(), conn.clone());
    let err = client
        .create_player_session(create_player_session())
        .await
        .expect_err("session is full")
        .into_service_error()
        .expect("modeled error");
    assert!(err.is_game_session_full_exception());
    assert_eq!(err.request_id(), Some("req-err"));
    match err.kind {
        CreatePlayerSessionErrorKind::GameSessionFullException(inner) => {
            assert_eq!(inner.message(), Some("gsess-1 is full"))
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn invalid_game_session_status() {
    let conn = TestConnection::new(vec![
        (
            http::Request::new(SdkBody::empty()),
            error_response("InvalidGameSessionStatusException", "gsess-1 is TERMINATED"),
        ),
        (
            http::Request::new(SdkBody::empty()),
            error_response("InvalidGameSessionStatusException", "gsess-1 is TERMINATED"),
        ),
    ]);
    let client = Client::from_conf_conn(conf(), conn);
    let err = client
        .create_player_session(create_player_session())
        .await
        .expect_err("session terminated")
        .into_service_error()
        .expect("modeled error");
    assert!(err.is_invalid_game_session_status_exception());
    assert_eq!(err.message(), Some("gsess-1 is TERMINATED"));

    let err = client
        .update_game_session(
            UpdateGameSessionInput::builder()
                .game_session_id("gsess-1")
                .name("renamed")
                .build()
                .unwrap(),
        )
        .await
        .expect_err("session terminated")
        .into_service_error()
        .expect("modeled error");
    assert!(matches!(
        err.kind,
        UpdateGameSessionErrorKind::InvalidGameSessionStatusException(_)
    ));
}

#[tokio::test]
async fn terminal_routing_strategy() {
    let conn = TestConnection::new(vec![(
        expected_request(
            "GameLift.CreateGameSession",
            r#"{"AliasId":"alias-1","MaximumPlayerSessionCount":4}"#,
        ),
        error_response("TerminalRoutingStrategyException", "alias-1 is terminal"),
    )]);
    let client = Client::from_conf_conn(conf(), conn.clone());
    let err = client
        .create_game_session(
            CreateGameSessionInput::builder()
                .alias_id("alias-1")
                .maximum_player_session_count(4)
                .build()
                .unwrap(),
        )
        .await
        .expect_err("alias is terminal")
        .into_service_error()
        .expect("modeled error");
    assert!(err.is_terminal_routing_strategy_exception());
    assert!(matches!(
        err.kind,
        CreateGameSessionErrorKind::TerminalRoutingStrategyException(_)
    ));
    assert_eq!(err.retryable_error_kind(), None);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn invalid_fleet_status() {
    let conn = TestConnection::new(vec![
        (
            http::Request::new(SdkBody::empty()),
            error_response("InvalidFleetStatusException", "fleet-1 is ACTIVATING"),
        ),
        (
            expected_request("GameLift.DeleteFleet", r#"{"FleetId":"fleet-1"}"#),
            error_response("InvalidFleetStatusException", "fleet-1 is ACTIVATING"),
        ),
    ]);
    let client = Client::from_conf_conn(conf(), conn);
    let err = client
        .create_game_session(create_game_session())
        .await
        .expect_err("fleet not active")
        .into_service_error()
        .expect("modeled error");
    assert!(err.is_invalid_fleet_status_exception());

    let err = client
        .delete_fleet(DeleteFleetInput::builder().fleet_id("fleet-1").build().unwrap())
        .await
        .expect_err("fleet not active")
        .into_service_error()
        .expect("modeled error");
    match err.kind {
        DeleteFleetErrorKind::InvalidFleetStatusException(inner) => {
            assert_eq!(inner.message(), Some("fleet-1 is ACTIVATING"))
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
}

#[tokio::test]
async fn fleet_capacity_exceeded() {
    let conn = TestConnection::new(vec![(
        expected_request(
            "GameLift.CreateGameSession",
            r#"{"FleetId":"fleet-1","MaximumPlayerSessionCount":4}"#,
        ),
        error_response("FleetCapacityExceededException", "no available processes"),
    )]);
    let client = Client::from_conf_conn(conf(), conn.clone());
    let err = client
        .create_game_session(create_game_session())
        .await
        .expect_err("fleet is full")
        .into_service_error()
        .expect("modeled error");
    assert!(err.is_fleet_capacity_exceeded_exception());
    assert_eq!(
        err.to_string(),
        "FleetCapacityExceededException: no available processes"
    );
    conn.assert_requests_match(&[]);
}
