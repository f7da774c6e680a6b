/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use gamelift::model::{Ec2InstanceType, GameProperty, RoutingStrategy, RoutingStrategyType};
use smithy_http::operation::BuildError;

#[test]
fn enums_keep_unknown_values() {
    assert_eq!(Ec2InstanceType::from("t2.micro"), Ec2InstanceType::T2Micro);
    assert_eq!(Ec2InstanceType::T2Micro.as_str(), "t2.micro");
    let future: Ec2InstanceType = "x9.mega".parse().unwrap();
    assert_eq!(future, Ec2InstanceType::Unknown("x9.mega".to_string()));
    assert_eq!(future.as_str(), "x9.mega");
    assert!(RoutingStrategyType::values().contains(&"TERMINAL"));
}

#[test]
fn enums_serialize_as_wire_strings() {
    let strategy = RoutingStrategy::builder()
        .r#type(RoutingStrategyType::Terminal)
        .message("Down for maintenance")
        .build();
    let json = serde_json::to_value(&strategy).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"Type": "TERMINAL", "Message": "Down for maintenance"})
    );
    let parsed: RoutingStrategy =
        serde_json::from_str(r#"{"Type":"WEIGHTED","FleetId":"fleet-1"}"#).unwrap();
    assert_eq!(
        parsed.r#type,
        Some(RoutingStrategyType::Unknown("WEIGHTED".to_string()))
    );
}

#[test]
fn required_model_members() {
    let err = GameProperty::builder().key("mode").build().unwrap_err();
    assert!(matches!(err, BuildError::MissingField { field: "value", .. }));
}
