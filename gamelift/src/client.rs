/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::config::Config;
use aws_hyper::SdkError;
use aws_types::region::Region;
use aws_hyper::HttpsClient;
use smithy_http::body::SdkBody;
use smithy_http::endpoint::InvalidEndpoint;
use std::error::Error;

type BoxError = Box<dyn Error + Send + Sync>;

/// The GameLift service interface
///
/// Every operation marshals its input, dispatches it and parses the response into either the
/// modeled output or the operation's error. Nothing is retried: failures are classified and the
/// classification is logged.
#[async_trait::async_trait]
pub trait GameLift {
    /// Route subsequent requests to `region`
    fn set_region(&mut self, region: Region);

    /// Send subsequent requests to `endpoint` instead of the regional endpoint
    ///
    /// `endpoint` may be a bare host such as `gamelift.us-east-1.amazonaws.com`, in which case
    /// `https` is used, or a full URL.
    fn set_endpoint(&mut self, endpoint: &str) -> Result<(), InvalidEndpoint>;

    /// Creates an alias that routes players to a fleet or returns a terminal message.
    async fn create_alias(
        &self,
        input: crate::input::CreateAliasInput,
    ) -> Result<crate::output::CreateAliasOutput, SdkError<crate::error::CreateAliasError>>;

    /// Creates a build record and, when no storage location is given, reserves an upload location.
    async fn create_build(
        &self,
        input: crate::input::CreateBuildInput,
    ) -> Result<crate::output::CreateBuildOutput, SdkError<crate::error::CreateBuildError>>;

    /// Creates a fleet of EC2 instances running a build.
    async fn create_fleet(
        &self,
        input: crate::input::CreateFleetInput,
    ) -> Result<crate::output::CreateFleetOutput, SdkError<crate::error::CreateFleetError>>;

    /// Starts a game session on a fleet, or on the fleet an alias resolves to.
    async fn create_game_session(
        &self,
        input: crate::input::CreateGameSessionInput,
    ) -> Result<crate::output::CreateGameSessionOutput, SdkError<crate::error::CreateGameSessionError>>;

    /// Reserves a slot for one player in a game session.
    async fn create_player_session(
        &self,
        input: crate::input::CreatePlayerSessionInput,
    ) -> Result<crate::output::CreatePlayerSessionOutput, SdkError<crate::error::CreatePlayerSessionError>>;

    /// Reserves slots for a group of players in a game session.
    async fn create_player_sessions(
        &self,
        input: crate::input::CreatePlayerSessionsInput,
    ) -> Result<crate::output::CreatePlayerSessionsOutput, SdkError<crate::error::CreatePlayerSessionsError>>;

    /// Deletes an alias.
    async fn delete_alias(
        &self,
        input: crate::input::DeleteAliasInput,
    ) -> Result<crate::output::DeleteAliasOutput, SdkError<crate::error::DeleteAliasError>>;

    /// Deletes a build.
    async fn delete_build(
        &self,
        input: crate::input::DeleteBuildInput,
    ) -> Result<crate::output::DeleteBuildOutput, SdkError<crate::error::DeleteBuildError>>;

    /// Deletes a fleet that has been scaled down to zero instances.
    async fn delete_fleet(
        &self,
        input: crate::input::DeleteFleetInput,
    ) -> Result<crate::output::DeleteFleetOutput, SdkError<crate::error::DeleteFleetError>>;

    /// Deletes a fleet scaling policy.
    async fn delete_scaling_policy(
        &self,
        input: crate::input::DeleteScalingPolicyInput,
    ) -> Result<crate::output::DeleteScalingPolicyOutput, SdkError<crate::error::DeleteScalingPolicyError>>;

    /// Retrieves the properties of an alias.
    async fn describe_alias(
        &self,
        input: crate::input::DescribeAliasInput,
    ) -> Result<crate::output::DescribeAliasOutput, SdkError<crate::error::DescribeAliasError>>;

    /// Retrieves the properties of a build.
    async fn describe_build(
        &self,
        input: crate::input::DescribeBuildInput,
    ) -> Result<crate::output::DescribeBuildOutput, SdkError<crate::error::DescribeBuildError>>;

    /// Retrieves instance usage and limits for the account.
    async fn describe_ec2_instance_limits(
        &self,
        input: crate::input::DescribeEc2InstanceLimitsInput,
    ) -> Result<crate::output::DescribeEc2InstanceLimitsOutput, SdkError<crate::error::DescribeEc2InstanceLimitsError>>;

    /// Retrieves the general properties of fleets.
    async fn describe_fleet_attributes(
        &self,
        input: crate::input::DescribeFleetAttributesInput,
    ) -> Result<crate::output::DescribeFleetAttributesOutput, SdkError<crate::error::DescribeFleetAttributesError>>;

    /// Retrieves the current instance counts of fleets.
    async fn describe_fleet_capacity(
        &self,
        input: crate::input::DescribeFleetCapacityInput,
    ) -> Result<crate::output::DescribeFleetCapacityOutput, SdkError<crate::error::DescribeFleetCapacityError>>;

    /// Retrieves lifecycle events for a fleet.
    async fn describe_fleet_events(
        &self,
        input: crate::input::DescribeFleetEventsInput,
    ) -> Result<crate::output::DescribeFleetEventsOutput, SdkError<crate::error::DescribeFleetEventsError>>;

    /// Retrieves the inbound connection permissions of a fleet.
    async fn describe_fleet_port_settings(
        &self,
        input: crate::input::DescribeFleetPortSettingsInput,
    ) -> Result<crate::output::DescribeFleetPortSettingsOutput, SdkError<crate::error::DescribeFleetPortSettingsError>>;

    /// Retrieves game and player session usage of fleets.
    async fn describe_fleet_utilization(
        &self,
        input: crate::input::DescribeFleetUtilizationInput,
    ) -> Result<crate::output::DescribeFleetUtilizationOutput, SdkError<crate::error::DescribeFleetUtilizationError>>;

    /// Retrieves game sessions together with their protection policies.
    async fn describe_game_session_details(
        &self,
        input: crate::input::DescribeGameSessionDetailsInput,
    ) -> Result<crate::output::DescribeGameSessionDetailsOutput, SdkError<crate::error::DescribeGameSessionDetailsError>>;

    /// Retrieves the properties of game sessions.
    async fn describe_game_sessions(
        &self,
        input: crate::input::DescribeGameSessionsInput,
    ) -> Result<crate::output::DescribeGameSessionsOutput, SdkError<crate::error::DescribeGameSessionsError>>;

    /// Retrieves the properties of player sessions.
    async fn describe_player_sessions(
        &self,
        input: crate::input::DescribePlayerSessionsInput,
    ) -> Result<crate::output::DescribePlayerSessionsOutput, SdkError<crate::error::DescribePlayerSessionsError>>;

    /// Retrieves the scaling policies of a fleet.
    async fn describe_scaling_policies(
        &self,
        input: crate::input::DescribeScalingPoliciesInput,
    ) -> Result<crate::output::DescribeScalingPoliciesOutput, SdkError<crate::error::DescribeScalingPoliciesError>>;

    /// Retrieves a pre-signed URL for the logs of a terminated game session.
    async fn get_game_session_log_url(
        &self,
        input: crate::input::GetGameSessionLogUrlInput,
    ) -> Result<crate::output::GetGameSessionLogUrlOutput, SdkError<crate::error::GetGameSessionLogUrlError>>;

    /// Lists aliases, optionally filtered by routing strategy or name.
    async fn list_aliases(
        &self,
        input: crate::input::ListAliasesInput,
    ) -> Result<crate::output::ListAliasesOutput, SdkError<crate::error::ListAliasesError>>;

    /// Lists builds, optionally filtered by status.
    async fn list_builds(
        &self,
        input: crate::input::ListBuildsInput,
    ) -> Result<crate::output::ListBuildsOutput, SdkError<crate::error::ListBuildsError>>;

    /// Lists fleet ids, optionally only those running a build.
    async fn list_fleets(
        &self,
        input: crate::input::ListFleetsInput,
    ) -> Result<crate::output::ListFleetsOutput, SdkError<crate::error::ListFleetsError>>;

    /// Creates or updates a fleet scaling policy.
    async fn put_scaling_policy(
        &self,
        input: crate::input::PutScalingPolicyInput,
    ) -> Result<crate::output::PutScalingPolicyOutput, SdkError<crate::error::PutScalingPolicyError>>;

    /// Retrieves fresh credentials for uploading a build.
    async fn request_upload_credentials(
        &self,
        input: crate::input::RequestUploadCredentialsInput,
    ) -> Result<crate::output::RequestUploadCredentialsOutput, SdkError<crate::error::RequestUploadCredentialsError>>;

    /// Retrieves the fleet an alias currently points to.
    async fn resolve_alias(
        &self,
        input: crate::input::ResolveAliasInput,
    ) -> Result<crate::output::ResolveAliasOutput, SdkError<crate::error::ResolveAliasError>>;

    /// Updates the properties of an alias.
    async fn update_alias(
        &self,
        input: crate::input::UpdateAliasInput,
    ) -> Result<crate::output::UpdateAliasOutput, SdkError<crate::error::UpdateAliasError>>;

    /// Updates the name and version of a build.
    async fn update_build(
        &self,
        input: crate::input::UpdateBuildInput,
    ) -> Result<crate::output::UpdateBuildOutput, SdkError<crate::error::UpdateBuildError>>;

    /// Updates the general properties of a fleet.
    async fn update_fleet_attributes(
        &self,
        input: crate::input::UpdateFleetAttributesInput,
    ) -> Result<crate::output::UpdateFleetAttributesOutput, SdkError<crate::error::UpdateFleetAttributesError>>;

    /// Sets the desired instance count of a fleet.
    async fn update_fleet_capacity(
        &self,
        input: crate::input::UpdateFleetCapacityInput,
    ) -> Result<crate::output::UpdateFleetCapacityOutput, SdkError<crate::error::UpdateFleetCapacityError>>;

    /// Adds and removes inbound connection permissions of a fleet.
    async fn update_fleet_port_settings(
        &self,
        input: crate::input::UpdateFleetPortSettingsInput,
    ) -> Result<crate::output::UpdateFleetPortSettingsOutput, SdkError<crate::error::UpdateFleetPortSettingsError>>;

    /// Updates the properties of a game session.
    async fn update_game_session(
        &self,
        input: crate::input::UpdateGameSessionInput,
    ) -> Result<crate::output::UpdateGameSessionOutput, SdkError<crate::error::UpdateGameSessionError>>;

}

/// GameLift client dispatching over the connector `C`
///
/// Dropping the client releases its connections.
#[derive(Clone, Debug)]
pub struct Client<C = HttpsClient> {
    client: aws_hyper::Client<C>,
    conf: Config,
}

impl Client {
    /// Create a client using the default HTTPS connector
    pub fn from_conf(conf: Config) -> Self {
        Client {
            client: aws_hyper::Client::https(),
            conf,
        }
    }

    /// Create a client configured from the process environment
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
impl<C> GameLift for Client<C>
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

    async fn create_alias(
        &self,
        input: crate::input::CreateAliasInput,
    ) -> Result<crate::output::CreateAliasOutput, SdkError<crate::error::CreateAliasError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn create_build(
        &self,
        input: crate::input::CreateBuildInput,
    ) -> Result<crate::output::CreateBuildOutput, SdkError<crate::error::CreateBuildError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn create_fleet(
        &self,
        input: crate::input::CreateFleetInput,
    ) -> Result<crate::output::CreateFleetOutput, SdkError<crate::error::CreateFleetError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn create_game_session(
        &self,
        input: crate::input::CreateGameSessionInput,
    ) -> Result<crate::output::CreateGameSessionOutput, SdkError<crate::error::CreateGameSessionError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn create_player_session(
        &self,
        input: crate::input::CreatePlayerSessionInput,
    ) -> Result<crate::output::CreatePlayerSessionOutput, SdkError<crate::error::CreatePlayerSessionError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn create_player_sessions(
        &self,
        input: crate::input::CreatePlayerSessionsInput,
    ) -> Result<crate::output::CreatePlayerSessionsOutput, SdkError<crate::error::CreatePlayerSessionsError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn delete_alias(
        &self,
        input: crate::input::DeleteAliasInput,
    ) -> Result<crate::output::DeleteAliasOutput, SdkError<crate::error::DeleteAliasError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn delete_build(
        &self,
        input: crate::input::DeleteBuildInput,
    ) -> Result<crate::output::DeleteBuildOutput, SdkError<crate::error::DeleteBuildError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn delete_fleet(
        &self,
        input: crate::input::DeleteFleetInput,
    ) -> Result<crate::output::DeleteFleetOutput, SdkError<crate::error::DeleteFleetError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn delete_scaling_policy(
        &self,
        input: crate::input::DeleteScalingPolicyInput,
    ) -> Result<crate::output::DeleteScalingPolicyOutput, SdkError<crate::error::DeleteScalingPolicyError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn describe_alias(
        &self,
        input: crate::input::DescribeAliasInput,
    ) -> Result<crate::output::DescribeAliasOutput, SdkError<crate::error::DescribeAliasError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn describe_build(
        &self,
        input: crate::input::DescribeBuildInput,
    ) -> Result<crate::output::DescribeBuildOutput, SdkError<crate::error::DescribeBuildError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn describe_ec2_instance_limits(
        &self,
        input: crate::input::DescribeEc2InstanceLimitsInput,
    ) -> Result<crate::output::DescribeEc2InstanceLimitsOutput, SdkError<crate::error::DescribeEc2InstanceLimitsError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn describe_fleet_attributes(
        &self,
        input: crate::input::DescribeFleetAttributesInput,
    ) -> Result<crate::output::DescribeFleetAttributesOutput, SdkError<crate::error::DescribeFleetAttributesError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn describe_fleet_capacity(
        &self,
        input: crate::input::DescribeFleetCapacityInput,
    ) -> Result<crate::output::DescribeFleetCapacityOutput, SdkError<crate::error::DescribeFleetCapacityError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn describe_fleet_events(
        &self,
        input: crate::input::DescribeFleetEventsInput,
    ) -> Result<crate::output::DescribeFleetEventsOutput, SdkError<crate::error::DescribeFleetEventsError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn describe_fleet_port_settings(
        &self,
        input: crate::input::DescribeFleetPortSettingsInput,
    ) -> Result<crate::output::DescribeFleetPortSettingsOutput, SdkError<crate::error::DescribeFleetPortSettingsError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn describe_fleet_utilization(
        &self,
        input: crate::input::DescribeFleetUtilizationInput,
    ) -> Result<crate::output::DescribeFleetUtilizationOutput, SdkError<crate::error::DescribeFleetUtilizationError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn describe_game_session_details(
        &self,
        input: crate::input::DescribeGameSessionDetailsInput,
    ) -> Result<crate::output::DescribeGameSessionDetailsOutput, SdkError<crate::error::DescribeGameSessionDetailsError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn describe_game_sessions(
        &self,
        input: crate::input::DescribeGameSessionsInput,
    ) -> Result<crate::output::DescribeGameSessionsOutput, SdkError<crate::error::DescribeGameSessionsError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn describe_player_sessions(
        &self,
        input: crate::input::DescribePlayerSessionsInput,
    ) -> Result<crate::output::DescribePlayerSessionsOutput, SdkError<crate::error::DescribePlayerSessionsError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn describe_scaling_policies(
        &self,
        input: crate::input::DescribeScalingPoliciesInput,
    ) -> Result<crate::output::DescribeScalingPoliciesOutput, SdkError<crate::error::DescribeScalingPoliciesError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn get_game_session_log_url(
        &self,
        input: crate::input::GetGameSessionLogUrlInput,
    ) -> Result<crate::output::GetGameSessionLogUrlOutput, SdkError<crate::error::GetGameSessionLogUrlError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn list_aliases(
        &self,
        input: crate::input::ListAliasesInput,
    ) -> Result<crate::output::ListAliasesOutput, SdkError<crate::error::ListAliasesError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn list_builds(
        &self,
        input: crate::input::ListBuildsInput,
    ) -> Result<crate::output::ListBuildsOutput, SdkError<crate::error::ListBuildsError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn list_fleets(
        &self,
        input: crate::input::ListFleetsInput,
    ) -> Result<crate::output::ListFleetsOutput, SdkError<crate::error::ListFleetsError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn put_scaling_policy(
        &self,
        input: crate::input::PutScalingPolicyInput,
    ) -> Result<crate::output::PutScalingPolicyOutput, SdkError<crate::error::PutScalingPolicyError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn request_upload_credentials(
        &self,
        input: crate::input::RequestUploadCredentialsInput,
    ) -> Result<crate::output::RequestUploadCredentialsOutput, SdkError<crate::error::RequestUploadCredentialsError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn resolve_alias(
        &self,
        input: crate::input::ResolveAliasInput,
    ) -> Result<crate::output::ResolveAliasOutput, SdkError<crate::error::ResolveAliasError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn update_alias(
        &self,
        input: crate::input::UpdateAliasInput,
    ) -> Result<crate::output::UpdateAliasOutput, SdkError<crate::error::UpdateAliasError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn update_build(
        &self,
        input: crate::input::UpdateBuildInput,
    ) -> Result<crate::output::UpdateBuildOutput, SdkError<crate::error::UpdateBuildError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn update_fleet_attributes(
        &self,
        input: crate::input::UpdateFleetAttributesInput,
    ) -> Result<crate::output::UpdateFleetAttributesOutput, SdkError<crate::error::UpdateFleetAttributesError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn update_fleet_capacity(
        &self,
        input: crate::input::UpdateFleetCapacityInput,
    ) -> Result<crate::output::UpdateFleetCapacityOutput, SdkError<crate::error::UpdateFleetCapacityError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn update_fleet_port_settings(
        &self,
        input: crate::input::UpdateFleetPortSettingsInput,
    ) -> Result<crate::output::UpdateFleetPortSettingsOutput, SdkError<crate::error::UpdateFleetPortSettingsError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }

    async fn update_game_session(
        &self,
        input: crate::input::UpdateGameSessionInput,
    ) -> Result<crate::output::UpdateGameSessionOutput, SdkError<crate::error::UpdateGameSessionError>> {
        let op = input
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.client.call(op).await
    }
}
