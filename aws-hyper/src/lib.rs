/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[cfg(feature = "test-util")]
pub mod test_connection;

use aws_endpoint::AwsEndpointStage;
use aws_http::user_agent::UserAgentStage;
use hyper::client::HttpConnector;
use hyper_tls::HttpsConnector;
use smithy_http::body::SdkBody;
use smithy_http::operation::Operation;
use smithy_http::response::ParseHttpResponse;
use smithy_http::retry::ClassifyResponse;
use smithy_http_tower::dispatch::DispatchLayer;
use smithy_http_tower::map_request::MapRequestLayer;
use smithy_http_tower::parse_response::ParseResponseLayer;
use smithy_types::retry::ProvideErrorKind;
use std::error::Error;
use tower::{Service, ServiceBuilder, ServiceExt};
use tracing::{debug, debug_span, trace, Instrument};

type BoxError = Box<dyn Error + Send + Sync>;
pub type SdkError<E> = smithy_http::result::SdkError<E, hyper::Body>;
pub type SdkSuccess<T> = smithy_http::result::SdkSuccess<T, hyper::Body>;

/// Dispatches operations over a [`tower::Service`] connector
///
/// Every operation passes through the same middleware stack:
/// 1. [`AwsEndpointStage`] resolves the endpoint from the region or endpoint override
/// 2. [`UserAgentStage`] sets `User-Agent` and `x-amz-user-agent`
/// 3. the connector sends the request
/// 4. the response body is loaded and handed to the operation's response handler
///
/// Failed responses are classified with the operation's retry policy and the classification is
/// logged. The client never retries.
#[derive(Clone, Debug)]
pub struct Client<S> {
    inner: S,
}

impl<S> Client<S> {
    /// Create a client dispatching over `connector`
    pub fn new(connector: S) -> Self {
        Client { inner: connector }
    }
}

/// The default connector: hyper with native-tls
pub type HttpsClient = hyper::Client<HttpsConnector<HttpConnector>, SdkBody>;

impl Client<HttpsClient> {
    /// Create a client dispatching over hyper with a native-tls connector
    pub fn https() -> Self {
        let https = HttpsConnector::new();
        let client = hyper::Client::builder().build::<_, SdkBody>(https);
        Client { inner: client }
    }
}

impl<S> Client<S>
where
    S: Service<http::Request<SdkBody>, Response = http::Response<hyper::Body>>
        + Send
        + Sync
        + Clone
        + 'static,
    S::Error: Into<BoxError> + Send + Sync + 'static,
    S::Future: Send + 'static,
{
    /// Dispatch this request to the network
    ///
    /// For ergonomics, this does not include the raw response for successful responses. To
    /// access the raw response use `call_raw`.
    pub async fn call<O, T, E, R>(&self, input: Operation<O, R>) -> Result<T, SdkError<E>>
    where
        O: ParseHttpResponse<hyper::Body, Output = Result<T, E>> + Send + Sync + 'static,
        E: Error + ProvideErrorKind + Send + 'static,
        T: Send + 'static,
        R: ClassifyResponse + Clone + Send + Sync + 'static,
    {
        self.call_raw(input).await.map(|res| res.parsed)
    }

    /// Dispatch this request to the network
    ///
    /// The returned result contains the raw HTTP response which can be useful for debugging or
    /// implementing unsupported features.
    pub async fn call_raw<O, T, E, R>(
        &self,
        input: Operation<O, R>,
    ) -> Result<SdkSuccess<T>, SdkError<E>>
    where
        O: ParseHttpResponse<hyper::Body, Output = Result<T, E>> + Send + Sync + 'static,
        E: Error + ProvideErrorKind + Send + 'static,
        T: Send + 'static,
        R: ClassifyResponse + Clone + Send + Sync + 'static,
    {
        let classifier = input.retry_policy().clone();
        let span = match input.metadata() {
            Some(metadata) => debug_span!(
                "dispatch",
                operation = metadata.name(),
                service = metadata.service()
            ),
            None => debug_span!("dispatch"),
        };
        let mut svc = ServiceBuilder::new()
            .layer(ParseResponseLayer::<O, R>::new())
            // These layers can be considered as occurring in order: resolve the endpoint, set
            // the user agent, then dispatch over the wire.
            .layer(MapRequestLayer::for_mapper(AwsEndpointStage))
            .layer(MapRequestLayer::for_mapper(UserAgentStage::new()))
            .layer(DispatchLayer::new())
            .service(self.inner.clone());
        let result = async {
            let svc = svc.ready().await?;
            svc.call(input).await
        }
        .instrument(span.clone())
        .await;
        span.in_scope(|| match &result {
            Ok(success) => trace!(response = ?success.raw, "operation succeeded"),
            Err(SdkError::ServiceError { raw, err }) => {
                let retry_kind = classifier.classify(err, raw);
                debug!(
                    status = raw.status().as_u16(),
                    error = %err,
                    retry_kind = ?retry_kind,
                    "service returned an error"
                );
            }
            Err(err) => debug!(error = %err, "operation failed"),
        });
        result
    }
}

#[cfg(test)]
mod test {
    use crate::Client;
    use smithy_http::body::SdkBody;

    #[test]
    fn client_is_send_sync_clone() {
        fn check<T: Send + Sync + Clone>(_: &T) {}
        let client = Client::new(tower::service_fn(|_req: http::Request<SdkBody>| async {
            Result::<_, std::convert::Infallible>::Ok(http::Response::new(hyper::Body::empty()))
        }));
        check(&client);
    }
}
