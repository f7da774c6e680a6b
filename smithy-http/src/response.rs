/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::Response;

/// `ParseHttpResponse` is a generic trait for parsing structured data from HTTP responses.
///
/// The split between `parse_unloaded` and `parse_loaded` keeps the parsing code pure and sync
/// whenever possible and delegates the process of actually reading the HTTP response to the caller
/// when the required behavior is simply "read to the end."
pub trait ParseHttpResponse<B> {
    /// Output type of the HttpResponse.
    ///
    /// For request/response style operations, this is typically something like:
    /// `Result<DescribeAliasOutput, DescribeAliasError>`
    type Output;

    /// Parse an HTTP request without reading the body. If the body must be provided to proceed,
    /// return `None`
    fn parse_unloaded(&self, response: &mut http::Response<B>) -> Option<Self::Output>;

    /// Parse an HTTP request from a fully loaded body.
    fn parse_loaded(&self, response: &http::Response<Bytes>) -> Self::Output;
}

/// Convenience Trait for non-streaming APIs
///
/// `ParseStrictResponse` enables operations that _never_ need to stream the body incrementally to
/// have cleaner implementations. There is a blanket implementation of [`ParseHttpResponse`].
pub trait ParseStrictResponse {
    type Output;
    fn parse(&self, response: &Response<Bytes>) -> Self::Output;
}

impl<B, T> ParseHttpResponse<B> for T
where
    T: ParseStrictResponse,
{
    type Output = T::Output;

    fn parse_unloaded(&self, _response: &mut Response<B>) -> Option<Self::Output> {
        None
    }

    fn parse_loaded(&self, response: &Response<Bytes>) -> Self::Output {
        self.parse(response)
    }
}

#[cfg(test)]
mod test {
    use crate::response::{ParseHttpResponse, ParseStrictResponse};
    use bytes::Bytes;
    use http::Response;

    struct StatusAndLength;

    impl ParseStrictResponse for StatusAndLength {
        type Output = (u16, usize);

        fn parse(&self, response: &Response<Bytes>) -> Self::Output {
            (response.status().as_u16(), response.body().len())
        }
    }

    #[test]
    fn strict_parsers_always_need_the_body() {
        let mut unloaded = Response::builder().status(200).body(()).unwrap();
        assert!(
            ParseHttpResponse::<()>::parse_unloaded(&StatusAndLength, &mut unloaded).is_none()
        );
        let loaded = Response::builder()
            .status(400)
            .body(Bytes::from_static(b"{}"))
            .unwrap();
        assert_eq!(
            ParseHttpResponse::<()>::parse_loaded(&StatusAndLength, &loaded),
            (400, 2)
        );
    }
}
