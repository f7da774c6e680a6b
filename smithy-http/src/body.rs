/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::{HeaderMap, HeaderValue};
use std::error::Error;
use std::pin::Pin;
use std::task::{Context, Poll};

type BodyError = Box<dyn Error + Send + Sync>;

/// SdkBody type
///
/// This is the Body used for dispatching all HTTP Requests. Marshalled request bodies are always
/// fully loaded, so unlike a streaming body, an `SdkBody` can always be cloned and its bytes can be
/// inspected without consuming it.
#[derive(Debug)]
pub struct SdkBody(Inner);

#[derive(Debug)]
enum Inner {
    Once(Option<Bytes>),
}

impl SdkBody {
    pub fn empty() -> Self {
        SdkBody(Inner::Once(None))
    }

    fn poll_inner(&mut self) -> Poll<Option<Result<Bytes, BodyError>>> {
        match &mut self.0 {
            Inner::Once(ref mut opt) => {
                let data = opt.take();
                match data {
                    Some(bytes) if bytes.is_empty() => Poll::Ready(None),
                    Some(bytes) => Poll::Ready(Some(Ok(bytes))),
                    None => Poll::Ready(None),
                }
            }
        }
    }

    /// If possible, return a reference to this body as `&[u8]`
    ///
    /// A body that has already been polled to completion is empty.
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.0 {
            Inner::Once(Some(b)) => Some(b),
            Inner::Once(None) => Some(&[]),
        }
    }

    pub fn try_clone(&self) -> Option<Self> {
        match &self.0 {
            Inner::Once(bytes) => Some(SdkBody(Inner::Once(bytes.clone()))),
        }
    }

    pub fn content_length(&self) -> Option<u64> {
        self.bytes().map(|b| b.len() as u64)
    }
}

impl From<&str> for SdkBody {
    fn from(s: &str) -> Self {
        SdkBody::from(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for SdkBody {
    fn from(s: String) -> Self {
        SdkBody::from(Bytes::from(s))
    }
}

impl From<Bytes> for SdkBody {
    fn from(bytes: Bytes) -> Self {
        SdkBody(Inner::Once(Some(bytes)))
    }
}

impl From<Vec<u8>> for SdkBody {
    fn from(data: Vec<u8>) -> Self {
        Self::from(Bytes::from(data))
    }
}

impl http_body::Body for SdkBody {
    type Data = Bytes;
    type Error = BodyError;

    fn poll_data(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Self::Data, Self::Error>>> {
        self.poll_inner()
    }

    fn poll_trailers(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Result<Option<HeaderMap<HeaderValue>>, Self::Error>> {
        Poll::Ready(Ok(None))
    }

    fn is_end_stream(&self) -> bool {
        match &self.0 {
            Inner::Once(None) => true,
            Inner::Once(Some(bytes)) => bytes.is_empty(),
        }
    }

    fn size_hint(&self) -> http_body::SizeHint {
        match &self.0 {
            Inner::Once(None) => http_body::SizeHint::with_exact(0),
            Inner::Once(Some(bytes)) => http_body::SizeHint::with_exact(bytes.len() as u64),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use http_body::Body;

    #[tokio::test]
    async fn body_is_yielded_once() {
        let mut body = SdkBody::from("Action=DescribeAlias");
        assert_eq!(body.size_hint().exact(), Some(20));
        let data = body.data().await;
        assert_eq!(data.unwrap().unwrap(), "Action=DescribeAlias");
        assert!(body.data().await.is_none());
        assert!(body.is_end_stream());
    }

    #[test]
    fn clones_share_content() {
        let body = SdkBody::from("{}");
        let cloned = body.try_clone().expect("loaded bodies can be cloned");
        assert_eq!(cloned.bytes(), Some("{}".as_bytes()));
        assert_eq!(body.content_length(), Some(2));
    }

    #[test]
    fn empty_body_is_end_of_stream() {
        let body = SdkBody::empty();
        assert!(body.is_end_stream());
        assert_eq!(body.bytes(), Some(&[][..]));
    }
}
