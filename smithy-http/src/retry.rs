/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! HTTP specific retry behaviors
//!
//! For protocol agnostic retries, see `smithy_types::retry`.

use smithy_types::retry::{ProvideErrorKind, RetryKind};

/// Decide whether a failed response could succeed on a later attempt.
///
/// Clients never retry on their own. The classification is logged and left to the caller.
pub trait ClassifyResponse {
    fn classify<E, B>(&self, e: E, response: &http::Response<B>) -> RetryKind
    where
        E: ProvideErrorKind;
}
