/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Serde adapters for shapes that the AWS JSON protocol encodes specially

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smithy_types::Instant;

/// Timestamps are epoch seconds on the AWS JSON wire, with an optional fractional part
pub mod epoch_seconds_opt {
    use super::*;

    pub fn serialize<S>(instant: &Option<Instant>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match instant {
            Some(instant) if instant.subsec_nanos() == 0 => serializer.serialize_i64(instant.secs()),
            Some(instant) => serializer.serialize_f64(instant.as_secs_f64()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Instant>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<f64>::deserialize(deserializer)?.map(Instant::from_f64))
    }
}

/// Deserialize a successful response body, treating an empty body as `{}`
pub fn parse_body<T>(body: &[u8]) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_slice(b"{}")
    } else {
        serde_json::from_slice(body)
    }
}

/// Serialize an input into its request body
pub fn to_body<T>(input: &T) -> Result<Vec<u8>, serde_json::Error>
where
    T: Serialize,
{
    serde_json::to_vec(input)
}

#[cfg(test)]
mod test {
    use crate::serde_util::{epoch_seconds_opt, parse_body};
    use serde::{Deserialize, Serialize};
    use smithy_types::Instant;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Stamped {
        #[serde(
            with = "epoch_seconds_opt",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        time: Option<Instant>,
    }

    #[test]
    fn whole_seconds_are_integers() {
        let stamped = Stamped {
            time: Some(Instant::from_secs(1_455_148_800)),
        };
        assert_eq!(serde_json::to_string(&stamped).unwrap(), r#"{"time":1455148800}"#);
        let stamped = Stamped {
            time: Some(Instant::from_secs_and_nanos(1_455_148_800, 500_000_000)),
        };
        assert_eq!(serde_json::to_string(&stamped).unwrap(), r#"{"time":1455148800.5}"#);
        assert_eq!(serde_json::to_string(&Stamped { time: None }).unwrap(), "{}");
    }

    #[test]
    fn fractional_seconds_are_parsed() {
        let stamped: Stamped = serde_json::from_str(r#"{"time":1.455148800123E9}"#).unwrap();
        let time = stamped.time.unwrap();
        assert_eq!(time.secs(), 1_455_148_800);
        assert_eq!(parse_body::<Stamped>(b"").unwrap(), Stamped { time: None });
        assert_eq!(parse_body::<Stamped>(b"{}").unwrap(), Stamped { time: None });
    }
}
