//! Versioned payload envelope
//!
//! Every stored value is `{"version": N, "data": ...}`. Payloads written
//! before versioning (a bare list or object) decode as version 0.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::manager::{StoreError, StoreResult};

/// Version written by this build
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    version: u32,
    data: &'a T,
}

#[derive(Deserialize)]
struct Envelope {
    version: u32,
    data: Value,
}

/// Decoded payload and the version it was stored with
#[derive(Debug)]
pub struct Decoded<T> {
    pub version: u32,
    pub data: T,
}

pub fn encode<T: Serialize>(data: &T) -> StoreResult<String> {
    Ok(serde_json::to_string(&EnvelopeRef {
        version: SCHEMA_VERSION,
        data,
    })?)
}

pub fn decode<T: DeserializeOwned>(key: &'static str, text: &str) -> StoreResult<Decoded<T>> {
    let corrupted = |source: serde_json::Error| StoreError::Corrupted { key, source };

    let value: Value = serde_json::from_str(text).map_err(corrupted)?;
    let is_versioned = value.as_object().is_some_and(|o| o.contains_key("version"));
    if !is_versioned {
        let data = serde_json::from_value(value).map_err(corrupted)?;
        return Ok(Decoded { version: 0, data });
    }

    let envelope: Envelope = serde_json::from_value(value).map_err(corrupted)?;
    if envelope.version > SCHEMA_VERSION {
        return Err(StoreError::UnsupportedVersion {
            key,
            version: envelope.version,
        });
    }
    let data = serde_json::from_value(envelope.data).map_err(corrupted)?;
    Ok(Decoded {
        version: envelope.version,
        data,
    })
}
