//! Claim set decoded from a token payload.

use crate::error::ClaimDecodeError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claims carried in the payload of an access token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimSet {
    claims: Map<String, Value>,
}

impl ClaimSet {
    /// Create an empty claim set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a claim set from a decoded JSON payload.
    pub fn from_value(value: Value) -> Result<Self, ClaimDecodeError> {
        match value {
            Value::Object(claims) => Ok(Self { claims }),
            _ => Err(ClaimDecodeError::NotAnObject),
        }
    }

    /// Add a claim.
    pub fn with_claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.claims.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.claims.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.claims.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Read an array claim whose elements are scalars, as strings.
    ///
    /// Strings are taken as-is; numbers and booleans use their JSON text.
    /// A missing claim, a non-array claim, or an element that is null, an
    /// array or an object is an error.
    pub fn string_array(&self, name: &str) -> Result<Vec<String>, ClaimDecodeError> {
        let value = self.get(name).ok_or_else(|| ClaimDecodeError::MissingClaim {
            claim: name.to_string(),
        })?;

        let elements = value.as_array().ok_or_else(|| ClaimDecodeError::InvalidClaim {
            claim: name.to_string(),
            reason: format!("expected an array, found {}", kind_of(value)),
        })?;

        elements
            .iter()
            .enumerate()
            .map(|(idx, element)| match element {
                Value::String(s) => Ok(s.clone()),
                Value::Number(n) => Ok(n.to_string()),
                Value::Bool(b) => Ok(b.to_string()),
                other => Err(ClaimDecodeError::InvalidClaim {
                    claim: name.to_string(),
                    reason: format!("element {} is {}", idx, kind_of(other)),
                }),
            })
            .collect()
    }

    /// The `sub` claim, if present and a string.
    pub fn subject(&self) -> Option<&str> {
        self.get("sub").and_then(Value::as_str)
    }

    /// The `exp` claim as a timestamp, if present and numeric.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.get("exp")
            .and_then(Value::as_i64)
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
