//! Write-request validation.
//!
//! Request bodies are validated in passes over the raw JSON value before the
//! typed decode runs:
//!
//! 1. [`check_empty_request`] - the body must be a non-empty JSON object.
//! 2. [`disallow_nulls`] - no present key may carry `null`.
//!
//! Only patch bodies run both passes (see [`parse_patch`]). Create and replace
//! bodies go straight to the decoder ([`parse_request`]). Either way the
//! decoded request then runs its own [`Validate`] hook for cross-field rules.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Cross-field checks run after a request body has been decoded.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Marker for partial-update request shapes.
///
/// Implementors have only optional fields and reject unknown keys, so a body
/// that passes both pre-decode passes names at least one declared field.
pub trait PatchRequest: DeserializeOwned + Validate {}

/// Ensure the request body is a non-empty JSON object.
pub fn check_empty_request(body: &Value) -> Result<&Map<String, Value>, ValidationError> {
    match body {
        Value::Null => Err(ValidationError::new("request body cannot be empty")),
        Value::Object(fields) if fields.is_empty() => {
            Err(ValidationError::new("request body cannot be empty"))
        }
        Value::Object(fields) => Ok(fields),
        _ => Err(ValidationError::new("request body must be a JSON object")),
    }
}

/// Ensure no supplied field is `null`.
pub fn disallow_nulls(fields: &Map<String, Value>) -> Result<(), ValidationError> {
    match fields.iter().find(|(_, v)| v.is_null()) {
        Some((key, _)) => Err(ValidationError::new(format!("{key} cannot be null"))),
        None => Ok(()),
    }
}

/// Decode and validate a create or replace body.
pub fn parse_request<T>(body: Value) -> Result<T, ValidationError>
where
    T: DeserializeOwned + Validate,
{
    let request: T = serde_json::from_value(body).map_err(decode_error)?;
    request.validate()?;
    Ok(request)
}

/// Run both pre-decode passes, then decode and validate a patch body.
///
/// Fields absent from the body stay `None` in the result.
pub fn parse_patch<T: PatchRequest>(body: Value) -> Result<T, ValidationError> {
    let fields = check_empty_request(&body)?;
    disallow_nulls(fields)?;
    parse_request(body)
}

fn decode_error(err: serde_json::Error) -> ValidationError {
    tracing::debug!(target: "urban.validation", error = %err, "request body rejected by decoder");
    ValidationError::new(err.to_string())
}

/// Deserialize a field that must be present but may be `null`.
///
/// Use with `#[serde(deserialize_with = "required_nullable")]` on an `Option`
/// field and no `default`: serde then reports a missing key as an error
/// instead of silently filling in `None`.
pub fn required_nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}
