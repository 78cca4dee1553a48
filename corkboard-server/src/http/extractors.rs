//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;

/// Lenient JSON body extractor
///
/// Unlike `axum::Json` this ignores `Content-Type` and treats an empty
/// body as `{}`, so clients may omit the body entirely on requests whose
/// fields are all optional. Anything other than a JSON object is rejected.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::MalformedBody {
                reason: e.body_text(),
            })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        let value: Value = serde_json::from_slice(&bytes).map_err(|e| ApiError::MalformedBody {
            reason: e.to_string(),
        })?;

        if !value.is_object() {
            return Err(ApiError::MalformedBody {
                reason: "body must be a JSON object".to_owned(),
            });
        }

        let inner = serde_json::from_value(value).map_err(|e| ApiError::MalformedBody {
            reason: e.to_string(),
        })?;

        Ok(Self(inner))
    }
}

/// Text field, kept only when it is a JSON string.
pub(crate) fn string_field(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

/// Coordinate field, kept only when it is a JSON number.
pub(crate) fn number_field(value: Option<Value>) -> Option<serde_json::Number> {
    match value {
        Some(Value::Number(n)) => Some(n),
        _ => None,
    }
}
