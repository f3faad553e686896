use serde::de::{self, DeserializeOwned, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Message used when the backend reports a failure without explaining it.
pub const GENERIC_FAILURE_MESSAGE: &str = "request failed";

/// Normalized result of every API operation.
///
/// On the wire this is `{ "success": bool, "data"?: T, "message"?: string }`.
/// A successful envelope always carries its payload and a failed one always
/// carries a message. Acknowledgement-only operations use `ApiResponse<()>`,
/// whose payload may be absent or `null` on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success { data: T, message: Option<String> },
    Failure { message: String },
}

#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("Response is not a valid envelope: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Envelope payload does not match the expected shape: {0}")]
    Payload(serde_json::Error),
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self::Success {
            data,
            message: None,
        }
    }

    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self::Success {
            data,
            message: Some(message.into()),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { message, .. } => message.as_deref(),
            Self::Failure { message } => Some(message),
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    /// Converts into the `Result<T, String>` shape UI code works with.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Success { data, .. } => Ok(data),
            Self::Failure { message } => Err(message),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        match self {
            Self::Success { data, message } => ApiResponse::Success {
                data: f(data),
                message,
            },
            Self::Failure { message } => ApiResponse::Failure { message },
        }
    }
}

impl ApiResponse<()> {
    /// Successful envelope without payload.
    pub fn ack(message: impl Into<String>) -> Self {
        Self::success_with_message((), message)
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Parses a response body, telling a broken envelope apart from a payload
    /// of the wrong shape.
    pub fn from_json(text: &str) -> Result<Self, EnvelopeError> {
        let wire: WireEnvelope = serde_json::from_str(text)?;
        Self::from_wire(wire).map_err(EnvelopeError::Payload)
    }

    fn from_wire(wire: WireEnvelope) -> Result<Self, serde_json::Error> {
        if !wire.success {
            return Ok(Self::Failure {
                message: wire
                    .message
                    .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
            });
        }

        let data = T::deserialize(wire.data.unwrap_or(Value::Null))?;
        Ok(Self::Success {
            data,
            message: wire.message,
        })
    }
}

#[derive(Deserialize)]
struct WireEnvelope {
    success: bool,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Serialize)]
struct WireEnvelopeRef<'a, T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match self {
            Self::Success { data, message } => WireEnvelopeRef {
                success: true,
                data: Some(data),
                message: message.as_deref(),
            },
            Self::Failure { message } => WireEnvelopeRef {
                success: false,
                data: None,
                message: Some(message.as_str()),
            },
        };
        wire.serialize(serializer)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ApiResponse<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = WireEnvelope::deserialize(deserializer)?;
        Self::from_wire(wire).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Payload {
        id: i64,
    }

    #[test]
    fn test_success_serializes_to_wire_shape() {
        let response = ApiResponse::success(Payload { id: 7 });
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({ "success": true, "data": { "id": 7 } }));
    }

    #[test]
    fn test_failure_serializes_without_data() {
        let response: ApiResponse<Payload> = ApiResponse::failure("nope");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({ "success": false, "message": "nope" }));
    }

    #[test]
    fn test_parse_success_with_message() {
        let response: ApiResponse<Payload> =
            ApiResponse::from_json(r#"{"success":true,"data":{"id":3},"message":"ok"}"#).unwrap();
        assert_eq!(
            response,
            ApiResponse::success_with_message(Payload { id: 3 }, "ok")
        );
    }

    #[test]
    fn test_ack_accepts_missing_data() {
        let response: ApiResponse<()> =
            ApiResponse::from_json(r#"{"success":true,"message":"saved"}"#).unwrap();
        assert!(response.is_success());
        assert_eq!(response.message(), Some("saved"));
    }

    #[test]
    fn test_success_without_payload_is_rejected() {
        let err = ApiResponse::<Payload>::from_json(r#"{"success":true}"#).unwrap_err();
        assert!(matches!(err, EnvelopeError::Payload(_)));
    }

    #[test]
    fn test_failure_without_message_gets_generic_message() {
        let response: ApiResponse<Payload> = ApiResponse::from_json(r#"{"success":false}"#).unwrap();
        assert_eq!(response.message(), Some(GENERIC_FAILURE_MESSAGE));
        assert!(response.data().is_none());
    }

    #[test]
    fn test_not_json_is_envelope_error() {
        let err = ApiResponse::<Payload>::from_json("<html>502</html>").unwrap_err();
        assert!(matches!(err, EnvelopeError::Json(_)));
    }

    #[test]
    fn test_serde_deserialize_matches_from_json() {
        let response: ApiResponse<Payload> =
            serde_json::from_value(json!({ "success": true, "data": { "id": 1 } })).unwrap();
        assert_eq!(response.into_result(), Ok(Payload { id: 1 }));

        let err = serde_json::from_value::<ApiResponse<Payload>>(json!({ "success": true }));
        assert!(err.is_err());
    }

    #[test]
    fn test_into_result_and_map() {
        let failed: ApiResponse<Payload> = ApiResponse::failure("bad input");
        assert_eq!(failed.map(|p| p.id).into_result(), Err("bad input".to_string()));

        let ok = ApiResponse::success(Payload { id: 9 }).map(|p| p.id);
        assert_eq!(ok.into_data(), Some(9));
    }
}
