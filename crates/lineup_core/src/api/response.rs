//! Response envelope shared by every JSON endpoint

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LineupError;

/// API version for schema compatibility
pub const API_VERSION: &str = "v1";

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: String,
    pub timestamp: DateTime<Utc>,
}

/// Structured API error with codes and details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    pub details: Option<HashMap<String, serde_json::Value>>,
}

impl ApiError {
    pub fn new(code: &str, message: &str) -> Self {
        Self { code: code.to_string(), message: message.to_string(), details: None }
    }

    pub fn with_details(
        code: &str,
        message: &str,
        details: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self { code: code.to_string(), message: message.to_string(), details: Some(details) }
    }

    pub fn invalid_json(err: &serde_json::Error) -> Self {
        Self::new("INVALID_JSON", &format!("Invalid JSON format: {}", err))
    }

    /// Checks the optional `schema_version` carried by a request.
    pub fn check_schema_version(requested: Option<&str>) -> Result<(), ApiError> {
        match requested {
            Some(version) if version != API_VERSION => Err(Self::new(
                "UNSUPPORTED_SCHEMA_VERSION",
                &format!("Unsupported schema version {}, expected {}", version, API_VERSION),
            )),
            _ => Ok(()),
        }
    }
}

impl From<&LineupError> for ApiError {
    fn from(err: &LineupError) -> Self {
        let mut details = HashMap::new();
        details.insert("recoverable".to_string(), serde_json::Value::from(err.is_recoverable()));
        match err {
            LineupError::CapacityExceeded { max } => {
                details.insert("max".to_string(), serde_json::Value::from(*max));
            }
            LineupError::InvalidJerseyNumber { min, max, .. } => {
                details.insert("min".to_string(), serde_json::Value::from(*min));
                details.insert("max".to_string(), serde_json::Value::from(*max));
            }
            LineupError::RecordNotFound { kind, id } => {
                details.insert("kind".to_string(), serde_json::Value::from(kind.to_string()));
                details.insert("id".to_string(), serde_json::Value::from(id.as_str()));
            }
            _ => {}
        }
        Self::with_details(err.code(), &err.to_string(), details)
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_error_carries_max() {
        let api = ApiError::from(&LineupError::CapacityExceeded { max: 6 });
        assert_eq!(api.code, "CAPACITY_EXCEEDED");
        assert_eq!(api.message, "The field is full! Maximum 6 players allowed on the field.");
        let details = api.details.unwrap();
        assert_eq!(details["max"], serde_json::json!(6));
        assert_eq!(details["recoverable"], serde_json::json!(true));
    }

    #[test]
    fn test_schema_version_check() {
        assert!(ApiError::check_schema_version(None).is_ok());
        assert!(ApiError::check_schema_version(Some("v1")).is_ok());
        let err = ApiError::check_schema_version(Some("v0")).unwrap_err();
        assert_eq!(err.code, "UNSUPPORTED_SCHEMA_VERSION");
    }

    #[test]
    fn test_error_envelope_shape() {
        let response: ApiResponse<()> = ApiResponse::error(ApiError::new("X", "boom"));
        let value: serde_json::Value = serde_json::from_str(&response.to_json()).unwrap();
        assert_eq!(value["success"], serde_json::json!(false));
        assert_eq!(value["schema_version"], serde_json::json!(API_VERSION));
        assert!(value["data"].is_null());
    }
}
