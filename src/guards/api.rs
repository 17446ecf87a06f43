//! API Guards
//!
//! Shallow structural checks for API envelopes, each paired with a narrowing
//! step that deserializes the value once its guard has accepted it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{has_property, is_array, is_boolean, is_number, is_object, is_string};
use crate::error::{Error, Result};

/// API response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
}

/// API error payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Map<String, Value>>,
}

/// One page of a paginated listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: f64,
    pub page: f64,
    pub page_size: f64,
    pub has_more: bool,
}

/// Check if value is an API response (an object with a boolean `success`)
pub fn is_api_response(value: &Value) -> bool {
    is_object(value) && value.get("success").is_some_and(is_boolean)
}

/// Check if value is a successful response carrying a `data` property.
///
/// The contents of `data` are not inspected.
pub fn is_success_response(value: &Value) -> bool {
    is_api_response(value)
        && value.get("success") == Some(&Value::Bool(true))
        && has_property(value, "data")
}

/// Check if value is a failed response whose `error` is an [`ApiError`]
pub fn is_error_response(value: &Value) -> bool {
    is_api_response(value)
        && value.get("success") == Some(&Value::Bool(false))
        && value.get("error").is_some_and(is_api_error)
}

/// Check if value is an API error
pub fn is_api_error(value: &Value) -> bool {
    is_object(value)
        && value.get("code").is_some_and(is_string)
        && value.get("message").is_some_and(is_string)
}

/// Check if value is a paginated response.
///
/// Fields are checked individually; `items.len()` need not match `pageSize`.
pub fn is_paginated_response(value: &Value) -> bool {
    is_object(value)
        && value.get("items").is_some_and(is_array)
        && value.get("total").is_some_and(is_number)
        && value.get("page").is_some_and(is_number)
        && value.get("pageSize").is_some_and(is_number)
        && value.get("hasMore").is_some_and(is_boolean)
}

/// Check if status is 2xx
pub fn is_success_status_code(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Check if status is 3xx
pub fn is_redirect_status_code(status: u16) -> bool {
    (300..400).contains(&status)
}

/// Check if status is 4xx
pub fn is_client_error_status_code(status: u16) -> bool {
    (400..500).contains(&status)
}

/// Check if status is 5xx
pub fn is_server_error_status_code(status: u16) -> bool {
    (500..600).contains(&status)
}

fn narrow<T: DeserializeOwned>(
    value: &Value,
    guard: fn(&Value) -> bool,
    expected: &'static str,
) -> Result<T> {
    if !guard(value) {
        return Err(Error::Shape { expected });
    }
    Ok(serde_json::from_value(value.clone())?)
}

/// Narrow a value to an [`ApiResponse`]
pub fn narrow_api_response<T: DeserializeOwned>(value: &Value) -> Result<ApiResponse<T>> {
    narrow(value, is_api_response, "API response")
}

/// Narrow a successful response to its `data` payload
pub fn narrow_success_response<T: DeserializeOwned>(value: &Value) -> Result<T> {
    if !is_success_response(value) {
        return Err(Error::Shape {
            expected: "success response",
        });
    }
    let data = value.get("data").cloned().unwrap_or(Value::Null);
    Ok(serde_json::from_value(data)?)
}

/// Narrow a failed response to its [`ApiError`]
pub fn narrow_error_response(value: &Value) -> Result<ApiError> {
    if !is_error_response(value) {
        return Err(Error::Shape {
            expected: "error response",
        });
    }
    let error = value.get("error").cloned().unwrap_or(Value::Null);
    Ok(serde_json::from_value(error)?)
}

/// Narrow a value to a [`PaginatedResponse`]
pub fn narrow_paginated_response<T: DeserializeOwned>(
    value: &Value,
) -> Result<PaginatedResponse<T>> {
    narrow(value, is_paginated_response, "paginated response")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_response_requires_boolean_success() {
        assert!(is_api_response(&json!({"success": true})));
        assert!(is_api_response(&json!({"success": false, "data": 1})));
        assert!(!is_api_response(&json!({"success": "true"})));
        assert!(!is_api_response(&json!([{"success": true}])));
        assert!(!is_api_response(&json!(null)));
    }

    #[test]
    fn test_success_response_is_shallow() {
        assert!(is_success_response(&json!({"success": true, "data": null})));
        assert!(is_success_response(&json!({"success": true, "data": "anything"})));
        assert!(!is_success_response(&json!({"success": true})));
        assert!(!is_success_response(&json!({"success": false, "data": {}})));
    }

    #[test]
    fn test_error_response_checks_error_shape() {
        let ok = json!({"success": false, "error": {"code": "E42", "message": "nope"}});
        assert!(is_error_response(&ok));
        let bad_code = json!({"success": false, "error": {"code": 42, "message": "nope"}});
        assert!(!is_error_response(&bad_code));
        assert!(!is_error_response(&json!({"success": false})));
        assert!(!is_error_response(&json!({"success": true, "error": {"code": "E", "message": "m"}})));
    }

    #[test]
    fn test_paginated_response() {
        let page = json!({"items": [], "total": 0, "page": 1, "pageSize": 10, "hasMore": false});
        assert!(is_paginated_response(&page));

        let mut missing = page.clone();
        if let Some(map) = missing.as_object_mut() {
            map.remove("hasMore");
        }
        assert!(!is_paginated_response(&missing));

        let inconsistent = json!({"items": [1, 2, 3], "total": 1, "page": 1, "pageSize": 1, "hasMore": true});
        assert!(is_paginated_response(&inconsistent));
        assert!(!is_paginated_response(&json!({"items": {}, "total": 0, "page": 1, "pageSize": 10, "hasMore": false})));
    }

    #[test]
    fn test_status_code_ranges() {
        assert!(is_success_status_code(200));
        assert!(is_success_status_code(299));
        assert!(!is_success_status_code(300));
        assert!(is_redirect_status_code(301));
        assert!(is_client_error_status_code(404));
        assert!(!is_client_error_status_code(500));
        assert!(is_server_error_status_code(503));
        assert!(!is_server_error_status_code(600));
    }

    #[test]
    fn test_narrowing() {
        let page = json!({"items": [{"id": "1"}], "total": 1, "page": 1, "pageSize": 10, "hasMore": false});
        let narrowed: PaginatedResponse<Value> =
            narrow_paginated_response(&page).expect("paginated");
        assert_eq!(narrowed.items.len(), 1);
        assert!(!narrowed.has_more);

        let envelope = json!({"success": true, "data": page});
        let data: PaginatedResponse<Value> = narrow_success_response(&envelope).expect("data");
        assert_eq!(data.page_size, 10.0);

        let rejected = narrow_success_response::<Value>(&json!({"success": false}));
        assert!(matches!(rejected, Err(Error::Shape { .. })));

        let error = narrow_error_response(&json!({
            "success": false,
            "error": {"code": "NOT_FOUND", "message": "missing", "details": {"id": "9"}}
        }))
        .expect("error");
        assert_eq!(error.code, "NOT_FOUND");
        assert!(error.details.is_some());
    }

    #[test]
    fn test_narrowing_reports_payload_mismatch() {
        let envelope = json!({"success": true, "data": "not a number"});
        let result = narrow_success_response::<f64>(&envelope);
        assert!(matches!(result, Err(Error::Json { .. })));
    }

    #[test]
    fn test_narrow_api_response_keeps_optional_fields() {
        let response: ApiResponse<Value> = narrow_api_response(&json!({
            "success": false,
            "message": "try later"
        }))
        .expect("envelope");
        assert!(!response.success);
        assert!(response.data.is_none());
        assert_eq!(response.message.as_deref(), Some("try later"));

        assert!(narrow_api_response::<Value>(&json!({"ok": true})).is_err());
    }
}
