use std::collections::BTreeMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use campus_api_core::contract::ValidationError;
use serde::Deserialize;
use serde_json::Value;

/// The parts of an API Gateway HTTP API (payload v2.0) event the handlers
/// read. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpApiEvent {
    #[serde(default)]
    pub path_parameters: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub request_context: Option<RequestContext>,
    #[serde(default)]
    pub raw_path: Option<String>,
    #[serde(default)]
    pub body: Option<Value>,
    #[serde(default)]
    pub is_base64_encoded: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestContext {
    #[serde(default)]
    pub http: Option<HttpDescription>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpDescription {
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

impl HttpApiEvent {
    pub fn from_value(event: Value) -> Result<Self, ValidationError> {
        if !event.is_object() {
            return Err(ValidationError::new("Request payload must be a JSON object"));
        }
        serde_json::from_value(event)
            .map_err(|error| ValidationError::new(format!("Malformed request event: {error}")))
    }

    pub fn path_parameter(&self, name: &str) -> Option<&str> {
        self.path_parameters
            .as_ref()
            .and_then(|parameters| parameters.get(name))
            .map(String::as_str)
    }

    pub fn method(&self) -> &str {
        self.http()
            .and_then(|http| http.method.as_deref())
            .unwrap_or("")
    }

    pub fn path(&self) -> &str {
        self.http()
            .and_then(|http| http.path.as_deref())
            .or(self.raw_path.as_deref())
            .unwrap_or("")
    }

    /// Returns the request body as text, decoding base64 when the front door
    /// flagged it. Object bodies (as sent by direct test invocations) are
    /// re-serialized.
    pub fn body_text(&self) -> Result<String, ValidationError> {
        match &self.body {
            None | Some(Value::Null) => Err(ValidationError::new("Request body is required")),
            Some(Value::String(text)) if self.is_base64_encoded.unwrap_or(false) => {
                let bytes = STANDARD.decode(text.trim()).map_err(|error| {
                    ValidationError::new(format!("Malformed base64 body: {error}"))
                })?;
                String::from_utf8(bytes)
                    .map_err(|_| ValidationError::new("Request body must be UTF-8 text"))
            }
            Some(Value::String(text)) => Ok(text.clone()),
            Some(other) => Ok(other.to_string()),
        }
    }

    fn http(&self) -> Option<&HttpDescription> {
        self.request_context
            .as_ref()
            .and_then(|context| context.http.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn reads_http_api_fields() {
        let event = HttpApiEvent::from_value(json!({
            "rawPath": "/items/abc",
            "pathParameters": {"id": "abc"},
            "requestContext": {"http": {"method": "GET", "path": "/items/abc"}},
            "isBase64Encoded": false
        }))
        .expect("event should decode");

        assert_eq!(event.method(), "GET");
        assert_eq!(event.path(), "/items/abc");
        assert_eq!(event.path_parameter("id"), Some("abc"));
        assert_eq!(event.path_parameter("day"), None);
    }

    #[test]
    fn tolerates_null_path_parameters_and_missing_context() {
        let event = HttpApiEvent::from_value(json!({
            "pathParameters": null,
            "rawPath": "/hello"
        }))
        .expect("event should decode");

        assert_eq!(event.path_parameter("day"), None);
        assert_eq!(event.method(), "");
        assert_eq!(event.path(), "/hello");
    }

    #[test]
    fn rejects_non_object_events() {
        let error = HttpApiEvent::from_value(json!("hello")).expect_err("string should fail");
        assert_eq!(error.message(), "Request payload must be a JSON object");
    }

    #[test]
    fn decodes_base64_bodies() {
        let event = HttpApiEvent::from_value(json!({
            "body": STANDARD.encode(r#"{"name":"widget"}"#),
            "isBase64Encoded": true
        }))
        .expect("event should decode");

        assert_eq!(
            event.body_text().expect("body should decode"),
            r#"{"name":"widget"}"#
        );
    }

    #[test]
    fn missing_body_is_a_validation_error() {
        let event = HttpApiEvent::from_value(json!({})).expect("event should decode");
        let error = event.body_text().expect_err("missing body should fail");
        assert_eq!(error.message(), "Request body is required");
    }

    #[test]
    fn object_bodies_are_reserialized() {
        let event = HttpApiEvent::from_value(json!({"body": {"name": "widget"}}))
            .expect("event should decode");
        assert_eq!(
            event.body_text().expect("body should be present"),
            r#"{"name":"widget"}"#
        );
    }
}
