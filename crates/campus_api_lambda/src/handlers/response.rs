use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

impl ApiGatewayResponse {
    /// Allows any origin to read the response from a browser.
    pub fn with_cors(mut self) -> Self {
        if let Some(headers) = self.headers.as_object_mut() {
            headers.insert(
                "Access-Control-Allow-Origin".to_string(),
                Value::from("*"),
            );
        }
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(Value::as_str)
    }

    pub fn json_body(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }
}

pub fn json_response(status_code: u16, payload: &impl Serialize) -> ApiGatewayResponse {
    match serde_json::to_string(payload) {
        Ok(body) => ApiGatewayResponse {
            status_code,
            headers: json!({"Content-Type": "application/json"}),
            body,
        },
        Err(error) => {
            tracing::error!(
                component = "response",
                event = "serialization_failed",
                error = %error,
                "failed to serialize response payload"
            );
            error_response(
                500,
                json!({
                    "error": "serialization_error",
                    "message": "Failed to serialize response",
                }),
            )
        }
    }
}

pub fn error_response(status_code: u16, payload: Value) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: json!({"Content-Type": "application/json"}),
        body: payload.to_string(),
    }
}

pub fn html_response(status_code: u16, body: String) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: json!({"Content-Type": "text/html"}),
        body,
    }
    .with_cors()
}

pub fn misconfiguration_response(error: &ConfigError) -> ApiGatewayResponse {
    tracing::error!(
        component = "config",
        event = "misconfiguration",
        error = %error,
        "required configuration is missing"
    );
    error_response(
        500,
        json!({
            "error": "misconfiguration",
            "message": error.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_api_gateway_field_names() {
        let response = json_response(200, &json!({"course": "0"}));
        let value = serde_json::to_value(&response).expect("response should serialize");

        assert_eq!(value["statusCode"], json!(200));
        assert_eq!(value["headers"]["Content-Type"], json!("application/json"));
        assert_eq!(value["body"], json!("{\"course\":\"0\"}"));
    }

    #[test]
    fn html_response_allows_any_origin() {
        let response = html_response(200, "<p>hi</p>".to_string());

        assert_eq!(response.header("Content-Type"), Some("text/html"));
        assert_eq!(response.header("Access-Control-Allow-Origin"), Some("*"));
        assert_eq!(response.body, "<p>hi</p>");
    }

    #[test]
    fn misconfiguration_names_the_variable() {
        let response = misconfiguration_response(&ConfigError::Missing {
            variable: "TABLE_NAME",
        });

        assert_eq!(response.status_code, 500);
        assert_eq!(
            response.json_body(),
            Some(json!({
                "error": "misconfiguration",
                "message": "TABLE_NAME must be configured",
            }))
        );
    }
}
