//! API request and response types.

use serde::{Deserialize, Serialize};

use crate::agent::DEFAULT_NAME;

/// Greeting request, from a JSON body or a query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingRequest {
    /// Who to greet
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

impl Default for GreetingRequest {
    fn default() -> Self {
        Self {
            name: default_name(),
        }
    }
}

/// Greeting response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingResponse {
    /// The generated greeting
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_name_defaults_to_world() {
        let req: GreetingRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(req, GreetingRequest::default());
        assert_eq!(req.name, "world");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let req: GreetingRequest =
            serde_json::from_value(json!({ "name": "Ada", "age": 36 })).unwrap();
        assert_eq!(req.name, "Ada");
    }

    #[test]
    fn null_name_is_rejected() {
        assert!(serde_json::from_value::<GreetingRequest>(json!({ "name": null })).is_err());
    }

    #[test]
    fn health_is_constant() {
        assert_eq!(serde_json::to_value(HealthResponse::ok()).unwrap(), json!({ "status": "ok" }));
    }
}
