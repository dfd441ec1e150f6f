//! The `greet` tool.

use async_trait::async_trait;
use serde_json::{json, Value};

use super::Tool;
use crate::agent::HelloAgent;

/// Greets a person by name through the hello agent.
#[derive(Debug, Clone, Default)]
pub struct GreetTool {
    agent: HelloAgent,
}

impl GreetTool {
    pub fn new(agent: HelloAgent) -> Self {
        Self { agent }
    }
}

#[async_trait]
impl Tool for GreetTool {
    fn name(&self) -> &str {
        "greet"
    }

    fn description(&self) -> &str {
        "Greet someone by name. Returns the same message as POST /api/hello."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Name of the person to greet"
                }
            },
            "required": ["name"]
        })
    }

    async fn execute(&self, args: Value) -> anyhow::Result<String> {
        let name = match args.get("name") {
            Some(Value::String(name)) => name,
            Some(other) => anyhow::bail!("Argument 'name' must be a string, got {}", other),
            None => anyhow::bail!("Missing required argument: name"),
        };
        Ok(self.agent.greet(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent;

    #[tokio::test]
    async fn greets_by_name() {
        let out = GreetTool::default()
            .execute(json!({ "name": "Ada" }))
            .await
            .unwrap();
        assert_eq!(out, agent::greet("Ada"));
    }

    #[tokio::test]
    async fn missing_name_is_an_error() {
        let err = GreetTool::default().execute(json!({})).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing required argument: name");
    }

    #[tokio::test]
    async fn non_string_name_is_an_error() {
        let err = GreetTool::default()
            .execute(json!({ "name": 42 }))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("must be a string"));
    }

    #[test]
    fn schema_requires_name() {
        let schema = GreetTool::default().parameters_schema();
        assert_eq!(schema["required"], json!(["name"]));
        assert_eq!(schema["properties"]["name"]["type"], "string");
    }
}
