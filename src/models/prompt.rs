use serde::{de, Deserialize};
use serde_json::Value;

/// Inbound body of `POST /api/gemini`.
///
/// Fields are kept as raw JSON: nothing is validated here, the upstream
/// API decides what it accepts.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PromptRequest {
    /// User prompt, expected to be a string.
    #[serde(default)]
    pub prompt: Option<Value>,
    /// Optional system instruction, expected to be a string.
    #[serde(default, rename = "systemInstruction")]
    pub system_instruction: Option<Value>,
}

impl PromptRequest {
    /// Parses a request body. Invalid JSON or a non-object body is an error.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        match serde_json::from_slice::<Value>(body)? {
            object @ Value::Object(_) => serde_json::from_value(object),
            _ => Err(de::Error::custom("request body must be a JSON object")),
        }
    }

    /// The system instruction, if it carries a usable value.
    ///
    /// Null, `false`, `0` and the empty string are treated as absent.
    pub fn effective_system_instruction(&self) -> Option<&Value> {
        self.system_instruction.as_ref().filter(|value| is_truthy(value))
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
