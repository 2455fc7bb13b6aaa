use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a `POST /start` request: which effect to run and its arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectRequest {
    pub effect: String,
    pub args: Vec<Value>,
}

impl EffectRequest {
    pub fn new(effect: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            effect: effect.into(),
            args,
        }
    }

    /// The text effect takes exactly one argument, the text to display.
    pub fn text_effect(text: &str) -> Self {
        Self::new("text_effect", vec![Value::String(text.to_string())])
    }
}

/// Reply from `GET /status`. `effect` is only present while one is running.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
}
