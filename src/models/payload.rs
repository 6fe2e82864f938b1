use serde::Serialize;
use serde_json::Value;

use super::prompt::PromptRequest;

/// A single text part.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Value>,
}

/// A list of parts, used both for `contents` entries and `systemInstruction`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Content {
    pub parts: Vec<Part>,
}

impl Content {
    fn single(text: Option<Value>) -> Self {
        Content {
            parts: vec![Part { text }],
        }
    }
}

/// Body of a Gemini `generateContent` call.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentPayload {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
}

impl From<PromptRequest> for GenerateContentPayload {
    fn from(request: PromptRequest) -> Self {
        let system_instruction = request
            .effective_system_instruction()
            .cloned()
            .map(|text| Content::single(Some(text)));

        GenerateContentPayload {
            contents: vec![Content::single(request.prompt)],
            system_instruction,
        }
    }
}
