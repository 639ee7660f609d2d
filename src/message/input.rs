use crate::mood::model::Mood;

/// One caller-supplied snippet as it arrives at batch-open time.
///
/// Deserializes from any JSON value: a string, an object with a string `text`
/// field, or anything else (kept verbatim and defaulted during normalization).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum InputMessage {
    Text(String),
    Record {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mood: Option<serde_json::Value>,
    },
    Malformed(serde_json::Value),
}

impl InputMessage {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Record with an explicit mood that bypasses keyword inference.
    pub fn tagged(text: impl Into<String>, mood: Mood) -> Self {
        Self::Record {
            text: text.into(),
            mood: Some(serde_json::Value::String(mood.as_str().to_owned())),
        }
    }

    pub fn untagged_record(text: impl Into<String>) -> Self {
        Self::Record {
            text: text.into(),
            mood: None,
        }
    }
}

impl From<&str> for InputMessage {
    fn from(s: &str) -> Self {
        Self::text(s)
    }
}

impl From<String> for InputMessage {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Snippet with its final mood.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ClassifiedMessage {
    pub text: String,
    pub mood: Mood,
}

impl ClassifiedMessage {
    pub fn new(text: impl Into<String>, mood: Mood) -> Self {
        Self {
            text: text.into(),
            mood,
        }
    }
}
