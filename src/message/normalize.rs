use crate::message::input::{ClassifiedMessage, InputMessage};
use crate::mood::classify::classify;
use crate::mood::model::Mood;

/// Coerce a mixed batch into classified messages, one per input element.
///
/// Never fails: malformed entries become their JSON text with `Mood::Neutral`.
pub fn normalize(input: &[InputMessage]) -> Vec<ClassifiedMessage> {
    input
        .iter()
        .enumerate()
        .map(|(index, msg)| normalize_one(index, msg))
        .collect()
}

fn normalize_one(index: usize, msg: &InputMessage) -> ClassifiedMessage {
    match msg {
        InputMessage::Text(text) => ClassifiedMessage::new(text.clone(), classify(text)),
        InputMessage::Record { text, mood } => {
            let mood = mood
                .as_ref()
                .and_then(|tag| explicit_mood(index, tag))
                .unwrap_or_else(|| classify(text));
            ClassifiedMessage::new(text.clone(), mood)
        }
        InputMessage::Malformed(value) => {
            tracing::warn!(index, value = %value, "malformed message, defaulting to neutral");
            ClassifiedMessage::new(coerce_to_text(value), Mood::Neutral)
        }
    }
}

fn explicit_mood(index: usize, tag: &serde_json::Value) -> Option<Mood> {
    let parsed = tag.as_str().and_then(|s| s.parse::<Mood>().ok());
    if parsed.is_none() && !tag.is_null() {
        tracing::warn!(index, tag = %tag, "unknown mood tag, inferring from text");
    }
    parsed
}

fn coerce_to_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/message/normalize.rs"]
mod tests;
