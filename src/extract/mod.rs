//! Structured-extraction boundary.
//!
//! The host supplies the language-model client; this module owns the prompt
//! templates, the `{{currentMessage}}` substitution, and tolerant parsing of
//! the model's fenced-JSON replies. Extraction output is never trusted —
//! every object is re-validated downstream before any chain interaction.

use async_trait::async_trait;
use regex::Regex;

use crate::error::ExtractError;

pub mod templates;

/// Best-effort structured extraction over the latest user message.
#[async_trait]
pub trait ExtractionClient: Send + Sync {
    /// Run the template against the user message and return the model's
    /// best-effort JSON object. No schema guarantee.
    async fn extract(
        &self,
        template: &str,
        message: &str,
    ) -> Result<serde_json::Value, ExtractError>;
}

/// Substitute the user message into an extraction template.
pub fn compose_context(template: &str, message: &str) -> String {
    template.replace("{{currentMessage}}", message)
}

/// Parse a model reply that may wrap its JSON object in a markdown fence.
///
/// Accepts a bare object, a fenced block, or an object embedded in prose.
pub fn parse_json_reply(raw: &str) -> Result<serde_json::Value, ExtractError> {
    let trimmed = raw.trim();

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed)
        && value.is_object()
    {
        return Ok(value);
    }

    if let Ok(fence) = Regex::new(r"(?s)```(?:json)?\s*(\{.*?\})\s*```")
        && let Some(captures) = fence.captures(trimmed)
        && let Some(body) = captures.get(1)
        && let Ok(value) = serde_json::from_str::<serde_json::Value>(body.as_str())
        && value.is_object()
    {
        return Ok(value);
    }

    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}'))
        && start < end
        && let Ok(value) = serde_json::from_str::<serde_json::Value>(&trimmed[start..=end])
        && value.is_object()
    {
        return Ok(value);
    }

    Err(ExtractError::NoJsonObject)
}

/// Decode an extracted JSON object into a raw intent shape.
pub fn decode_intent<T: serde::de::DeserializeOwned>(
    intent: &'static str,
    value: serde_json::Value,
) -> Result<T, ExtractError> {
    serde_json::from_value(value).map_err(|e| ExtractError::Shape {
        intent,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn composes_the_user_message_into_the_template() {
        let context = compose_context(templates::TRANSFER_TEMPLATE, "Send 1 ETH to bob.eth");
        assert!(context.contains("\"Send 1 ETH to bob.eth\""));
        assert!(!context.contains("{{currentMessage}}"));
    }

    #[test]
    fn parses_a_bare_json_object() {
        let value = parse_json_reply(r#"{"amount": "1"}"#).unwrap();
        assert_eq!(value, json!({"amount": "1"}));
    }

    #[test]
    fn parses_a_fenced_json_block() {
        let reply = "Here you go:\n```json\n{\n  \"amount\": \"1\",\n  \"useAGW\": false\n}\n```\n";
        let value = parse_json_reply(reply).unwrap();
        assert_eq!(value["useAGW"], json!(false));
    }

    #[test]
    fn parses_an_object_embedded_in_prose() {
        let value = parse_json_reply("sure: {\"symbol\": \"MTK\"} hope that helps").unwrap();
        assert_eq!(value["symbol"], "MTK");
    }

    #[test]
    fn rejects_replies_without_an_object() {
        assert!(matches!(
            parse_json_reply("no json here"),
            Err(ExtractError::NoJsonObject)
        ));
        assert!(matches!(
            parse_json_reply("[1, 2, 3]"),
            Err(ExtractError::NoJsonObject)
        ));
    }
}
