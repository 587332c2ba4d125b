//! Wire types for stream filter rules.

use serde::{Deserialize, Serialize};

/// A single stream filter rule.
///
/// Rules sent to the server carry only a filter expression and an optional
/// tag; the server assigns an `id` and echoes it back in responses.
///
/// # Example
///
/// ```
/// use twitter_stream_rules::Rule;
///
/// let rule = Rule::new("cat has:media").with_tag("cats with media");
/// assert_eq!(rule.value, "cat has:media");
/// assert!(rule.id.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// The filter expression, e.g. `"cat has:media"`.
    pub value: String,
    /// Optional human-readable label for the rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Server-assigned identifier. Absent on rules built locally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Rule {
    /// Create a rule from a filter expression.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            tag: None,
            id: None,
        }
    }

    /// Attach a tag to the rule.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// Request envelope for adding rules: `{"add": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulePayload {
    /// Rules to add.
    pub add: Vec<Rule>,
}

/// Response envelope returned by the rules endpoint: `{"data": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleResponse {
    /// Rules acted on by the server, ids populated.
    #[serde(default)]
    pub data: Vec<Rule>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_serializes_without_empty_fields() {
        let rule = Rule::new("cat has:media").with_tag("cats with media");
        let payload = RulePayload { add: vec![rule] };

        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(
            json,
            r#"{"add":[{"value":"cat has:media","tag":"cats with media"}]}"#
        );
    }

    #[test]
    fn test_untagged_rule_serializes_value_only() {
        let json = serde_json::to_string(&Rule::new("dog")).unwrap();
        assert_eq!(json, r#"{"value":"dog"}"#);
    }

    #[test]
    fn test_response_populates_id() {
        let body = r#"{"data":[{"value":"cat has:media","tag":"cats with media","id":"1234"}]}"#;
        let response: RuleResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.data.len(), 1);
        let rule = &response.data[0];
        assert_eq!(rule.value, "cat has:media");
        assert_eq!(rule.tag.as_deref(), Some("cats with media"));
        assert_eq!(rule.id.as_deref(), Some("1234"));
    }

    #[test]
    fn test_round_trip_preserves_value_and_tag() {
        let sent = Rule::new("cat has:media").with_tag("cats with media");
        let payload = serde_json::to_string(&RulePayload {
            add: vec![sent.clone()],
        })
        .unwrap();

        // A server echoing the payload back under "data" yields the same
        // value and tag.
        let echoed = payload.replace("\"add\"", "\"data\"");
        let response: RuleResponse = serde_json::from_str(&echoed).unwrap();
        assert_eq!(response.data[0].value, sent.value);
        assert_eq!(response.data[0].tag, sent.tag);
        assert!(response.data[0].id.is_none());
    }

    #[test]
    fn test_empty_response_envelope() {
        let response: RuleResponse = serde_json::from_str("{}").unwrap();
        assert!(response.data.is_empty());
    }
}
