//! Task domain model

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A single title/content record owned by the authenticated user
///
/// `id` is assigned by the server and echoed back on creation; the client
/// never synthesizes one. The API returns it as a number or a string, so
/// both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub title: String,
    pub content: String,
}

/// Request body for creating a task
///
/// Empty titles and contents are valid and forwarded as-is; the server
/// decides what to accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDraft {
    pub title: String,
    pub content: String,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Deserialize an optional ID that can be number or string
fn deserialize_optional_id<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    let value: Option<JsonValue> = Option::deserialize(deserializer)?;
    match value {
        Some(JsonValue::Number(n)) => Ok(Some(n.to_string())),
        Some(JsonValue::String(s)) => Ok(Some(s)),
        Some(JsonValue::Null) | None => Ok(None),
        _ => Err(D::Error::custom("expected number or string for id")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_without_id() {
        let task: Task = serde_json::from_str(r#"{"title":"t1","content":"c1"}"#).unwrap();
        assert_eq!(task.id, None);
        assert_eq!(task.title, "t1");
        assert_eq!(task.content, "c1");
    }

    #[test]
    fn test_task_with_numeric_id() {
        let task: Task = serde_json::from_str(r#"{"title":"t2","content":"c2","id":7}"#).unwrap();
        assert_eq!(task.id, Some("7".to_string()));
    }

    #[test]
    fn test_task_with_string_id() {
        let task: Task =
            serde_json::from_str(r#"{"id":"abc-123","title":"t","content":"c"}"#).unwrap();
        assert_eq!(task.id, Some("abc-123".to_string()));
    }

    #[test]
    fn test_task_with_null_id() {
        let task: Task =
            serde_json::from_str(r#"{"id":null,"title":"t","content":"c"}"#).unwrap();
        assert_eq!(task.id, None);
    }

    #[test]
    fn test_task_rejects_object_id() {
        let result = serde_json::from_str::<Task>(r#"{"id":{},"title":"t","content":"c"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_draft_serializes_title_and_content_only() {
        let draft = TaskDraft::new("t2", "c2");
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body, serde_json::json!({"title": "t2", "content": "c2"}));
    }

    #[test]
    fn test_empty_draft_is_valid() {
        let draft = TaskDraft::new("", "");
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body, serde_json::json!({"title": "", "content": ""}));
    }
}
