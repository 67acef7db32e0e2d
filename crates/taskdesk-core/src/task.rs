use serde::{Deserialize, Serialize};

/// The single managed entity: an id, an optional label, and a completion flag.
///
/// The wire shape is `{"id": int, "name": string|null, "isCompleted": bool}`.
/// Every field defaults when absent from a request body; an `id` of `0` means
/// "let the store assign one".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Task {
    pub id: i32,
    pub name: Option<String>,
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
}

impl Task {
    pub fn new(name: Option<String>) -> Self {
        Self {
            id: 0,
            name,
            is_completed: false,
        }
    }

    pub fn completed(mut self) -> Self {
        self.is_completed = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let task = Task::new(Some("buy milk".to_string()));

        assert_eq!(task.id, 0);
        assert_eq!(task.name.as_deref(), Some("buy milk"));
        assert!(!task.is_completed);
    }

    #[test]
    fn test_completed_builder() {
        let task = Task::new(None).completed();
        assert!(task.is_completed);
    }

    #[test]
    fn test_json_shape() {
        let task = Task {
            id: 1,
            name: Some("buy milk".to_string()),
            is_completed: true,
        };

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "buy milk", "isCompleted": true})
        );
    }

    #[test]
    fn test_missing_fields_default() {
        let task: Task = serde_json::from_str(r#"{"name":"buy milk"}"#).unwrap();

        assert_eq!(task.id, 0);
        assert!(!task.is_completed);
    }
}
