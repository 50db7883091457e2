use serde::{Deserialize, Serialize};

/// A single todo entry.
///
/// Tasks carry no identifier: a task is addressed by its position in the
/// list, so identities shift when an earlier task is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Display text (`item` on disk)
    #[serde(rename = "item", default)]
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// A new, not yet completed task
    pub fn new(text: impl Into<String>) -> Self {
        Task {
            text: text.into(),
            completed: false,
        }
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// The character shown inside the checkbox `[ ]`
    pub fn checkbox_char(&self) -> char {
        if self.completed { 'x' } else { ' ' }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_open() {
        let task = Task::new("buy milk");
        assert_eq!(task.text, "buy milk");
        assert!(!task.completed);
        assert_eq!(task.checkbox_char(), ' ');
    }

    #[test]
    fn toggle_flips_completion() {
        let mut task = Task::new("buy milk");
        task.toggle();
        assert!(task.completed);
        assert_eq!(task.checkbox_char(), 'x');
        task.toggle();
        assert!(!task.completed);
    }

    #[test]
    fn serde_uses_item_field_name() {
        let task = Task {
            text: "water plants".into(),
            completed: true,
        };
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"item":"water plants","completed":true}"#);
    }

    #[test]
    fn serde_defaults_missing_fields() {
        let task: Task = serde_json::from_str(r#"{"item":"a"}"#).unwrap();
        assert_eq!(task, Task::new("a"));

        let task: Task = serde_json::from_str(r#"{"completed":true}"#).unwrap();
        assert_eq!(task.text, "");
        assert!(task.completed);
    }

    #[test]
    fn serde_ignores_unknown_fields() {
        let task: Task =
            serde_json::from_str(r#"{"item":"a","completed":false,"priority":3}"#).unwrap();
        assert_eq!(task, Task::new("a"));
    }
}
