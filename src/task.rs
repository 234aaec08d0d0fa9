use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;

/// Column a task lives in. Serialized with the wire names used by seed files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Todo,
    InProgress,
    Done,
    Blocked,
}

impl Status {
    /// Board column order.
    pub const ALL: [Status; 4] = [
        Status::Todo,
        Status::InProgress,
        Status::Done,
        Status::Blocked,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Status::Todo => "To Do",
            Status::InProgress => "In Progress",
            Status::Done => "Done",
            Status::Blocked => "Blocked",
        }
    }

    /// Label used on project cards, where `done` reads as "Completed".
    pub fn project_label(&self) -> &'static str {
        match self {
            Status::Done => "Completed",
            other => other.label(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Done => "done",
            Status::Blocked => "blocked",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Status::Todo => 0,
            Status::InProgress => 1,
            Status::Done => 2,
            Status::Blocked => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Status> {
        Status::ALL.get(index).copied()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(Status::Todo),
            "in-progress" => Ok(Status::InProgress),
            "done" => Ok(Status::Done),
            "blocked" => Ok(Status::Blocked),
            other => Err(BoardError::InvalidStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Person {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: None,
        }
    }

    /// First letter of a single-word name, or first letters of the first and
    /// last words, uppercased.
    pub fn initials(&self) -> String {
        let words: Vec<&str> = self.name.split_whitespace().collect();
        let first_char = |w: &str| w.chars().next().map(|c| c.to_uppercase().to_string());
        match words.as_slice() {
            [] => String::new(),
            [only] => first_char(only).unwrap_or_default(),
            [first, .., last] => {
                let mut out = first_char(first).unwrap_or_default();
                out.push_str(&first_char(last).unwrap_or_default());
                out
            }
        }
    }

    /// Stable palette slot derived from the name.
    pub fn color_index(&self, palette_len: usize) -> usize {
        if palette_len == 0 {
            return 0;
        }
        let hash: usize = self.name.chars().map(|c| c as usize).sum();
        hash % palette_len
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: Status,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Person>,
}

impl Task {
    #[cfg(test)]
    pub fn new(id: impl Into<String>, title: impl Into<String>, status: Status) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            status,
            priority: Priority::Medium,
            assignee: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("todo", Status::Todo)]
    #[case("in-progress", Status::InProgress)]
    #[case("done", Status::Done)]
    #[case("blocked", Status::Blocked)]
    fn test_status_parses_wire_names(#[case] raw: &str, #[case] expected: Status) {
        assert_eq!(raw.parse::<Status>(), Ok(expected));
        assert_eq!(expected.to_string(), raw);
    }

    #[rstest]
    #[case("archived")]
    #[case("Todo")]
    #[case("")]
    fn test_status_rejects_unknown_names(#[case] raw: &str) {
        assert_eq!(
            raw.parse::<Status>(),
            Err(BoardError::InvalidStatus(raw.to_string()))
        );
    }

    #[test]
    fn test_status_index_matches_column_order() {
        for (i, status) in Status::ALL.iter().enumerate() {
            assert_eq!(status.index(), i);
            assert_eq!(Status::from_index(i), Some(*status));
        }
        assert_eq!(Status::from_index(4), None);
    }

    #[test]
    fn test_project_label_renames_done() {
        assert_eq!(Status::Done.project_label(), "Completed");
        assert_eq!(Status::Blocked.project_label(), "Blocked");
    }

    #[rstest]
    #[case("John Doe", "JD")]
    #[case("cher", "C")]
    #[case("Mary Ann Evans", "ME")]
    #[case("  ", "")]
    fn test_initials(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(Person::new("1", name).initials(), expected);
    }

    #[test]
    fn test_color_index_is_stable_and_bounded() {
        let person = Person::new("1", "Jane Smith");
        let a = person.color_index(6);
        assert_eq!(a, person.color_index(6));
        assert!(a < 6);
        assert_eq!(person.color_index(0), 0);
    }

    #[test]
    fn test_task_json_uses_wire_names() {
        let json = r#"{"id":"8","title":"API integration","status":"in-progress","priority":"high"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.status, Status::InProgress);
        assert_eq!(task.priority, Priority::High);
        assert!(task.assignee.is_none());

        let bad = r#"{"id":"8","title":"x","status":"archived","priority":"high"}"#;
        assert!(serde_json::from_str::<Task>(bad).is_err());
    }
}
