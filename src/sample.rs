//! In-memory sample data for every page.
//!
//! The built-in data set is compiled into the binary. A seed file with the
//! same JSON shape can replace it; any section the seed leaves out is empty.
//! Nothing is ever written back.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::kanban_board::KanbanBoard;
use crate::task::{Person, Status, Task};

const EMBEDDED_SAMPLE: &str = include_str!("../data/sample.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub progress: u16,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub team: Vec<Person>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub title: String,
    pub value: String,
    pub change: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Meeting,
    Deadline,
    Task,
    Sprint,
    Other,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::Meeting,
        EventKind::Deadline,
        EventKind::Task,
        EventKind::Sprint,
        EventKind::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Meeting => "Meeting",
            EventKind::Deadline => "Deadline",
            EventKind::Task => "Task",
            EventKind::Sprint => "Sprint",
            EventKind::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub kind: EventKind,
    pub project: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Active,
    Busy,
    Away,
    Offline,
}

impl Presence {
    pub fn label(&self) -> &'static str {
        match self {
            Presence::Active => "Active",
            Presence::Busy => "Busy",
            Presence::Away => "Away",
            Presence::Offline => "Offline",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub presence: Presence,
    #[serde(default)]
    pub projects: Vec<String>,
}

impl TeamMember {
    pub fn person(&self) -> Person {
        Person::new(self.id.clone(), self.name.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub user: String,
    pub action: String,
    pub item: String,
    pub time: String,
    pub project: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Doc,
    Design,
    Pdf,
    Spreadsheet,
    Presentation,
}

impl DocumentKind {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Doc => "doc",
            DocumentKind::Design => "design",
            DocumentKind::Pdf => "pdf",
            DocumentKind::Spreadsheet => "spreadsheet",
            DocumentKind::Presentation => "presentation",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub kind: DocumentKind,
    pub size: String,
    pub modified: NaiveDate,
    pub owner: Person,
    #[serde(default)]
    pub tags: Vec<String>,
    pub project: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionPoint {
    pub name: String,
    pub completed: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusSlice {
    pub name: String,
    pub value: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Reports {
    #[serde(default)]
    pub completion: Vec<CompletionPoint>,
    #[serde(default)]
    pub project_status: Vec<StatusSlice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileProject {
    pub name: String,
    pub role: String,
    pub progress: u16,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub email: String,
    #[serde(default)]
    pub projects: Vec<ProfileProject>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SampleData {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub reports: Reports,
    #[serde(default)]
    pub profile: Profile,
}

impl SampleData {
    pub fn embedded() -> Result<Self> {
        Ok(serde_json::from_str(EMBEDDED_SAMPLE)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Reads `seed` when given, otherwise the built-in data set.
    pub fn load(seed: Option<&Path>) -> Result<Self> {
        match seed {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading seed file");
                Self::from_path(path)
            }
            None => Self::embedded(),
        }
    }

    /// Moves the tasks out into a board. Fails on duplicate task ids.
    pub fn take_board(&mut self) -> Result<KanbanBoard> {
        let tasks = std::mem::take(&mut self.tasks);
        Ok(KanbanBoard::from_tasks(tasks)?)
    }

    /// Distinct document projects in first-seen order.
    pub fn document_projects(&self) -> Vec<String> {
        let mut projects: Vec<String> = Vec::new();
        for doc in &self.documents {
            if !projects.contains(&doc.project) {
                projects.push(doc.project.clone());
            }
        }
        projects
    }
}
