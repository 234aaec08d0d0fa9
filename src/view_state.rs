//! Per-view UI state.
//!
//! Everything the screen needs besides the data itself lives here and is
//! passed by reference into rendering and input handling.

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::config::Config;
use crate::kanban_board::KanbanBoard;
use crate::sample::Document;
use crate::task::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Dashboard,
    Board,
    Calendar,
    Documents,
    Team,
    Reports,
    Settings,
    Profile,
}

impl Page {
    /// Sidebar order.
    pub const ALL: [Page; 8] = [
        Page::Dashboard,
        Page::Board,
        Page::Calendar,
        Page::Documents,
        Page::Team,
        Page::Reports,
        Page::Settings,
        Page::Profile,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Board => "Board",
            Page::Calendar => "Calendar",
            Page::Documents => "Documents",
            Page::Team => "Team",
            Page::Reports => "Reports",
            Page::Settings => "Settings",
            Page::Profile => "Profile",
        }
    }

    /// Team and below sit under the sidebar divider.
    pub fn is_secondary(&self) -> bool {
        matches!(
            self,
            Page::Team | Page::Reports | Page::Settings | Page::Profile
        )
    }

    pub fn hotkey(&self) -> char {
        match self {
            Page::Dashboard => '1',
            Page::Board => '2',
            Page::Calendar => '3',
            Page::Documents => '4',
            Page::Team => '5',
            Page::Reports => '6',
            Page::Settings => '7',
            Page::Profile => '8',
        }
    }

    pub fn from_hotkey(c: char) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.hotkey() == c)
    }

    fn position(&self) -> usize {
        Page::ALL.iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn next(&self) -> Page {
        Page::ALL[(self.position() + 1) % Page::ALL.len()]
    }

    pub fn prev(&self) -> Page {
        Page::ALL[(self.position() + Page::ALL.len() - 1) % Page::ALL.len()]
    }
}

/// Keyboard selection on the board plus the column a drag currently hovers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardCursor {
    pub column: usize,
    pub row: usize,
    pub drop_target: Option<Status>,
}

impl BoardCursor {
    pub fn status(&self) -> Status {
        Status::from_index(self.column).unwrap_or(Status::Todo)
    }

    pub fn move_column(&mut self, delta: isize, board: &KanbanBoard) {
        let last = Status::ALL.len() as isize - 1;
        self.column = (self.column as isize + delta).clamp(0, last) as usize;
        self.clamp_row(board);
    }

    pub fn move_row(&mut self, delta: isize, board: &KanbanBoard) {
        let len = board.count_by_status(self.status());
        if len == 0 {
            self.row = 0;
            return;
        }
        self.row = (self.row as isize + delta).clamp(0, len as isize - 1) as usize;
    }

    pub fn clamp_row(&mut self, board: &KanbanBoard) {
        let len = board.count_by_status(self.status());
        self.row = self.row.min(len.saturating_sub(1));
    }

    /// Id of the highlighted card, if the column has one.
    pub fn selected_task_id<'a>(&self, board: &'a KanbanBoard) -> Option<&'a str> {
        board
            .get_tasks_by_status(self.status())
            .get(self.row)
            .map(|t| t.id.as_str())
    }

    /// Moves the hovered drop column, starting from the cursor column.
    pub fn move_drop_target(&mut self, delta: isize) {
        let current = self.drop_target.unwrap_or_else(|| self.status()).index() as isize;
        let last = Status::ALL.len() as isize - 1;
        let next = (current + delta).clamp(0, last) as usize;
        self.drop_target = Status::from_index(next);
    }

    /// Follows a dropped card so it stays selected in its new column.
    pub fn follow(&mut self, board: &KanbanBoard, task_id: &str) {
        if let Some(task) = board.task(task_id) {
            self.column = task.status.index();
            self.row = board
                .get_tasks_by_status(task.status)
                .iter()
                .position(|t| t.id == task_id)
                .unwrap_or(0);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarView {
    Day,
    #[default]
    Week,
    Month,
}

impl CalendarView {
    pub const ALL: [CalendarView; 3] = [CalendarView::Day, CalendarView::Week, CalendarView::Month];

    pub fn label(&self) -> &'static str {
        match self {
            CalendarView::Day => "Day",
            CalendarView::Week => "Week",
            CalendarView::Month => "Month",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            CalendarView::Day => CalendarView::Week,
            CalendarView::Week => CalendarView::Month,
            CalendarView::Month => CalendarView::Day,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    pub current: NaiveDate,
    pub today: NaiveDate,
    pub view: CalendarView,
}

impl CalendarState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            current: today,
            today,
            view: CalendarView::default(),
        }
    }

    pub fn previous(&mut self) {
        self.current = calendar::shift(self.current, self.view, -1);
    }

    pub fn next(&mut self) {
        self.current = calendar::shift(self.current, self.view, 1);
    }

    pub fn go_today(&mut self) {
        self.current = self.today;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFilter {
    pub query: String,
    pub project: Option<String>,
    pub mode: ViewMode,
    pub editing: bool,
}

impl DocumentFilter {
    pub fn matches(&self, doc: &Document) -> bool {
        let needle = self.query.to_lowercase();
        let matches_search = doc.title.to_lowercase().contains(&needle)
            || doc.tags.iter().any(|t| t.to_lowercase().contains(&needle));
        let matches_project = self.project.as_ref().map_or(true, |p| *p == doc.project);
        matches_search && matches_project
    }

    /// Steps through `projects` in order and then back to "all projects".
    pub fn cycle_project(&mut self, projects: &[String]) {
        self.project = match &self.project {
            None => projects.first().cloned(),
            Some(current) => projects
                .iter()
                .position(|p| p == current)
                .and_then(|i| projects.get(i + 1))
                .cloned(),
        };
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            ViewMode::List => ViewMode::Grid,
            ViewMode::Grid => ViewMode::List,
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeamTab {
    #[default]
    Members,
    Activity,
}

impl TeamTab {
    pub fn toggle(&self) -> Self {
        match self {
            TeamTab::Members => TeamTab::Activity,
            TeamTab::Activity => TeamTab::Members,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportsTab {
    #[default]
    Overview,
    Projects,
}

impl ReportsTab {
    pub fn toggle(&self) -> Self {
        match self {
            ReportsTab::Overview => ReportsTab::Projects,
            ReportsTab::Projects => ReportsTab::Overview,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewState {
    pub page: Page,
    pub sidebar_collapsed: bool,
    pub board: BoardCursor,
    pub calendar: CalendarState,
    pub documents: DocumentFilter,
    pub team_tab: TeamTab,
    pub reports_tab: ReportsTab,
    /// Index into the settings rows.
    pub settings_row: usize,
    /// Last diagnostic shown in the footer.
    pub status_line: Option<String>,
    pub should_quit: bool,
}

impl ViewState {
    pub fn new(config: &Config, today: NaiveDate) -> Self {
        Self {
            page: config.start_page,
            sidebar_collapsed: config.compact_sidebar,
            board: BoardCursor::default(),
            calendar: CalendarState::new(today),
            documents: DocumentFilter::default(),
            team_tab: TeamTab::default(),
            reports_tab: ReportsTab::default(),
            settings_row: 0,
            status_line: None,
            should_quit: false,
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_line = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::SampleData;
    use crate::task::Task;

    fn board() -> KanbanBoard {
        KanbanBoard::from_tasks(vec![
            Task::new("1", "a", Status::Todo),
            Task::new("2", "b", Status::Todo),
            Task::new("3", "c", Status::Done),
        ])
        .unwrap()
    }

    #[test]
    fn test_page_cycle_wraps() {
        assert_eq!(Page::Profile.next(), Page::Dashboard);
        assert_eq!(Page::Dashboard.prev(), Page::Profile);
        assert_eq!(Page::from_hotkey('2'), Some(Page::Board));
        assert_eq!(Page::from_hotkey('9'), None);
    }

    #[test]
    fn test_cursor_clamps_rows_per_column() {
        let board = board();
        let mut cursor = BoardCursor::default();
        cursor.move_row(5, &board);
        assert_eq!(cursor.row, 1);
        assert_eq!(cursor.selected_task_id(&board), Some("2"));

        cursor.move_column(1, &board);
        assert_eq!(cursor.status(), Status::InProgress);
        assert_eq!(cursor.row, 0);
        assert_eq!(cursor.selected_task_id(&board), None);

        cursor.move_column(10, &board);
        assert_eq!(cursor.status(), Status::Blocked);
    }

    #[test]
    fn test_drop_target_starts_from_cursor_column() {
        let mut cursor = BoardCursor {
            column: 1,
            ..Default::default()
        };
        cursor.move_drop_target(1);
        assert_eq!(cursor.drop_target, Some(Status::Done));
        cursor.move_drop_target(5);
        assert_eq!(cursor.drop_target, Some(Status::Blocked));
    }

    #[test]
    fn test_cursor_follows_moved_card() {
        let mut board = board();
        let mut cursor = BoardCursor::default();
        board.begin_drag("2");
        board.complete_drag(Status::Done).unwrap();
        cursor.follow(&board, "2");
        assert_eq!(cursor.status(), Status::Done);
        // Task 2 sits before task 3 in the backing list.
        assert_eq!(cursor.row, 0);
    }

    #[test]
    fn test_cursor_follows_card_landing_after_earlier_tasks() {
        let mut board = board();
        let mut cursor = BoardCursor::default();
        board.begin_drag("3");
        board.complete_drag(Status::Todo).unwrap();
        cursor.follow(&board, "3");
        assert_eq!(cursor.status(), Status::Todo);
        assert_eq!(cursor.row, 2);
        assert_eq!(cursor.selected_task_id(&board), Some("3"));
    }

    #[test]
    fn test_document_filter_matches_title_tags_and_project() {
        let sample = SampleData::embedded().unwrap();
        let mut filter = DocumentFilter {
            query: "DESIGN".to_string(),
            ..Default::default()
        };
        let hits: Vec<&str> = sample
            .documents
            .iter()
            .filter(|d| filter.matches(d))
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(hits, ["2", "5"]);

        filter.project = Some("Design System".to_string());
        let hits: Vec<&str> = sample
            .documents
            .iter()
            .filter(|d| filter.matches(d))
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(hits, ["5"]);
    }

    #[test]
    fn test_cycle_project_returns_to_all() {
        let projects = vec!["A".to_string(), "B".to_string()];
        let mut filter = DocumentFilter::default();
        filter.cycle_project(&projects);
        assert_eq!(filter.project.as_deref(), Some("A"));
        filter.cycle_project(&projects);
        assert_eq!(filter.project.as_deref(), Some("B"));
        filter.cycle_project(&projects);
        assert_eq!(filter.project, None);
    }

    #[test]
    fn test_view_state_reads_config() {
        let config = Config {
            start_page: Page::Calendar,
            compact_sidebar: true,
            ..Config::default()
        };
        let today = NaiveDate::from_ymd_opt(2023, 5, 17).unwrap();
        let mut state = ViewState::new(&config, today);
        assert_eq!(state.page, Page::Calendar);
        assert!(state.sidebar_collapsed);
        state.toggle_sidebar();
        assert!(!state.sidebar_collapsed);
    }
}
