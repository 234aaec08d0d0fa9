//! Terminal front end: the event loop, input handling and page rendering.

mod board;
mod calendar;
mod chrome;
mod click_areas;
mod dashboard;
mod documents;
mod profile;
mod reports;
mod settings;
mod team;

use chrono::NaiveDate;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Layout},
    Frame, Terminal,
};
use std::io;
use tracing::info;

use crate::config::Config;
use crate::kanban_board::{DropOutcome, KanbanBoard};
use crate::sample::SampleData;
use crate::task::Status;
use crate::theme::ThemeColors;
use crate::view_state::{Page, ViewState};
use click_areas::ClickAreas;

pub struct App {
    pub board: KanbanBoard,
    pub data: SampleData,
    pub view: ViewState,
    pub config: Config,
    pub colors: ThemeColors,
    click_areas: ClickAreas,
}

impl App {
    pub fn new(board: KanbanBoard, data: SampleData, config: Config, today: NaiveDate) -> Self {
        let view = ViewState::new(&config, today);
        let colors = ThemeColors::for_mode(config.theme);
        Self {
            board,
            data,
            view,
            config,
            colors,
            click_areas: ClickAreas::default(),
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.view.page == Page::Documents && self.view.documents.editing {
            self.handle_search_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.view.should_quit = true;
                return;
            }
            KeyCode::Char('q') => {
                self.view.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.switch_page(self.view.page.next());
                return;
            }
            KeyCode::BackTab => {
                self.switch_page(self.view.page.prev());
                return;
            }
            KeyCode::Char('[') => {
                self.view.toggle_sidebar();
                return;
            }
            KeyCode::Char(c) => {
                if let Some(page) = Page::from_hotkey(c) {
                    self.switch_page(page);
                    return;
                }
            }
            _ => {}
        }

        match self.view.page {
            Page::Board => self.handle_board_key(key),
            Page::Calendar => self.handle_calendar_key(key),
            Page::Documents => self.handle_documents_key(key),
            Page::Team => {
                if key.code == KeyCode::Char('t') {
                    self.view.team_tab = self.view.team_tab.toggle();
                }
            }
            Page::Reports => {
                if key.code == KeyCode::Char('t') {
                    self.view.reports_tab = self.view.reports_tab.toggle();
                }
            }
            Page::Settings => self.handle_settings_key(key),
            Page::Dashboard | Page::Profile => {}
        }
    }

    fn switch_page(&mut self, page: Page) {
        if self.board.is_dragging() {
            self.cancel_drag();
        }
        self.view.documents.editing = false;
        self.view.page = page;
    }

    fn handle_board_key(&mut self, key: KeyEvent) {
        let dragging = self.board.is_dragging();
        match key.code {
            KeyCode::Left | KeyCode::Char('h') if dragging => self.view.board.move_drop_target(-1),
            KeyCode::Right | KeyCode::Char('l') if dragging => self.view.board.move_drop_target(1),
            KeyCode::Left | KeyCode::Char('h') => self.view.board.move_column(-1, &self.board),
            KeyCode::Right | KeyCode::Char('l') => self.view.board.move_column(1, &self.board),
            KeyCode::Up | KeyCode::Char('k') if !dragging => self.view.board.move_row(-1, &self.board),
            KeyCode::Down | KeyCode::Char('j') if !dragging => self.view.board.move_row(1, &self.board),
            KeyCode::Char(' ') if !dragging => {
                if let Some(id) = self.view.board.selected_task_id(&self.board) {
                    let id = id.to_string();
                    self.start_drag(id);
                }
            }
            KeyCode::Enter if dragging => {
                let target = self.view.board.drop_target.unwrap_or_else(|| self.view.board.status());
                self.drop_on(target);
            }
            KeyCode::Esc if dragging => self.cancel_drag(),
            _ => {}
        }
    }

    fn start_drag(&mut self, task_id: String) {
        let column = self.board.task(&task_id).map(|t| t.status);
        self.board.begin_drag(task_id);
        self.view.board.drop_target = column;
        self.view.status_line = None;
    }

    fn cancel_drag(&mut self) {
        self.board.cancel_drag();
        self.view.board.drop_target = None;
    }

    fn drop_on(&mut self, target: Status) {
        self.view.board.drop_target = None;
        match self.board.complete_drag(target) {
            Ok(DropOutcome::Moved { id, from, to }) => {
                info!(task_id = %id, from = %from, to = %to, "card moved");
                self.view.board.follow(&self.board, &id);
                self.view.set_status(format!("Moved to {}", to.label()));
            }
            Ok(DropOutcome::Unchanged { id }) => self.view.board.follow(&self.board, &id),
            Ok(DropOutcome::Idle) => {}
            Err(e) => self.view.set_status(e.to_string()),
        }
    }

    fn handle_calendar_key(&mut self, key: KeyEvent) {
        let calendar = &mut self.view.calendar;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => calendar.previous(),
            KeyCode::Right | KeyCode::Char('l') => calendar.next(),
            KeyCode::Char('t') => calendar.go_today(),
            KeyCode::Char('v') => calendar.view = calendar.view.next(),
            _ => {}
        }
    }

    fn handle_documents_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('/') => self.view.documents.editing = true,
            KeyCode::Char('p') => {
                let projects = self.data.document_projects();
                self.view.documents.cycle_project(&projects);
            }
            KeyCode::Char('g') => self.view.documents.toggle_mode(),
            KeyCode::Esc => self.view.documents.query.clear(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let filter = &mut self.view.documents;
        match key.code {
            KeyCode::Enter | KeyCode::Esc => filter.editing = false,
            KeyCode::Backspace => {
                filter.query.pop();
            }
            KeyCode::Char(c) => filter.query.push(c),
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.view.settings_row = self.view.settings_row.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.view.settings_row = (self.view.settings_row + 1).min(settings::ROWS - 1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => settings::toggle(self),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (col, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(page) = self.click_areas.page_at(col, row) {
                    self.switch_page(page);
                    return;
                }
                if self.view.page != Page::Board {
                    return;
                }
                if let Some(id) = self.click_areas.card_at(col, row).map(str::to_string) {
                    self.view.board.follow(&self.board, &id);
                    self.start_drag(id);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) if self.board.is_dragging() => {
                self.view.board.drop_target = self.click_areas.column_at(col, row);
            }
            MouseEventKind::Up(MouseButton::Left) if self.board.is_dragging() => {
                match self.click_areas.column_at(col, row) {
                    Some(status) => self.drop_on(status),
                    None => self.cancel_drag(),
                }
            }
            _ => {}
        }
    }
}

pub fn draw(frame: &mut Frame, app: &mut App) {
    let App {
        board,
        data,
        view,
        config,
        colors,
        click_areas,
    } = app;
    click_areas.reset();

    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let sidebar_width = if view.sidebar_collapsed { 6 } else { 20 };
    let [sidebar, content] =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Fill(1)]).areas(body);

    chrome::render_header(frame, header, view, board, colors);
    chrome::render_sidebar(frame, sidebar, view, colors, click_areas);
    chrome::render_footer(frame, footer, view, board, colors);

    match view.page {
        Page::Dashboard => dashboard::render(frame, content, data, board, config, colors),
        Page::Board => board::render(frame, content, board, view, colors, click_areas),
        Page::Calendar => calendar::render(frame, content, data, view, config, colors),
        Page::Documents => documents::render(frame, content, data, view, config, colors),
        Page::Team => team::render(frame, content, data, view, colors),
        Page::Reports => reports::render(frame, content, data, board, view, colors),
        Page::Settings => settings::render(frame, content, view, config, colors),
        Page::Profile => profile::render(frame, content, data, colors),
    }
}

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;
        app.handle_event(event::read()?);
        if app.view.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        let mut data = SampleData::embedded().unwrap();
        let board = data.take_board().unwrap();
        let config = Config {
            start_page: Page::Board,
            ..Config::default()
        };
        App::new(board, data, config, NaiveDate::from_ymd_opt(2023, 5, 17).unwrap())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
    }

    fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
        app.handle_mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    fn render(app: &mut App) -> Terminal<TestBackend> {
        render_sized(app, 140, 45)
    }

    fn render_sized(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_keyboard_drag_moves_selected_card() {
        let mut app = app();
        // First card in To Do is task 1.
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.board.dragged_task_id(), Some("1"));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.view.board.drop_target, Some(Status::Done));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.board.task("1").map(|t| t.status), Some(Status::Done));
        assert!(!app.board.is_dragging());
        assert_eq!(app.view.board.status(), Status::Done);
        assert_eq!(app.view.status_line.as_deref(), Some("Moved to Done"));
    }

    #[test]
    fn test_escape_cancels_drag() {
        let mut app = app();
        let before = app.board.tasks().to_vec();
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Esc);
        assert!(!app.board.is_dragging());
        assert_eq!(app.view.board.drop_target, None);
        assert_eq!(app.board.tasks(), before.as_slice());
    }

    #[test]
    fn test_switching_page_cancels_drag() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view.page, Page::Calendar);
        assert!(!app.board.is_dragging());
    }

    #[test]
    fn test_mouse_drag_and_drop() {
        let mut app = app();
        render(&mut app);

        let card = app.click_areas.card_rect("8").unwrap();
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), card.x + 1, card.y + 1);
        assert_eq!(app.board.dragged_task_id(), Some("8"));

        let todo = app.click_areas.column_rect(Status::Todo).unwrap();
        mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), todo.x + 2, todo.y + 2);
        assert_eq!(app.view.board.drop_target, Some(Status::Todo));

        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), todo.x + 2, todo.y + 2);
        assert_eq!(app.board.task("8").map(|t| t.status), Some(Status::Todo));
        let todo_ids: Vec<&str> = app
            .board
            .get_tasks_by_status(Status::Todo)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(todo_ids, ["1", "4", "5", "8"]);
    }

    #[test]
    fn test_mouse_release_outside_columns_cancels() {
        let mut app = app();
        render(&mut app);
        let before = app.board.tasks().to_vec();

        let card = app.click_areas.card_rect("2").unwrap();
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), card.x + 1, card.y + 1);
        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 0, 0);

        assert!(!app.board.is_dragging());
        assert_eq!(app.board.tasks(), before.as_slice());
    }

    #[test]
    fn test_sidebar_click_switches_page() {
        let mut app = app();
        render(&mut app);
        let rect = app.click_areas.page_rect(Page::Team).unwrap();
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), rect.x + 1, rect.y);
        assert_eq!(app.view.page, Page::Team);
    }

    #[test]
    fn test_documents_search_typing() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('/'));
        for c in "pdf".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        // 'q' while editing is text, not quit.
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view.documents.query, "pdf");
        assert!(!app.view.should_quit);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.view.should_quit);
    }

    #[test]
    fn test_every_page_renders() {
        let mut app = app();
        for page in Page::ALL {
            app.view.page = page;
            let terminal = render(&mut app);
            assert!(screen_text(&terminal).contains(page.label()));
        }
    }

    #[test]
    fn test_board_shows_column_counts_and_cards() {
        let mut app = app();
        let text = screen_text(&render(&mut app));
        assert!(text.contains("To Do (3)"));
        assert!(text.contains("In Progress (2)"));
        assert!(text.contains("Blocked (1)"));
        assert!(text.contains("API integration"));
    }

    #[test]
    fn test_collapsed_sidebar_hides_labels() {
        let mut app = app();
        app.view.page = Page::Board;
        press(&mut app, KeyCode::Char('['));
        assert!(app.view.sidebar_collapsed);
        let text = screen_text(&render(&mut app));
        assert!(!text.contains("Documents"));
    }

    #[test]
    fn test_short_column_scrolls_to_selected_card() {
        let mut app = app();
        render_sized(&mut app, 100, 12);
        assert!(app.click_areas.card_rect("5").is_none());

        for _ in 0..5 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.view.board.selected_task_id(&app.board), Some("5"));

        let text = screen_text(&render_sized(&mut app, 100, 12));
        assert!(app.click_areas.card_rect("5").is_some());
        assert!(app.click_areas.card_rect("1").is_none());
        assert!(text.contains("+2 more"));

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.board.dragged_task_id(), Some("5"));
    }

    #[test]
    fn test_leaving_documents_closes_search() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('/'));
        assert!(app.view.documents.editing);

        render(&mut app);
        let rect = app.click_areas.page_rect(Page::Team).unwrap();
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), rect.x + 1, rect.y);
        assert_eq!(app.view.page, Page::Team);
        assert!(!app.view.documents.editing);

        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.view.should_quit);
        assert!(app.view.documents.query.is_empty());
    }
}
