use ratatui::layout::Rect;

use crate::task::Status;
use crate::view_state::Page;

/// Mouse targets recorded while rendering each frame.
#[derive(Debug, Default, Clone)]
pub struct ClickAreas {
    pub sidebar_items: Vec<(Rect, Page)>,
    pub board_columns: Vec<(Rect, Status)>,
    /// Cards in draw order, so later (top-most) entries win.
    pub board_cards: Vec<(Rect, String)>,
}

impl ClickAreas {
    pub fn reset(&mut self) {
        self.sidebar_items.clear();
        self.board_columns.clear();
        self.board_cards.clear();
    }

    pub fn page_at(&self, col: u16, row: u16) -> Option<Page> {
        self.sidebar_items
            .iter()
            .find(|(rect, _)| contains(rect, col, row))
            .map(|(_, page)| *page)
    }

    pub fn column_at(&self, col: u16, row: u16) -> Option<Status> {
        self.board_columns
            .iter()
            .find(|(rect, _)| contains(rect, col, row))
            .map(|(_, status)| *status)
    }

    pub fn card_at(&self, col: u16, row: u16) -> Option<&str> {
        self.board_cards
            .iter()
            .rev()
            .find(|(rect, _)| contains(rect, col, row))
            .map(|(_, id)| id.as_str())
    }

    #[cfg(test)]
    pub fn card_rect(&self, id: &str) -> Option<Rect> {
        self.board_cards
            .iter()
            .find(|(_, card)| card == id)
            .map(|(rect, _)| *rect)
    }

    #[cfg(test)]
    pub fn column_rect(&self, status: Status) -> Option<Rect> {
        self.board_columns
            .iter()
            .find(|(_, s)| *s == status)
            .map(|(rect, _)| *rect)
    }

    #[cfg(test)]
    pub fn page_rect(&self, page: Page) -> Option<Rect> {
        self.sidebar_items
            .iter()
            .find(|(_, p)| *p == page)
            .map(|(rect, _)| *rect)
    }
}

/// Whether `(col, row)` falls inside `rect`.
pub fn contains(rect: &Rect, col: u16, row: u16) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}
