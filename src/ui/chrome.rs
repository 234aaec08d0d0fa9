//! Header, sidebar and footer drawn around every page.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::click_areas::ClickAreas;
use crate::kanban_board::KanbanBoard;
use crate::theme::ThemeColors;
use crate::view_state::{Page, ViewState};

pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    view: &ViewState,
    board: &KanbanBoard,
    colors: &ThemeColors,
) {
    let mut spans = vec![
        Span::styled(
            " Trackezy ",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(colors.border)),
        Span::styled(
            view.page.label(),
            Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(task) = board.dragged_task() {
        spans.push(Span::styled(
            format!("   ⇄ dragging: {}", task.title),
            Style::default().fg(colors.dragging),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

pub fn render_sidebar(
    frame: &mut Frame,
    area: Rect,
    view: &ViewState,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut y = inner.y;
    let mut divider_drawn = false;
    for page in Page::ALL {
        if page.is_secondary() && !divider_drawn {
            divider_drawn = true;
            if y < inner.bottom() {
                let rule = "─".repeat(inner.width as usize);
                frame.render_widget(
                    Paragraph::new(rule).style(Style::default().fg(colors.border)),
                    Rect::new(inner.x, y, inner.width, 1),
                );
                y += 1;
            }
        }
        if y >= inner.bottom() {
            break;
        }

        let row = Rect::new(inner.x, y, inner.width, 1);
        let text = if view.sidebar_collapsed {
            format!(" {}", page.hotkey())
        } else {
            format!(" {} {}", page.hotkey(), page.label())
        };
        let style = if page == view.page {
            Style::default()
                .fg(colors.highlight)
                .bg(colors.selected_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.text)
        };
        frame.render_widget(Paragraph::new(text).style(style), row);
        click_areas.sidebar_items.push((row, page));
        y += 1;
    }
}

fn page_hints(page: Page, view: &ViewState, dragging: bool) -> &'static str {
    match page {
        Page::Board if dragging => "←/→ target  Enter drop  Esc cancel",
        Page::Board => "←/→/↑/↓ select  Space pick up  mouse drag",
        Page::Calendar => "←/→ prev/next  t today  v day/week/month",
        Page::Documents if view.documents.editing => "type to search  Enter done",
        Page::Documents => "/ search  p project  g grid/list  Esc clear",
        Page::Team | Page::Reports => "t switch tab",
        Page::Settings => "↑/↓ select  Enter toggle",
        Page::Dashboard | Page::Profile => "",
    }
}

pub fn render_footer(
    frame: &mut Frame,
    area: Rect,
    view: &ViewState,
    board: &KanbanBoard,
    colors: &ThemeColors,
) {
    let hints = page_hints(view.page, view, board.is_dragging());
    let mut spans = vec![
        Span::styled(" Tab/1-8 pages  [ sidebar  q quit", Style::default().fg(colors.muted)),
    ];
    if !hints.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(colors.border)));
        spans.push(Span::styled(hints, Style::default().fg(colors.muted)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    if let Some(status) = &view.status_line {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("{status} "),
                Style::default().fg(colors.dragging),
            ))
            .alignment(Alignment::Right),
            area,
        );
    }
}
