use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use std::ops::Range;

use super::click_areas::ClickAreas;
use crate::kanban_board::KanbanBoard;
use crate::task::{Status, Task};
use crate::theme::{avatar_color, priority_color, status_color, ThemeColors};
use crate::view_state::ViewState;

const CARD_HEIGHT: u16 = 5;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    board: &KanbanBoard,
    view: &ViewState,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let chunks = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

    for (i, (status, tasks)) in board.columns().into_iter().enumerate() {
        let column_area = chunks[i];
        render_column(frame, column_area, status, &tasks, board, view, colors, click_areas);
        click_areas.board_columns.push((column_area, status));
    }
}

#[allow(clippy::too_many_arguments)]
fn render_column(
    frame: &mut Frame,
    area: Rect,
    status: Status,
    tasks: &[&Task],
    board: &KanbanBoard,
    view: &ViewState,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let is_drop_target = view.board.drop_target == Some(status);
    let is_cursor_column = !board.is_dragging() && view.board.status() == status;

    let border_style = if is_drop_target {
        Style::default()
            .fg(colors.drop_target)
            .add_modifier(Modifier::BOLD)
    } else if is_cursor_column {
        Style::default().fg(colors.highlight)
    } else {
        Style::default().fg(colors.border)
    };

    let title = Line::from(vec![
        Span::styled("● ", Style::default().fg(status_color(status))),
        Span::styled(
            format!("{} ({})", status.label(), tasks.len()),
            Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
        ),
    ]);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if tasks.is_empty() {
        let placeholder = Paragraph::new("No tasks yet")
            .alignment(Alignment::Center)
            .style(Style::default().fg(colors.muted))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(colors.border)),
            );
        let height = inner.height.min(3);
        frame.render_widget(placeholder, Rect::new(inner.x, inner.y, inner.width, height));
        return;
    }

    let focus = (view.board.status() == status).then_some(view.board.row);
    let shown = visible_range(tasks.len(), inner.height, focus);
    let hidden = tasks.len() - shown.len();

    let mut y = inner.y;
    for (row, task) in tasks.iter().enumerate().take(shown.end).skip(shown.start) {
        let card_area = Rect::new(inner.x, y, inner.width, CARD_HEIGHT);
        let selected = is_cursor_column && view.board.row == row;
        let dragged = board.dragged_task_id() == Some(task.id.as_str());
        render_card(frame, card_area, task, selected, dragged, colors);
        click_areas.board_cards.push((card_area, task.id.clone()));
        y += CARD_HEIGHT;
    }

    if hidden > 0 && y < inner.bottom() {
        frame.render_widget(
            Paragraph::new(format!("+{hidden} more"))
                .alignment(Alignment::Center)
                .style(Style::default().fg(colors.muted)),
            Rect::new(inner.x, y, inner.width, 1),
        );
    }
}

/// Cards drawn in a column `height` rows tall, scrolled so the `focus` row
/// stays on screen. One row is kept for the overflow line when not all fit.
fn visible_range(len: usize, height: u16, focus: Option<usize>) -> Range<usize> {
    if len <= usize::from(height / CARD_HEIGHT) {
        return 0..len;
    }
    let capacity = usize::from(height.saturating_sub(1) / CARD_HEIGHT);
    if capacity == 0 {
        return 0..0;
    }
    let start = match focus {
        Some(row) if row >= capacity => (row + 1 - capacity).min(len - capacity),
        _ => 0,
    };
    start..start + capacity
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    task: &Task,
    selected: bool,
    dragged: bool,
    colors: &ThemeColors,
) {
    let border_style = if dragged {
        Style::default()
            .fg(colors.dragging)
            .add_modifier(Modifier::BOLD)
    } else if selected {
        Style::default().fg(colors.highlight)
    } else {
        Style::default().fg(colors.border)
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    if dragged {
        block = block.title(Span::styled(" dragging ", Style::default().fg(colors.dragging)));
    }

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("[{}] ", task.priority.label()),
            Style::default().fg(priority_color(task.priority)),
        ),
        Span::styled(
            task.title.as_str(),
            Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
        ),
    ])];

    lines.push(match &task.description {
        Some(description) => Line::from(Span::styled(
            description.as_str(),
            Style::default().fg(colors.muted),
        )),
        None => Line::default(),
    });

    if let Some(person) = &task.assignee {
        lines.push(Line::from(vec![
            Span::styled(
                format!("({}) ", person.initials()),
                Style::default()
                    .fg(avatar_color(person, colors))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(person.name.as_str(), Style::default().fg(colors.muted)),
        ]));
    }

    let mut paragraph = Paragraph::new(lines).block(block);
    if selected && !dragged {
        paragraph = paragraph.style(Style::default().bg(colors.selected_bg));
    }
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(3, 20, None, 0..3)]
    #[case(3, 11, None, 0..2)]
    #[case(3, 6, Some(0), 0..1)]
    #[case(3, 6, Some(2), 2..3)]
    #[case(5, 11, Some(3), 2..4)]
    #[case(5, 11, Some(9), 3..5)]
    #[case(2, 3, Some(1), 0..0)]
    fn test_visible_range_keeps_focus_on_screen(
        #[case] len: usize,
        #[case] height: u16,
        #[case] focus: Option<usize>,
        #[case] expected: Range<usize>,
    ) {
        assert_eq!(visible_range(len, height, focus), expected);
    }
}
