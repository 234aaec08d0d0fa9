use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::config::Config;
use crate::kanban_board::KanbanBoard;
use crate::sample::{Project, SampleData};
use crate::theme::{avatar_color, status_color, ThemeColors};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    data: &SampleData,
    board: &KanbanBoard,
    config: &Config,
    colors: &ThemeColors,
) {
    let [stats_area, heading, projects_area] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    render_stats(frame, stats_area, data, board, colors);

    frame.render_widget(
        Paragraph::new(Span::styled(
            " Active Projects",
            Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
        )),
        heading,
    );

    let rows = data.projects.len().div_ceil(2).max(1);
    let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(projects_area);
    for (i, project) in data.projects.iter().enumerate() {
        let cols = Layout::horizontal([Constraint::Ratio(1, 2); 2]).split(row_areas[i / 2]);
        render_project_card(frame, cols[i % 2], project, config, colors);
    }
}

fn render_stats(
    frame: &mut Frame,
    area: Rect,
    data: &SampleData,
    board: &KanbanBoard,
    colors: &ThemeColors,
) {
    // The board's live completion sits next to the seeded figures.
    let live = format!("{:.0}%", board.completion_rate() * 100.0);
    let mut cards: Vec<(&str, String, String)> = data
        .stats
        .iter()
        .map(|s| (s.title.as_str(), s.value.clone(), s.change.clone()))
        .collect();
    cards.push(("Board Done", live, format!("{} tasks", board.tasks().len())));

    let chunks = Layout::horizontal(vec![Constraint::Ratio(1, cards.len() as u32); cards.len()])
        .split(area);
    for (chunk, (title, value, change)) in chunks.iter().zip(cards) {
        let lines = vec![
            Line::from(Span::styled(title, Style::default().fg(colors.muted))),
            Line::from(vec![
                Span::styled(
                    value,
                    Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(change, Style::default().fg(Color::Green)),
            ]),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border));
        frame.render_widget(Paragraph::new(lines).block(block), *chunk);
    }
}

fn render_project_card(
    frame: &mut Frame,
    area: Rect,
    project: &Project,
    config: &Config,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", project.title),
            Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [badge, description, gauge, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("● {}", project.status.project_label()),
            Style::default().fg(status_color(project.status)),
        )),
        badge,
    );
    frame.render_widget(
        Paragraph::new(project.description.as_str())
            .style(Style::default().fg(colors.muted))
            .wrap(Wrap { trim: true }),
        description,
    );
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(status_color(project.status)))
            .percent(project.progress.min(100)),
        gauge,
    );

    let mut spans: Vec<Span> = project
        .team
        .iter()
        .map(|p| {
            Span::styled(
                format!("{} ", p.initials()),
                Style::default().fg(avatar_color(p, colors)),
            )
        })
        .collect();
    if let Some(due) = project.due_date {
        spans.push(Span::styled(
            format!(" due {}", config.date_format.format(due)),
            Style::default().fg(colors.muted),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), footer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DateFormat;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(config: &Config) -> String {
        let mut data = SampleData::embedded().unwrap();
        let board = data.take_board().unwrap();
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render(f, area, &data, &board, config, &crate::theme::dark_colors())
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_due_dates_follow_date_format() {
        let text = screen(&Config::default());
        assert!(text.contains("due 07/15/2023"));

        let config = Config {
            date_format: DateFormat::Ymd,
            ..Config::default()
        };
        let text = screen(&config);
        assert!(text.contains("due 2023/07/15"));
        assert!(!text.contains("due 07/15/2023"));
    }
}
