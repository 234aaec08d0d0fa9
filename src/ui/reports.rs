use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Gauge, Paragraph, Tabs},
    Frame,
};

use crate::kanban_board::KanbanBoard;
use crate::sample::SampleData;
use crate::task::Status;
use crate::theme::{status_color, ThemeColors};
use crate::view_state::{ReportsTab, ViewState};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    data: &SampleData,
    board: &KanbanBoard,
    view: &ViewState,
    colors: &ThemeColors,
) {
    let [tabs_area, body] =
        Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);

    let selected = match view.reports_tab {
        ReportsTab::Overview => 0,
        ReportsTab::Projects => 1,
    };
    frame.render_widget(
        Tabs::new(["Overview", "Projects"])
            .select(selected)
            .style(Style::default().fg(colors.muted))
            .highlight_style(
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
        tabs_area,
    );

    match view.reports_tab {
        ReportsTab::Overview => render_overview(frame, body, data, colors),
        ReportsTab::Projects => render_projects(frame, body, data, board, colors),
    }
}

fn render_overview(frame: &mut Frame, area: Rect, data: &SampleData, colors: &ThemeColors) {
    let [chart_area, summary_area] =
        Layout::horizontal([Constraint::Fill(3), Constraint::Fill(1)]).areas(area);

    let bars: Vec<(&str, u64)> = data
        .reports
        .completion
        .iter()
        .map(|p| (p.name.as_str(), p.completed))
        .collect();
    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Task Completion ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border)),
        )
        .data(bars.as_slice())
        .bar_width(5)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Blue))
        .value_style(Style::default().fg(Color::White).bg(Color::Blue));
    frame.render_widget(chart, chart_area);

    let (completed, total) = data
        .reports
        .completion
        .iter()
        .fold((0u64, 0u64), |(c, t), p| (c + p.completed, t + p.total));
    let rate = if total == 0 { 0.0 } else { completed as f64 / total as f64 * 100.0 };
    let lines = vec![
        Line::from(Span::styled("Completed", Style::default().fg(colors.muted))),
        Line::from(Span::styled(
            completed.to_string(),
            Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled("Planned", Style::default().fg(colors.muted))),
        Line::from(Span::styled(
            total.to_string(),
            Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled("Rate", Style::default().fg(colors.muted))),
        Line::from(Span::styled(
            format!("{rate:.0}%"),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Summary ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border)),
        ),
        summary_area,
    );
}

fn render_projects(
    frame: &mut Frame,
    area: Rect,
    data: &SampleData,
    board: &KanbanBoard,
    colors: &ThemeColors,
) {
    let [breakdown_area, board_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);

    let total: u64 = data.reports.project_status.iter().map(|s| s.value).sum();
    render_ratio_list(
        frame,
        breakdown_area,
        " Project Status ",
        data.reports
            .project_status
            .iter()
            .map(|s| (s.name.clone(), s.value, Color::Blue))
            .collect(),
        total,
        colors,
    );

    let task_total = board.tasks().len() as u64;
    render_ratio_list(
        frame,
        board_area,
        " Board Tasks ",
        Status::ALL
            .iter()
            .map(|s| (s.label().to_string(), board.count_by_status(*s) as u64, status_color(*s)))
            .collect(),
        task_total,
        colors,
    );
}

fn render_ratio_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    items: Vec<(String, u64, Color)>,
    total: u64,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical(vec![Constraint::Length(2); items.len()]).split(inner);
    for (row, (name, value, color)) in rows.iter().zip(items) {
        let ratio = if total == 0 { 0.0 } else { value as f64 / total as f64 };
        frame.render_widget(
            Gauge::default()
                .label(format!("{name}: {value}"))
                .gauge_style(Style::default().fg(color))
                .ratio(ratio.clamp(0.0, 1.0)),
            Rect { height: 1, ..*row },
        );
    }
}
