use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::sample::SampleData;
use crate::task::Person;
use crate::theme::{avatar_color, ThemeColors};

pub fn render(frame: &mut Frame, area: Rect, data: &SampleData, colors: &ThemeColors) {
    let profile = &data.profile;
    let [card, projects_area] =
        Layout::vertical([Constraint::Length(5), Constraint::Fill(1)]).areas(area);

    let person = Person::new("me", profile.name.clone());
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("({}) ", person.initials()),
                Style::default()
                    .fg(avatar_color(&person, colors))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                profile.name.as_str(),
                Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(profile.role.as_str(), Style::default().fg(colors.muted))),
        Line::from(Span::styled(profile.email.as_str(), Style::default().fg(colors.muted))),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Profile ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border)),
        ),
        card,
    );

    let block = Block::default()
        .title(" My Projects ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));
    let inner = block.inner(projects_area);
    frame.render_widget(block, projects_area);

    let rows =
        Layout::vertical(vec![Constraint::Length(3); profile.projects.len()]).split(inner);
    for (row, project) in rows.iter().zip(&profile.projects) {
        let [label, gauge, _] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(*row);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(project.name.as_str(), Style::default().fg(colors.text)),
                Span::styled(
                    format!("  {}", project.role),
                    Style::default().fg(colors.muted),
                ),
            ])),
            label,
        );
        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(colors.highlight))
                .percent(project.progress.min(100)),
            gauge,
        );
    }
}
