use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Tabs},
    Frame,
};

use crate::sample::SampleData;
use crate::theme::{avatar_color, presence_color, ThemeColors};
use crate::view_state::{TeamTab, ViewState};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    data: &SampleData,
    view: &ViewState,
    colors: &ThemeColors,
) {
    let [tabs_area, body] =
        Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);

    let selected = match view.team_tab {
        TeamTab::Members => 0,
        TeamTab::Activity => 1,
    };
    frame.render_widget(
        Tabs::new(["Members", "Recent Activity"])
            .select(selected)
            .style(Style::default().fg(colors.muted))
            .highlight_style(
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
        tabs_area,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    match view.team_tab {
        TeamTab::Members => {
            let header = Row::new(["", "Name", "Role", "Email", "Phone", "Projects"])
                .style(Style::default().fg(colors.muted).add_modifier(Modifier::BOLD));
            let rows = data.team.iter().map(|member| {
                let person = member.person();
                Row::new(vec![
                    Cell::from(Span::styled(
                        format!("● {}", member.presence.label()),
                        Style::default().fg(presence_color(member.presence)),
                    )),
                    Cell::from(Span::styled(
                        format!("({}) {}", person.initials(), member.name),
                        Style::default()
                            .fg(avatar_color(&person, colors))
                            .add_modifier(Modifier::BOLD),
                    )),
                    Cell::from(member.role.as_str()),
                    Cell::from(member.email.as_str()),
                    Cell::from(member.phone.as_str()),
                    Cell::from(member.projects.join(", ")).style(Style::default().fg(colors.muted)),
                ])
                .style(Style::default().fg(colors.text))
            });
            let widths = [
                Constraint::Length(9),
                Constraint::Fill(2),
                Constraint::Fill(2),
                Constraint::Fill(2),
                Constraint::Length(17),
                Constraint::Fill(3),
            ];
            frame.render_widget(Table::new(rows, widths).header(header).block(block), body);
        }
        TeamTab::Activity => {
            let lines: Vec<Line> = data
                .activities
                .iter()
                .map(|a| {
                    Line::from(vec![
                        Span::styled(
                            a.user.as_str(),
                            Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(format!(" {} ", a.action)),
                        Span::styled(a.item.as_str(), Style::default().fg(colors.highlight)),
                        Span::styled(
                            format!("  {} · {}", a.project, a.time),
                            Style::default().fg(colors.muted),
                        ),
                    ])
                })
                .collect();
            frame.render_widget(Paragraph::new(lines).block(block), body);
        }
    }
}
