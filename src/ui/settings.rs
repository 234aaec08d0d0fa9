//! Settings page. Changes apply to the running session only.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::App;
use crate::config::Config;
use crate::theme::{ThemeColors, ThemeMode};
use crate::view_state::ViewState;

/// Number of editable rows.
pub const ROWS: usize = 4;

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

fn rows(view: &ViewState, config: &Config) -> [(&'static str, String); ROWS] {
    [
        ("Theme", config.theme.label().to_string()),
        ("Compact sidebar", on_off(view.sidebar_collapsed).to_string()),
        ("Date format", config.date_format.label().to_string()),
        ("Use 24-hour time", on_off(config.use_24h_time).to_string()),
    ]
}

/// Flips or cycles the selected row.
pub fn toggle(app: &mut App) {
    match app.view.settings_row {
        0 => {
            app.config.theme = app.config.theme.next();
            app.colors = ThemeColors::for_mode(app.config.theme);
        }
        1 => {
            app.view.toggle_sidebar();
            app.config.compact_sidebar = app.view.sidebar_collapsed;
        }
        2 => app.config.date_format = app.config.date_format.next(),
        3 => app.config.use_24h_time = !app.config.use_24h_time,
        _ => {}
    }
    tracing::debug!(row = app.view.settings_row, "setting changed");
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    view: &ViewState,
    config: &Config,
    colors: &ThemeColors,
) {
    let mut lines: Vec<Line> = rows(view, config)
        .into_iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let selected = i == view.settings_row;
            let marker = if selected { "▸ " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(colors.highlight)
                    .bg(colors.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };
            Line::from(vec![
                Span::styled(format!("{marker}{label:<20}"), style),
                Span::styled(value, style),
            ])
        })
        .collect();

    lines.push(Line::default());
    let seed = config
        .seed
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());
    for (label, value) in [
        ("Log level", config.log_level.clone()),
        ("Log directory", config.log_dir().display().to_string()),
        ("Sample data", seed),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("  {label:<20}"), Style::default().fg(colors.muted)),
            Span::styled(value, Style::default().fg(colors.muted)),
        ]));
    }
    if config.theme == ThemeMode::System {
        lines.push(Line::from(Span::styled(
            "  System theme follows the terminal's COLORFGBG hint",
            Style::default().fg(colors.muted),
        )));
    }

    let block = Block::default()
        .title(" Appearance & Display ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DateFormat;
    use crate::kanban_board::KanbanBoard;
    use crate::sample::SampleData;
    use chrono::NaiveDate;

    fn app() -> App {
        App::new(
            KanbanBoard::default(),
            SampleData::default(),
            Config::default(),
            NaiveDate::from_ymd_opt(2023, 5, 17).unwrap(),
        )
    }

    #[test]
    fn test_toggle_each_row() {
        let mut app = app();
        toggle(&mut app);
        assert_eq!(app.config.theme, ThemeMode::Light);

        app.view.settings_row = 1;
        toggle(&mut app);
        assert!(app.view.sidebar_collapsed);
        assert!(app.config.compact_sidebar);

        app.view.settings_row = 2;
        toggle(&mut app);
        assert_eq!(app.config.date_format, DateFormat::Dmy);

        app.view.settings_row = 3;
        toggle(&mut app);
        assert!(app.config.use_24h_time);
    }
}
