use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::calendar::{
    days_of_week, events_at_hour, events_for_date, hour_label, month_grid, range_label,
    span_hours, time_label, DAY_HOURS,
};
use crate::config::Config;
use crate::sample::{CalendarEvent, EventKind, SampleData};
use crate::theme::{event_color, ThemeColors};
use crate::view_state::{CalendarView, ViewState};

const UPCOMING: usize = 5;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    data: &SampleData,
    view: &ViewState,
    config: &Config,
    colors: &ThemeColors,
) {
    let [toolbar, grid, bottom] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(UPCOMING as u16 + 2),
    ])
    .areas(area);

    render_toolbar(frame, toolbar, view, colors);

    let state = &view.calendar;
    match state.view {
        CalendarView::Day => {
            render_hour_grid(frame, grid, &[state.current], data, state.today, config, colors)
        }
        CalendarView::Week => render_hour_grid(
            frame,
            grid,
            &days_of_week(state.current),
            data,
            state.today,
            config,
            colors,
        ),
        CalendarView::Month => render_month(frame, grid, data, state.current, state.today, colors),
    }

    let [upcoming, legend] =
        Layout::horizontal([Constraint::Fill(3), Constraint::Fill(1)]).areas(bottom);
    render_upcoming(frame, upcoming, &data.events, config, colors);
    render_legend(frame, legend, colors);
}

fn render_toolbar(frame: &mut Frame, area: Rect, view: &ViewState, colors: &ThemeColors) {
    let state = &view.calendar;
    let mut spans = vec![Span::styled(
        format!(" {}   ", range_label(state.current, state.view)),
        Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
    )];
    for mode in CalendarView::ALL {
        let style = if mode == state.view {
            Style::default()
                .fg(colors.highlight)
                .bg(colors.selected_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.muted)
        };
        spans.push(Span::styled(format!(" {} ", mode.label()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Text for one hour cell: the first event starting then, or a continuation
/// marker for an event that started an hour earlier and spans two.
fn hour_cell<'a>(events: &'a [CalendarEvent], day: NaiveDate, hour: u32) -> Cell<'a> {
    if let Some(event) = events_at_hour(events, day, hour).into_iter().next() {
        return Cell::from(event.title.as_str()).style(
            Style::default()
                .fg(ratatui::style::Color::White)
                .bg(event_color(event.kind)),
        );
    }
    if hour > 0 {
        if let Some(event) = events_at_hour(events, day, hour - 1)
            .into_iter()
            .find(|e| span_hours(e) >= 2)
        {
            return Cell::from("┆").style(Style::default().fg(event_color(event.kind)));
        }
    }
    Cell::from("")
}

fn render_hour_grid(
    frame: &mut Frame,
    area: Rect,
    days: &[NaiveDate],
    data: &SampleData,
    today: NaiveDate,
    config: &Config,
    colors: &ThemeColors,
) {
    let header = Row::new(std::iter::once(Cell::from("")).chain(days.iter().map(|day| {
        let style = if *day == today {
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.text)
        };
        Cell::from(day.format("%a %-d").to_string()).style(style)
    })));

    let rows = DAY_HOURS.map(|hour| {
        let label = Cell::from(hour_label(hour, config.use_24h_time))
            .style(Style::default().fg(colors.muted));
        Row::new(
            std::iter::once(label).chain(days.iter().map(|day| hour_cell(&data.events, *day, hour))),
        )
    });

    let widths = std::iter::once(Constraint::Length(6))
        .chain(days.iter().map(|_| Constraint::Fill(1)));
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border)),
    );
    frame.render_widget(table, area);
}

fn render_month(
    frame: &mut Frame,
    area: Rect,
    data: &SampleData,
    current: NaiveDate,
    today: NaiveDate,
    colors: &ThemeColors,
) {
    let header = Row::new(["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"])
        .style(Style::default().fg(colors.muted));
    let rows = month_grid(current).into_iter().map(|week| {
        Row::new(week.map(|day| match day {
            None => Cell::from(""),
            Some(day) => {
                let count = events_for_date(&data.events, day).len();
                let text = if count > 0 {
                    format!("{:>2} •{count}", day.day())
                } else {
                    format!("{:>2}", day.day())
                };
                let style = if day == today {
                    Style::default()
                        .fg(colors.highlight)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors.text)
                };
                Cell::from(text).style(style)
            }
        }))
        .height(2)
    });
    let table = Table::new(rows, [Constraint::Fill(1); 7]).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border)),
    );
    frame.render_widget(table, area);
}

fn render_upcoming(
    frame: &mut Frame,
    area: Rect,
    events: &[CalendarEvent],
    config: &Config,
    colors: &ThemeColors,
) {
    let lines: Vec<Line> = events
        .iter()
        .take(UPCOMING)
        .map(|event| {
            Line::from(vec![
                Span::styled("▌ ", Style::default().fg(event_color(event.kind))),
                Span::styled(event.title.as_str(), Style::default().fg(colors.text)),
                Span::styled(
                    format!("  [{}]  ", event.project),
                    Style::default().fg(colors.muted),
                ),
                Span::styled(
                    format!(
                        "{}, {} - {}",
                        config.date_format.format(event.start.date()),
                        time_label(event.start, config.use_24h_time),
                        time_label(event.end, config.use_24h_time)
                    ),
                    Style::default().fg(colors.muted),
                ),
            ])
        })
        .collect();
    let block = Block::default()
        .title(" Upcoming Events ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_legend(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let lines: Vec<Line> = EventKind::ALL
        .iter()
        .map(|kind| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(event_color(*kind))),
                Span::styled(kind.label(), Style::default().fg(colors.text)),
            ])
        })
        .collect();
    let block = Block::default()
        .title(" Legend ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_month_view_marks_event_days() {
        let data = SampleData::embedded().unwrap();
        let config = Config::default();
        let today = NaiveDate::from_ymd_opt(2023, 5, 17).unwrap();
        let mut view = ViewState::new(&config, today);
        view.calendar.view = CalendarView::Month;

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render(f, area, &data, &view, &config, &crate::theme::dark_colors())
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("May 2023"));
        // May 1 shares 1 % 7 with the two May 15 events.
        assert!(text.contains(" 1 •2"));
    }
}
