use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::config::Config;
use crate::sample::{Document, SampleData};
use crate::theme::{document_color, ThemeColors};
use crate::view_state::{ViewMode, ViewState};

const GRID_COLUMNS: usize = 3;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    data: &SampleData,
    view: &ViewState,
    config: &Config,
    colors: &ThemeColors,
) {
    let [toolbar, body] =
        Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).areas(area);

    let filter = &view.documents;
    let docs: Vec<&Document> = data.documents.iter().filter(|d| filter.matches(d)).collect();

    render_toolbar(frame, toolbar, view, docs.len(), colors);

    if docs.is_empty() {
        frame.render_widget(
            Paragraph::new(" No documents match the current filter")
                .style(Style::default().fg(colors.muted)),
            body,
        );
        return;
    }

    match filter.mode {
        ViewMode::List => render_list(frame, body, &docs, config, colors),
        ViewMode::Grid => render_grid(frame, body, &docs, config, colors),
    }
}

fn render_toolbar(
    frame: &mut Frame,
    area: Rect,
    view: &ViewState,
    shown: usize,
    colors: &ThemeColors,
) {
    let filter = &view.documents;
    let cursor = if filter.editing { "▏" } else { "" };
    let search_style = if filter.editing {
        Style::default().fg(colors.highlight)
    } else {
        Style::default().fg(colors.text)
    };
    let line = Line::from(vec![
        Span::styled(" Search: ", Style::default().fg(colors.muted)),
        Span::styled(format!("{}{cursor}", filter.query), search_style),
        Span::styled("   Project: ", Style::default().fg(colors.muted)),
        Span::styled(
            filter.project.as_deref().unwrap_or("All"),
            Style::default().fg(colors.text),
        ),
        Span::styled(
            format!("   {shown} shown"),
            Style::default().fg(colors.muted),
        ),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_list(
    frame: &mut Frame,
    area: Rect,
    docs: &[&Document],
    config: &Config,
    colors: &ThemeColors,
) {
    let header = Row::new(["Type", "Name", "Project", "Size", "Modified", "Owner", "Tags"])
        .style(Style::default().fg(colors.muted).add_modifier(Modifier::BOLD));
    let rows = docs.iter().map(|doc| {
        Row::new(vec![
            Cell::from(doc.kind.label()).style(Style::default().fg(document_color(doc.kind))),
            Cell::from(doc.title.as_str()).style(Style::default().fg(colors.text)),
            Cell::from(doc.project.as_str()),
            Cell::from(doc.size.as_str()),
            Cell::from(config.date_format.format(doc.modified)),
            Cell::from(doc.owner.name.as_str()),
            Cell::from(doc.tags.join(", ")).style(Style::default().fg(colors.muted)),
        ])
    });
    let widths = [
        Constraint::Length(13),
        Constraint::Fill(3),
        Constraint::Fill(2),
        Constraint::Length(8),
        Constraint::Length(11),
        Constraint::Fill(2),
        Constraint::Fill(2),
    ];
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border)),
    );
    frame.render_widget(table, area);
}

fn render_grid(
    frame: &mut Frame,
    area: Rect,
    docs: &[&Document],
    config: &Config,
    colors: &ThemeColors,
) {
    let rows = docs.len().div_ceil(GRID_COLUMNS);
    let row_areas =
        Layout::vertical(vec![Constraint::Length(6); rows]).split(area);
    for (i, doc) in docs.iter().enumerate() {
        let cols =
            Layout::horizontal([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
                .split(row_areas[i / GRID_COLUMNS]);
        let lines = vec![
            Line::from(Span::styled(
                doc.kind.label(),
                Style::default().fg(document_color(doc.kind)),
            )),
            Line::from(Span::styled(
                format!("{} · {}", doc.size, config.date_format.format(doc.modified)),
                Style::default().fg(colors.muted),
            )),
            Line::from(Span::styled(
                doc.tags.iter().map(|t| format!("#{t}")).collect::<Vec<_>>().join(" "),
                Style::default().fg(colors.muted),
            )),
            Line::from(Span::styled(doc.owner.name.as_str(), Style::default().fg(colors.text))),
        ];
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", doc.title),
                Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border));
        frame.render_widget(Paragraph::new(lines).block(block), cols[i % GRID_COLUMNS]);
    }
}
