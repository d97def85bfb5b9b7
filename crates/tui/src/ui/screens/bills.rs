use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{
    app::AppState,
    ui::{
        components::money::amount_style,
        theme::Theme,
        view::{self, BillRow},
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    render_list(frame, layout[0], state, &theme);
    render_total(frame, layout[1], state, &theme);
}

fn render_list(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let focused = !state.dialog.is_open();
    let block = Block::default()
        .title("Bills")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            theme.border_focused
        } else {
            theme.border
        }));

    let rows = view::bill_rows(state);
    if rows.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "No bills yet. Press a to add one.",
            Style::default().fg(theme.dim),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let width = description_width(&rows);
    let items = rows
        .iter()
        .map(|row| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("#{:<5}", row.id), Style::default().fg(theme.dim)),
                Span::raw(format!("{:<width$}  ", row.description)),
                Span::styled(row.amount_label.as_str(), amount_style(row.amount, theme)),
            ]))
        })
        .collect::<Vec<_>>();

    let mut list_state = ListState::default();
    list_state.select(rows.iter().position(|row| row.selected));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_total(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let total = Paragraph::new(Line::from(Span::styled(
        view::total_label(state),
        Style::default()
            .fg(theme.text)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Right)
    .block(block);
    frame.render_widget(total, area);
}

fn description_width(rows: &[BillRow]) -> usize {
    rows.iter()
        .map(|row| row.description.chars().count())
        .max()
        .unwrap_or(0)
        .min(40)
}
