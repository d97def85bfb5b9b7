use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{
    app::{AddBillDialog, DialogField},
    ui::{components::centered_box, theme::Theme},
};

/// Modal form drawn over the bill list.
pub fn render(frame: &mut Frame<'_>, area: Rect, dialog: &AddBillDialog) {
    if !dialog.is_open() {
        return;
    }
    let theme = Theme::default();

    let card_area = centered_box(44, 8, area);
    frame.render_widget(Clear, card_area);

    let block = Block::default()
        .title(" add bill ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_focused));
    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Description
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
        ])
        .horizontal_margin(1)
        .split(inner);

    render_input(
        frame,
        rows[0],
        "Description",
        &dialog.description,
        dialog.focus == DialogField::Description,
        &theme,
    );
    render_input(
        frame,
        rows[2],
        "Amount",
        &dialog.amount,
        dialog.focus == DialogField::Amount,
        &theme,
    );

    if let Some(message) = &dialog.error {
        frame.render_widget(
            Paragraph::new(Span::styled(
                message.as_str(),
                Style::default().fg(theme.error),
            ))
            .alignment(Alignment::Center),
            rows[4],
        );
    }
}

fn render_input(
    frame: &mut Frame<'_>,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let cursor = if focused { "│" } else { "" };
    let style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text)
    };

    let line = Line::from(vec![
        Span::styled(format!("{label:<12}"), Style::default().fg(theme.dim)),
        Span::styled(format!("{value}{cursor}"), style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
