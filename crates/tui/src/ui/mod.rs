pub mod components;
pub mod keymap;
pub mod screens;
pub mod view;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::AppState;

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    let theme = Theme::default();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Min(0),    // Bill list and total
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);
    screens::bills::render(frame, layout[1], state);
    render_bottom_bar(frame, layout[2], state, &theme);

    screens::add_bill::render(frame, area, &state.dialog);
    components::toast::render(frame, area, state.toast.as_ref());
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let bills = &state.bills;
    let last_id = bills
        .last_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    let refresh = state
        .last_refresh
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());

    let line = Line::from(vec![
        Span::styled("Bills", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}  ", bills.items.len())),
        Span::styled("Last id", Style::default().fg(theme.dim)),
        Span::raw(format!(": {last_id}  ")),
        Span::styled("Refresh", Style::default().fg(theme.dim)),
        Span::raw(format!(": {refresh}")),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let hints = components::hints::for_mode(state.input_mode());
    let bar = Paragraph::new(Line::from(components::hints::hints_to_spans(
        &hints, theme,
    )));
    frame.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use engine::{Bill, Money};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    use super::*;

    fn screen(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn buffer_to_string(buffer: &Buffer) -> String {
        let mut lines = Vec::new();
        for y in 0..buffer.area.height {
            let mut line = String::new();
            for x in 0..buffer.area.width {
                line.push_str(buffer[(x, y)].symbol());
            }
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    #[test]
    fn empty_list_shows_placeholder_and_zero_total() {
        let text = screen(&AppState::new("¥"));
        assert!(text.contains("No bills yet"));
        assert!(text.contains("Total: ¥0.00"));
        assert!(text.contains("a add"));
    }

    #[test]
    fn rows_and_total_are_drawn() {
        let mut state = AppState::new("¥");
        state.bills.items = vec![
            Bill {
                id: 1,
                description: "Rent".to_string(),
                amount: Money::new(80_000),
            },
            Bill {
                id: 2,
                description: "Coffee".to_string(),
                amount: Money::new(350),
            },
        ];
        state.bills.total = Money::new(80_350);
        state.bills.last_id = Some(2);

        let text = screen(&state);
        assert!(text.contains("Coffee"));
        assert!(text.contains("¥3.50"));
        assert!(text.contains("Total: ¥803.50"));
        assert!(text.contains("Last id: 2"));
    }

    #[test]
    fn open_dialog_shows_fields_and_error() {
        let mut state = AppState::new("¥");
        state.dialog.open();
        state.dialog.push('T');
        state.dialog.error = Some("Description must not be empty.".to_string());

        let text = screen(&state);
        assert!(text.contains("add bill"));
        assert!(text.contains("Description T│"));
        assert!(text.contains("Amount"));
        assert!(text.contains("Description must not be empty."));
        assert!(text.contains("Esc cancel"));
    }
}
