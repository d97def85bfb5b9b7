use engine::Money;
use ratatui::style::{Color, Style};

use crate::ui::theme::Theme;

/// Red for negative amounts, green for positive, plain text for zero.
#[must_use]
pub fn amount_style(amount: Money, theme: &Theme) -> Style {
    let color: Color = if amount.is_negative() {
        theme.negative
    } else if amount == Money::ZERO {
        theme.text
    } else {
        theme.positive
    };
    Style::default().fg(color)
}
