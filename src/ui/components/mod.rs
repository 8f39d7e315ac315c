//! Presentational pieces. Pure functions of their inputs.

mod category_tabs;
mod product_card;
mod product_detail;
mod toast;

pub use category_tabs::category_tabs;
pub use product_card::product_card;
pub use product_detail::product_detail;
pub use toast::render_toast;

use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

/// Centered one-line body for "Loading..." and error messages.
pub fn message_body(text: &str, style: Style) -> Paragraph<'_> {
    Paragraph::new(vec![Line::from(""), Line::styled(text, style)])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}
