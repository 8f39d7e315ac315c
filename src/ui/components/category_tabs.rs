use crate::catalog::Category;
use crate::ui::theme::{ACCENT_YELLOW, GLOBAL_BORDER, MUTED_TEXT, TAB_INACTIVE_BG};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// One row of tabs, the active one highlighted.
pub fn category_tabs<'a>(categories: &'a [Category], active: Option<&str>) -> Paragraph<'a> {
    let mut spans = Vec::with_capacity(categories.len() * 2);
    for category in categories {
        let style = if active == Some(category.id.as_str()) {
            Style::default().fg(Color::Black).bg(ACCENT_YELLOW)
        } else {
            Style::default().fg(MUTED_TEXT).bg(TAB_INACTIVE_BG)
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" {} ", category.name), style));
    }

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
