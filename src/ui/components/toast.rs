use crate::ui::layout::bottom_centered;
use crate::ui::theme::{HEADER_TEXT, POPUP_BORDER};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn render_toast(frame: &mut Frame<'_>, area: Rect, message: &str) {
    let width = (message.chars().count() as u16).saturating_add(6);
    let rect = bottom_centered(area, width, 3);
    if rect.width == 0 || rect.height == 0 {
        return;
    }

    frame.render_widget(Clear, rect);
    let widget = Paragraph::new(message)
        .style(Style::default().fg(HEADER_TEXT))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        );
    frame.render_widget(widget, rect);
}
