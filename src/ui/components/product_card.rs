use crate::catalog::Product;
use crate::ui::theme::{ACCENT_YELLOW, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;

pub fn product_card(product: &Product) -> ListItem<'_> {
    let title = Line::from(vec![
        Span::styled("★ ", Style::default().fg(ACCENT_YELLOW)),
        Span::styled(format!("{:<4}", product.rating), Style::default().fg(HEADER_TEXT)),
        Span::styled(
            product.title.as_str(),
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(product.display_price(), Style::default().fg(ACCENT_YELLOW)),
        Span::styled("  +", Style::default().fg(ACCENT_YELLOW)),
    ]);
    let description = Line::styled(
        format!("      {}", product.description),
        Style::default().fg(MUTED_TEXT),
    );
    let image = Line::styled(
        format!("      {}", product.primary_image().unwrap_or("(no image)")),
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
    );

    ListItem::new(vec![title, description, image])
}
