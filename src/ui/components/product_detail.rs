use crate::catalog::Product;
use crate::store::Quantity;
use crate::ui::theme::{ACCENT_YELLOW, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn product_detail(product: &Product, quantity: Quantity) -> Paragraph<'_> {
    let text = Style::default().fg(HEADER_TEXT);
    let muted = Style::default().fg(MUTED_TEXT);
    let accent = Style::default().fg(ACCENT_YELLOW);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                product.title.as_str(),
                text.add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("★ ", accent),
            Span::styled(product.rating.to_string(), text),
        ]),
        Line::from(""),
        Line::styled(product.primary_image().unwrap_or("(no image)"), muted),
        Line::from(""),
        Line::styled(product.description.as_str(), muted),
        Line::from(""),
        Line::from(vec![
            Span::styled("[-] ", text),
            Span::styled(quantity.get().to_string(), text.add_modifier(Modifier::BOLD)),
            Span::styled(" [+]", text),
            Span::raw("      "),
            Span::styled(
                product.display_price(),
                text.add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::styled(
            "  Add to cart  ",
            Style::default().fg(Color::Black).bg(ACCENT_YELLOW),
        ),
    ];

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::NONE))
}
