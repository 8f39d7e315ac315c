use std::time::Instant;

use crate::ui::app::{App, Screen};
use crate::ui::components::{category_tabs, message_body, product_card, product_detail, render_toast};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, split_tabs};
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use crate::ui::view::{DetailView, ListingView};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, List, ListState};
use ratatui::Frame;

const LOADING: &str = "Loading...";
const LISTING_TITLE: &str = "Product List";

pub fn draw(frame: &mut Frame<'_>, app: &App, now: Instant) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Clear, body);
    match app.screen() {
        Screen::Listing => {
            frame.render_widget(Header::new(LISTING_TITLE).widget(), header);
            draw_listing(frame, body, &app.listing_view());
        }
        Screen::Detail => {
            let view = app.detail_view(now);
            let title = view.product.map(|p| p.title.as_str()).unwrap_or("Product");
            frame.render_widget(Header::new(title).widget(), header);
            draw_detail(frame, body, &view);
            if let Some(message) = view.toast {
                render_toast(frame, body, message);
            }
        }
    }

    frame.render_widget(Footer::new(app.screen()).widget(footer), footer);
}

fn draw_listing(frame: &mut Frame<'_>, body: Rect, view: &ListingView<'_>) {
    if let Some(error) = view.error {
        if view.categories.is_empty() {
            frame.render_widget(message_body(error, Style::default().fg(STATUS_ERROR)), body);
            return;
        }
    }

    let (tabs, list_area) = split_tabs(body);
    if !view.categories.is_empty() {
        frame.render_widget(category_tabs(view.categories, view.active_category), tabs);
    }

    if let Some(error) = view.error {
        frame.render_widget(
            message_body(error, Style::default().fg(STATUS_ERROR)),
            list_area,
        );
        return;
    }
    if view.loading {
        frame.render_widget(message_body(LOADING, Style::default().fg(MUTED_TEXT)), list_area);
        return;
    }
    if view.products.is_empty() {
        frame.render_widget(
            message_body("No products", Style::default().fg(MUTED_TEXT)),
            list_area,
        );
        return;
    }

    let items: Vec<_> = view.products.iter().map(product_card).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::NONE))
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("▌");
    let mut state = ListState::default().with_selected(Some(view.cursor));
    frame.render_stateful_widget(list, list_area, &mut state);
}

fn draw_detail(frame: &mut Frame<'_>, body: Rect, view: &DetailView<'_>) {
    if let Some(error) = view.error {
        frame.render_widget(message_body(error, Style::default().fg(STATUS_ERROR)), body);
        return;
    }
    match view.product {
        Some(product) if !view.loading => {
            let inner = Rect {
                x: body.x.saturating_add(2),
                width: body.width.saturating_sub(4),
                ..body
            };
            frame.render_widget(product_detail(product, view.quantity), inner);
        }
        _ => {
            frame.render_widget(message_body(LOADING, Style::default().fg(HEADER_TEXT)), body);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::worker::{fetch_channel, FetchOutcome};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Duration;

    fn screen_text(app: &App, now: Instant) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app, now)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn donut() -> Product {
        Product {
            id: 1,
            title: "Glazed Donut".to_string(),
            description: "Classic ring".to_string(),
            price: 2.5,
            rating: 4.7,
            category: "donuts".to_string(),
            images: Vec::new(),
            thumbnail: Some("https://cdn.example/donut.png".to_string()),
        }
    }

    #[test]
    fn listing_shows_tabs_and_cards() {
        let (tx, _rx) = fetch_channel();
        let mut app = App::new(tx, Duration::from_secs(3));
        app.open_listing();
        app.on_fetched(FetchOutcome::All {
            generation: 1,
            result: Ok(vec![donut()]),
        });
        let text = screen_text(&app, Instant::now());
        assert!(text.contains("Product List"));
        assert!(text.contains("Donuts"));
        assert!(text.contains("Glazed Donut"));
        assert!(text.contains("donut.png"));
    }

    #[test]
    fn detail_shows_toast_after_add_to_cart() {
        let (tx, _rx) = fetch_channel();
        let mut app = App::new(tx, Duration::from_secs(3));
        app.open_product(1);
        app.on_fetched(FetchOutcome::Product {
            id: 1,
            generation: 1,
            result: Ok(donut()),
        });
        let now = Instant::now();
        app.add_to_cart(now);
        let text = screen_text(&app, now);
        assert!(text.contains("Added to cart"));
        assert!(text.contains("$2.5"));
    }

    #[test]
    fn loading_listing_says_so() {
        let (tx, _rx) = fetch_channel();
        let mut app = App::new(tx, Duration::from_secs(3));
        app.open_listing();
        assert!(screen_text(&app, Instant::now()).contains("Loading..."));
    }
}
