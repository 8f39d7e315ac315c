use ratatui::layout::Rect;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the listing body into the tab strip and the product list.
pub fn split_tabs(body: Rect) -> (Rect, Rect) {
    let tabs_height = body.height.min(3);
    let tabs = Rect {
        height: tabs_height,
        ..body
    };
    let list = Rect {
        y: body.y + tabs_height,
        height: body.height - tabs_height,
        ..body
    };
    (tabs, list)
}

/// A `width` x `height` box centered horizontally, one row above the bottom of `area`.
pub fn bottom_centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    }
}
