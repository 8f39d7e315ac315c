use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Screen};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.screen() {
        Screen::Listing => handle_listing_key(app, key),
        Screen::Detail => handle_detail_key(app, key),
    }
}

fn handle_listing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.back(),
        KeyCode::Right | KeyCode::Tab => app.step_category(1),
        KeyCode::Left | KeyCode::BackTab => app.step_category(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
        KeyCode::PageDown => app.move_cursor(10),
        KeyCode::PageUp => app.move_cursor(-10),
        KeyCode::Enter => app.open_focused_product(),
        KeyCode::Char('r') => app.reload(),
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace => app.back(),
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => app.increment_quantity(),
        KeyCode::Char('-') | KeyCode::Left => app.decrement_quantity(),
        KeyCode::Enter | KeyCode::Char('a') => app.add_to_cart(Instant::now()),
        KeyCode::Char('r') => app.reload(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worker::{fetch_channel, FetchCommand};
    use crossterm::event::KeyEventState;
    use std::time::Duration;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn ctrl_q_quits_from_any_screen() {
        let (tx, _rx) = fetch_channel();
        let mut app = App::new(tx, Duration::from_secs(3));
        app.open_product(1);
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn release_events_are_ignored() {
        let (tx, _rx) = fetch_channel();
        let mut app = App::new(tx, Duration::from_secs(3));
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(!app.should_quit());
    }

    #[test]
    fn escape_on_detail_goes_back() {
        let (tx, mut rx) = fetch_channel();
        let mut app = App::new(tx, Duration::from_secs(3));
        app.open_product(7);
        let _ = rx.try_recv();
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.screen(), Screen::Listing);
        assert!(!app.should_quit());
        assert_eq!(rx.try_recv().unwrap(), FetchCommand::All { generation: 1 });
    }

    #[test]
    fn r_reloads_listing() {
        let (tx, mut rx) = fetch_channel();
        let mut app = App::new(tx, Duration::from_secs(3));
        app.open_listing();
        handle_key(&mut app, press(KeyCode::Char('r')));
        assert_eq!(rx.try_recv().unwrap(), FetchCommand::All { generation: 1 });
        assert_eq!(rx.try_recv().unwrap(), FetchCommand::All { generation: 2 });
    }
}
