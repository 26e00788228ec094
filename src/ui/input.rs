use crate::nav::MenuItem;
use crate::ui::app::App;
use crate::ui::location::LocationIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.prompt().is_editing() {
        handle_prompt_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('g') | KeyCode::Char(':') => app.open_prompt(),
        KeyCode::Char(ch) => {
            if let Some(item) = MenuItem::from_hotkey(ch) {
                app.navigate(item.location());
            }
        }
        _ => {}
    }
}

fn handle_prompt_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'u') {
        app.dispatch_location(LocationIntent::Clear);
        return;
    }

    let intent = match key.code {
        KeyCode::Esc => LocationIntent::Cancel,
        KeyCode::Enter => LocationIntent::Submit,
        KeyCode::Backspace => LocationIntent::Backspace,
        KeyCode::Char(ch) => LocationIntent::Insert(ch),
        _ => return,
    };
    app.dispatch_location(intent);
}

fn is_ctrl_char(key: KeyEvent, target: char) -> bool {
    match key.code {
        KeyCode::Char(ch) => {
            key.modifiers.contains(KeyModifiers::CONTROL) && ch.eq_ignore_ascii_case(&target)
        }
        _ => false,
    }
}
