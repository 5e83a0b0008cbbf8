use crate::app::App;
use crate::scroll::Direction;
use crate::ui::render::control_at;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

/// Rows moved per mouse wheel notch.
pub const WHEEL_ROWS: i32 = 3;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }

    let field_focused = app.focused_control().is_some_and(|c| c.is_text_field());
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    match key.code {
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Enter if shift => app.insert_newline(),
        KeyCode::Enter => app.activate(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::PageDown => app.scroll_page(Direction::Next),
        KeyCode::PageUp => app.scroll_page(Direction::Previous),
        KeyCode::Char(ch) if field_focused && !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.type_char(ch);
        }
        KeyCode::Char('j') => app.scroll_rows(1),
        KeyCode::Char('k') => app.scroll_rows(-1),
        KeyCode::Char(' ') => app.scroll_page(Direction::Next),
        _ => {}
    }
}

/// `screen` is the full frame area the last draw used.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, screen: Rect) {
    match mouse.kind {
        MouseEventKind::ScrollDown => app.scroll_rows(WHEEL_ROWS),
        MouseEventKind::ScrollUp => app.scroll_rows(-WHEEL_ROWS),
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some((section, control)) = control_at(app, screen, mouse.column, mouse.row) {
                app.click(section, control);
            }
        }
        _ => {}
    }
}

/// Bracketed paste goes into the focused field; newlines survive in the editor.
pub fn handle_paste(app: &mut App, text: &str) {
    for ch in text.chars().filter(|ch| *ch != '\r') {
        if !app.type_char(ch) {
            break;
        }
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
