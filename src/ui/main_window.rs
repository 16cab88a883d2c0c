use fltk::{
    app::{self, Sender},
    button::Button,
    enums::{Align, Event, FrameType, Key},
    frame::Frame,
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use super::keypad::{KEYPAD, KeyRole, key_rect};
use crate::app::domain::{AppSettings, InputEvent, Message};

pub const WINDOW_WIDTH: i32 = 400;
pub const WINDOW_HEIGHT: i32 = 600;
const MENU_HEIGHT: i32 = 30;
const DISPLAY_HEIGHT: i32 = 70;
const PADDING: i32 = 10;

pub struct KeyButton {
    pub role: KeyRole,
    pub button: Button,
}

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub display: Frame,
    pub keys: Vec<KeyButton>,
}

pub fn build_main_window(sender: &Sender<Message>, settings: &AppSettings) -> MainWidgets {
    let mut wind = Window::new(100, 100, WINDOW_WIDTH, WINDOW_HEIGHT, "FerrisCalc");
    wind.set_xclass("FerrisCalc");

    let menu = MenuBar::new(0, 0, WINDOW_WIDTH, MENU_HEIGHT, "");

    let mut display = Frame::new(
        PADDING,
        MENU_HEIGHT + PADDING,
        WINDOW_WIDTH - 2 * PADDING,
        DISPLAY_HEIGHT,
        None,
    );
    display.set_frame(FrameType::DownBox);
    display.set_align(Align::Right | Align::Inside | Align::Clip);
    display.set_label_size(settings.display_font_size as i32);

    let grid_y = MENU_HEIGHT + DISPLAY_HEIGHT + 2 * PADDING;
    let grid_w = WINDOW_WIDTH - 2 * PADDING;
    let grid_h = WINDOW_HEIGHT - grid_y - PADDING;

    let mut keys = Vec::with_capacity(KEYPAD.len());
    for key in KEYPAD.iter() {
        let (x, y, w, h) = key_rect(key, PADDING, grid_y, grid_w, grid_h);
        let mut button = Button::new(x, y, w, h, key.label);
        button.set_label_size(settings.button_font_size as i32);
        button.set_frame(FrameType::FlatBox);
        // Keyboard input goes to the window, not to whichever key was clicked last.
        button.clear_visible_focus();
        button.emit(*sender, key.message);
        keys.push(KeyButton {
            role: key.role,
            button,
        });
    }

    wind.end();
    wind.make_resizable(true);

    let s = *sender;
    wind.set_callback(move |_| {
        // Window close (X button) and Escape both land here; Escape is a
        // calculator key, so only a real close request exits.
        if app::event() == Event::Close {
            s.send(Message::Input(InputEvent::Exit));
        }
    });

    let s = *sender;
    wind.handle(move |_, ev| match ev {
        Event::KeyDown | Event::Shortcut => {
            if app::is_event_ctrl() || app::is_event_alt() || app::is_event_command() {
                return false;
            }
            match key_event(app::event_key(), &app::event_text()) {
                Some(event) => {
                    s.send(Message::Input(event));
                    true
                }
                None => false,
            }
        }
        _ => false,
    });

    MainWidgets {
        wind,
        menu,
        display,
        keys,
    }
}

/// Translate a key press into a calculator input.
pub fn key_event(key: Key, text: &str) -> Option<InputEvent> {
    if key == Key::Enter || key == Key::KPEnter {
        return Some(InputEvent::Equals);
    }
    if key == Key::Escape {
        return Some(InputEvent::Clear);
    }
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => InputEvent::from_char(ch),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::Operator;

    #[test]
    fn test_named_keys() {
        assert_eq!(key_event(Key::Enter, ""), Some(InputEvent::Equals));
        assert_eq!(key_event(Key::KPEnter, "\r"), Some(InputEvent::Equals));
        assert_eq!(key_event(Key::Escape, ""), Some(InputEvent::Clear));
    }

    #[test]
    fn test_text_keys() {
        assert_eq!(key_event(Key::from_char('5'), "5"), Some(InputEvent::Digit(5)));
        assert_eq!(
            key_event(Key::from_char('+'), "+"),
            Some(InputEvent::Operator(Operator::Add))
        );
        assert_eq!(key_event(Key::from_char('q'), "q"), None);
        assert_eq!(key_event(Key::ShiftL, ""), None);
    }
}
