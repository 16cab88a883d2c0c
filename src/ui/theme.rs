use fltk::{enums::Color, prelude::*};

use super::keypad::KeyRole;
use super::main_window::MainWidgets;

/// Colours for one theme. Passed explicitly to `apply_theme`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub window: Color,
    pub display_bg: Color,
    pub display_fg: Color,
    pub digit_bg: Color,
    pub operator_bg: Color,
    pub function_bg: Color,
    pub control_bg: Color,
    pub button_fg: Color,
    pub pressed: Color,
    pub menu_bg: Color,
    pub menu_fg: Color,
    pub menu_hover: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            window: Color::from_rgb(240, 240, 240),
            display_bg: Color::White,
            display_fg: Color::Black,
            digit_bg: Color::from_rgb(231, 231, 231),
            operator_bg: Color::from_rgb(214, 224, 240),
            function_bg: Color::from_rgb(222, 222, 222),
            control_bg: Color::from_rgb(240, 220, 214),
            button_fg: Color::Black,
            pressed: Color::from_rgb(211, 211, 211),
            menu_bg: Color::from_rgb(240, 240, 240),
            menu_fg: Color::Black,
            menu_hover: Color::from_rgb(200, 200, 200),
        }
    }

    pub fn dark() -> Self {
        Self {
            window: Color::from_rgb(46, 46, 46),
            display_bg: Color::from_rgb(30, 30, 30),
            display_fg: Color::from_rgb(230, 230, 230),
            digit_bg: Color::from_rgb(62, 62, 62),
            operator_bg: Color::from_rgb(52, 66, 92),
            function_bg: Color::from_rgb(56, 56, 56),
            control_bg: Color::from_rgb(90, 58, 52),
            button_fg: Color::White,
            pressed: Color::from_rgb(80, 80, 80),
            menu_bg: Color::from_rgb(35, 35, 35),
            menu_fg: Color::from_rgb(220, 220, 220),
            menu_hover: Color::from_rgb(60, 60, 60),
        }
    }

    pub fn for_mode(is_dark: bool) -> Self {
        if is_dark { Self::dark() } else { Self::light() }
    }

    pub fn key_background(&self, role: KeyRole) -> Color {
        match role {
            KeyRole::Digit => self.digit_bg,
            KeyRole::Operator => self.operator_bg,
            KeyRole::Function => self.function_bg,
            KeyRole::Control => self.control_bg,
        }
    }
}

pub fn apply_theme(widgets: &mut MainWidgets, palette: &Palette) {
    widgets.wind.set_color(palette.window);
    widgets.wind.set_label_color(palette.menu_fg);

    widgets.menu.set_color(palette.menu_bg);
    widgets.menu.set_text_color(palette.menu_fg);
    widgets.menu.set_selection_color(palette.menu_hover); // Hover color

    widgets.display.set_color(palette.display_bg);
    widgets.display.set_label_color(palette.display_fg);

    for key in widgets.keys.iter_mut() {
        key.button.set_color(palette.key_background(key.role));
        key.button.set_label_color(palette.button_fg);
        key.button.set_selection_color(palette.pressed);
    }

    widgets.wind.redraw();
}
