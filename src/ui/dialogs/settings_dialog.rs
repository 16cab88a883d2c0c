use fltk::{
    button::{Button, CheckButton, RadioRoundButton},
    enums::Align,
    frame::Frame,
    group::Group,
    misc::Spinner,
    prelude::*,
    window::Window,
};
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::domain::settings::{MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::app::domain::{AppSettings, ThemeMode};

/// Show settings dialog and return updated settings if user clicked Save.
pub fn show_settings_dialog(current_settings: &AppSettings) -> Option<AppSettings> {
    let mut dialog = Window::default()
        .with_size(320, 330)
        .with_label("Settings")
        .center_screen();
    dialog.make_modal(true);

    // Theme section
    Frame::default().with_pos(15, 15).with_size(290, 25).with_label("Theme:").with_align(Align::Left | Align::Inside);
    let theme_group = Group::default().with_pos(30, 45).with_size(260, 75);
    let mut theme_light = RadioRoundButton::default().with_pos(30, 45).with_size(260, 25).with_label("Light");
    let mut theme_dark = RadioRoundButton::default().with_pos(30, 70).with_size(260, 25).with_label("Dark");
    let mut theme_system = RadioRoundButton::default().with_pos(30, 95).with_size(260, 25).with_label("System Default");
    theme_group.end();

    match current_settings.theme_mode {
        ThemeMode::Light => theme_light.set_value(true),
        ThemeMode::Dark => theme_dark.set_value(true),
        ThemeMode::SystemDefault => theme_system.set_value(true),
    }

    // Font sizes
    Frame::default().with_pos(15, 130).with_size(290, 25).with_label("Font sizes:").with_align(Align::Left | Align::Inside);
    Frame::default().with_pos(30, 160).with_size(150, 25).with_label("Display").with_align(Align::Left | Align::Inside);
    let display_size = font_size_spinner(200, 160, current_settings.display_font_size);
    Frame::default().with_pos(30, 195).with_size(150, 25).with_label("Buttons").with_align(Align::Left | Align::Inside);
    let button_size = font_size_spinner(200, 195, current_settings.button_font_size);

    // Input
    Frame::default().with_pos(15, 230).with_size(290, 25).with_label("Input:").with_align(Align::Left | Align::Inside);
    let mut check_strict = CheckButton::default().with_pos(30, 255).with_size(260, 25).with_label("Ignore repeated decimal points");
    check_strict.set_checked(current_settings.strict_decimal_input);

    // Buttons at bottom
    let mut save_btn = Button::default().with_pos(120, 290).with_size(90, 30).with_label("Save");
    let mut cancel_btn = Button::default().with_pos(220, 290).with_size(90, 30).with_label("Cancel");

    dialog.end();
    dialog.show();

    let result = Rc::new(RefCell::new(None));
    let result_save = result.clone();
    let result_cancel = result.clone();

    let dialog_save = dialog.clone();
    save_btn.set_callback(move |_| {
        let new_settings = AppSettings {
            theme_mode: if theme_light.value() {
                ThemeMode::Light
            } else if theme_dark.value() {
                ThemeMode::Dark
            } else {
                ThemeMode::SystemDefault
            },
            display_font_size: display_size.value() as u32,
            button_font_size: button_size.value() as u32,
            strict_decimal_input: check_strict.is_checked(),
        };

        *result_save.borrow_mut() = Some(new_settings);
        dialog_save.clone().hide();
    });

    let dialog_cancel = dialog.clone();
    cancel_btn.set_callback(move |_| {
        *result_cancel.borrow_mut() = None;
        dialog_cancel.clone().hide();
    });

    let result_close = result.clone();
    dialog.set_callback(move |w| {
        *result_close.borrow_mut() = None;
        w.hide();
    });

    super::run_dialog(&dialog);

    result.borrow().clone()
}

fn font_size_spinner(x: i32, y: i32, value: u32) -> Spinner {
    let mut spinner = Spinner::default().with_pos(x, y).with_size(80, 25);
    spinner.set_range(MIN_FONT_SIZE as f64, MAX_FONT_SIZE as f64);
    spinner.set_step(1.0);
    spinner.set_value(value as f64);
    spinner
}
