use fltk::{app, menu::MenuBar, prelude::*};
use tracing::{info, warn};

use super::controllers::calculator::{Calculator, Outcome};
use super::domain::{AppSettings, InputEvent, Message, Notification};
use super::infrastructure::platform::detect_system_dark_mode;
use crate::ui::dialogs::about::show_about_dialog;
use crate::ui::dialogs::settings_dialog::show_settings_dialog;
use crate::ui::dialogs::show_notification;
use crate::ui::main_window::MainWidgets;
use crate::ui::menu::DARK_MODE_ITEM;
use crate::ui::theme::{Palette, apply_theme};

/// Binds the calculator core to the FLTK widgets.
pub struct AppState {
    pub calculator: Calculator,
    pub widgets: MainWidgets,
    pub settings: AppSettings,
    pub dark_mode: bool,
}

impl AppState {
    pub fn new(widgets: MainWidgets, settings: AppSettings) -> Self {
        let dark_mode = settings.theme_mode.is_dark(detect_system_dark_mode);
        let mut state = Self {
            calculator: Calculator::new(settings.decimal_policy()),
            widgets,
            settings,
            dark_mode,
        };
        apply_theme(&mut state.widgets, &Palette::for_mode(dark_mode));
        state.render_display();
        state
    }

    /// Handle one channel message. Returns true if the app should exit.
    pub fn handle_message(&mut self, msg: Message) -> bool {
        match msg {
            Message::Input(event) => return self.handle_input(event),
            Message::CopyDisplay => self.copy_display(),
            Message::OpenSettings => self.open_settings(),
            Message::ShowAbout => show_about_dialog(),
        }
        false
    }

    fn handle_input(&mut self, event: InputEvent) -> bool {
        match self.calculator.apply(event) {
            Ok(Outcome::Display) => self.render_display(),
            Ok(Outcome::Notify(notification)) => {
                self.render_display();
                show_notification(&notification);
            }
            Ok(Outcome::ToggleTheme) => self.toggle_dark_mode(),
            Ok(Outcome::Exit) => return true,
            Err(e) => show_notification(&Notification::from(&e)),
        }
        false
    }

    pub fn render_display(&mut self) {
        let text = self.calculator.display();
        // FLTK treats '@' in labels as a symbol prefix; the buffer never holds one,
        // but a doubled '@' keeps the label literal regardless.
        self.widgets.display.set_label(&text.replace('@', "@@"));
        self.widgets.display.redraw();
    }

    pub fn copy_display(&self) {
        let text = self.calculator.display();
        if !text.is_empty() {
            app::copy(text);
        }
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        apply_theme(&mut self.widgets, &Palette::for_mode(self.dark_mode));
        update_menu_checkbox(&self.widgets.menu, DARK_MODE_ITEM, self.dark_mode);
    }

    // --- Settings ---

    pub fn open_settings(&mut self) {
        if let Some(new_settings) = show_settings_dialog(&self.settings) {
            if let Err(e) = new_settings.validate().and_then(|_| new_settings.save()) {
                warn!(error = %e, "settings not saved");
                show_notification(&Notification::error(format!("Failed to save settings: {}", e)));
                return;
            }
            info!(?new_settings, "settings updated");
            self.apply_settings(new_settings);
        }
    }

    pub fn apply_settings(&mut self, new_settings: AppSettings) {
        self.dark_mode = new_settings.theme_mode.is_dark(detect_system_dark_mode);
        apply_theme(&mut self.widgets, &Palette::for_mode(self.dark_mode));
        update_menu_checkbox(&self.widgets.menu, DARK_MODE_ITEM, self.dark_mode);

        self.widgets.display.set_label_size(new_settings.display_font_size as i32);
        for key in self.widgets.keys.iter_mut() {
            key.button.set_label_size(new_settings.button_font_size as i32);
        }

        self.calculator.set_decimal_policy(new_settings.decimal_policy());
        self.settings = new_settings;
        self.widgets.wind.redraw();
    }
}

fn update_menu_checkbox(menu: &MenuBar, path: &str, checked: bool) {
    let idx = menu.find_index(path);
    if idx >= 0 {
        if let Some(mut item) = menu.at(idx) {
            if checked {
                item.set();
            } else {
                item.clear();
            }
        }
    }
}
