pub mod about;
pub mod settings_dialog;
pub mod text_view;

use fltk::{app, dialog, prelude::*, window::Window};

use crate::app::domain::{Notification, NotificationKind};

/// Bodies longer than this open in a scrollable window instead of a message box.
const MAX_INLINE_LINES: usize = 12;

/// Run a dialog's event loop, automatically closing the dialog if the app
/// is quitting (e.g. user clicks X on the main window while a dialog is open).
pub fn run_dialog(dialog: &Window) {
    while dialog.shown() {
        app::wait();
        if app::should_program_quit() {
            let mut d = dialog.clone();
            d.hide();
        }
    }
}

/// Show a notification produced by the calculator core.
pub fn show_notification(notification: &Notification) {
    match notification.kind {
        NotificationKind::Error => {
            dialog::message_title(&notification.title);
            dialog::alert_default(&notification.body);
        }
        NotificationKind::Info if notification.body.lines().count() > MAX_INLINE_LINES => {
            text_view::show_text_dialog(&notification.title, &notification.body);
        }
        NotificationKind::Info => {
            dialog::message_title(&notification.title);
            dialog::message_default(&notification.body);
        }
    }
}
