#![cfg_attr(windows, windows_subsystem = "windows")]

use fltk::{app, prelude::*};
use tracing::info;

use ferris_calc::app::domain::{AppSettings, Message};
use ferris_calc::app::infrastructure::logging::init_logging;
use ferris_calc::app::state::AppState;
use ferris_calc::ui::main_window::build_main_window;
use ferris_calc::ui::menu::build_menu;

fn main() {
    init_logging();

    let app = app::App::default().with_scheme(app::Scheme::Gtk);
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();
    let widgets = build_main_window(&sender, &settings);
    let mut state = AppState::new(widgets, settings);
    build_menu(&mut state.widgets.menu, &sender, state.dark_mode);
    state.widgets.wind.show();
    info!(version = env!("CARGO_PKG_VERSION"), "FerrisCalc started");

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if state.handle_message(msg) {
                info!("exiting");
                app.quit();
            }
        }
    }
}
