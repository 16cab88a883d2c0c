pub mod dialogs;
pub mod keypad;
pub mod main_window;
pub mod menu;
pub mod theme;
