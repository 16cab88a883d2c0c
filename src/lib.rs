//! FerrisCalc: a desktop calculator with a Python-style expression evaluator,
//! a memory register and an operation history.
//!
//! The evaluation core lives in [`app`] and has no FLTK dependency outside
//! `app::state`; [`ui`] builds the window, keypad, menu and dialogs.

pub mod app;
pub mod ui;
