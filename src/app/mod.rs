//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Number, ExpressionBuffer, History, Memory, Settings, Messages)
//! - `services/` - Pure operations (expression evaluation, unary functions)
//! - `controllers/` - Orchestration (Calculator)
//! - `infrastructure/` - External integrations (platform, logging, error)
//! - `state.rs` - Binds the calculator to the widgets

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::calculator::{Calculator, Outcome};
pub use domain::{AppSettings, InputEvent, Message, Number, ThemeMode};
pub use infrastructure::error::{CalcError, ExpressionError};
pub use infrastructure::platform::detect_system_dark_mode;
pub use services::expression::evaluate;
