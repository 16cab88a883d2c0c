//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Numbers and their display form
//! - The expression buffer, memory register and history log
//! - Input events, channel messages and notifications
//! - Application settings

pub mod buffer;
pub mod history;
pub mod memory;
pub mod messages;
pub mod notification;
pub mod number;
pub mod settings;

pub use buffer::{DecimalPolicy, ExpressionBuffer};
pub use history::{EMPTY_HISTORY_TEXT, HistoryLog};
pub use memory::MemoryRegister;
pub use messages::{InputEvent, Message, Operator, TrigFunction};
pub use notification::{Notification, NotificationKind};
pub use number::{Number, format_float};
pub use settings::{AppSettings, ThemeMode};
