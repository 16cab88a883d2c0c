//! Services layer - business operations.
//!
//! This module contains the arithmetic itself:
//! - Expression tokenizing, parsing and evaluation
//! - Single-argument functions (square root, percentage, trigonometry)

pub mod expression;
pub mod functions;
