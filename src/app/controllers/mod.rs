//! Controllers layer - orchestration and coordination.
//!
//! This module contains the calculator core, which coordinates the domain
//! state (buffer, memory, history) with the evaluation services.

pub mod calculator;
