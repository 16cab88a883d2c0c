//! The calculator core: owns the buffer, memory and history and reacts to
//! input events. Nothing in here knows about widgets.

use tracing::{debug, warn};

use crate::app::domain::{
    DecimalPolicy, ExpressionBuffer, HistoryLog, InputEvent, MemoryRegister, Notification, Number,
};
use crate::app::infrastructure::error::CalcError;
use crate::app::services::expression;
use crate::app::services::functions::{UnaryFunction, parse_operand};

/// What the front end should do after an event was applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Re-render the display.
    Display,
    Notify(Notification),
    ToggleTheme,
    Exit,
}

#[derive(Debug, Default)]
pub struct Calculator {
    buffer: ExpressionBuffer,
    memory: MemoryRegister,
    history: HistoryLog,
    decimal_policy: DecimalPolicy,
}

impl Calculator {
    pub fn new(decimal_policy: DecimalPolicy) -> Self {
        Self {
            decimal_policy,
            ..Default::default()
        }
    }

    pub fn display(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn memory(&self) -> Number {
        self.memory.recall()
    }

    pub fn set_decimal_policy(&mut self, policy: DecimalPolicy) {
        self.decimal_policy = policy;
    }

    /// Apply one input event. On error nothing observable has changed.
    pub fn apply(&mut self, event: InputEvent) -> Result<Outcome, CalcError> {
        debug!(?event, buffer = %self.buffer.as_str(), "applying input event");
        let result = match event {
            InputEvent::Digit(d) => {
                self.append_digit(d);
                Ok(Outcome::Display)
            }
            InputEvent::DecimalPoint => {
                if !self.buffer.push_decimal_point(self.decimal_policy) {
                    debug!("ignored extra decimal point");
                }
                Ok(Outcome::Display)
            }
            InputEvent::Operator(op) => {
                self.append_operator(op.symbol());
                Ok(Outcome::Display)
            }
            InputEvent::Exponent => {
                self.append_operator('^');
                Ok(Outcome::Display)
            }
            InputEvent::Equals => self.evaluate().map(|_| Outcome::Display),
            InputEvent::Clear => {
                self.clear();
                Ok(Outcome::Display)
            }
            InputEvent::Sqrt => self
                .apply_function(UnaryFunction::SquareRoot)
                .map(|_| Outcome::Display),
            InputEvent::Percentage => self
                .apply_function(UnaryFunction::Percentage)
                .map(|_| Outcome::Display),
            InputEvent::Trig(func) => self
                .apply_function(func.into())
                .map(|_| Outcome::Display),
            InputEvent::MemoryStore => self.store_in_memory().map(Outcome::Notify),
            InputEvent::MemoryClear => Ok(Outcome::Notify(self.clear_memory())),
            InputEvent::MemoryRecall => {
                self.recall_memory();
                Ok(Outcome::Display)
            }
            InputEvent::ShowHistory => Ok(Outcome::Notify(Notification::info(
                "Operation History",
                self.history_text(),
            ))),
            InputEvent::ToggleTheme => Ok(Outcome::ToggleTheme),
            InputEvent::Exit => Ok(Outcome::Exit),
        };

        if let Err(ref e) = result {
            warn!(?event, error = %e, "input rejected");
        }
        result
    }

    pub fn append_digit(&mut self, digit: u8) {
        self.buffer.push_digit(digit);
    }

    /// Append an operator symbol (`+ - * / ^`). No-op on an empty buffer.
    pub fn append_operator(&mut self, symbol: char) {
        if let Some(entry) = self.buffer.push_operator(symbol) {
            self.history.record(entry);
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Evaluate the buffer; on success the result replaces it and is logged.
    pub fn evaluate(&mut self) -> Result<Number, CalcError> {
        let value = expression::evaluate(self.buffer.as_str())?;
        let shown = value.to_string();
        self.buffer.replace(shown.clone());
        self.history.record(shown);
        Ok(value)
    }

    pub fn apply_function(&mut self, func: UnaryFunction) -> Result<f64, CalcError> {
        let input = parse_operand(self.buffer.as_str())?;
        let output = func.apply(input)?;
        self.buffer.replace(Number::Float(output).to_string());
        self.history.record(func.history_entry(input, output));
        Ok(output)
    }

    pub fn store_in_memory(&mut self) -> Result<Notification, CalcError> {
        let value = parse_operand(self.buffer.as_str()).map_err(|_| {
            CalcError::InvalidNumber("invalid number to store in memory".to_string())
        })?;
        self.memory.store(value);
        Ok(Notification::info(
            "Memory",
            format!("Stored {} in memory.", self.memory.recall()),
        ))
    }

    pub fn clear_memory(&mut self) -> Notification {
        self.memory.clear();
        Notification::info("Memory", "Memory cleared.")
    }

    pub fn recall_memory(&mut self) {
        self.buffer.replace(self.memory.recall().to_string());
    }

    pub fn history_text(&self) -> String {
        self.history.text()
    }
}
