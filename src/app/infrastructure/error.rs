use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Why an arithmetic expression could not be evaluated.
///
/// Positions are byte offsets into the expression after whitespace has been
/// stripped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("nothing to evaluate")]
    Empty,

    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },

    #[error("unexpected '{token}' at position {position}")]
    UnexpectedToken { token: String, position: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unmatched parenthesis at position {position}")]
    UnmatchedParenthesis { position: usize },

    #[error("malformed number '{0}'")]
    MalformedNumber(String),

    #[error("leading zeros in decimal integer literals are not permitted: '{0}'")]
    LeadingZeros(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("0 cannot be raised to a negative power")]
    ZeroToNegativePower,

    #[error("negative number cannot be raised to a fractional power")]
    ComplexResult,

    #[error("numerical result out of range")]
    Overflow,
}

/// Failures surfaced by calculator operations. None of them are fatal: the
/// buffer, memory and history are left as they were.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Invalid input: {0}")]
    InvalidExpression(#[from] ExpressionError),

    #[error("Invalid input: {0}")]
    InvalidNumber(String),

    #[error("Invalid input: math domain error ({0})")]
    Domain(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("read-only"));
    }

    #[test]
    fn test_expression_error_wraps_into_calc_error() {
        let err: CalcError = ExpressionError::DivisionByZero.into();
        assert_eq!(err, CalcError::InvalidExpression(ExpressionError::DivisionByZero));
        assert_eq!(err.to_string(), "Invalid input: division by zero");
    }

    #[test]
    fn test_error_display() {
        let err = CalcError::InvalidNumber("could not convert 'abc' to a number".to_string());
        assert_eq!(err.to_string(), "Invalid input: could not convert 'abc' to a number");

        let err = CalcError::Domain("square root of -4.0".to_string());
        assert_eq!(err.to_string(), "Invalid input: math domain error (square root of -4.0)");

        let err = ExpressionError::UnexpectedCharacter { ch: 'a', position: 2 };
        assert_eq!(err.to_string(), "unexpected character 'a' at position 2");

        let err = AppError::Settings("font size out of range".to_string());
        assert_eq!(err.to_string(), "Settings error: font size out of range");
    }
}
