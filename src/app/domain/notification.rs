use crate::app::infrastructure::error::CalcError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

/// A message the front end shows modally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn error(body: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: "Error".to_string(),
            body: body.into(),
        }
    }
}

impl From<&CalcError> for Notification {
    fn from(err: &CalcError) -> Self {
        Notification::error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::error::ExpressionError;

    #[test]
    fn test_error_notification() {
        let err = CalcError::InvalidExpression(ExpressionError::DivisionByZero);
        let n = Notification::from(&err);
        assert_eq!(n.kind, NotificationKind::Error);
        assert_eq!(n.title, "Error");
        assert_eq!(n.body, "Invalid input: division by zero");
    }
}
