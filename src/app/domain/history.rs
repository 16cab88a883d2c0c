pub const EMPTY_HISTORY_TEXT: &str = "No operations performed yet.";

/// Append-only record of completed operations for this session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLog {
    entries: Vec<String>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries joined by newlines, or a placeholder when nothing happened yet.
    pub fn text(&self) -> String {
        if self.entries.is_empty() {
            EMPTY_HISTORY_TEXT.to_string()
        } else {
            self.entries.join("\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_when_empty() {
        let log = HistoryLog::new();
        assert!(log.is_empty());
        assert_eq!(log.text(), "No operations performed yet.");
    }

    #[test]
    fn test_entries_in_order() {
        let mut log = HistoryLog::new();
        log.record("2 +");
        log.record("5");
        assert_eq!(log.len(), 2);
        assert_eq!(log.entries(), &["2 +".to_string(), "5".to_string()]);
        assert_eq!(log.text(), "2 +\n5");
    }
}
