//! Report options and configuration.

/// Options for rendering a document report.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// List each line's words with their cleaned text and properties
    pub include_words: bool,

    /// Add each line's mean word confidence, where every word has one
    pub include_confidence: bool,
}

impl ReportOptions {
    /// Create new report options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable word listings.
    pub fn with_words(mut self, include: bool) -> Self {
        self.include_words = include;
        self
    }

    /// Enable or disable per-line confidence.
    pub fn with_confidence(mut self, include: bool) -> Self {
        self.include_confidence = include;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_options_builder() {
        let options = ReportOptions::new().with_words(true).with_confidence(true);
        assert!(options.include_words);
        assert!(options.include_confidence);
        assert!(!ReportOptions::default().include_words);
    }
}
