//! Rendering configuration for tree and token listings.

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Number of spaces per tree depth level
    pub indent_width: usize,
    /// Whether node and token positions include the column
    pub show_columns: bool,
    /// Whether token listings append the legacy numeric category code
    pub show_legacy_codes: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            show_columns: false,
            show_legacy_codes: false,
        }
    }
}

impl RenderConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Show `line:column` instead of the line alone
    pub fn with_columns(mut self, show: bool) -> Self {
        self.show_columns = show;
        self
    }

    /// Append legacy category codes to token rows
    pub fn with_legacy_codes(mut self, show: bool) -> Self {
        self.show_legacy_codes = show;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.indent_width, 2);
        assert!(!config.show_columns);
        assert!(!config.show_legacy_codes);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(RenderConfig::new(), RenderConfig::default());
    }

    #[test]
    fn test_builder_chain() {
        let config = RenderConfig::new()
            .with_indent_width(4)
            .with_columns(true)
            .with_legacy_codes(true);
        assert_eq!(config.indent_width, 4);
        assert!(config.show_columns);
        assert!(config.show_legacy_codes);
    }
}
