//! Rendering options and configuration.

/// Options for rendering document previews.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Maximum heading level (1-6)
    pub max_heading_level: u8,

    /// Include YAML frontmatter with metadata
    pub include_frontmatter: bool,

    /// Character to use for unordered list markers
    pub list_marker: char,

    /// Escape special Markdown characters
    pub escape_special_chars: bool,

    /// Emit a `---` rule where the document has a page break
    pub page_break_rule: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum heading level.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.max_heading_level = level.clamp(1, 6);
        self
    }

    /// Enable or disable frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Set the list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Enable or disable page break rules.
    pub fn with_page_break_rule(mut self, rule: bool) -> Self {
        self.page_break_rule = rule;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_heading_level: 6,
            include_frontmatter: false,
            list_marker: '-',
            escape_special_chars: true,
            page_break_rule: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_frontmatter(true)
            .with_max_heading(9)
            .with_list_marker('*')
            .with_page_break_rule(false);

        assert!(options.include_frontmatter);
        assert_eq!(options.max_heading_level, 6);
        assert_eq!(options.list_marker, '*');
        assert!(!options.page_break_rule);
        assert!(options.escape_special_chars);
    }

    #[test]
    fn test_max_heading_clamped_low() {
        let options = RenderOptions::new().with_max_heading(0);
        assert_eq!(options.max_heading_level, 1);
    }
}
