//! Visual theme and styling.

use console::Style;

/// Sitelink's visual theme.
#[derive(Debug, Clone)]
pub struct SitelinkTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational elements (cyan).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for step counters (dim).
    pub step_number: Style,
    /// Style for contextual hints (cyan dim).
    pub hint: Style,
}

impl Default for SitelinkTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SitelinkTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            step_number: Style::new().dim(),
            hint: Style::new().cyan().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or NO_COLOR).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            step_number: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("::"),
            self.highlight.apply_to(title)
        )
    }

    /// Format a numbered step line.
    pub fn format_step(&self, current: usize, total: usize, msg: &str) -> String {
        format!(
            "{} {}",
            self.step_number.apply_to(format!("[{}/{}]", current, total)),
            msg
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = SitelinkTheme::plain();
        let msg = theme.format_success("Complete");
        assert!(msg.contains("✓"));
        assert!(msg.contains("Complete"));
    }

    #[test]
    fn theme_formats_warning() {
        let theme = SitelinkTheme::plain();
        let msg = theme.format_warning("Caution");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("Caution"));
    }

    #[test]
    fn theme_formats_error() {
        let theme = SitelinkTheme::plain();
        let msg = theme.format_error("Failed");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Failed"));
    }

    #[test]
    fn theme_formats_header() {
        let theme = SitelinkTheme::plain();
        let msg = theme.format_header("Installing mylibs");
        assert!(msg.contains("Installing mylibs"));
    }

    #[test]
    fn theme_formats_step_counter() {
        let theme = SitelinkTheme::plain();
        let msg = theme.format_step(2, 7, "Checking Python version");
        assert!(msg.contains("[2/7]"));
        assert!(msg.contains("Checking Python version"));
    }

    #[test]
    fn default_impl_matches_new() {
        let default = SitelinkTheme::default();
        let new = SitelinkTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
