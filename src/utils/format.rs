//! Table formatting and output utilities
//!
//! This module provides functionality for formatting and displaying
//! tabular data with color support and various output formats.

use crate::error::Result;
use crossterm::style::{Color as CrosstermColor, Stylize};
use tabled::{
    settings::{object::Rows, Alignment, Color, Modify, Padding, Style},
    Table,
};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Raw,
}

/// Color theme for console output
#[derive(Debug, Clone)]
pub struct ColorTheme {
    pub header: CrosstermColor,
    pub success: CrosstermColor,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            header: CrosstermColor::Blue,
            success: CrosstermColor::Green,
        }
    }
}

/// Display utilities for status output
pub struct DisplayUtils {
    theme: ColorTheme,
    no_color: bool,
}

impl DisplayUtils {
    /// Create new display utilities
    pub fn new(no_color: bool) -> Self {
        Self {
            theme: ColorTheme::default(),
            no_color,
        }
    }

    /// Print a section header
    pub fn print_header(&self, title: &str) -> Result<()> {
        let styled_title = if self.no_color {
            format!("=== {} ===", title)
        } else {
            format!("=== {} ===", title.with(self.theme.header).bold())
        };

        println!("{}", styled_title);
        Ok(())
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) -> Result<()> {
        let styled_message = if self.no_color {
            format!("✓ {}", message)
        } else {
            format!("✓ {}", message.with(self.theme.success))
        };

        println!("{}", styled_message);
        Ok(())
    }
}

/// Convenience function for formatting a table with default settings
pub fn format_table(mut table: Table, no_color: bool) -> String {
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .with(Padding::new(1, 1, 0, 0));

    if !no_color {
        table.with(Modify::new(Rows::first()).with(Color::FG_BLUE));
    }

    table.to_string()
}

/// Format a table without borders for raw output
pub fn format_raw(mut table: Table) -> String {
    table.with(Style::empty());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabled::Tabled;

    #[derive(Tabled)]
    struct TestData {
        name: String,
        value: String,
    }

    fn sample_rows() -> Vec<TestData> {
        vec![
            TestData {
                name: "domain".to_string(),
                value: "https://md.example.com".to_string(),
            },
            TestData {
                name: "port".to_string(),
                value: "3000".to_string(),
            },
        ]
    }

    #[test]
    fn test_table_formatting() {
        let rows = sample_rows();
        let rendered = format_table(Table::new(&rows), true);
        assert!(rendered.contains("domain"));
        assert!(rendered.contains("https://md.example.com"));
        assert!(rendered.contains("─"));
    }

    #[test]
    fn test_raw_formatting_has_no_borders() {
        let rows = sample_rows();
        let rendered = format_raw(Table::new(&rows));
        assert!(rendered.contains("port"));
        assert!(!rendered.contains("─"));
        assert!(!rendered.contains("│"));
    }

    #[test]
    fn test_default_output_format_is_table() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }
}
