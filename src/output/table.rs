//
//  azure-devops-rest
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Tables are rendered with `comfy_table` using UTF-8 box drawing and
//! arranged to fit the terminal width.
//!
//! ## Example
//!
//! ```rust
//! use azure_devops_rest::output::TableBuilder;
//!
//! let table = TableBuilder::new()
//!     .color(false)
//!     .headers(["Name", "Default branch"])
//!     .row(["Fabrikam", "main"])
//!     .build();
//! assert!(table.to_string().contains("Fabrikam"));
//! ```

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        if self.color {
            self.table
                .set_header(headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)));
        } else {
            self.table.set_header(headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(Into::into).collect();
        self.table.add_row(row);
        self
    }

    pub fn rows<I, R, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            self = self.row(row);
        }
        self
    }

    pub fn print(self) {
        println!("{}", self.table);
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Colors pull request, release and deployment states.
pub fn format_status(status: &str, color: bool) -> String {
    if !color {
        return status.to_string();
    }

    use console::style;
    match status.to_ascii_lowercase().as_str() {
        "active" | "inprogress" | "queued" | "scheduled" => style(status).green().to_string(),
        "completed" | "succeeded" | "approved" => style(status).blue().to_string(),
        "abandoned" | "failed" | "rejected" | "canceled" => {
            style(status).red().to_string()
        }
        "draft" | "pending" | "notstarted" | "partiallysucceeded" => {
            style(status).yellow().to_string()
        }
        _ => status.to_string(),
    }
}

pub fn format_bool(value: bool, color: bool) -> String {
    match (value, color) {
        (true, true) => console::style("Yes").green().to_string(),
        (false, true) => console::style("No").dim().to_string(),
        (true, false) => "Yes".to_string(),
        (false, false) => "No".to_string(),
    }
}

/// Shortens `s` to at most `max_len` characters, ending in `...` when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len > 3 {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Strips `refs/heads/` from a branch ref.
pub fn short_ref(name: &str) -> &str {
    name.strip_prefix("refs/heads/").unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long description", 9), "a long...");
        assert_eq!(truncate("ééééé", 4), "é...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_format_without_color() {
        assert_eq!(format_status("active", false), "active");
        assert_eq!(format_bool(true, false), "Yes");
    }

    #[test]
    fn test_short_ref() {
        assert_eq!(short_ref("refs/heads/main"), "main");
        assert_eq!(short_ref("refs/tags/v1"), "refs/tags/v1");
    }

    #[test]
    fn test_table_contains_rows() {
        let rendered = TableBuilder::new()
            .color(false)
            .headers(["ID", "Title"])
            .rows([["1", "Fix build"], ["2", "Add docs"]])
            .build()
            .to_string();
        assert!(rendered.contains("Fix build"));
        assert!(rendered.contains("Add docs"));
    }
}
