//
//  azure-devops-rest
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Formatting of command results for the `ado` tool:
//!
//! - **Table format**: human-readable output for interactive use
//! - **JSON format**: the API payload, for scripting (`--json`)
//!
//! ## Core Components
//!
//! - [`OutputFormat`]: the selected format
//! - [`OutputWriter`]: writes single values, lists and status messages
//! - [`TableOutput`]: detail view of a single value
//! - [`TableRow`]: one row of a list table
//!
//! ## Example
//!
//! ```rust,ignore
//! use azure_devops_rest::output::{OutputFormat, OutputWriter};
//!
//! let writer = OutputWriter::new(OutputFormat::Json);
//! writer.write_list(&repositories)?;
//! writer.write_success("Logged in to https://dev.azure.com/contoso");
//! ```

mod json;
mod table;

pub use json::*;
pub use table::*;

use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("Unknown output format '{other}' (expected table or json)"),
        }
    }
}

pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn write<T: Serialize + TableOutput>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(value),
            OutputFormat::Table => {
                value.print_table(self.color);
                Ok(())
            }
        }
    }

    pub fn write_list<T: Serialize + TableRow>(&self, values: &[T]) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(&values),
            OutputFormat::Table => {
                if values.is_empty() {
                    self.write_info("No results");
                    return Ok(());
                }
                TableBuilder::new()
                    .color(self.color)
                    .headers(T::HEADERS.iter().copied())
                    .rows(values.iter().map(|v| v.row(self.color)))
                    .print();
                Ok(())
            }
        }
    }

    pub fn write_warning(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }

    pub fn write_info(&self, msg: &str) {
        println!("{}", msg);
    }
}

/// Detail view of a single value.
pub trait TableOutput {
    fn print_table(&self, color: bool);
}

/// A value shown as one row of a list table.
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    fn row(&self, color: bool) -> Vec<String>;
}

pub fn print_header(text: &str) {
    use console::style;
    println!("{}", style(text).bold());
    println!("{}", "-".repeat(text.chars().count()));
}

pub fn print_field(key: &str, value: &str, color: bool) {
    use console::style;
    if color {
        println!("{}: {}", style(key).dim(), value);
    } else {
        println!("{}: {}", key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TABLE".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_writer_keeps_format() {
        assert_eq!(OutputWriter::new(OutputFormat::Json).format(), OutputFormat::Json);
        assert_eq!(OutputWriter::new(OutputFormat::default()).format(), OutputFormat::Table);
    }
}
