//! A generic structured-record sink, modeled on an mmCIF data block.
//!
//! Writers append tagged rows to named categories; the block persists itself
//! on request. Categories keep insertion order, and rows within a category
//! are assumed to share one tag layout.

use std::io::{self, Write};

/// One record: an ordered list of tag/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    values: Vec<(String, String)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one tagged value, builder-style.
    pub fn with(mut self, tag: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.push((tag.into(), value.into()));
        self
    }

    pub fn get(&self, tag: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, v)| v.as_str())
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(t, _)| t.as_str())
    }
}

/// A named set of rows sharing one record layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    rows: Vec<Row>,
}

impl Category {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }
}

/// The record sink for one structure: ordered categories under one block name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataBlock {
    name: String,
    categories: Vec<Category>,
}

impl DataBlock {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            categories: Vec::new(),
        }
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// The named category, appended to the block on first use.
    pub fn category_mut(&mut self, name: &str) -> &mut Category {
        if let Some(pos) = self.categories.iter().position(|c| c.name == name) {
            &mut self.categories[pos]
        } else {
            self.categories.push(Category {
                name: name.to_string(),
                rows: Vec::new(),
            });
            self.categories.last_mut().unwrap()
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Persists the block in its native textual form.
    ///
    /// The whole block is rendered before any byte reaches the writer, so a
    /// failed write never leaves a partial record behind.
    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        let mut out = String::new();
        out.push_str("data_");
        out.push_str(&self.name);
        out.push('\n');
        for category in &self.categories {
            if category.rows.is_empty() {
                continue;
            }
            out.push_str("#\nloop_\n");
            for tag in category.rows[0].tags() {
                out.push('_');
                out.push_str(&category.name);
                out.push('.');
                out.push_str(tag);
                out.push('\n');
            }
            for row in &category.rows {
                let mut first = true;
                for (_, value) in &row.values {
                    if !first {
                        out.push(' ');
                    }
                    out.push_str(&quote(value));
                    first = false;
                }
                out.push('\n');
            }
        }
        out.push_str("#\n");
        writer.write_all(out.as_bytes())
    }
}

fn quote(value: &str) -> String {
    if value.is_empty() {
        ".".to_string()
    } else if value.contains('\'') {
        format!("\"{value}\"")
    } else if value.contains(char::is_whitespace) || value.starts_with(['_', '#', '$', '\'', '"'])
    {
        format!("'{value}'")
    } else {
        value.to_string()
    }
}
