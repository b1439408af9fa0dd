//! Markdown table rendering.
use crate::constants::{
    ALIGN_CENTER, COLUMN_SEPARATOR, ESCAPED_LINE_BREAK, ESCAPED_SEPARATOR, LEVEL_COLUMNS,
};
use crate::level::Level;

/// Make free text safe for a single table cell.
///
/// The column separator becomes `&#124;` and line breaks become `<br>`, so a
/// row always has the same number of separators as its header.
#[must_use]
pub fn escape_cell(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            COLUMN_SEPARATOR => out.push_str(ESCAPED_SEPARATOR),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str(ESCAPED_LINE_BREAK);
            }
            '\n' => out.push_str(ESCAPED_LINE_BREAK),
            other => out.push(other),
        }
    }
    out
}

/// Rows carry a leading separator and no trailing one: `| a | b | c`.
#[must_use]
pub fn row<S: AsRef<str>>(cells: &[S]) -> String {
    let joined: Vec<&str> = cells.iter().map(AsRef::as_ref).collect();
    format!("{COLUMN_SEPARATOR} {}", joined.join(" | "))
}

#[must_use]
pub fn alignment_row(columns: usize) -> String {
    let mut line = String::new();
    for _ in 0..columns {
        line.push(COLUMN_SEPARATOR);
        line.push_str(ALIGN_CENTER);
    }
    line
}

/// Standard level row: escaped name and creator, id, downloads, likes.
#[must_use]
pub fn level_row(level: &Level) -> String {
    row(&[
        escape_cell(&level.name),
        escape_cell(&level.creator),
        level.id.to_string(),
        level.downloads.to_string(),
        level.likes.to_string(),
    ])
}

/// Description row: name, creator, id, description length, description.
/// Every free-text cell is escaped.
#[must_use]
pub fn description_row(level: &Level) -> String {
    row(&[
        escape_cell(&level.name),
        escape_cell(&level.creator),
        level.id.to_string(),
        level.description_len().to_string(),
        escape_cell(&level.description),
    ])
}

/// A titled markdown table with a total line above the header.
#[derive(Debug, Clone)]
pub struct MarkdownTable<'c> {
    title: String,
    total_label: &'static str,
    columns: &'c [&'c str],
    rows: Vec<String>,
}

impl<'c> MarkdownTable<'c> {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        total_label: &'static str,
        columns: &'c [&'c str],
    ) -> Self {
        Self {
            title: title.into(),
            total_label,
            columns,
            rows: Vec::new(),
        }
    }

    /// Level table with the standard columns, rows in the given order.
    #[must_use]
    pub fn of_levels(
        title: impl Into<String>,
        total_label: &'static str,
        levels: &[&Level],
    ) -> Self {
        let mut table = MarkdownTable::new(title, total_label, &LEVEL_COLUMNS);
        table.rows = levels.iter().map(|level| level_row(level)).collect();
        table
    }

    pub fn push_row(&mut self, row: String) {
        self.rows.push(row);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows.len() + 6);
        lines.push(format!("# {}", self.title));
        lines.push(String::new());
        lines.push(format!("{}: {}", self.total_label, self.rows.len()));
        lines.push(String::new());
        lines.push(row(self.columns));
        lines.push(alignment_row(self.columns.len()));
        lines.extend(self.rows);
        lines
    }
}
