// Output formatting utilities

use std::io::IsTerminal;

use crate::classify::{format_percent, Distribution, Resolved};
use crate::models::{ClassificationTable, ColorToken, Dimension};

// ANSI escape codes for terminal formatting
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";

/// Narrowest the Label column is squeezed to before the table is allowed to wrap
const MIN_LABEL_WIDTH: usize = 8;

/// Check if stdout is a terminal (TTY)
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width dynamically
///
/// Uses the `terminal_size` crate for reliable detection, with fallback to
/// COLUMNS environment variable and a sensible default.
pub fn get_terminal_width() -> usize {
    if let Some((terminal_size::Width(w), _)) = terminal_size::terminal_size() {
        if w > 0 {
            return w as usize;
        }
    }

    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 && width < 10000 {
                return width;
            }
        }
    }

    120
}

/// Apply bold formatting if in TTY mode
fn bold_if_tty(text: &str, is_tty: bool) -> String {
    if is_tty {
        format!("{}{}{}", ANSI_BOLD, text, ANSI_RESET)
    } else {
        text.to_string()
    }
}

/// Two-cell 24-bit background swatch for a color
fn swatch(color: &ColorToken) -> String {
    let (r, g, b) = color.rgb();
    format!("\x1b[48;2;{};{};{}m  {}", r, g, b, ANSI_RESET)
}

/// Truncate to `width` characters, marking the cut with ".."
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(2);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("..");
    out
}

/// One cell of a rendered table; `color` adds a swatch in front when on a TTY
struct Cell {
    text: String,
    color: Option<ColorToken>,
}

impl Cell {
    fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), color: None }
    }

    fn colored(color: &ColorToken) -> Self {
        Self { text: color.to_hex(), color: Some(color.clone()) }
    }
}

/// Render aligned columns with a header and separator line.
///
/// `shrink_column` names the column truncated first when the table is wider than
/// `max_width`.
fn format_columns(
    headers: &[&str],
    rows: &[Vec<Cell>],
    shrink_column: Option<usize>,
    max_width: Option<usize>,
    is_tty: bool,
) -> String {
    let swatch_width = if is_tty { 3 } else { 0 };
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            let extra = if cell.color.is_some() { swatch_width } else { 0 };
            widths[idx] = widths[idx].max(cell.text.chars().count() + extra);
        }
    }

    if let (Some(col), Some(max)) = (shrink_column, max_width) {
        let total: usize = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
        if total > max {
            let excess = total - max;
            let floor = MIN_LABEL_WIDTH.max(headers[col].chars().count());
            widths[col] = widths[col].saturating_sub(excess).max(floor.min(widths[col]));
        }
    }

    let last = headers.len().saturating_sub(1);
    let mut output = String::new();

    let mut header_line = String::new();
    for (idx, header) in headers.iter().enumerate() {
        let padded = if idx == last {
            header.to_string()
        } else {
            format!("{:<width$} ", header, width = widths[idx])
        };
        header_line.push_str(&bold_if_tty(&padded, is_tty));
    }
    output.push_str(header_line.trim_end());
    output.push('\n');

    let separator: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    output.push_str(&separator.join(" "));
    output.push('\n');

    for row in rows {
        let mut line = String::new();
        for (idx, cell) in row.iter().enumerate() {
            let mut text = truncate(&cell.text, widths[idx]);
            let mut width = widths[idx];
            if let (true, Some(color)) = (is_tty, &cell.color) {
                line.push_str(&swatch(color));
                line.push(' ');
                width = width.saturating_sub(swatch_width);
                text = truncate(&cell.text, width);
            }
            if idx == last {
                line.push_str(&text);
            } else {
                line.push_str(&format!("{:<width$} ", text, width = width));
            }
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}

fn label_width_limit(is_tty: bool) -> Option<usize> {
    if is_tty {
        Some(get_terminal_width())
    } else {
        None
    }
}

/// Key/value block for a single resolved code
pub fn format_resolved(dimension: Dimension, input: Option<&str>, resolved: &Resolved<'_>, is_tty: bool) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Dimension: {}", dimension));
    lines.push(format!("Input:     {}", input.unwrap_or("(none)")));
    lines.push(format!("Code:      {}", resolved.code()));
    lines.push(format!("Label:     {}", bold_if_tty(resolved.display_label(), is_tty)));
    let color = if is_tty {
        format!("{} {}", swatch(resolved.color()), resolved.color().to_hex())
    } else {
        resolved.color().to_hex()
    };
    lines.push(format!("Color:     {}", color));
    lines.push(format!("Rank:      {}", resolved.sort_rank()));
    if resolved.is_fallback() {
        lines.push("Fallback:  yes".to_string());
    }
    let mut output = lines.join("\n");
    output.push('\n');
    output
}

/// Rank-ordered list of resolved inputs
pub fn format_sorted(rows: &[(Option<&str>, Resolved<'_>)], is_tty: bool) -> String {
    let cells: Vec<Vec<Cell>> = rows
        .iter()
        .map(|(input, resolved)| {
            vec![
                Cell::plain(input.unwrap_or("(none)")),
                Cell::plain(resolved.code()),
                Cell::plain(resolved.display_label()),
                Cell::colored(resolved.color()),
                Cell::plain(resolved.sort_rank().to_string()),
            ]
        })
        .collect();
    format_columns(&["Input", "Code", "Label", "Color", "Rank"], &cells, Some(2), label_width_limit(is_tty), is_tty)
}

/// Every entry of a table, marking the default and fallback rows
pub fn format_table(table: &ClassificationTable, is_tty: bool) -> String {
    let cells: Vec<Vec<Cell>> = table
        .entries()
        .iter()
        .map(|entry| {
            let note = if entry.is_fallback() {
                "fallback"
            } else if table.default_code() == Some(entry.code.as_str()) {
                "default"
            } else {
                ""
            };
            vec![
                Cell::plain(entry.sort_rank.to_string()),
                Cell::plain(entry.code.as_str()),
                Cell::plain(entry.label.as_str()),
                Cell::colored(&entry.color),
                Cell::plain(note),
            ]
        })
        .collect();
    format_columns(&["Rank", "Code", "Label", "Color", "Note"], &cells, Some(2), label_width_limit(is_tty), is_tty)
}

/// Distribution buckets with counts and percentages, plus a total line
pub fn format_distribution(distribution: &Distribution<'_>, is_tty: bool) -> String {
    let cells: Vec<Vec<Cell>> = distribution
        .buckets
        .iter()
        .map(|bucket| {
            vec![
                Cell::plain(bucket.entry.code.as_str()),
                Cell::plain(bucket.entry.label.as_str()),
                Cell::colored(&bucket.entry.color),
                Cell::plain(bucket.count.to_string()),
                Cell::plain(format_percent(bucket.percent)),
            ]
        })
        .collect();
    let mut output = format_columns(
        &["Code", "Label", "Color", "Count", "Share"],
        &cells,
        Some(1),
        label_width_limit(is_tty),
        is_tty,
    );
    output.push_str(&format!("Total: {}\n", distribution.total));
    output
}

/// Known dimensions with their default code and entry count
pub fn format_dimensions(tables: &[(Dimension, &ClassificationTable)], is_tty: bool) -> String {
    let cells: Vec<Vec<Cell>> = tables
        .iter()
        .map(|(dimension, table)| {
            vec![
                Cell::plain(dimension.as_str()),
                Cell::plain(table.default_code().unwrap_or("-")),
                Cell::plain(table.fallback().label.as_str()),
                Cell::plain(table.len().to_string()),
            ]
        })
        .collect();
    format_columns(&["Dimension", "Default", "Fallback", "Entries"], &cells, None, None, is_tty)
}
