use cardfill_core::{Aggregates, FilterState, PageState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_COLUMN_WIDTH: usize = 36;
const COLUMN_GAP: &str = "  ";

/// A screen's current page, flattened to strings for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub title: String,
    pub filter: FilterState,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    pub aggregates: Aggregates,
    pub state: PageState,
}

pub fn render(table: &TableView) -> Vec<String> {
    let mut lines = Vec::with_capacity(table.rows.len() + 6);

    lines.push(format!("== {} ==", table.title));
    lines.push(filter_line(&table.filter));
    lines.push(totals_line(table.state.total_records, &table.aggregates));

    let widths = column_widths(table);
    lines.push(format_row(table.headers.iter().copied(), &widths));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP),
    );
    if table.rows.is_empty() {
        lines.push("(no records)".to_string());
    }
    for row in &table.rows {
        lines.push(format_row(row.iter().map(String::as_str), &widths));
    }

    lines.push(footer_line(&table.state));
    lines
}

fn filter_line(filter: &FilterState) -> String {
    let keyword = if filter.keyword().is_empty() {
        "-".to_string()
    } else {
        format!("{:?}", filter.keyword())
    };
    format!(
        "Search: {} | Filter: {}",
        keyword,
        filter.category_or_status().unwrap_or("all")
    )
}

fn totals_line(total_records: usize, aggregates: &Aggregates) -> String {
    let mut parts = vec![format!("total {total_records}")];
    parts.extend(
        aggregates
            .iter()
            .map(|entry| format!("{} {}", entry.label, entry.count)),
    );
    parts.join(" | ")
}

fn footer_line(state: &PageState) -> String {
    let prev = if state.has_previous() { "prev" } else { "----" };
    let next = if state.has_next() { "next" } else { "----" };
    format!(
        "{} ({} records)   < {} | {} >",
        state.page_label(),
        state.total_records,
        prev,
        next
    )
}

fn column_widths(table: &TableView) -> Vec<usize> {
    table
        .headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            table
                .rows
                .iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.width())
                .chain(std::iter::once(header.width()))
                .max()
                .unwrap_or(0)
                .min(MAX_COLUMN_WIDTH)
        })
        .collect()
}

fn format_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| pad(&truncate(cell, *width), *width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    line.trim_end().to_string()
}

/// Cuts `text` to at most `width` display columns, marking the cut with `~`.
fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width + 1 > width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push('~');
    out
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}
