//! Plain-text document rendering for logbook reports.
//!
//! Layout: a title block on the first page, then an aligned five-column
//! table split into fixed-height pages. Every page repeats the column
//! header and carries a `Página N de M` footer; pages are separated by a
//! form feed so the document prints one page per sheet.
//!
//! Widths are counted in characters, not bytes — Spanish text in actor
//! names and descriptions must not skew the alignment.

use chrono::{DateTime, FixedOffset, NaiveDate};

use hato_core::entities::LogEntry;

/// Column headers of the report body. The affected arete is deliberately
/// not part of the rendered table.
const HEADERS: [&str; 5] = ["Fecha", "Usuario", "Módulo", "Acción", "Descripción"];

const TITLE: &str = "REPORTE DE BITÁCORA";

/// Rendering knobs, normally sourced from `[report]` configuration.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    /// Maximum characters of the description preview cell.
    pub preview_chars: usize,
    /// Data rows per page.
    pub rows_per_page: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            preview_chars: 80,
            rows_per_page: 40,
        }
    }
}

/// Metadata rendered into the first-page title block.
#[derive(Debug, Clone)]
pub struct TitleBlock {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub records: usize,
    pub generated_by: String,
    pub generated_at: DateTime<FixedOffset>,
}

/// Number of pages a record count splits into.
#[must_use]
pub const fn page_count(records: usize, rows_per_page: usize) -> usize {
    if records == 0 || rows_per_page == 0 {
        1
    } else {
        records.div_ceil(rows_per_page)
    }
}

/// Render the full document text.
#[must_use]
pub fn render_document(title: &TitleBlock, entries: &[LogEntry], options: &ReportOptions) -> String {
    let rows: Vec<[String; 5]> = entries
        .iter()
        .map(|entry| entry_to_row(entry, options.preview_chars))
        .collect();

    let widths = column_widths(&rows);
    let header_line = render_line(&HEADERS.map(String::from), &widths);
    let divider = "-".repeat(display_width(&header_line));

    let rows_per_page = options.rows_per_page.max(1);
    let pages = page_count(rows.len(), rows_per_page);

    let mut out = String::new();
    for (page_index, chunk) in rows.chunks(rows_per_page).enumerate() {
        if page_index > 0 {
            out.push('\u{c}');
            out.push('\n');
        }
        if page_index == 0 {
            push_title_block(&mut out, title);
        }

        out.push_str(&header_line);
        out.push('\n');
        out.push_str(&divider);
        out.push('\n');
        for row in chunk {
            out.push_str(&render_line(row, &widths));
            out.push('\n');
        }

        out.push('\n');
        out.push_str(&format!("Página {} de {pages}\n", page_index + 1));
    }
    out
}

fn push_title_block(out: &mut String, title: &TitleBlock) {
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(display_width(TITLE)));
    out.push_str("\n\n");
    out.push_str(&format!("Período:      {} a {}\n", title.from, title.to));
    out.push_str(&format!("Registros:    {}\n", title.records));
    out.push_str(&format!("Generado por: {}\n", title.generated_by));
    out.push_str(&format!(
        "Generado el:  {}\n\n",
        title.generated_at.format("%Y-%m-%d %H:%M:%S %:z")
    ));
}

fn entry_to_row(entry: &LogEntry, preview_chars: usize) -> [String; 5] {
    [
        entry.occurred_at.format("%Y-%m-%d %H:%M").to_string(),
        entry.actor.clone(),
        entry.module.clone(),
        entry.action.clone(),
        preview(entry, preview_chars),
    ]
}

/// Description preview cell: the description, falling back to the raw
/// details when no description was recorded, truncated to the preview
/// width.
#[must_use]
pub fn preview(entry: &LogEntry, preview_chars: usize) -> String {
    let text = entry
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .or(entry.details.as_deref())
        .unwrap_or("");
    truncate_chars(text, preview_chars)
}

fn column_widths(rows: &[[String; 5]]) -> [usize; 5] {
    let mut widths = HEADERS.map(display_width);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(display_width(cell));
        }
    }
    widths
}

fn render_line(cells: &[String; 5], widths: &[usize; 5]) -> String {
    let mut line = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| pad_cell(cell, *width))
        .collect::<Vec<_>>()
        .join("  ");
    // The last column keeps no trailing padding.
    line.truncate(line.trim_end().len());
    line
}

fn pad_cell(value: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(value));
    format!("{}{}", value, " ".repeat(pad))
}

fn truncate_chars(value: &str, width: usize) -> String {
    if display_width(value) <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn display_width(value: &str) -> usize {
    value.chars().count()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(description: Option<&str>, details: Option<&str>) -> LogEntry {
        LogEntry {
            id: 1,
            occurred_at: DateTime::parse_from_rfc3339("2026-03-14T09:26:53-06:00").unwrap(),
            actor: "jdoe".into(),
            module: "Animals".into(),
            action: "INSERT".into(),
            description: description.map(str::to_string),
            details: details.map(str::to_string),
            ear_tag: Some("MX-001".into()),
        }
    }

    #[test]
    fn preview_prefers_description_over_details() {
        let e = entry(Some("Registered animal"), Some("{\"sex\":\"female\"}"));
        assert_eq!(preview(&e, 80), "Registered animal");
    }

    #[test]
    fn preview_falls_back_to_details() {
        let e = entry(None, Some("{\"sex\":\"female\"}"));
        assert_eq!(preview(&e, 80), "{\"sex\":\"female\"}");

        let blank = entry(Some("   "), Some("raw"));
        assert_eq!(preview(&blank, 80), "raw");
    }

    #[test]
    fn preview_truncates_at_the_character_limit() {
        let long = "á".repeat(120);
        let e = entry(Some(&long), None);
        let cell = preview(&e, 80);
        assert_eq!(cell.chars().count(), 80);
        assert!(cell.ends_with('…'));
    }

    #[test]
    fn short_text_is_not_truncated() {
        assert_eq!(truncate_chars("corto", 80), "corto");
        assert_eq!(truncate_chars("exacto", 6), "exacto");
    }

    #[test]
    fn accented_cells_align_with_ascii_cells() {
        // "Módulo" and "Modulo" take the same column width.
        assert_eq!(pad_cell("Módulo", 10).chars().count(), 10);
        assert_eq!(pad_cell("Modulo", 10).chars().count(), 10);
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 40), 1);
        assert_eq!(page_count(40, 40), 1);
        assert_eq!(page_count(41, 40), 2);
        assert_eq!(page_count(5, 2), 3);
    }

    #[test]
    fn single_page_document_has_title_header_and_footer() {
        let title = TitleBlock {
            from: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            to: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
            records: 1,
            generated_by: "jdoe".into(),
            generated_at: DateTime::parse_from_rfc3339("2026-03-31T18:00:00-06:00").unwrap(),
        };
        let text = render_document(&title, &[entry(Some("Alta"), None)], &ReportOptions::default());

        assert!(text.starts_with(TITLE));
        assert!(text.contains("Período:      2026-03-01 a 2026-03-31"));
        assert!(text.contains("Registros:    1"));
        assert!(text.contains("Fecha"));
        assert!(text.contains("Página 1 de 1"));
        assert!(!text.contains('\u{c}'));
        // The arete never reaches the rendered body.
        assert!(!text.contains("MX-001"));
    }
}
