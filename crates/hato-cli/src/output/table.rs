#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
}

/// Render a simple aligned table for string rows.
///
/// Widths are counted in characters so accented Spanish text lines up
/// with plain ASCII.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_width(cell))
                .max()
                .unwrap_or(0)
                .max(display_width(header))
                .max(6)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| {
            let text = truncate_text(header, *width);
            format_cell(&text, *width, false)
        })
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(display_width(&header_line));

    let row_lines = rows
        .iter()
        .map(|row| {
            widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let value = row.get(index).cloned().unwrap_or_else(|| "-".to_string());
                    let truncated = truncate_text(&value, *width);
                    let numeric = looks_numeric(&truncated);
                    format_cell(&truncated, *width, numeric)
                })
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>();

    let mut lines = Vec::with_capacity(2 + row_lines.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    if widths.is_empty() {
        return;
    }

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;
    if total <= max_width {
        return;
    }

    loop {
        if total <= max_width {
            break;
        }

        let mut candidate_idx = None;
        let mut candidate_width = 0usize;
        for (idx, width) in widths.iter().enumerate() {
            let min_width = display_width(headers[idx]).max(6);
            if *width > min_width && *width > candidate_width {
                candidate_idx = Some(idx);
                candidate_width = *width;
            }
        }

        let Some(idx) = candidate_idx else {
            break;
        };

        widths[idx] = widths[idx].saturating_sub(1);
        total = widths.iter().sum::<usize>() + separators;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if display_width(value) <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out = String::new();
    for ch in value.chars().take(width - 1) {
        out.push(ch);
    }
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

fn format_cell(value: &str, width: usize, numeric: bool) -> String {
    let pad = width.saturating_sub(display_width(value));
    if numeric {
        format!("{}{}", " ".repeat(pad), value)
    } else {
        format!("{}{}", value, " ".repeat(pad))
    }
}

fn display_width(value: &str) -> usize {
    value.chars().count()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn renders_header_divider_and_rows() {
        let rendered = render_entity_table(
            &["ear_tag", "status"],
            &[
                vec!["MX-001".into(), "active".into()],
                vec!["MX-002".into(), "sold".into()],
            ],
            TableOptions::default(),
        );

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ear_tag"));
        assert!(lines[1].chars().all(|ch| ch == '-'));
        assert!(lines[2].starts_with("MX-001"));
    }

    #[test]
    fn numeric_cells_right_align() {
        let rendered = render_entity_table(
            &["name", "capacity"],
            &[vec!["Norte".into(), "12".into()]],
            TableOptions::default(),
        );
        let row = rendered.lines().nth(2).unwrap();
        assert!(row.ends_with("12"));
    }

    #[test]
    fn accented_text_does_not_skew_columns() {
        let rendered = render_entity_table(
            &["actor", "action"],
            &[
                vec!["María García".into(), "INSERT".into()],
                vec!["Jane Smith  ".into(), "UPDATE".into()],
            ],
            TableOptions::default(),
        );
        let lines: Vec<&str> = rendered.lines().collect();
        // Both action cells start at the same char column only if the
        // accented name is measured in chars, not bytes.
        let col = |line: &str| line.chars().position(|c| c == 'I' || c == 'U');
        assert_eq!(col(lines[2]), col(lines[3]));
    }

    #[test]
    fn long_cells_truncate_under_max_width() {
        let rendered = render_entity_table(
            &["description"],
            &[vec!["x".repeat(120)]],
            TableOptions {
                max_width: Some(40),
            },
        );
        for line in rendered.lines() {
            assert!(line.chars().count() <= 40);
        }
        assert!(rendered.contains('…'));
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let rendered = render_entity_table(
            &["a", "b"],
            &[vec!["only".into()]],
            TableOptions::default(),
        );
        assert!(rendered.lines().nth(2).unwrap().trim_end().ends_with('-'));
    }
}
