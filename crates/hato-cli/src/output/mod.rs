use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    table::TableOptions {
        max_width: std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.parse().ok()),
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let options = table_options();

    let value = serde_json::to_value(value)?;
    let rendered = match value {
        Value::Array(items) => render_array_table(&items, options),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let mut entries = map.into_iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let mut rows = Vec::with_capacity(entries.len());
            for (key, value) in entries {
                rows.push(vec![key, value_to_cell(&value)]);
            }
            table::render_entity_table(&headers, &rows, options)
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            table::render_entity_table(&headers, &rows, options)
        }
    };
    Ok(rendered)
}

fn render_array_table(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    let all_objects = items.iter().all(Value::is_object);
    if !all_objects {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&headers, &rows, options);
    }

    let mut headers = Vec::<String>::new();
    for item in items {
        if let Some(map) = item.as_object() {
            for key in map.keys() {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    headers.sort();

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Row {
        ear_tag: String,
        status: String,
    }

    #[test]
    fn json_format_pretty_prints() {
        let row = Row {
            ear_tag: "MX-001".into(),
            status: "active".into(),
        };
        let rendered = render(&row, OutputFormat::Json).unwrap();
        assert!(rendered.contains("\"ear_tag\": \"MX-001\""));
        assert!(rendered.contains('\n'));
    }

    #[test]
    fn raw_format_is_compact() {
        let row = Row {
            ear_tag: "MX-001".into(),
            status: "active".into(),
        };
        let rendered = render(&row, OutputFormat::Raw).unwrap();
        assert_eq!(rendered, "{\"ear_tag\":\"MX-001\",\"status\":\"active\"}");
    }

    #[test]
    fn object_renders_as_key_value_table() {
        let row = Row {
            ear_tag: "MX-001".into(),
            status: "active".into(),
        };
        let rendered = render(&row, OutputFormat::Table).unwrap();
        assert!(rendered.starts_with("key"));
        assert!(rendered.contains("ear_tag"));
        assert!(rendered.contains("MX-001"));
    }

    #[test]
    fn array_renders_with_union_of_columns() {
        let rows = vec![
            Row {
                ear_tag: "MX-001".into(),
                status: "active".into(),
            },
            Row {
                ear_tag: "MX-002".into(),
                status: "sold".into(),
            },
        ];
        let rendered = render(&rows, OutputFormat::Table).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn empty_array_has_placeholder() {
        let rows: Vec<Row> = Vec::new();
        let rendered = render(&rows, OutputFormat::Table).unwrap();
        assert_eq!(rendered, "(no rows)");
    }
}
