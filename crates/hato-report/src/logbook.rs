//! Logbook report generation.
//!
//! Pulls a date-bounded slice of the bitácora, renders it through
//! [`crate::document`], writes the file, and records the generation in
//! the logbook itself.

use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Serialize;
use tracing::info;

use hato_core::entities::NewLogEntry;
use hato_core::tags::{actions, modules};
use hato_db::service::HerdService;

use crate::document::{self, ReportOptions, TitleBlock};
use crate::error::ReportError;

/// What a successful generation produced.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    /// Where the document landed.
    pub path: PathBuf,
    /// Data rows rendered.
    pub records: usize,
    /// Pages in the document.
    pub pages: usize,
    /// Resolved actor the report is attributed to.
    pub generated_by: String,
    /// Generation stamp in the reference zone.
    pub generated_at: DateTime<FixedOffset>,
}

/// Default file name for a period, used when the destination is a
/// directory.
#[must_use]
pub fn default_file_name(from: NaiveDate, to: NaiveDate) -> String {
    format!("Bitacora_{from}_a_{to}.txt")
}

/// Generate the logbook report for `[from, to]` into `destination`.
///
/// The destination may be a file path or an existing directory; a
/// directory receives the [`default_file_name`]. The document is rendered
/// completely before a single write, so a failed generation leaves no
/// partial file. On success a `Bitacora`/`GENERAR_REPORTE` entry is
/// appended, attributed to the service session.
///
/// # Errors
///
/// Returns [`ReportError::InvalidRange`] for an inverted period,
/// [`ReportError::NoRecords`] when the period matches nothing,
/// [`ReportError::Database`] when the query fails, and
/// [`ReportError::Io`] when the write fails.
pub async fn generate_report(
    service: &HerdService,
    from: NaiveDate,
    to: NaiveDate,
    destination: &Path,
    options: &ReportOptions,
) -> Result<ReportSummary, ReportError> {
    if from > to {
        return Err(ReportError::InvalidRange { from, to });
    }

    let entries = service.query_by_date_range(from, to).await?;
    if entries.is_empty() {
        return Err(ReportError::NoRecords { from, to });
    }

    let stamp = service.clock().now();
    let generated_by = service.session().actor().name;
    let title = TitleBlock {
        from,
        to,
        records: entries.len(),
        generated_by: generated_by.clone(),
        generated_at: stamp.at,
    };

    let text = document::render_document(&title, &entries, options);
    let path = resolve_destination(destination, from, to);
    tokio::fs::write(&path, &text)
        .await
        .map_err(|source| ReportError::Io {
            path: path.clone(),
            source,
        })?;

    let pages = document::page_count(entries.len(), options.rows_per_page.max(1));
    info!(
        path = %path.display(),
        records = entries.len(),
        pages,
        "logbook report written"
    );

    service
        .record_action(
            NewLogEntry::new(modules::BITACORA, actions::GENERATE_REPORT)
                .with_description(format!(
                    "Generated logbook report {from} a {to} ({} records)",
                    entries.len()
                ))
                .with_details(
                    serde_json::json!({ "path": path.display().to_string(), "pages": pages })
                        .to_string(),
                ),
            service.session(),
        )
        .await;

    Ok(ReportSummary {
        path,
        records: entries.len(),
        pages,
        generated_by,
        generated_at: stamp.at,
    })
}

fn resolve_destination(destination: &Path, from: NaiveDate, to: NaiveDate) -> PathBuf {
    if destination.is_dir() {
        destination.join(default_file_name(from, to))
    } else {
        destination.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_name_spells_out_the_period() {
        let from = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        assert_eq!(
            default_file_name(from, to),
            "Bitacora_2026-01-01_a_2026-01-31.txt"
        );
    }
}
