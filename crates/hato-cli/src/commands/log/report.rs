use std::path::PathBuf;

use hato_report::{ReportOptions, generate_report};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_date;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    from: &str,
    to: &str,
    out: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let from = parse_date(from, "from")?;
    let to = parse_date(to, "to")?;

    let destination = out.map_or_else(
        || PathBuf::from(&ctx.config.report.output_dir),
        PathBuf::from,
    );
    let options = ReportOptions {
        preview_chars: ctx.config.report.preview_chars,
        rows_per_page: ctx.config.report.rows_per_page,
    };

    let summary = generate_report(&ctx.service, from, to, &destination, &options).await?;
    output(&summary, flags.format)
}
