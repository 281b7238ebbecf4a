use hato_db::repos::bitacora::LogQuery;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_date;
use crate::context::AppContext;
use crate::output::output;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    from: Option<&str>,
    to: Option<&str>,
    module: Option<&str>,
    actor: Option<&str>,
    tag: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = LogQuery {
        from: from.map(|raw| parse_date(raw, "from")).transpose()?,
        to: to.map(|raw| parse_date(raw, "to")).transpose()?,
        module: module.map(str::to_string),
        actor: actor.map(str::to_string),
        ear_tag: tag.map(str::to_string),
        limit: Some(effective_limit(
            limit,
            flags.limit,
            ctx.config.general.default_limit,
        )),
    };

    let entries = ctx.service.query_log(&filter).await?;
    output(&entries, flags.format)
}
