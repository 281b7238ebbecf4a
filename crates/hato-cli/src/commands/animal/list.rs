use hato_core::enums::AnimalStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    status: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = status
        .map(|raw| parse_enum::<AnimalStatus>(raw, "status"))
        .transpose()?;
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);

    let animals = ctx.service.list_animals(status, limit).await?;
    output(&animals, flags.format)
}
