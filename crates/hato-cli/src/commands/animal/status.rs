use hato_core::enums::AnimalStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    ear_tag: &str,
    status: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = parse_enum::<AnimalStatus>(status, "status")?;
    let animal = ctx.service.update_animal_status(ear_tag, status).await?;
    output(&animal, flags.format)
}
