mod birth;
mod get;
mod list;
mod register;
mod remove;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CalfCommands;
use crate::context::AppContext;

/// Handle `hato calf`.
pub async fn handle(
    action: &CalfCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CalfCommands::Register {
            ear_tag,
            dam,
            breeding_date,
            sex,
        } => register::run(ear_tag, dam, breeding_date, sex.as_deref(), ctx, flags).await,
        CalfCommands::List { dam, limit } => list::run(dam.as_deref(), *limit, ctx, flags).await,
        CalfCommands::Get { ear_tag } => get::run(ear_tag, ctx, flags).await,
        CalfCommands::Birth {
            ear_tag,
            date,
            weight,
            sex,
        } => birth::run(ear_tag, date, *weight, sex.as_deref(), ctx, flags).await,
        CalfCommands::Remove { ear_tag } => remove::run(ear_tag, ctx, flags).await,
    }
}
