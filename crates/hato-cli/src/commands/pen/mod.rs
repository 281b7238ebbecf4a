mod add;
mod get;
mod list;
mod remove;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PenCommands;
use crate::context::AppContext;

/// Handle `hato pen`.
pub async fn handle(
    action: &PenCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PenCommands::Add { name, capacity } => add::run(name, *capacity, ctx, flags).await,
        PenCommands::List { limit } => list::run(*limit, ctx, flags).await,
        PenCommands::Get { id } => get::run(*id, ctx, flags).await,
        PenCommands::Remove { id } => remove::run(*id, ctx, flags).await,
    }
}
