mod add;
mod get;
mod list;
mod remove;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::OwnerCommands;
use crate::context::AppContext;

/// Handle `hato owner`.
pub async fn handle(
    action: &OwnerCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        OwnerCommands::Add { name, phone } => add::run(name, phone.as_deref(), ctx, flags).await,
        OwnerCommands::List { limit } => list::run(*limit, ctx, flags).await,
        OwnerCommands::Get { id } => get::run(*id, ctx, flags).await,
        OwnerCommands::Update { id, name, phone } => {
            update::run(*id, name.as_deref(), phone.as_deref(), ctx, flags).await
        }
        OwnerCommands::Remove { id } => remove::run(*id, ctx, flags).await,
    }
}
