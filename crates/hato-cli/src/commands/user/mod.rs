mod add;
mod deactivate;
mod list;
mod login;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::context::AppContext;

/// Handle `hato user`.
pub async fn handle(
    action: &UserCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UserCommands::Add { login, name, role } => {
            add::run(login, name.as_deref(), role.as_deref(), ctx, flags).await
        }
        UserCommands::List { limit } => list::run(*limit, ctx, flags).await,
        UserCommands::Deactivate { login } => deactivate::run(login, ctx, flags).await,
        UserCommands::Login { login } => login::run(login, ctx, flags).await,
    }
}
