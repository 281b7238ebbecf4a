use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Log { action } => commands::log::handle(&action, ctx, flags).await,
        Commands::Animal { action } => commands::animal::handle(&action, ctx, flags).await,
        Commands::Calf { action } => commands::calf::handle(&action, ctx, flags).await,
        Commands::Pen { action } => commands::pen::handle(&action, ctx, flags).await,
        Commands::Owner { action } => commands::owner::handle(&action, ctx, flags).await,
        Commands::User { action } => commands::user::handle(&action, ctx, flags).await,
    }
}
