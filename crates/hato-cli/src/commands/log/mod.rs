mod query;
mod report;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LogCommands;
use crate::context::AppContext;

/// Handle `hato log`.
pub async fn handle(
    action: &LogCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        LogCommands::Query {
            from,
            to,
            module,
            actor,
            tag,
            limit,
        } => {
            query::run(
                from.as_deref(),
                to.as_deref(),
                module.as_deref(),
                actor.as_deref(),
                tag.as_deref(),
                *limit,
                ctx,
                flags,
            )
            .await
        }
        LogCommands::Report { from, to, out } => {
            report::run(from, to, out.as_deref(), ctx, flags).await
        }
    }
}
