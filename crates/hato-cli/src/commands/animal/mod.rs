mod get;
mod list;
mod register;
mod relocate;
mod remove;
mod status;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AnimalCommands;
use crate::context::AppContext;

/// Handle `hato animal`.
pub async fn handle(
    action: &AnimalCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AnimalCommands::Register {
            ear_tag,
            sex,
            name,
            breed,
            birth_date,
            owner,
            pen,
        } => {
            register::run(
                ear_tag,
                sex,
                name.as_deref(),
                breed.as_deref(),
                birth_date.as_deref(),
                *owner,
                *pen,
                ctx,
                flags,
            )
            .await
        }
        AnimalCommands::List { status, limit } => {
            list::run(status.as_deref(), *limit, ctx, flags).await
        }
        AnimalCommands::Get { ear_tag } => get::run(ear_tag, ctx, flags).await,
        AnimalCommands::Move { ear_tag, pen } => relocate::run(ear_tag, *pen, ctx, flags).await,
        AnimalCommands::Status { ear_tag, status } => {
            status::run(ear_tag, status, ctx, flags).await
        }
        AnimalCommands::Remove { ear_tag } => remove::run(ear_tag, ctx, flags).await,
    }
}
