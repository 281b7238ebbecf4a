use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// `hato animal move` — into a pen, or out to pasture when no pen is
/// given.
pub async fn run(
    ear_tag: &str,
    pen: Option<i64>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let animal = ctx.service.move_animal(ear_tag, pen).await?;
    output(&animal, flags.format)
}
