use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ear_tag: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let animal = ctx.service.get_animal(ear_tag).await?;
    output(&animal, flags.format)
}
