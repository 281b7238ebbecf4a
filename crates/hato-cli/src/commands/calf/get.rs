use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ear_tag: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let calf = ctx.service.get_calf(ear_tag).await?;
    output(&calf, flags.format)
}
