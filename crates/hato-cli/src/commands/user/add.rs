use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    login: &str,
    name: Option<&str>,
    role: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = ctx.service.add_user(login, name, role).await?;
    output(&user, flags.format)
}
