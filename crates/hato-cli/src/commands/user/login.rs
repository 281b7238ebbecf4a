use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// `hato user login` — verifies the login and records the event in the
/// logbook. This is the only path that writes a `LOGIN` entry; the
/// `--user` flag resolves identity without recording one.
pub async fn run(login: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.service.login(login).await?;
    output(&session, flags.format)
}
