use anyhow::ensure;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: i64,
    name: Option<&str>,
    phone: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ensure!(
        name.is_some() || phone.is_some(),
        "nothing to update: pass --name and/or --phone"
    );

    let owner = ctx.service.update_owner(id, name, phone).await?;
    output(&owner, flags.format)
}
