use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ear_tag: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.service.remove_animal(ear_tag).await?;
    output(&json!({"removed": true, "ear_tag": ear_tag}), flags.format)
}
