use hato_core::entities::PenOccupancy;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let pen = ctx.service.get_pen(id).await?;
    let occupancy = ctx.service.pen_occupancy(id).await?;
    output(&PenOccupancy { pen, occupancy }, flags.format)
}
