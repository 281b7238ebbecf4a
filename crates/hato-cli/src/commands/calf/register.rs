use hato_core::entities::NewCalf;
use hato_core::enums::Sex;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    ear_tag: &str,
    dam: &str,
    breeding_date: &str,
    sex: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let breeding_date = parse_date(breeding_date, "breeding-date")?;
    let mut new = NewCalf::new(ear_tag, dam, breeding_date);
    if let Some(raw) = sex {
        new = new.with_sex(parse_enum::<Sex>(raw, "sex")?);
    }

    let calf = ctx.service.register_calf(new).await?;
    output(&calf, flags.format)
}
