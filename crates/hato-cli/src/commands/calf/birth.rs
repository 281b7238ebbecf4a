use hato_core::enums::Sex;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    ear_tag: &str,
    date: &str,
    weight: Option<f64>,
    sex: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let birth_date = parse_date(date, "date")?;
    let sex = sex.map(|raw| parse_enum::<Sex>(raw, "sex")).transpose()?;

    let calf = ctx
        .service
        .record_birth(ear_tag, birth_date, weight, sex)
        .await?;
    output(&calf, flags.format)
}
