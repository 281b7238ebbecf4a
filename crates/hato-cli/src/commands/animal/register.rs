use hato_core::entities::NewAnimal;
use hato_core::enums::Sex;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    ear_tag: &str,
    sex: &str,
    name: Option<&str>,
    breed: Option<&str>,
    birth_date: Option<&str>,
    owner: Option<i64>,
    pen: Option<i64>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let sex = parse_enum::<Sex>(sex, "sex")?;
    let mut new = NewAnimal::new(ear_tag, sex);
    if let Some(name) = name {
        new = new.with_name(name);
    }
    if let Some(breed) = breed {
        new = new.with_breed(breed);
    }
    if let Some(raw) = birth_date {
        new = new.with_birth_date(parse_date(raw, "birth-date")?);
    }
    if let Some(owner_id) = owner {
        new = new.with_owner(owner_id);
    }
    if let Some(pen_id) = pen {
        new = new.with_pen(pen_id);
    }

    let animal = ctx.service.register_animal(new).await?;
    output(&animal, flags.format)
}
