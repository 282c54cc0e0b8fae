use std::path::Path;

use pact_core::enums::Pool;

use crate::cli::GlobalFlags;
use crate::commands::shared::input::read_object;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    pool: &str,
    json: Option<&str>,
    file: Option<&Path>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let pool: Pool = parse_enum(pool, "pool")?;
    let data = read_object(json, file)?;
    let result = ctx.store.add_partner(data, pool).await?;
    output(&result, flags.format)
}
