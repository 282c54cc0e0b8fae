use pact_core::enums::Pool;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::apply_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(pool: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let pool: Pool = parse_enum(pool, "pool")?;
    let partners = ctx.store.partners(pool).await?;
    output(&apply_limit(partners, flags.limit), flags.format)
}
