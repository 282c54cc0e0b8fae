use pact_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `pact schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    match args.type_name.as_deref() {
        None => output(&registry.list(), flags.format),
        Some(name) => {
            let schema = registry.get(name).ok_or_else(|| {
                anyhow::anyhow!("unknown schema '{name}'; run `pact schema` to list names")
            })?;
            output(schema, flags.format)
        }
    }
}
