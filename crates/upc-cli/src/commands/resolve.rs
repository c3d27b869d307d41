use anyhow::Context;
use upc_core::responses::ResolveResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ResolveArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `upc resolve <entry>`.
pub fn handle(args: &ResolveArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let entry = ctx
        .index
        .find(&args.entry)
        .with_context(|| format!("no index entry matches '{}'", args.entry))?
        .clone();
    let exists = ctx.collection()?.resolve(&entry);

    output(&ResolveResponse { entry, exists }, flags.format)
}
