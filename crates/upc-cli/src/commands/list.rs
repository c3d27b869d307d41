use upc_core::responses::ListResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `upc list`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let entries = ctx.index.list_entries().to_vec();
    output(
        &ListResponse {
            source: ctx.source.describe(),
            count: entries.len(),
            entries,
        },
        flags.format,
    )
}
