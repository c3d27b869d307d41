use crate::cli::root_commands::RenderArgs;
use crate::context::AppContext;

/// Handle `upc render`. Markdown goes to stdout regardless of `--format`.
pub fn handle(args: &RenderArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let heading = args.heading.as_deref().unwrap_or(&ctx.heading);
    print!("{}", ctx.index.to_markdown(heading));
    Ok(())
}
