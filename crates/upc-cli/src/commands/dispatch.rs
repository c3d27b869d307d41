use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::List => commands::list::handle(ctx, flags),
        Commands::Audit(args) => commands::audit::handle(&args, ctx, flags).await,
        Commands::Resolve(args) => commands::resolve::handle(&args, ctx, flags),
        Commands::Render(args) => commands::render::handle(&args, ctx),
    }
}
