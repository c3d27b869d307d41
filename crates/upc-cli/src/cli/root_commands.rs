use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List notebook entries in reading order.
    List,
    /// Check every entry's link against the notebook directory.
    Audit(AuditArgs),
    /// Show one entry and whether its notebook exists.
    Resolve(ResolveArgs),
    /// Print the index as markdown.
    Render(RenderArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AuditArgs {
    /// Fail when any link is broken.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ResolveArgs {
    /// Entry title (case-insensitive) or relative path.
    pub entry: String,
}

#[derive(Clone, Debug, Args)]
pub struct RenderArgs {
    /// Heading for the rendered document (defaults to the index heading).
    #[arg(long)]
    pub heading: Option<String>,
}
