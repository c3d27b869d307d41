use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `upc` binary.
#[derive(Debug, Parser)]
#[command(name = "upc", version, about = "Urban point-cloud notebook index")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Notebook directory (overrides notebooks.root)
    #[arg(short, long, global = true)]
    pub root: Option<String>,

    /// Index document (overrides notebooks.root/notebooks.index_file)
    #[arg(short, long, global = true)]
    pub index: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            root: self.root.clone(),
            index: self.index.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["upc", "--format", "table", "--root", "nb", "list"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.root.as_deref(), Some("nb"));
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["upc", "audit", "--strict", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Audit(ref args) if args.strict));
    }

    #[test]
    fn resolve_takes_positional_entry() {
        let cli = Cli::try_parse_from(["upc", "resolve", "Data fusion"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Resolve(ref args) if args.entry == "Data fusion"));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["upc", "--format", "xml", "list"]);
        assert!(parsed.is_err());
    }
}
