use std::io::Write;

use anyhow::Context;
use upc_core::responses::AuditResponse;

use crate::cli::root_commands::AuditArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::render;

/// Handle `upc audit`.
pub async fn handle(args: &AuditArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let collection = ctx.collection()?;
    let report = tokio::task::spawn_blocking(move || collection.audit())
        .await
        .context("audit task failed")?;

    let response = AuditResponse {
        source: ctx.source.describe(),
        root: ctx.root.display().to_string(),
        clean: report.is_clean(),
        report,
    };
    report_then_verdict(&response, args.strict, flags.format, &mut std::io::stdout().lock())
}

/// Write the report, then fail if `strict` and any link is broken.
///
/// The report is always written in full before the verdict.
fn report_then_verdict(
    response: &AuditResponse,
    strict: bool,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    writeln!(out, "{}", render(response, format)?)?;
    out.flush()?;

    let broken = response.report.broken.len();
    if strict && broken > 0 {
        anyhow::bail!("{broken} broken notebook link(s)");
    }
    Ok(())
}
