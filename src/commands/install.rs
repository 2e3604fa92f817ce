//! Install command implementation
//!
//! Installs the SledgeMC profile for one Minecraft version and prints the
//! outcome of every install step.

use console::Style;

use crate::cli::InstallArgs;
use crate::commands::helpers::Context;
use crate::error::Result;
use crate::profile::{InstallOptions, InstallReport, ProfileInstaller, StepOutcome};
use crate::sink::LogSink;

/// Run install command
pub fn run(mut context: Context, args: InstallArgs) -> Result<()> {
    let version = args
        .version
        .unwrap_or_else(|| context.config.last_version.clone());
    let install_dir = args
        .dir
        .unwrap_or_else(|| context.config.install_dir.clone());

    let cache = context.asset_cache()?;
    let report = ProfileInstaller::new(&cache)
        .with_options(InstallOptions {
            strict: args.strict,
        })
        .install(&install_dir, &version, &LogSink::stdout())?;

    print_report(&report);

    context.config.last_version = version;
    context.config.install_dir = install_dir;
    context.save_config();

    Ok(())
}

fn print_report(report: &InstallReport) {
    let ok = Style::new().green().bold();
    let failed = Style::new().red().bold();

    println!();
    println!(
        "{} {}",
        Style::new().bold().apply_to("Profile:"),
        report.profile_name
    );
    for (step, outcome) in report.steps() {
        match outcome {
            StepOutcome::Done => println!("  {} {step}", ok.apply_to("✓")),
            StepOutcome::Failed { reason } => {
                println!("  {} {step}: {reason}", failed.apply_to("✗"));
            }
        }
    }

    if report.is_complete() {
        println!("\nInstalled {}.", report.profile_name);
    } else {
        println!(
            "\nInstalled {} with {} failed step(s).",
            report.profile_name,
            report.failures().count()
        );
    }
}
