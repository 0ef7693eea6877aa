use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use leeway_rules::{
    backend_profile, frontend_profile, AuditProfile, CommandProbe, EngineConfig, Finding, Report,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Root of the tree under audit
    pub root: PathBuf,

    /// Write the report here instead of <ROOT>/run/<report>.json
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Run rules on the rayon thread pool
    #[arg(long)]
    pub parallel: bool,

    /// Print a per-section summary to the console
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run_backend(args: &AuditArgs) -> Result<()> {
    let profile = backend_profile(Arc::new(CommandProbe))?;
    run(args, profile)
}

pub fn run_frontend(args: &AuditArgs) -> Result<()> {
    run(args, frontend_profile()?)
}

fn run(args: &AuditArgs, profile: AuditProfile) -> Result<()> {
    let label = profile.label;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| profile.report_path(&args.root));

    let engine = profile.engine(EngineConfig {
        parallel_execution: args.parallel,
    });

    // A nonexistent root is not an error: the rules report everything
    // missing and the report is still written next to where the tree
    // should be.
    let report = engine.run(&args.root);

    if args.verbose {
        println!("{} {} audit of {}", "Ran".bold(), label, args.root.display());
        print_summary(&report);
    }

    report
        .write_to(&output)
        .with_context(|| format!("could not write the {label} audit report"))?;

    println!("Wrote {}", output.display().to_string().green());
    Ok(())
}

fn print_summary(report: &Report) {
    for (key, finding) in report.sections() {
        let status = match finding {
            Finding::Flag(true) => "available".green().to_string(),
            Finding::Flag(false) => "unavailable".red().to_string(),
            Finding::Paths(paths) => describe_count(paths.len(), "violating file"),
            Finding::Presence(entries) => {
                let missing = entries.iter().filter(|(_, present)| !present).count();
                describe_count(missing, "missing entry")
            }
            Finding::Inventory { present, flags } => {
                let set = flags.iter().filter(|(_, on)| *on).count();
                format!("{} name(s), {}/{} flags set", present.len(), set, flags.len())
            }
            Finding::Groups(groups) => {
                let missing = groups
                    .iter()
                    .flat_map(|(_, files)| files)
                    .filter(|(_, present)| !present)
                    .count();
                describe_count(missing, "missing file")
            }
            Finding::Partition { missing, .. } => describe_count(missing.len(), "missing dependency"),
            Finding::Duplicates(files) => describe_count(files.len(), "file with duplicates"),
        };
        println!("  {key}: {status}");
    }
}

fn describe_count(count: usize, what: &str) -> String {
    if count == 0 {
        "clean".green().to_string()
    } else {
        format!("{count} {what}(s)").red().to_string()
    }
}
