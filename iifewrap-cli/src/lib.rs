//! iifewrap CLI

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use iifewrap_core::config::{Manifest, TransformJob};
use iifewrap_core::output::{write_json_pretty, write_ndjson};
use iifewrap_core::preset::browser_iife;
use iifewrap_core::transform::{run_jobs, transform, TransformReport};

/// CLI entrypoint for iifewrap.
#[derive(Debug, Parser)]
#[command(
    name = "iifewrap",
    about = "Rewrite module-formatted JS bundles into legacy browser-global scripts"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Trim a line window and wrap it in explicit header/footer lines
    Apply(ApplyArgs),
    /// Trim a line window and wrap it in the browser-global IIFE preset
    Iife(IifeArgs),
    /// Run every job in a JSON manifest
    Batch(BatchArgs),
}

#[derive(Debug, Args)]
struct IoArgs {
    /// Module-formatted input file
    #[arg(short = 'i', long = "input", value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Destination for the rewritten script
    #[arg(short = 'o', long = "output", value_hint = ValueHint::FilePath)]
    output: PathBuf,

    /// Lines to drop from the top of the input
    #[arg(long = "top", value_name = "N", default_value_t = 0)]
    top_trim: usize,

    /// Lines to drop from the bottom of the input
    #[arg(long = "bottom", value_name = "N", default_value_t = 0)]
    bottom_trim: usize,
}

#[derive(Debug, Args)]
struct ApplyArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Header line to prepend (repeatable, joined with newlines)
    #[arg(long = "header", value_name = "LINE")]
    header: Vec<String>,

    /// Footer line to append (repeatable, joined with newlines)
    #[arg(long = "footer", value_name = "LINE")]
    footer: Vec<String>,

    /// Emit the transform report as JSON instead of a notice
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

#[derive(Debug, Args)]
struct IifeArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Deprecation banner the wrapped script emits via console.warn
    #[arg(long = "banner", value_name = "TEXT")]
    banner: Option<String>,

    /// Emit the transform report as JSON instead of a notice
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

#[derive(Debug, Args)]
struct BatchArgs {
    /// JSON manifest listing the jobs to run
    #[arg(short = 'm', long = "manifest", value_hint = ValueHint::FilePath)]
    manifest: PathBuf,

    /// Emit a single JSON array of reports
    #[arg(long = "json", action = ArgAction::SetTrue, conflicts_with = "ndjson")]
    json: bool,

    /// Emit newline-delimited JSON reports
    #[arg(long = "ndjson", action = ArgAction::SetTrue)]
    ndjson: bool,
}

impl IoArgs {
    fn into_job(self) -> TransformJob {
        TransformJob::new(self.input, self.output).with_trim(self.top_trim, self.bottom_trim)
    }
}

/// Parse CLI args and execute the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Apply(args) => {
            let job = args
                .io
                .into_job()
                .with_header(args.header)
                .with_footer(args.footer);
            run_single(&job, args.json)
        }
        Command::Iife(args) => {
            let preset = browser_iife(args.banner.as_deref());
            let job = args.io.into_job().with_preset(preset);
            run_single(&job, args.json)
        }
        Command::Batch(args) => run_batch(&args),
    }
}

fn run_single(job: &TransformJob, json: bool) -> Result<()> {
    let report = transform(job)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if json {
        write_json_pretty(std::slice::from_ref(&report), &mut handle)?;
    } else {
        write_notice(&report, &mut handle)?;
    }

    Ok(())
}

fn run_batch(args: &BatchArgs) -> Result<()> {
    let manifest = Manifest::load(&args.manifest)?;
    let outcomes = run_jobs(&manifest.jobs);

    let mut failed = 0usize;
    let mut reports: Vec<TransformReport> = Vec::new();

    for (job, outcome) in manifest.jobs.iter().zip(&outcomes) {
        match outcome {
            Ok(report) => reports.push(report.clone()),
            Err(err) => {
                failed += 1;
                eprintln!("error: {}: {err}", job.input.display());
            }
        }
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if args.ndjson {
        write_ndjson(&reports, &mut handle)?;
    } else if args.json {
        write_json_pretty(&reports, &mut handle)?;
    } else {
        for report in &reports {
            write_notice(report, &mut handle)?;
        }
    }

    if failed > 0 {
        return Err(anyhow!("{failed} of {} jobs failed", outcomes.len()));
    }

    Ok(())
}

fn write_notice(report: &TransformReport, mut w: impl Write) -> Result<()> {
    writeln!(
        w,
        "wrote {} ({} of {} lines kept)",
        report.output.display(),
        report.lines_kept,
        report.lines_read
    )?;
    Ok(())
}
