use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use gridpak::constants::{MIN_VIEWPORT_WIDTH, SNAP};
use gridpak::{BreakpointSet, GridSession, RawParams};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    author,
    about = "Design responsive grids: see which breakpoint is active at a viewport width",
    long_about = None,
    version = env!("GRIDPAK_VERSION")
)]
struct Cli {
    /// JSON file of breakpoint records to start from (default: built-in seed)
    #[clap(short, long, global = true, value_name = "FILE")]
    grids: Option<PathBuf>,

    /// Viewport widths snap to multiples of this many pixels (0 disables)
    #[clap(long, global = true, default_value_t = SNAP)]
    snap: u32,

    /// Smallest viewport width
    #[clap(long, global = true, default_value_t = MIN_VIEWPORT_WIDTH)]
    min_viewport_width: u32,

    #[clap(subcommand)]
    mode: Modes,
}

#[derive(Subcommand, Debug)]
enum Modes {
    /// Show the breakpoints and which one is active at a viewport width
    Show(ShowOpts),
    /// Print every breakpoint as a record
    Export(ExportOpts),
    /// Add a breakpoint, then print the records
    Add(AddOpts),
    /// Remove the breakpoint with the given min width, then print the records
    Remove(RemoveOpts),
    /// Validate a records file
    Check(CheckOpts),
}

#[derive(Args, Debug)]
struct ShowOpts {
    /// Viewport width in pixels
    #[clap(short, long, default_value_t = 960)]
    width: u32,
}

#[derive(Args, Debug)]
struct OutputOpts {
    /// Viewport width used for column widths
    #[clap(short, long, default_value_t = 960)]
    width: u32,

    /// Record format
    #[clap(short, long, default_value = "json")]
    format: RecordFormat,

    /// Single-line JSON
    #[clap(long, action)]
    compact: bool,
}

#[derive(Args, Debug)]
struct ExportOpts {
    #[command(flatten)]
    output: OutputOpts,
}

#[derive(Args, Debug)]
struct AddOpts {
    /// Viewport width at which the breakpoint starts
    #[clap(long)]
    min_width: String,

    /// Number of columns (1-99)
    #[clap(long)]
    columns: Option<String>,

    /// Padding on each side of a column
    #[clap(long)]
    padding: Option<String>,

    /// Padding unit: px or %
    #[clap(long)]
    padding_unit: Option<String>,

    /// Gutter between columns
    #[clap(long)]
    gutter: Option<String>,

    /// Gutter unit: px or %
    #[clap(long)]
    gutter_unit: Option<String>,

    /// Baseline grid height
    #[clap(long)]
    baseline: Option<String>,

    #[command(flatten)]
    output: OutputOpts,
}

#[derive(Args, Debug)]
struct RemoveOpts {
    /// Min width of the breakpoint to remove
    #[clap(long)]
    min_width: u32,

    #[command(flatten)]
    output: OutputOpts,
}

#[derive(Args, Debug)]
struct CheckOpts {
    /// Records file to validate
    path: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum RecordFormat {
    #[default]
    Json,
    Csv,
}

fn load_grids(cli: &Cli) -> anyhow::Result<BreakpointSet> {
    match &cli.grids {
        Some(path) => BreakpointSet::from_json_file(path)
            .with_context(|| format!("Failed to load breakpoints from {}", path.display())),
        None => Ok(BreakpointSet::with_default_seed()?),
    }
}

fn open_session(cli: &Cli, width: u32) -> anyhow::Result<GridSession> {
    let grids = load_grids(cli)?;
    Ok(GridSession::with_limits(
        grids,
        width,
        cli.snap,
        cli.min_viewport_width,
    ))
}

fn print_records(session: &GridSession, opts: &OutputOpts) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match opts.format {
        RecordFormat::Json => {
            session.grids().write_json(&mut out, !opts.compact)?;
            writeln!(out)?;
        }
        RecordFormat::Csv => session.grids().write_csv(&mut out)?,
    }
    Ok(())
}

fn show(session: &GridSession) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "viewport {}px", session.viewport_width())?;
    for breakpoint in session.grids() {
        let upper = breakpoint
            .upper_bound()
            .map(|upper| upper.to_string())
            .unwrap_or_default();
        let marker = if breakpoint.is_current() { "*" } else { " " };
        write!(
            out,
            "{} {:>6} {:>6}..{:<6} {:>2} cols  gutter {}{}  padding {}{}",
            marker,
            breakpoint.min_width(),
            breakpoint.lower_bound(),
            upper,
            breakpoint.column_count(),
            breakpoint.gutter_width(),
            breakpoint.gutter_unit(),
            breakpoint.column_padding_width(),
            breakpoint.column_padding_unit(),
        )?;
        if breakpoint.is_current() {
            write!(out, "  column width {}px", breakpoint.column_width())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn entrypoint() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();
    match &cli.mode {
        Modes::Show(opts) => {
            let session = open_session(&cli, opts.width)?;
            show(&session)?;
        }
        Modes::Export(opts) => {
            let session = open_session(&cli, opts.output.width)?;
            print_records(&session, &opts.output)?;
        }
        Modes::Add(opts) => {
            let mut session = open_session(&cli, opts.output.width)?;
            let raw = RawParams {
                min_width: Some(opts.min_width.clone()),
                column_count: opts.columns.clone(),
                column_padding_width: opts.padding.clone(),
                column_padding_unit: opts.padding_unit.clone(),
                gutter_width: opts.gutter.clone(),
                gutter_unit: opts.gutter_unit.clone(),
                baseline_height: opts.baseline.clone(),
            };
            session.create_grid(&raw)?;
            print_records(&session, &opts.output)?;
        }
        Modes::Remove(opts) => {
            let mut session = open_session(&cli, opts.output.width)?;
            let position = session
                .grids()
                .position_of(opts.min_width)
                .with_context(|| format!("No breakpoint with min width {}", opts.min_width))?;
            session.remove(position)?;
            print_records(&session, &opts.output)?;
        }
        Modes::Check(opts) => {
            let grids = BreakpointSet::from_json_file(&opts.path)
                .with_context(|| format!("Invalid breakpoints in {}", opts.path.display()))?;
            println!("OK: {} breakpoints", grids.len());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    match entrypoint() {
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
    }
}
