//! Status command: current growth stage and overall progress of one crop.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use cropwatch_calendar::CalendarDate;
use cropwatch_stages::{CropCatalog, StageResolution, track};

use crate::cli::{OutputFormat, StatusArgs};
use crate::prompt::Prompter;
use crate::render;

/// Run the status report against stdin/stdout.
pub fn run(args: StatusArgs, catalog: &CropCatalog) -> Result<()> {
    let _cmd = info_span!("status").entered();
    let stdin = io::stdin();
    let stdout = io::stdout();
    execute(&args, catalog, stdin.lock(), stdout.lock())
}

/// Parses a user-supplied date, naming which date was wrong.
pub fn parse_date(text: &str, what: &str) -> Result<CalendarDate> {
    CalendarDate::parse(text).with_context(|| format!("invalid {what} date"))
}

fn execute<R: BufRead, W: Write>(
    args: &StatusArgs,
    catalog: &CropCatalog,
    input: R,
    mut output: W,
) -> Result<()> {
    let today = match &args.today {
        Some(text) => parse_date(text, "reference")?,
        None => CalendarDate::today(),
    };

    let mut prompter = Prompter::new(input, &mut output);
    let crop = prompter.crop(&args.select, catalog)?;
    let sown_text = prompter.sowing_date(args.sown.as_deref())?;
    let sown = parse_date(&sown_text, "sowing")?;
    info!(crop = crop.name(), %sown, %today, "tracking crop");

    let report = track(crop.name(), crop.profile(), sown, today);
    if report.resolution == StageResolution::FutureSowing {
        info!(elapsed_days = report.elapsed_days, "sowing date is in the future");
    }

    match args.format {
        OutputFormat::Text => write!(output, "{}", render::status(&report))?,
        OutputFormat::Json => writeln!(output, "{}", serde_json::to_string_pretty(&report)?)?,
    }
    Ok(())
}
