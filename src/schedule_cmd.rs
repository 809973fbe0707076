//! Schedule command: calendar window of every stage of one crop.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use serde::Serialize;
use tracing::{info, info_span};

use cropwatch_calendar::CalendarDate;
use cropwatch_stages::{CropCatalog, StageWindow, schedule};

use crate::cli::{OutputFormat, ScheduleArgs};
use crate::prompt::Prompter;
use crate::render;
use crate::status_cmd::parse_date;

#[derive(Serialize)]
struct ScheduleJson<'a> {
    crop: &'a str,
    sown: CalendarDate,
    total_days: i64,
    stages: &'a [StageWindow],
}

/// Run the schedule listing against stdin/stdout.
pub fn run(args: ScheduleArgs, catalog: &CropCatalog) -> Result<()> {
    let _cmd = info_span!("schedule").entered();
    let stdin = io::stdin();
    let stdout = io::stdout();
    execute(&args, catalog, stdin.lock(), stdout.lock())
}

fn execute<R: BufRead, W: Write>(
    args: &ScheduleArgs,
    catalog: &CropCatalog,
    input: R,
    mut output: W,
) -> Result<()> {
    let mut prompter = Prompter::new(input, &mut output);
    let crop = prompter.crop(&args.select, catalog)?;
    let sown_text = prompter.sowing_date(args.sown.as_deref())?;
    let sown = parse_date(&sown_text, "sowing")?;

    let rows = schedule(crop.profile(), sown);
    info!(crop = crop.name(), %sown, n_stages = rows.len(), "built stage schedule");

    match args.format {
        OutputFormat::Text => write!(output, "{}", render::schedule(crop.name(), &rows))?,
        OutputFormat::Json => {
            let doc = ScheduleJson {
                crop: crop.name(),
                sown,
                total_days: crop.profile().total_duration(),
                stages: &rows,
            };
            writeln!(output, "{}", serde_json::to_string_pretty(&doc)?)?
        }
    }
    Ok(())
}
