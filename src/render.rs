//! Text rendering of menus, reports and timetables.

use std::fmt::Write;

use cropwatch_calendar::ShortDate;
use cropwatch_stages::{CropCatalog, CropReport, StageResolution, StageWindow};

/// Width of the progress bar in characters.
pub const BAR_WIDTH: usize = 50;

pub const FUTURE_SOWING_NOTICE: &str =
    "Information: The sowing date is in the future. Cannot track growth yet.";

/// Renders `[####----]` with `percent / 2` filled cells out of [`BAR_WIDTH`].
pub fn progress_bar(percent: u8) -> String {
    let filled = (usize::from(percent) / 2).min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Numbered crop menu, one `N. Name` line per crop.
pub fn crop_menu(catalog: &CropCatalog) -> String {
    let mut out = String::new();
    for (i, crop) in catalog.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, crop.name());
    }
    out
}

/// Crop menu with stage counts and cycle lengths.
pub fn crop_table(catalog: &CropCatalog) -> String {
    let width = catalog.iter().map(|c| c.name().len()).max().unwrap_or(0);
    let mut out = String::new();
    for (i, crop) in catalog.iter().enumerate() {
        let profile = crop.profile();
        let _ = writeln!(
            out,
            "{:>2}. {:<width$}  {} stages, {} days",
            i + 1,
            crop.name(),
            profile.len(),
            profile.total_duration(),
        );
    }
    out
}

/// The status block for one tracking report.
pub fn status(report: &CropReport) -> String {
    let mut out = String::new();
    let (label, percent) = match &report.resolution {
        StageResolution::FutureSowing => {
            let _ = writeln!(out, "{FUTURE_SOWING_NOTICE}");
            return out;
        }
        other => (other.label().unwrap_or_default(), other.progress_percent().unwrap_or(100)),
    };

    let _ = writeln!(out, "\n--- Current Status ---");
    let _ = writeln!(out, "'{}' was sown {} days ago.", report.crop, report.elapsed_days);
    let _ = writeln!(out, "Current Stage: {label}");
    if let Some(range) = report.stage_dates {
        let _ = writeln!(out, "(From {} to {})", ShortDate(range.start), ShortDate(range.end));
    }
    let _ = writeln!(out, "\nOverall Progress: {percent}%");
    let _ = writeln!(out, "{}", progress_bar(percent));
    out
}

/// Stage timetable for one crop.
pub fn schedule(crop: &str, rows: &[StageWindow]) -> String {
    let width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    let _ = writeln!(out, "--- {crop} Schedule ---");
    for row in rows {
        let _ = writeln!(
            out,
            "{}. {:<width$}  {} - {}  (days {}-{}, {} days)",
            row.index + 1,
            row.name,
            ShortDate(row.dates.start),
            ShortDate(row.dates.end),
            row.start_day,
            row.end_day,
            row.duration_days,
        );
    }
    out
}
