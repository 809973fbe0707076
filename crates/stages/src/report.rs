//! Dated tracking reports built on top of stage resolution.

use serde::Serialize;
use tracing::debug;

use cropwatch_calendar::{CalendarDate, add_days, days_between};

use crate::profile::GrowthProfile;
use crate::resolve::{StageResolution, resolve};

/// Inclusive calendar range of a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    /// First calendar day of the stage.
    pub start: CalendarDate,
    /// Last calendar day of the stage.
    pub end: CalendarDate,
}

impl DateRange {
    fn from_offsets(sown: CalendarDate, start_day: i64, end_day: i64) -> Self {
        Self {
            start: add_days(sown, start_day),
            end: add_days(sown, end_day),
        }
    }
}

/// Where a crop sown on `sown` stands on `today`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CropReport {
    /// Crop name.
    pub crop: String,
    /// Sowing date.
    pub sown: CalendarDate,
    /// Reference date the report was computed for.
    pub today: CalendarDate,
    /// Whole days from sowing to the reference date (negative if sowing is
    /// still ahead).
    pub elapsed_days: i64,
    /// Full cycle length of the crop in days.
    pub total_days: i64,
    /// Stage resolution for `elapsed_days`.
    pub resolution: StageResolution,
    /// Calendar range of the active stage, if one is active.
    pub stage_dates: Option<DateRange>,
    /// Overall progress, absent for a future sowing.
    pub progress_percent: Option<u8>,
}

/// One row of a crop's full stage timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageWindow {
    /// 0-based stage position.
    pub index: usize,
    /// Stage name.
    pub name: String,
    /// Length of the stage in days.
    pub duration_days: u32,
    /// First day offset from sowing.
    pub start_day: i64,
    /// Last day offset from sowing (inclusive).
    pub end_day: i64,
    /// Calendar range of the stage.
    pub dates: DateRange,
}

/// Resolves the growth stage of `crop` sown on `sown` as of `today`.
pub fn track(
    crop: &str,
    profile: &GrowthProfile,
    sown: CalendarDate,
    today: CalendarDate,
) -> CropReport {
    let elapsed_days = days_between(sown, today);
    let resolution = resolve(profile, elapsed_days);
    let stage_dates = resolution
        .active()
        .map(|a| DateRange::from_offsets(sown, a.start_day, a.end_day));
    let progress_percent = resolution.progress_percent();

    debug!(
        crop,
        %sown,
        %today,
        elapsed_days,
        stage = resolution.label().unwrap_or("-"),
        "resolved growth stage"
    );

    CropReport {
        crop: crop.to_string(),
        sown,
        today,
        elapsed_days,
        total_days: profile.total_duration(),
        resolution,
        stage_dates,
        progress_percent,
    }
}

/// Lays out every stage of `profile` on the calendar starting at `sown`.
pub fn schedule(profile: &GrowthProfile, sown: CalendarDate) -> Vec<StageWindow> {
    profile
        .windows()
        .map(|span| StageWindow {
            index: span.index,
            name: span.stage.name().to_string(),
            duration_days: span.stage.duration_days(),
            start_day: span.start_day,
            end_day: span.end_day,
            dates: DateRange::from_offsets(sown, span.start_day, span.end_day),
        })
        .collect()
}
