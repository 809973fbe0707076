//! Mapping an elapsed day count onto the active growth stage.

use serde::Serialize;
use tracing::trace;

use crate::error::{ProfileDefect, StageError};
use crate::profile::{GrowthProfile, StageWindows, total_of};
use crate::stage::StageDefinition;

/// Display name of the terminal state reached once the whole cycle has
/// elapsed.
pub const COMPLETE_LABEL: &str = "Harvest Ready / Cycle Complete";

/// The stage in progress on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveStage {
    /// 0-based position of the stage in its profile.
    pub index: usize,
    /// Stage name.
    pub name: String,
    /// First day offset from sowing covered by the stage.
    pub start_day: i64,
    /// Last day offset from sowing covered by the stage (inclusive).
    pub end_day: i64,
    /// Whole-cycle progress, truncated to an integer percentage.
    pub progress_percent: u8,
}

/// Outcome of resolving an elapsed day count against a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StageResolution {
    /// A stage is in progress.
    Active(ActiveStage),
    /// Elapsed days reached or passed the end of the cycle.
    Complete,
    /// The sowing date lies after the reference date; nothing to resolve.
    FutureSowing,
}

impl StageResolution {
    /// Returns the overall progress, or `None` for a future sowing.
    pub fn progress_percent(&self) -> Option<u8> {
        match self {
            Self::Active(active) => Some(active.progress_percent),
            Self::Complete => Some(100),
            Self::FutureSowing => None,
        }
    }

    /// Returns the active stage, if any.
    pub fn active(&self) -> Option<&ActiveStage> {
        match self {
            Self::Active(active) => Some(active),
            _ => None,
        }
    }

    /// Returns the stage name to display, or `None` for a future sowing.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Active(active) => Some(&active.name),
            Self::Complete => Some(COMPLETE_LABEL),
            Self::FutureSowing => None,
        }
    }
}

/// Resolves `elapsed_days` against a validated profile.
///
/// Negative elapsed days short-circuit to [`StageResolution::FutureSowing`]
/// without looking at the stages. Otherwise the first stage whose range
/// `[start_day, end_day]` contains `elapsed_days` is active; a day equal to
/// a stage's `start_day + duration` belongs to the next stage. Past the last
/// stage the cycle is [`StageResolution::Complete`].
pub fn resolve(profile: &GrowthProfile, elapsed_days: i64) -> StageResolution {
    walk(profile.windows(), profile.total_duration(), elapsed_days)
}

/// Resolves `elapsed_days` against a raw, unvalidated stage slice.
///
/// Zero-length stages never become active.
///
/// # Errors
///
/// Returns [`StageError::InvalidProfile`] if `stages` is empty.
pub fn resolve_stages(
    stages: &[StageDefinition],
    elapsed_days: i64,
) -> Result<StageResolution, StageError> {
    if stages.is_empty() {
        return Err(StageError::InvalidProfile(ProfileDefect::Empty));
    }
    Ok(walk(
        StageWindows::new(stages),
        total_of(stages),
        elapsed_days,
    ))
}

/// Whole-cycle progress for `elapsed_days` out of `total_duration`.
///
/// Truncating integer percentage clamped to `[0, 100]`. A cycle of zero
/// length counts as finished.
pub fn progress_percent(elapsed_days: i64, total_duration: i64) -> u8 {
    if total_duration <= 0 || elapsed_days >= total_duration {
        return 100;
    }
    if elapsed_days <= 0 {
        return 0;
    }
    // elapsed < total here, so the quotient is below 100.
    (i128::from(elapsed_days) * 100 / i128::from(total_duration)) as u8
}

fn walk(windows: StageWindows<'_>, total_duration: i64, elapsed_days: i64) -> StageResolution {
    if elapsed_days < 0 {
        trace!(elapsed_days, "sowing date in the future");
        return StageResolution::FutureSowing;
    }

    let progress = progress_percent(elapsed_days, total_duration);
    for span in windows {
        if elapsed_days <= span.end_day {
            trace!(elapsed_days, stage = span.index, "active stage found");
            return StageResolution::Active(ActiveStage {
                index: span.index,
                name: span.stage.name().to_string(),
                start_day: span.start_day,
                end_day: span.end_day,
                progress_percent: progress,
            });
        }
    }
    StageResolution::Complete
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GrowthProfile {
        GrowthProfile::from_pairs([("A", 25), ("B", 30), ("C", 30), ("D", 15), ("E", 30)]).unwrap()
    }

    fn active(profile: &GrowthProfile, d: i64) -> ActiveStage {
        match resolve(profile, d) {
            StageResolution::Active(a) => a,
            other => panic!("day {d}: expected active stage, got {other:?}"),
        }
    }

    #[test]
    fn first_day_is_first_stage() {
        let a = active(&sample(), 0);
        assert_eq!((a.index, a.name.as_str(), a.start_day, a.end_day), (0, "A", 0, 24));
        assert_eq!(a.progress_percent, 0);
    }

    #[test]
    fn boundary_day_belongs_to_next_stage() {
        let a = active(&sample(), 25);
        assert_eq!(a.name, "B");
        assert_eq!((a.start_day, a.end_day), (25, 54));
        assert_eq!(a.progress_percent, 19);
    }

    #[test]
    fn last_day_of_cycle() {
        let a = active(&sample(), 129);
        assert_eq!(a.name, "E");
        assert_eq!((a.start_day, a.end_day), (100, 129));
        assert_eq!(a.progress_percent, 99);
    }

    #[test]
    fn total_duration_is_complete() {
        let r = resolve(&sample(), 130);
        assert_eq!(r, StageResolution::Complete);
        assert_eq!(r.progress_percent(), Some(100));
        assert_eq!(r.label(), Some(COMPLETE_LABEL));
    }

    #[test]
    fn far_past_is_complete() {
        assert_eq!(resolve(&sample(), i64::MAX), StageResolution::Complete);
    }

    #[test]
    fn negative_is_future_sowing() {
        let r = resolve(&sample(), -1);
        assert_eq!(r, StageResolution::FutureSowing);
        assert_eq!(r.progress_percent(), None);
        assert_eq!(r.label(), None);
        assert_eq!(resolve(&sample(), i64::MIN), StageResolution::FutureSowing);
    }

    #[test]
    fn raw_empty_slice_is_invalid() {
        assert_eq!(
            resolve_stages(&[], 3).unwrap_err(),
            StageError::InvalidProfile(ProfileDefect::Empty)
        );
    }

    #[test]
    fn raw_empty_slice_invalid_even_for_future() {
        assert!(resolve_stages(&[], -3).is_err());
    }

    #[test]
    fn raw_slice_negative_is_future_sowing() {
        let stages = [StageDefinition::new("A", 2), StageDefinition::new("B", 3)];
        for d in [-1, -30, i64::MIN] {
            assert_eq!(
                resolve_stages(&stages, d).unwrap(),
                StageResolution::FutureSowing,
                "day {d}"
            );
        }
    }

    #[test]
    fn raw_slice_skips_zero_length_stage() {
        let stages = [
            StageDefinition::new("A", 2),
            StageDefinition::new("skip", 0),
            StageDefinition::new("C", 2),
        ];
        let r = resolve_stages(&stages, 2).unwrap();
        let a = r.active().unwrap();
        assert_eq!((a.index, a.name.as_str(), a.start_day, a.end_day), (2, "C", 2, 3));
    }

    #[test]
    fn raw_all_zero_is_complete_at_100() {
        let stages = [StageDefinition::new("A", 0)];
        let r = resolve_stages(&stages, 0).unwrap();
        assert_eq!(r, StageResolution::Complete);
        assert_eq!(progress_percent(0, 0), 100);
    }

    #[test]
    fn progress_truncates() {
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(2, 3), 66);
        assert_eq!(progress_percent(129, 130), 99);
    }

    #[test]
    fn progress_clamps() {
        assert_eq!(progress_percent(-5, 130), 0);
        assert_eq!(progress_percent(500, 130), 100);
        assert_eq!(progress_percent(i64::MAX - 1, i64::MAX), 99);
    }

    #[test]
    fn serializes_with_status_tag() {
        let json = serde_json::to_value(resolve(&sample(), 25)).unwrap();
        assert_eq!(json["status"], "active");
        assert_eq!(json["name"], "B");
        assert_eq!(json["start_day"], 25);
        let json = serde_json::to_value(StageResolution::FutureSowing).unwrap();
        assert_eq!(json["status"], "future_sowing");
    }
}
