//! Ordered stage sequences and their day-offset partition.

use crate::error::{ProfileDefect, StageError};
use crate::stage::StageDefinition;

/// The ordered, non-empty sequence of stages making up one crop's cycle.
///
/// Stage `i` covers the inclusive day range
/// `[sum(durations[..i]), sum(durations[..=i]) - 1]`, so consecutive
/// stages are contiguous and together cover `[0, total_duration - 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrowthProfile {
    stages: Vec<StageDefinition>,
    total_duration: i64,
}

impl GrowthProfile {
    /// Builds a profile from stages in growth order.
    ///
    /// # Errors
    ///
    /// Returns [`StageError::InvalidProfile`] if `stages` is empty, any stage
    /// has a zero duration, or any stage name is blank.
    pub fn new(stages: Vec<StageDefinition>) -> Result<Self, StageError> {
        if stages.is_empty() {
            return Err(StageError::InvalidProfile(ProfileDefect::Empty));
        }
        for (index, stage) in stages.iter().enumerate() {
            if stage.name().trim().is_empty() {
                return Err(StageError::InvalidProfile(ProfileDefect::BlankName {
                    index,
                }));
            }
            if stage.duration_days() == 0 {
                return Err(StageError::InvalidProfile(ProfileDefect::ZeroDuration {
                    stage: stage.name().to_string(),
                }));
            }
        }
        let total_duration = total_of(&stages);
        Ok(Self {
            stages,
            total_duration,
        })
    }

    /// Builds a profile from `(name, days)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`GrowthProfile::new`].
    pub fn from_pairs<S: Into<String>>(
        pairs: impl IntoIterator<Item = (S, u32)>,
    ) -> Result<Self, StageError> {
        Self::new(
            pairs
                .into_iter()
                .map(|(name, days)| StageDefinition::new(name, days))
                .collect(),
        )
    }

    /// Returns the stages in growth order.
    pub fn stages(&self) -> &[StageDefinition] {
        &self.stages
    }

    /// Returns the number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Always `false`; kept for API symmetry with [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Returns the full cycle length in days.
    pub fn total_duration(&self) -> i64 {
        self.total_duration
    }

    /// Iterates over each stage together with its day-offset range.
    pub fn windows(&self) -> StageWindows<'_> {
        StageWindows::new(&self.stages)
    }
}

/// A stage together with the inclusive day-offset range it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageSpan<'a> {
    /// 0-based position in the profile.
    pub index: usize,
    /// The stage itself.
    pub stage: &'a StageDefinition,
    /// First day offset from sowing covered by the stage.
    pub start_day: i64,
    /// Last day offset from sowing covered by the stage.
    pub end_day: i64,
}

impl StageSpan<'_> {
    /// Returns `true` if day offset `day` falls inside this stage.
    pub fn contains(&self, day: i64) -> bool {
        (self.start_day..=self.end_day).contains(&day)
    }
}

/// Iterator over [`StageSpan`]s, accumulating day offsets as it goes.
#[derive(Debug, Clone)]
pub struct StageWindows<'a> {
    stages: std::iter::Enumerate<std::slice::Iter<'a, StageDefinition>>,
    cumulative: i64,
}

impl<'a> StageWindows<'a> {
    pub(crate) fn new(stages: &'a [StageDefinition]) -> Self {
        Self {
            stages: stages.iter().enumerate(),
            cumulative: 0,
        }
    }
}

impl<'a> Iterator for StageWindows<'a> {
    type Item = StageSpan<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, stage) = self.stages.next()?;
        let start_day = self.cumulative;
        self.cumulative += i64::from(stage.duration_days());
        Some(StageSpan {
            index,
            stage,
            start_day,
            end_day: self.cumulative - 1,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.stages.size_hint()
    }
}

impl ExactSizeIterator for StageWindows<'_> {}

pub(crate) fn total_of(stages: &[StageDefinition]) -> i64 {
    stages.iter().map(|s| i64::from(s.duration_days())).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GrowthProfile {
        GrowthProfile::from_pairs([("A", 25), ("B", 30), ("C", 30), ("D", 15), ("E", 30)]).unwrap()
    }

    #[test]
    fn total_duration_is_sum() {
        assert_eq!(sample().total_duration(), 130);
        assert_eq!(sample().len(), 5);
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(
            GrowthProfile::new(Vec::new()).unwrap_err(),
            StageError::InvalidProfile(ProfileDefect::Empty)
        );
    }

    #[test]
    fn zero_duration_rejected() {
        assert_eq!(
            GrowthProfile::from_pairs([("A", 10), ("B", 0)]).unwrap_err(),
            StageError::InvalidProfile(ProfileDefect::ZeroDuration {
                stage: "B".to_string(),
            })
        );
    }

    #[test]
    fn blank_name_rejected() {
        assert_eq!(
            GrowthProfile::from_pairs([("A", 10), ("  ", 5)]).unwrap_err(),
            StageError::InvalidProfile(ProfileDefect::BlankName { index: 1 })
        );
    }

    #[test]
    fn windows_partition_the_cycle() {
        let profile = sample();
        let spans: Vec<(i64, i64)> = profile.windows().map(|w| (w.start_day, w.end_day)).collect();
        assert_eq!(
            spans,
            vec![(0, 24), (25, 54), (55, 84), (85, 99), (100, 129)]
        );
    }

    #[test]
    fn windows_exact_size() {
        assert_eq!(sample().windows().len(), 5);
    }

    #[test]
    fn single_day_stage_span() {
        let profile = GrowthProfile::from_pairs([("only", 1)]).unwrap();
        let span = profile.windows().next().unwrap();
        assert_eq!((span.start_day, span.end_day), (0, 0));
        assert!(span.contains(0));
        assert!(!span.contains(1));
    }
}
