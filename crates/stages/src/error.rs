//! Error types for the cropwatch-stages crate.

/// What is wrong with a stage sequence that cannot form a growth profile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileDefect {
    /// The sequence has no stages.
    #[error("profile has no stages")]
    Empty,
    /// A stage lasts zero days.
    #[error("stage {stage:?} has zero duration")]
    ZeroDuration {
        /// Name of the offending stage.
        stage: String,
    },
    /// A stage has an empty or whitespace-only name.
    #[error("stage {index} has a blank name")]
    BlankName {
        /// 0-based position of the offending stage.
        index: usize,
    },
}

/// Error type for profile construction and stage resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StageError {
    /// Returned when a stage sequence violates the profile invariants.
    #[error("invalid growth profile: {0}")]
    InvalidProfile(ProfileDefect),
}

/// Error type for crop catalog construction and lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Returned when a crop name is empty or whitespace-only.
    #[error("crop name is blank")]
    BlankCropName,

    /// Returned when a crop name is inserted twice.
    #[error("duplicate crop: {name:?}")]
    DuplicateCrop {
        /// The repeated crop name.
        name: String,
    },

    /// Returned when no crop has the requested name.
    #[error("unknown crop: {name:?}")]
    UnknownCrop {
        /// The requested crop name.
        name: String,
    },

    /// Returned when a 1-based menu choice is outside the catalog.
    #[error("invalid choice: {choice} (must be 1..={n_crops})")]
    InvalidChoice {
        /// The requested menu number.
        choice: usize,
        /// Number of crops in the catalog.
        n_crops: usize,
    },

    /// Returned when a crop's stage sequence is not a valid profile.
    #[error("crop {crop:?}: {source}")]
    InvalidProfile {
        /// The crop whose stages were rejected.
        crop: String,
        /// The underlying profile error.
        source: StageError,
    },
}
