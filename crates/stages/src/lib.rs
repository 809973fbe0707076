//! # cropwatch-stages
//!
//! Growth-stage resolution: maps the number of days since sowing onto a
//! crop's ordered sequence of fixed-length stages.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["CropCatalog"] -->|".by_choice() / .by_name()"| B["GrowthProfile"]
//!     B -->|"resolve(elapsed)"| C["StageResolution"]
//!     B -->|"track(sown, today)"| D["CropReport"]
//!     B -->|"schedule(sown)"| E["Vec of StageWindow"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use cropwatch_stages::{GrowthProfile, StageResolution, resolve};
//!
//! let profile =
//!     GrowthProfile::from_pairs([("A", 25), ("B", 30), ("C", 30), ("D", 15), ("E", 30)])
//!         .unwrap();
//!
//! let stage = resolve(&profile, 25);
//! let active = stage.active().unwrap();
//! assert_eq!(active.name, "B");
//! assert_eq!((active.start_day, active.end_day), (25, 54));
//! assert_eq!(active.progress_percent, 19);
//!
//! assert_eq!(resolve(&profile, 130), StageResolution::Complete);
//! assert_eq!(resolve(&profile, -1), StageResolution::FutureSowing);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `stage` | Single named stage |
//! | `profile` | Validated stage sequence and its day-offset partition |
//! | `resolve` | Active-stage lookup and progress percentage |
//! | `catalog` | Ordered crop table, including the built-in crops |
//! | `report` | Calendar-dated tracking report and stage timetable |
//! | `error` | Error types |

mod catalog;
mod error;
mod profile;
mod report;
mod resolve;
mod stage;

pub use catalog::{Crop, CropCatalog};
pub use error::{CatalogError, ProfileDefect, StageError};
pub use profile::{GrowthProfile, StageSpan, StageWindows};
pub use report::{CropReport, DateRange, StageWindow, schedule, track};
pub use resolve::{
    ActiveStage, COMPLETE_LABEL, StageResolution, progress_percent, resolve, resolve_stages,
};
pub use stage::StageDefinition;
