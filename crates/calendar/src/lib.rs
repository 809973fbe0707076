//! # cropwatch-calendar
//!
//! Pure date arithmetic on the proleptic Gregorian calendar at day
//! granularity.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["&quot;YYYY-MM-DD&quot;"] -->|"CalendarDate::parse()"| B["CalendarDate"]
//!     B -->|"add_days()"| B
//!     B -->|"days_between()"| C["i64 whole days"]
//!     B -->|"format_date()"| D["&quot;Sep 22&quot;"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use cropwatch_calendar::{CalendarDate, add_days, days_between, format_date};
//!
//! let sown = CalendarDate::parse("2025-09-22").unwrap();
//! let later = add_days(sown, 40);
//! assert_eq!(days_between(sown, later), 40);
//! assert_eq!(format_date(later), "Nov 01");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Calendar date value type and strict ISO parsing |
//! | `span` | Whole-day differences and offsets |
//! | `format` | Short "Mon DD" display |
//! | `error` | Error types |

mod date;
mod error;
mod format;
mod span;

pub use date::CalendarDate;
pub use error::CalendarError;
pub use format::{ShortDate, format_date};
pub use span::{add_days, days_between};
