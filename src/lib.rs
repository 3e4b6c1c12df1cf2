//! In-memory temperature series storage and descriptive statistics.
//!
//! [`SeriesStore`] owns a growable, ordered sequence of readings and enforces
//! a physical-validity floor at construction. The [`analytics`] functions
//! compute statistics over detached snapshots of it:
//!
//! ```
//! use tempseries::{SeriesStore, analytics};
//!
//! let mut store = SeriesStore::from_readings(&[3.0, -5.0, 1.0])?;
//! store.append(&[5.0]);
//!
//! let snapshot = store.snapshot();
//! assert_eq!(analytics::average(&snapshot)?, 1.0);
//! # Ok::<(), tempseries::SeriesError>(())
//! ```

pub mod analytics;
mod error;
mod store;

pub use crate::analytics::SummaryStatistics;
pub use crate::error::SeriesError;
pub use crate::store::{DEFAULT_FLOOR, SeriesStore};
