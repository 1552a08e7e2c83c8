//! Gauge Core
//!
//! Accumulates readings from a sensor (or any scalar source). One value type
//! does the work: a fixed-capacity retention ring of the most recent readings
//! plus independent running aggregates (count, total, average, min, max).
//! The two halves reset separately, so an application can restart its
//! per-interval average while keeping the retained history for graphing,
//! or discard the history while the long-term statistics keep running.
//!
//! Storage is sized at compile time via a const generic; nothing allocates
//! after construction, so the type is usable from resource-constrained
//! targets as well as host-side tooling.
//!
//! # Usage
//!
//! ```
//! use gauge_core::Accumulator;
//!
//! let mut acc = Accumulator::<8>::new();
//! acc.include(21.5);
//! acc.include(22.0);
//! assert_eq!(acc.current(), 22.0);
//! assert_eq!(acc.count(), 2);
//! ```

pub mod accumulator;
pub mod summary;

pub use accumulator::Accumulator;
pub use summary::Summary;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
