//! graymap-filter - Smoothing operations
//!
//! Currently a single filter: the clamped-border windowed mean, [`blur`].

mod blur;

pub use blur::blur;
