//! Pure numeric helpers: polynomial evaluation and fit diagnostics.

pub mod poly;
pub mod stats;
