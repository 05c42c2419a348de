//! Input helpers.
//!
//! - two-tier artifact path resolution (`locate`)
//! - sample file parsing (`samples`)
//! - coefficient artifact parsing (`coefficients`)

pub mod coefficients;
pub mod locate;
pub mod samples;

pub use coefficients::*;
pub use locate::*;
pub use samples::*;
