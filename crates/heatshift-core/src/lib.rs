pub mod error;
pub mod profile;
pub mod types;

#[cfg(feature = "incentives")]
pub mod incentives;

#[cfg(feature = "savings")]
pub mod savings;

#[cfg(feature = "directory")]
pub mod directory;

#[cfg(all(feature = "incentives", feature = "savings"))]
pub mod assessment;

pub use error::HeatShiftError;
pub use profile::Profile;
pub use types::*;

/// Standard result type for all heatshift operations
pub type HeatShiftResult<T> = Result<T, HeatShiftError>;
