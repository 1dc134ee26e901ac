//! Result type alias for hospital records operations.

use crate::HospitalError;

/// A specialized `Result` type for data-access operations.
pub type HospitalResult<T> = Result<T, HospitalError>;
