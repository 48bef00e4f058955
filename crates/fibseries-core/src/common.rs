//! Index validation shared by every evaluator.

use crate::calculator::FibError;
use crate::constants::MAX_FIB_U64;

/// Map a caller-supplied index onto the domain `0..=MAX_FIB_U64`.
///
/// Negative indices are rejected with [`FibError::InvalidInput`] and indices
/// whose term does not fit in a `u64` with [`FibError::Overflow`].
pub fn validate_index(n: i64) -> Result<u64, FibError> {
    let index = u64::try_from(n).map_err(|_| FibError::InvalidInput(n))?;
    if index > MAX_FIB_U64 {
        return Err(FibError::Overflow(n, MAX_FIB_U64));
    }
    Ok(index)
}
