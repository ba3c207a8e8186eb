//! Validation of the claimed post-state commitment.

use crate::errors::{InteropProgramError, InteropProgramResult};
use alloy_primitives::B256;

/// Checks that the computed post-state commitment matches the claimed one.
pub fn validate_claim(claimed: B256, computed: B256) -> InteropProgramResult<()> {
    if claimed != computed {
        return Err(InteropProgramError::InvalidClaim { claimed, computed });
    }
    Ok(())
}
