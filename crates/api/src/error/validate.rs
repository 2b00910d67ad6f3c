//! Validation utilities shared by the protocol crates

use super::{Error, Result};

/// Validate that a signature component lies in `[1, order - 1]`.
///
/// Works on any integer type that can be compared and has a zero, so the
/// API crate stays free of a big-integer dependency.
#[inline(always)]
pub fn signature_component<T: PartialOrd>(
    component: &'static str,
    value: &T,
    zero: &T,
    order: &T,
) -> Result<()> {
    if value <= zero || value >= order {
        return Err(Error::InvalidSignatureRange { component });
    }
    Ok(())
}

