use crate::core::errors::{EnvRenderError, Result};

/// Presence checks a target record must pass before rendering.
///
/// Implementations check fields in declaration order and stop at the
/// first violation.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Fail with `MissingFlag` when `value` is empty.
pub fn require(value: &str, flag: &'static str) -> Result<()> {
    if value.is_empty() {
        return Err(EnvRenderError::MissingFlag { flag });
    }
    Ok(())
}
