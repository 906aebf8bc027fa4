use thiserror::Error;

/// Every generator fails the same way: somebody asked for a negative
/// (or unrepresentable) amount of something.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenError {
    #[error("invalid argument `{name}` = {value}: {reason}")]
    InvalidArgument {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl GenError {
    pub fn invalid(name: &'static str, value: impl ToString, reason: &'static str) -> Self {
        GenError::InvalidArgument {
            name,
            value: value.to_string(),
            reason,
        }
    }
}

/// Convert a signed count coming from a caller into a usize, refusing
/// negatives instead of clamping them to zero.
pub fn checked_count(name: &'static str, value: i64) -> Result<usize, GenError> {
    usize::try_from(value).map_err(|_| GenError::invalid(name, value, "must not be negative"))
}

/// Like [`checked_count`], but also refuses anything above `max`.
pub fn bounded_count(name: &'static str, value: i64, max: usize) -> Result<usize, GenError> {
    let count = checked_count(name, value)?;
    if count > max {
        return Err(GenError::invalid(name, value, "too large"));
    }
    Ok(count)
}
