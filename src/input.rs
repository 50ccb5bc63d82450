use crate::error::{CocomoError, CocomoResult};
use crate::estimator::check_size;

/// Parses a user-entered KLOC value.
///
/// Empty or non-numeric text is `InvalidInput`; a number outside the model's
/// domain is `InvalidSize`.
pub fn parse_kloc(text: &str) -> CocomoResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CocomoError::InvalidInput(
            "KLOC value is required".to_string(),
        ));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| CocomoError::InvalidInput(format!("'{}' is not a number", trimmed)))?;

    check_size(value)
}
