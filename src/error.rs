use thiserror::Error;

/// Broad category of a [`TeaError`].
///
/// Callers that only care about *why* an operation was refused can match on
/// the kind instead of every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The operation is not allowed in the cup's current state.
    InvalidState,
    /// A named tea is missing from the catalog.
    NotFound,
    /// An input value is outside its accepted range or malformed.
    Validation,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InvalidState => write!(f, "invalid_state"),
            ErrorKind::NotFound => write!(f, "not_found"),
            ErrorKind::Validation => write!(f, "validation"),
        }
    }
}

/// Errors raised by cups and shops.
///
/// Every failure is reported before any state is touched, so a rejected
/// call leaves the cup or shop exactly as it was.
///
/// # Non-Exhaustive
///
/// Always include a wildcard arm when matching:
///
/// ```
/// use teashop::{ErrorKind, TeaError};
///
/// fn describe(error: &TeaError) -> String {
///     match error {
///         TeaError::TeaNotFound(name) => format!("no {} today", name),
///         other if other.kind() == ErrorKind::Validation => format!("bad input: {}", other),
///         other => other.to_string(),
///     }
/// }
///
/// assert_eq!(describe(&TeaError::TeaNotFound("Matcha".into())), "no Matcha today");
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TeaError {
    /// Tea was added before any water was poured.
    #[error("Cannot add tea to an empty cup!")]
    EmptyCup,

    /// The cup has no tea steeping in it.
    #[error("There is no tea in the cup")]
    NoTea,

    /// The requested tea is not in the shop's catalog.
    ///
    /// Carries the name exactly as the caller spelled it.
    #[error("Tea not available: {0}")]
    TeaNotFound(String),

    /// The water temperature is outside 0..=100 °C.
    #[error("Water temperature must be between 0 and 100°C")]
    WaterTemperatureOutOfRange(i32),

    /// A shop configuration document could not be parsed.
    #[error("Invalid shop configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A cup did not become drinkable within the allotted wait.
    #[error("Tea '{tea}' was not ready after {waited_secs} seconds")]
    SteepTimeout {
        /// Name of the tea in the cup.
        tea: String,
        /// How long the caller waited.
        waited_secs: u64,
    },
}

impl TeaError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TeaError::EmptyCup | TeaError::NoTea | TeaError::SteepTimeout { .. } => {
                ErrorKind::InvalidState
            }
            TeaError::TeaNotFound(_) => ErrorKind::NotFound,
            TeaError::WaterTemperatureOutOfRange(_) | TeaError::Config(_) => {
                ErrorKind::Validation
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            TeaError::EmptyCup.to_string(),
            "Cannot add tea to an empty cup!"
        );
        assert_eq!(
            TeaError::TeaNotFound("Matcha".to_string()).to_string(),
            "Tea not available: Matcha"
        );
        assert_eq!(
            TeaError::WaterTemperatureOutOfRange(105).to_string(),
            "Water temperature must be between 0 and 100°C"
        );

        let timeout = TeaError::SteepTimeout {
            tea: "Green Tea".to_string(),
            waited_secs: 5,
        };
        assert_eq!(
            timeout.to_string(),
            "Tea 'Green Tea' was not ready after 5 seconds"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(TeaError::EmptyCup.kind(), ErrorKind::InvalidState);
        assert_eq!(TeaError::NoTea.kind(), ErrorKind::InvalidState);
        assert_eq!(
            TeaError::TeaNotFound("x".to_string()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            TeaError::WaterTemperatureOutOfRange(-5).kind(),
            ErrorKind::Validation
        );

        let parse_error = serde_json::from_str::<u32>("not json").unwrap_err();
        assert_eq!(TeaError::from(parse_error).kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::InvalidState.to_string(), "invalid_state");
        assert_eq!(ErrorKind::NotFound.to_string(), "not_found");
        assert_eq!(ErrorKind::Validation.to_string(), "validation");
    }
}
