use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContentError>;

/// Message shown inline in the registration dialog after a submit attempt.
pub const INVALID_REGISTRATION_MESSAGE: &str =
    "Invalid data input. Please check all fields and try again.";

/// Submission failure reported by the registration dialog.
///
/// There is no backend behind the dialog: every submission is rejected with
/// this error, whatever the fields contain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Invalid data input. Please check all fields and try again.")]
    InvalidInput,
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("ContentError: Malformed content document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("ContentError: Invalid URL for {field}: {source}")]
    InvalidUrl {
        field: String,
        #[source]
        source: url::ParseError,
    },
    #[error("ContentError: Unsupported URL scheme for {field}: {scheme}")]
    UnsupportedScheme { field: String, scheme: String },
    #[error("ContentError: Invalid time slot {0}")]
    InvalidTimeSlot(String),
    #[error("ContentError: Schedule for {day} is out of order at {slot}")]
    ScheduleOutOfOrder { day: String, slot: String },
    #[error("ContentError: Schedule for {0} has no events")]
    EmptySchedule(String),
    #[error("ContentError: Missing required text for {0}")]
    MissingText(String),
    #[error("ContentError: Invalid config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_error_message_is_fixed() {
        assert_eq!(
            RegistrationError::InvalidInput.to_string(),
            INVALID_REGISTRATION_MESSAGE
        );
    }
}
