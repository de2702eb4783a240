use thiserror::Error;

/// Why a setup submission failed.
///
/// `Display` is the exact text shown in the form's alert region.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Message reported by the backend in the `error` field
    #[error("{0}")]
    Server(String),

    /// Non-2xx response without an `error` field
    #[error("Failed to process request")]
    Rejected { status: u16 },

    /// Transport failure or a body that is not JSON
    #[error("An unknown error occurred")]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            SetupError::Server("bad region".to_string()).to_string(),
            "bad region"
        );
        assert_eq!(
            SetupError::Rejected { status: 502 }.to_string(),
            "Failed to process request"
        );
        assert_eq!(SetupError::Unknown.to_string(), "An unknown error occurred");
    }
}
