//! Error types for Serenade

use thiserror::Error;

/// Main error type for Serenade operations
#[derive(Error, Debug)]
pub enum CardError {
    /// General I/O error (reading a song override file, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A date string could not be parsed
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A track was rejected before reaching the player
    #[error("Invalid track: {0}")]
    InvalidTrack(String),
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;

/// Why the media pipeline could not load or play a track.
///
/// The `Display` text is the status message shown next to the player, so
/// every variant reads as a complete sentence fragment for the listener.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFault {
    /// Loading or playback was cancelled
    #[error("Playback was cancelled")]
    Aborted,

    /// The audio file could not be fetched
    #[error("Network error - check your connection")]
    Network,

    /// The audio file is corrupt or could not be decoded
    #[error("Could not decode the audio file")]
    Decode,

    /// Unsupported audio format or invalid URL
    #[error("Audio format not supported or invalid URL")]
    UnsupportedFormat,

    /// The platform refused to start playback without a user gesture
    #[error("Tap play first to allow audio playback")]
    PermissionDenied,

    /// Anything else
    #[error("Unknown error while loading the song")]
    Unknown,
}

impl MediaFault {
    /// Classify an HTML `MediaError.code` (1 = aborted .. 4 = src not supported).
    pub fn from_media_error_code(code: u16) -> Self {
        match code {
            1 => MediaFault::Aborted,
            2 => MediaFault::Network,
            3 => MediaFault::Decode,
            4 => MediaFault::UnsupportedFormat,
            _ => MediaFault::Unknown,
        }
    }

    /// Classify the `name` of a rejected `play()` promise.
    pub fn from_rejection_name(name: &str) -> Self {
        match name {
            "NotAllowedError" => MediaFault::PermissionDenied,
            "NotSupportedError" => MediaFault::UnsupportedFormat,
            "AbortError" => MediaFault::Aborted,
            _ => MediaFault::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CardError::InvalidDate("2024-13-01".to_string());
        assert_eq!(format!("{}", err), "Invalid date: 2024-13-01");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let card_err: CardError = io_err.into();
        assert!(matches!(card_err, CardError::Io(_)));
    }

    #[test]
    fn test_media_error_codes() {
        assert_eq!(MediaFault::from_media_error_code(1), MediaFault::Aborted);
        assert_eq!(MediaFault::from_media_error_code(2), MediaFault::Network);
        assert_eq!(MediaFault::from_media_error_code(3), MediaFault::Decode);
        assert_eq!(
            MediaFault::from_media_error_code(4),
            MediaFault::UnsupportedFormat
        );
        assert_eq!(MediaFault::from_media_error_code(0), MediaFault::Unknown);
        assert_eq!(MediaFault::from_media_error_code(99), MediaFault::Unknown);
    }

    #[test]
    fn test_rejection_names() {
        assert_eq!(
            MediaFault::from_rejection_name("NotAllowedError"),
            MediaFault::PermissionDenied
        );
        assert_eq!(
            MediaFault::from_rejection_name("NotSupportedError"),
            MediaFault::UnsupportedFormat
        );
        assert_eq!(MediaFault::from_rejection_name("TypeError"), MediaFault::Unknown);
    }
}
