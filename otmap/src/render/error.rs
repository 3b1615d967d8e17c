//! Error types for footprint rendering.

use std::fmt;

/// Errors that can occur while writing a rendered footprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The sink could not persist the grid for one floor.
    SinkWriteFailure {
        house_id: u32,
        elevation: u8,
        reason: String,
    },
    /// The grid could not be encoded as an image.
    EncodingFailed(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::SinkWriteFailure {
                house_id,
                elevation,
                reason,
            } => {
                write!(
                    f,
                    "Failed to write footprint of house {} floor {}: {}",
                    house_id, elevation, reason
                )
            }
            RenderError::EncodingFailed(msg) => write!(f, "Encoding failed: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        RenderError::EncodingFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display_sink_write_failure() {
        let err = RenderError::SinkWriteFailure {
            house_id: 12,
            elevation: 7,
            reason: "permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to write footprint of house 12 floor 7: permission denied"
        );
    }

    #[test]
    fn test_render_error_display_encoding_failed() {
        let err = RenderError::EncodingFailed("bad buffer".to_string());
        assert_eq!(err.to_string(), "Encoding failed: bad buffer");
    }
}
