use thiserror::*;

//
// CacheControlError
//

/// Cache control configuration error.
#[derive(Debug, Error)]
pub enum CacheControlError {
    /// Invalid duration.
    #[error("invalid duration {duration:?}: {reason}")]
    InvalidDuration {
        /// Duration as provided.
        duration: String,

        /// Reason.
        reason: String,
    },
}
