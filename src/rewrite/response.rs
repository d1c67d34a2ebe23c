use super::{
    super::{control::*, headers::*},
    pass_through::*,
};

use {
    duration_str::*,
    http::response::*,
    std::{result::Result, sync::*, time::*},
    tower::BoxError,
};

/// Common reference type for [ResponseRewriter].
pub type ResponseRewriterRef = Arc<dyn ResponseRewriter>;

//
// ResponseRewriter
//

/// Rewrites incoming responses.
///
/// The response is owned by the pipeline, so rewriting its parts in place never affects another
/// copy. Implementations must be idempotent, as a response may pass through more than one
/// registered pipeline. Errors abort the call.
pub trait ResponseRewriter
where
    Self: Send + Sync,
{
    /// Rewrite response.
    fn rewrite_response(&self, response: &mut Parts) -> Result<(), BoxError>;
}

impl ResponseRewriter for PassThrough {
    fn rewrite_response(&self, _response: &mut Parts) -> Result<(), BoxError> {
        Ok(())
    }
}

//
// OverrideMaxAge
//

/// [ResponseRewriter] that overrides the server's cache policy.
///
/// Removes `Pragma` and all `Cache-Control` values and then sets `Cache-Control: max-age=N`,
/// where N is queried from the [MaxAgeSource] for every response. N is inserted verbatim, even
/// if 0 or negative.
pub struct OverrideMaxAge {
    max_age: MaxAgeSourceRef,
}

impl OverrideMaxAge {
    /// Constructor.
    pub fn new(max_age: MaxAgeSourceRef) -> Self {
        Self { max_age }
    }
}

impl ResponseRewriter for OverrideMaxAge {
    fn rewrite_response(&self, response: &mut Parts) -> Result<(), BoxError> {
        let max_age = self.max_age.max_age()?;

        if tracing::enabled!(tracing::Level::DEBUG) {
            match u64::try_from(max_age) {
                Ok(seconds) if seconds > 0 => tracing::debug!(
                    "max-age: {} ({})",
                    max_age,
                    Duration::from_secs(seconds).human_format()
                ),
                _ => tracing::debug!("max-age: {} (stale)", max_age),
            }
        }

        response.headers.remove_freshness();
        response
            .headers
            .set_cache_control(&CacheControlDirectives::max_age(max_age))?;
        Ok(())
    }
}
