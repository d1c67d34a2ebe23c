use super::{
    super::{control::*, headers::*},
    pass_through::*,
};

use {http::request::*, std::sync::*, tower::BoxError};

/// Common reference type for [RequestRewriter].
pub type RequestRewriterRef = Arc<dyn RequestRewriter>;

//
// RequestRewriter
//

/// Rewrites outgoing requests.
///
/// The request is owned by the pipeline, so rewriting its parts in place never affects the
/// caller's copy. Errors abort the call.
pub trait RequestRewriter
where
    Self: Send + Sync,
{
    /// Rewrite request.
    fn rewrite_request(&self, request: &mut Parts) -> Result<(), BoxError>;
}

impl RequestRewriter for PassThrough {
    fn rewrite_request(&self, _request: &mut Parts) -> Result<(), BoxError> {
        Ok(())
    }
}

//
// ForceCacheWhenOffline
//

/// [RequestRewriter] that forces use of the cache, even if stale, while the network is
/// unavailable.
///
/// When offline the request's `Cache-Control` is replaced with
/// [force_cache](CacheControlDirectives::force_cache). When online the request passes through
/// untouched. The [NetworkStatus] is queried on every call.
pub struct ForceCacheWhenOffline {
    network_status: NetworkStatusRef,
}

impl ForceCacheWhenOffline {
    /// Constructor.
    pub fn new(network_status: NetworkStatusRef) -> Self {
        Self { network_status }
    }
}

impl RequestRewriter for ForceCacheWhenOffline {
    fn rewrite_request(&self, request: &mut Parts) -> Result<(), BoxError> {
        if self.network_status.is_online()? {
            tracing::trace!("online: {}", request.uri);
            return Ok(());
        }

        tracing::debug!("offline, forcing cache: {}", request.uri);
        request
            .headers
            .set_cache_control(&CacheControlDirectives::force_cache())?;
        Ok(())
    }
}
