use super::{rewrite::*, service::*};

use {std::sync::*, tower::*};

//
// CacheControlLayer
//

/// HTTP cache control layer for clients.
///
/// This layer configures and installs a [CacheControlService], which wraps a single call:
///
/// 1. The outgoing request is handed to the [RequestRewriter].
/// 2. The rewritten request is sent to the inner service (the next stage: eventually the cache or
///    the network transport).
/// 3. The response is handed to the [ResponseRewriter] and then returned to the caller.
///
/// Errors from either rewriter or from the inner service are boxed and propagated as is. There
/// are no retries and no fallbacks.
///
/// You will usually not construct this layer yourself but rather let
/// [CacheControl](super::control::CacheControl) select the rewriters and register the layer with a
/// client. It can, however, be used directly in a [ServiceBuilder].
///
/// Rewriters are shared, not cloned, between all services created by this layer, so a single
/// layer can safely be installed at more than one stage of a client.
#[derive(Clone)]
pub struct CacheControlLayer {
    request_rewriter: RequestRewriterRef,
    response_rewriter: ResponseRewriterRef,
}

impl CacheControlLayer {
    /// Constructor.
    pub fn new(request_rewriter: RequestRewriterRef, response_rewriter: ResponseRewriterRef) -> Self {
        Self {
            request_rewriter,
            response_rewriter,
        }
    }

    /// Set the request rewriter.
    ///
    /// The default is [PassThrough].
    pub fn request_rewriter<RequestRewriterT>(mut self, request_rewriter: RequestRewriterT) -> Self
    where
        RequestRewriterT: 'static + RequestRewriter,
    {
        self.request_rewriter = Arc::new(request_rewriter);
        self
    }

    /// Set the response rewriter.
    ///
    /// The default is [PassThrough].
    pub fn response_rewriter<ResponseRewriterT>(
        mut self,
        response_rewriter: ResponseRewriterT,
    ) -> Self
    where
        ResponseRewriterT: 'static + ResponseRewriter,
    {
        self.response_rewriter = Arc::new(response_rewriter);
        self
    }
}

impl Default for CacheControlLayer {
    fn default() -> Self {
        Self::new(Arc::new(PassThrough), Arc::new(PassThrough))
    }
}

impl<InnerServiceT> Layer<InnerServiceT> for CacheControlLayer {
    type Service = CacheControlService<InnerServiceT>;

    fn layer(&self, inner_service: InnerServiceT) -> Self::Service {
        CacheControlService::new(
            inner_service,
            self.request_rewriter.clone(),
            self.response_rewriter.clone(),
        )
    }
}
