use super::rewrite::*;

use {
    http::{Request, Response},
    std::{future::*, mem, pin::*, result::Result, task::*},
    tower::*,
};

/// Boxed [Send] future returned by [CacheControlService].
pub type CapturedFuture<OutputT> = Pin<Box<dyn Future<Output = OutputT> + Send>>;

//
// CacheControlService
//

/// HTTP cache control service.
///
/// You will often be using [CacheControlLayer](super::CacheControlLayer) rather than this service
/// directly, thus this service's functionality is documented there.
pub struct CacheControlService<InnerServiceT> {
    inner_service: InnerServiceT,
    request_rewriter: RequestRewriterRef,
    response_rewriter: ResponseRewriterRef,
}

impl<InnerServiceT> CacheControlService<InnerServiceT> {
    /// Constructor.
    pub fn new(
        inner_service: InnerServiceT,
        request_rewriter: RequestRewriterRef,
        response_rewriter: ResponseRewriterRef,
    ) -> Self {
        Self {
            inner_service,
            request_rewriter,
            response_rewriter,
        }
    }

    // Clone while keeping `inner_service`.
    //
    // See: https://docs.rs/tower/latest/tower/trait.Service.html#be-careful-when-cloning-inner-services
    fn clone_and_keep_inner_service(&mut self) -> Self
    where
        InnerServiceT: Clone,
    {
        let mut clone = self.clone();
        clone.inner_service = mem::replace(&mut self.inner_service, clone.inner_service);
        clone
    }

    // Handle request.
    async fn handle<RequestBodyT, ResponseBodyT>(
        mut self,
        request: Request<RequestBodyT>,
    ) -> Result<Response<ResponseBodyT>, BoxError>
    where
        InnerServiceT: Service<Request<RequestBodyT>, Response = Response<ResponseBodyT>>,
        InnerServiceT::Error: Into<BoxError>,
    {
        let (mut parts, body) = request.into_parts();
        self.request_rewriter.rewrite_request(&mut parts)?;

        let upstream_response = self
            .inner_service
            .call(Request::from_parts(parts, body))
            .await
            .map_err(Into::<BoxError>::into)?;

        let (mut parts, body) = upstream_response.into_parts();
        self.response_rewriter.rewrite_response(&mut parts)?;

        Ok(Response::from_parts(parts, body))
    }
}

impl<InnerServiceT> Clone for CacheControlService<InnerServiceT>
where
    InnerServiceT: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner_service: self.inner_service.clone(),
            request_rewriter: self.request_rewriter.clone(),
            response_rewriter: self.response_rewriter.clone(),
        }
    }
}

impl<InnerServiceT, RequestBodyT, ResponseBodyT> Service<Request<RequestBodyT>>
    for CacheControlService<InnerServiceT>
where
    InnerServiceT: 'static
        + Service<Request<RequestBodyT>, Response = Response<ResponseBodyT>>
        + Clone
        + Send,
    InnerServiceT::Error: Into<BoxError>,
    InnerServiceT::Future: Send,
    RequestBodyT: 'static + Send,
    ResponseBodyT: 'static + Send,
{
    type Response = Response<ResponseBodyT>;
    type Error = BoxError;
    type Future = CapturedFuture<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, context: &mut Context) -> Poll<Result<(), Self::Error>> {
        self.inner_service.poll_ready(context).map_err(Into::into)
    }

    fn call(&mut self, request: Request<RequestBodyT>) -> Self::Future {
        // The clone must not take the inner service that we just polled as ready
        let cloned_self = self.clone_and_keep_inner_service();
        Box::pin(cloned_self.handle(request))
    }
}
