use super::registry::*;

use {
    http::{Request, Response},
    std::{fmt, result::Result, task::*},
    tower::*,
};

//
// Client
//

/// HTTP client: the composed stack of a [ClientBuilder](super::ClientBuilder).
///
/// Cloning is cheap and clones share the stack.
pub struct Client<RequestBodyT, ResponseBodyT> {
    service: HttpService<RequestBodyT, ResponseBodyT>,
}

impl<RequestBodyT, ResponseBodyT> Client<RequestBodyT, ResponseBodyT> {
    /// Constructor.
    pub fn new(service: HttpService<RequestBodyT, ResponseBodyT>) -> Self {
        Self { service }
    }

    /// Execute a single call.
    pub async fn execute(
        &self,
        request: Request<RequestBodyT>,
    ) -> Result<Response<ResponseBodyT>, BoxError> {
        self.service.clone().oneshot(request).await
    }
}

impl<RequestBodyT, ResponseBodyT> Clone for Client<RequestBodyT, ResponseBodyT> {
    fn clone(&self) -> Self {
        Self::new(self.service.clone())
    }
}

impl<RequestBodyT, ResponseBodyT> fmt::Debug for Client<RequestBodyT, ResponseBodyT> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Client").finish_non_exhaustive()
    }
}

impl<RequestBodyT, ResponseBodyT> Service<Request<RequestBodyT>>
    for Client<RequestBodyT, ResponseBodyT>
{
    type Response = Response<ResponseBodyT>;
    type Error = BoxError;
    type Future = <HttpService<RequestBodyT, ResponseBodyT> as Service<Request<RequestBodyT>>>::Future;

    fn poll_ready(&mut self, context: &mut Context) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(context)
    }

    fn call(&mut self, request: Request<RequestBodyT>) -> Self::Future {
        self.service.call(request)
    }
}
