use {
    http::{Request, Response},
    tower::{
        BoxError,
        util::{BoxCloneSyncService, BoxCloneSyncServiceLayer},
    },
};

/// Type-erased HTTP service that every client stage wraps.
pub type HttpService<RequestBodyT, ResponseBodyT> =
    BoxCloneSyncService<Request<RequestBodyT>, Response<ResponseBodyT>, BoxError>;

/// Type-erased layer registered at a client stage.
pub type Interceptor<RequestBodyT, ResponseBodyT> = BoxCloneSyncServiceLayer<
    HttpService<RequestBodyT, ResponseBodyT>,
    Request<RequestBodyT>,
    Response<ResponseBodyT>,
    BoxError,
>;

//
// InterceptorRegistry
//

/// A client configuration that accepts interceptors at two stages.
///
/// The client's own cache sits between the stages:
///
/// ```text
/// caller -> interceptors -> cache -> network interceptors -> transport
/// ```
///
/// Interceptors (the application stage) run for every call, including calls the cache answers by
/// itself. Network interceptors run only for calls the cache forwards to the transport.
pub trait InterceptorRegistry {
    /// Request body.
    type RequestBody;

    /// Response body.
    type ResponseBody;

    /// Register an interceptor that runs for every call, before the cache.
    fn add_interceptor(&mut self, interceptor: Interceptor<Self::RequestBody, Self::ResponseBody>);

    /// Register an interceptor that runs only for calls that reach the network.
    fn add_network_interceptor(
        &mut self,
        interceptor: Interceptor<Self::RequestBody, Self::ResponseBody>,
    );
}

impl<InterceptorRegistryT> InterceptorRegistry for &mut InterceptorRegistryT
where
    InterceptorRegistryT: InterceptorRegistry,
{
    type RequestBody = InterceptorRegistryT::RequestBody;
    type ResponseBody = InterceptorRegistryT::ResponseBody;

    fn add_interceptor(&mut self, interceptor: Interceptor<Self::RequestBody, Self::ResponseBody>) {
        (**self).add_interceptor(interceptor)
    }

    fn add_network_interceptor(
        &mut self,
        interceptor: Interceptor<Self::RequestBody, Self::ResponseBody>,
    ) {
        (**self).add_network_interceptor(interceptor)
    }
}
