use super::{client::*, registry::*};

use {
    http::{Request, Response},
    std::fmt,
    tower::*,
};

//
// ClientBuilder
//

/// HTTP client builder.
///
/// Composes, from the outside in:
///
/// 1. Interceptors, in registration order (the first registered is the outermost).
/// 2. The cache, if set.
/// 3. Network interceptors, in registration order (the first registered is the outermost).
/// 4. The transport, provided to [build](Self::build).
///
/// The cache is an external collaborator: any [Layer] whose service speaks [HttpService] will do.
/// It decides by itself whether to answer from storage or forward the call to the network stage.
pub struct ClientBuilder<RequestBodyT, ResponseBodyT> {
    interceptors: Vec<Interceptor<RequestBodyT, ResponseBodyT>>,
    network_interceptors: Vec<Interceptor<RequestBodyT, ResponseBodyT>>,
    cache: Option<Interceptor<RequestBodyT, ResponseBodyT>>,
}

impl<RequestBodyT, ResponseBodyT> ClientBuilder<RequestBodyT, ResponseBodyT>
where
    RequestBodyT: 'static + Send,
    ResponseBodyT: 'static + Send,
{
    /// Constructor.
    pub fn new() -> Self {
        Self {
            interceptors: Vec::new(),
            network_interceptors: Vec::new(),
            cache: None,
        }
    }

    /// Set the cache.
    ///
    /// Replaces a previously set cache. No cache by default.
    pub fn cache<CacheLayerT>(mut self, cache: CacheLayerT) -> Self
    where
        CacheLayerT: 'static + Layer<HttpService<RequestBodyT, ResponseBodyT>> + Send + Sync,
        CacheLayerT::Service: 'static
            + Service<Request<RequestBodyT>, Response = Response<ResponseBodyT>, Error = BoxError>
            + Clone
            + Send
            + Sync,
        <CacheLayerT::Service as Service<Request<RequestBodyT>>>::Future: 'static + Send,
    {
        self.cache = Some(Interceptor::new(cache));
        self
    }

    /// Add an interceptor that runs for every call, before the cache.
    pub fn interceptor<LayerT>(mut self, interceptor: LayerT) -> Self
    where
        LayerT: 'static + Layer<HttpService<RequestBodyT, ResponseBodyT>> + Send + Sync,
        LayerT::Service: 'static
            + Service<Request<RequestBodyT>, Response = Response<ResponseBodyT>, Error = BoxError>
            + Clone
            + Send
            + Sync,
        <LayerT::Service as Service<Request<RequestBodyT>>>::Future: 'static + Send,
    {
        self.add_interceptor(Interceptor::new(interceptor));
        self
    }

    /// Add an interceptor that runs only for calls that reach the network.
    pub fn network_interceptor<LayerT>(mut self, interceptor: LayerT) -> Self
    where
        LayerT: 'static + Layer<HttpService<RequestBodyT, ResponseBodyT>> + Send + Sync,
        LayerT::Service: 'static
            + Service<Request<RequestBodyT>, Response = Response<ResponseBodyT>, Error = BoxError>
            + Clone
            + Send
            + Sync,
        <LayerT::Service as Service<Request<RequestBodyT>>>::Future: 'static + Send,
    {
        self.add_network_interceptor(Interceptor::new(interceptor));
        self
    }

    /// Number of interceptors.
    pub fn interceptor_count(&self) -> usize {
        self.interceptors.len()
    }

    /// Number of network interceptors.
    pub fn network_interceptor_count(&self) -> usize {
        self.network_interceptors.len()
    }

    /// Whether a cache is set.
    pub fn has_cache(&self) -> bool {
        self.cache.is_some()
    }

    /// Build the client over a transport.
    ///
    /// The builder is left intact and can build more clients.
    pub fn build<TransportT>(&self, transport: TransportT) -> Client<RequestBodyT, ResponseBodyT>
    where
        TransportT: 'static
            + Service<Request<RequestBodyT>, Response = Response<ResponseBodyT>>
            + Clone
            + Send
            + Sync,
        TransportT::Error: Into<BoxError>,
        TransportT::Future: 'static + Send,
    {
        let mut service: HttpService<RequestBodyT, ResponseBodyT> =
            HttpService::new(transport.map_err(Into::<BoxError>::into));

        for interceptor in self.network_interceptors.iter().rev() {
            service = interceptor.layer(service);
        }

        if let Some(cache) = &self.cache {
            service = cache.layer(service);
        }

        for interceptor in self.interceptors.iter().rev() {
            service = interceptor.layer(service);
        }

        tracing::debug!(
            "built client: {} interceptor(s), {}, {} network interceptor(s)",
            self.interceptors.len(),
            if self.cache.is_some() { "cache" } else { "no cache" },
            self.network_interceptors.len()
        );

        Client::new(service)
    }
}

impl<RequestBodyT, ResponseBodyT> InterceptorRegistry for ClientBuilder<RequestBodyT, ResponseBodyT> {
    type RequestBody = RequestBodyT;
    type ResponseBody = ResponseBodyT;

    fn add_interceptor(&mut self, interceptor: Interceptor<RequestBodyT, ResponseBodyT>) {
        self.interceptors.push(interceptor);
    }

    fn add_network_interceptor(&mut self, interceptor: Interceptor<RequestBodyT, ResponseBodyT>) {
        self.network_interceptors.push(interceptor);
    }
}

impl<RequestBodyT, ResponseBodyT> Default for ClientBuilder<RequestBodyT, ResponseBodyT>
where
    RequestBodyT: 'static + Send,
    ResponseBodyT: 'static + Send,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<RequestBodyT, ResponseBodyT> Clone for ClientBuilder<RequestBodyT, ResponseBodyT> {
    fn clone(&self) -> Self {
        Self {
            interceptors: self.interceptors.clone(),
            network_interceptors: self.network_interceptors.clone(),
            cache: self.cache.clone(),
        }
    }
}

impl<RequestBodyT, ResponseBodyT> fmt::Debug for ClientBuilder<RequestBodyT, ResponseBodyT> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ClientBuilder")
            .field("interceptors", &self.interceptors.len())
            .field("cache", &self.cache.is_some())
            .field("network_interceptors", &self.network_interceptors.len())
            .finish()
    }
}
