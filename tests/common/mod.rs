#![allow(dead_code)]

use {
    http::{header::*, *},
    std::{
        collections::*,
        future::Future,
        pin::Pin,
        result::Result,
        sync::*,
        task::{Context, Poll},
        time::*,
    },
    tower::{util::*, *},
    tower_http_cache_control::{client::*, headers::*},
};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn get(uri: &str) -> Request<String> {
    Request::get(uri).body(String::new()).expect("request")
}

pub fn get_with_cache_control(uri: &str, directives: &CacheControlDirectives) -> Request<String> {
    let mut request = get(uri);
    request
        .headers_mut()
        .set_cache_control(directives)
        .expect("cache-control");
    request
}

pub fn response(body: &str) -> Response<String> {
    Response::new(body.into())
}

pub fn response_with_headers(body: &str, headers: &[(HeaderName, &'static str)]) -> Response<String> {
    let mut builder = Response::builder();
    for (name, value) in headers {
        builder = builder.header(name, *value);
    }
    builder.body(body.into()).expect("response")
}

//
// MockOrigin
//

/// Serves queued responses (404 when the queue is empty) and records what it receives.
#[derive(Clone, Default)]
pub struct MockOrigin {
    state: Arc<Mutex<MockOriginState>>,
}

#[derive(Default)]
struct MockOriginState {
    responses: VecDeque<Response<String>>,
    requests: Vec<HeaderMap>,
}

impl MockOrigin {
    pub fn enqueue(&self, response: Response<String>) {
        self.state.lock().unwrap().responses.push_back(response);
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    /// Headers of the last request that reached the origin.
    pub fn last_request(&self) -> Option<HeaderMap> {
        self.state.lock().unwrap().requests.last().cloned()
    }

    pub fn transport(&self) -> HttpService<String, String> {
        let origin = self.clone();
        BoxCloneSyncService::new(service_fn(move |request: Request<String>| {
            let origin = origin.clone();
            async move {
                let mut state = origin.state.lock().unwrap();
                state.requests.push(request.headers().clone());
                let response = state.responses.pop_front().unwrap_or_else(|| {
                    Response::builder()
                        .status(StatusCode::NOT_FOUND)
                        .body(String::new())
                        .expect("response")
                });
                Ok::<_, BoxError>(response)
            }
        }))
    }
}

//
// TestCache
//

/// A small private HTTP cache, just enough to exercise cache control:
///
/// * Request `no-cache` goes to the network.
/// * A stored response is served if `age + min-fresh < max-age + max-stale`.
/// * Otherwise `only-if-cached` answers 504 without touching the network.
/// * Successful responses are stored unless the request or the response says `no-store`.
#[derive(Clone, Default)]
pub struct TestCache {
    state: Arc<Mutex<TestCacheState>>,
}

#[derive(Default)]
struct TestCacheState {
    entries: HashMap<String, TestCacheEntry>,
    request_count: usize,
    hit_count: usize,
    network_count: usize,
}

#[derive(Clone)]
struct TestCacheEntry {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
    stored_at: Instant,
}

impl TestCacheEntry {
    fn to_response(&self) -> Response<String> {
        let mut response = Response::new(self.body.clone());
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers.clone();
        response
    }
}

impl TestCache {
    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().request_count
    }

    pub fn hit_count(&self) -> usize {
        self.state.lock().unwrap().hit_count
    }

    pub fn network_count(&self) -> usize {
        self.state.lock().unwrap().network_count
    }

    pub fn size(&self) -> usize {
        self.state.lock().unwrap().entries.len()
    }

    /// Look up a usable entry, counting the request and a possible hit.
    fn lookup(&self, key: &str, directives: &CacheControlDirectives) -> Option<Response<String>> {
        let mut state = self.state.lock().unwrap();
        state.request_count += 1;

        if directives.no_cache {
            return None;
        }

        let entry = state.entries.get(key)?;
        let age = entry.stored_at.elapsed().as_secs() as i64;
        let max_age = entry.headers.cache_control().max_age.unwrap_or_default();
        let min_fresh = directives.min_fresh.unwrap_or_default();
        let max_stale = directives.max_stale.unwrap_or_default();

        if age + min_fresh < max_age + max_stale {
            let response = entry.to_response();
            state.hit_count += 1;
            Some(response)
        } else {
            None
        }
    }

    fn store(&self, key: String, response: &Response<String>) {
        let mut state = self.state.lock().unwrap();
        state.network_count += 1;
        state.entries.insert(
            key,
            TestCacheEntry {
                status: response.status(),
                headers: response.headers().clone(),
                body: response.body().clone(),
                stored_at: Instant::now(),
            },
        );
    }

    fn count_network(&self) {
        self.state.lock().unwrap().network_count += 1;
    }
}

impl<InnerServiceT> Layer<InnerServiceT> for TestCache {
    type Service = TestCacheService<InnerServiceT>;

    fn layer(&self, inner_service: InnerServiceT) -> Self::Service {
        TestCacheService {
            cache: self.clone(),
            inner_service,
        }
    }
}

#[derive(Clone)]
pub struct TestCacheService<InnerServiceT> {
    cache: TestCache,
    inner_service: InnerServiceT,
}

impl<InnerServiceT> Service<Request<String>> for TestCacheService<InnerServiceT>
where
    InnerServiceT: 'static
        + Service<Request<String>, Response = Response<String>, Error = BoxError>
        + Clone
        + Send,
    InnerServiceT::Future: Send,
{
    type Response = Response<String>;
    type Error = BoxError;
    type Future = Pin<Box<dyn Future<Output = Result<Response<String>, BoxError>> + Send>>;

    fn poll_ready(&mut self, _context: &mut Context) -> Poll<Result<(), BoxError>> {
        // Readiness of the network is only checked if we actually go there
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<String>) -> Self::Future {
        let cache = self.cache.clone();
        let inner_service = self.inner_service.clone();

        Box::pin(async move {
            let key = request.uri().to_string();
            let directives = request.headers().cache_control();

            if let Some(response) = cache.lookup(&key, &directives) {
                return Ok(response);
            }

            if directives.only_if_cached {
                return Ok(Response::builder()
                    .status(StatusCode::GATEWAY_TIMEOUT)
                    .body(String::new())?);
            }

            let response = inner_service.oneshot(request).await?;

            if response.status().is_success()
                && !directives.no_store
                && !response.headers().cache_control().no_store
            {
                cache.store(key, &response);
            } else {
                cache.count_network();
            }

            Ok(response)
        })
    }
}

/// A client with the cache between the stages, over the origin.
pub fn build(client_builder: ClientBuilder<String, String>, origin: &MockOrigin) -> Client<String, String> {
    client_builder.build(origin.transport())
}
