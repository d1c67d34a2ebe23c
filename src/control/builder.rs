use super::{
    super::{client::*, layer::*},
    error::*,
    policy::*,
    source::*,
    unit::*,
};

use std::{fmt, result::Result, sync::*, time::*};

//
// CacheControl
//

/// Cache control configuration for a client.
///
/// Wraps a client configuration (an [InterceptorRegistry]), accumulates choices, and on
/// [apply](Self::apply) installs a [CacheControlLayer] that enforces them:
///
/// * Overriding the server's cache policy replaces the `Cache-Control` and `Pragma` headers of
///   every response that comes from the network with `Cache-Control: max-age=N`, so the client's
///   cache stores and serves it according to our policy instead of the server's.
/// * Forcing the cache when offline rewrites every request while the network is unavailable to
///   accept any cached response, however stale, rather than going to the network.
///
/// Max-age overrides are mutually exclusive: the last one configured wins. Forcing the cache when
/// offline is independent of them.
///
/// Example:
///
/// ```
/// use tower_http_cache_control::{client::*, control::*};
///
/// let client_builder = CacheControl::on(ClientBuilder::<String, String>::new())
///     .override_server_cache_policy_in(5, TimeUnit::Minutes)
///     .force_cache_when_offline(|| true)
///     .apply();
///
/// assert_eq!(client_builder.network_interceptor_count(), 1);
/// assert_eq!(client_builder.interceptor_count(), 1);
/// ```
pub struct CacheControl<ClientBuilderT> {
    client_builder: ClientBuilderT,
    cache_policy: CachePolicy,
    offline_behavior: OfflineBehavior,
}

impl<ClientBuilderT> CacheControl<ClientBuilderT> {
    /// Start configuring cache control on a client configuration.
    ///
    /// The client configuration can be owned or a `&mut` reference.
    pub fn on(client_builder: ClientBuilderT) -> Self {
        Self {
            client_builder,
            cache_policy: Default::default(),
            offline_behavior: Default::default(),
        }
    }

    /// Override the server's cache policy with a fixed max-age in seconds.
    ///
    /// [None] means 0, i.e. responses are stale as soon as they arrive.
    pub fn override_server_cache_policy(self, max_age_seconds: Option<i64>) -> Self {
        self.override_server_cache_policy_in(max_age_seconds.unwrap_or_default(), TimeUnit::Seconds)
    }

    /// Override the server's cache policy with a fixed max-age.
    ///
    /// The value is converted to seconds via [TimeUnit::to_seconds].
    pub fn override_server_cache_policy_in(mut self, max_age: i64, unit: TimeUnit) -> Self {
        self.cache_policy = CachePolicy::Fixed(unit.to_seconds(max_age));
        self
    }

    /// Override the server's cache policy with a fixed max-age.
    ///
    /// Sub-second precision is truncated.
    pub fn override_server_cache_policy_for(self, max_age: Duration) -> Self {
        let seconds = i64::try_from(max_age.as_secs()).unwrap_or(i64::MAX);
        self.override_server_cache_policy_in(seconds, TimeUnit::Seconds)
    }

    /// Override the server's cache policy with a fixed max-age.
    ///
    /// The max-age is parsed with [duration_str], e.g. "30s" or "5m".
    pub fn override_server_cache_policy_str(self, max_age: &str) -> Result<Self, CacheControlError> {
        let duration =
            duration_str::parse(max_age).map_err(|error| CacheControlError::InvalidDuration {
                duration: max_age.into(),
                reason: error.to_string(),
            })?;
        Ok(self.override_server_cache_policy_for(duration))
    }

    /// Override the server's cache policy with a max-age queried for every response.
    pub fn override_server_cache_policy_with<MaxAgeSourceT>(mut self, max_age: MaxAgeSourceT) -> Self
    where
        MaxAgeSourceT: 'static + MaxAgeSource,
    {
        self.cache_policy = CachePolicy::Dynamic(Arc::new(max_age));
        self
    }

    /// Force use of the cache, even if stale, while the network is unavailable.
    pub fn force_cache_when_offline<NetworkStatusT>(mut self, network_status: NetworkStatusT) -> Self
    where
        NetworkStatusT: 'static + NetworkStatus,
    {
        self.offline_behavior = OfflineBehavior::Enabled(Arc::new(network_status));
        self
    }

    /// Cache policy.
    pub fn cache_policy(&self) -> &CachePolicy {
        &self.cache_policy
    }

    /// Offline behavior.
    pub fn offline_behavior(&self) -> &OfflineBehavior {
        &self.offline_behavior
    }

    /// The layer that [apply](Self::apply) would install.
    ///
    /// [None] if nothing is configured.
    pub fn layer(&self) -> Option<CacheControlLayer> {
        if !self.cache_policy.is_set() && !self.offline_behavior.is_enabled() {
            return None;
        }

        Some(CacheControlLayer::new(
            self.offline_behavior.request_rewriter(),
            self.cache_policy.response_rewriter(),
        ))
    }

    /// Install cache control and return the client configuration for further configuration.
    ///
    /// If nothing is configured the client configuration is returned untouched.
    ///
    /// Otherwise a single [CacheControlLayer] is always registered as a network interceptor. If
    /// forcing the cache when offline, the same layer is also registered as an interceptor, so
    /// that the rewritten request reaches the cache itself. (Running the response rewrite at both
    /// stages is harmless because it is idempotent.)
    pub fn apply(self) -> ClientBuilderT
    where
        ClientBuilderT: InterceptorRegistry,
        ClientBuilderT::RequestBody: 'static + Send,
        ClientBuilderT::ResponseBody: 'static + Send,
    {
        let Some(layer) = self.layer() else {
            tracing::debug!("nothing to apply");
            return self.client_builder;
        };

        let mut client_builder = self.client_builder;
        let interceptor: Interceptor<ClientBuilderT::RequestBody, ClientBuilderT::ResponseBody> =
            Interceptor::new(layer);

        tracing::debug!(
            "network interceptor: cache policy {:?}, offline behavior {:?}",
            self.cache_policy,
            self.offline_behavior
        );
        client_builder.add_network_interceptor(interceptor.clone());

        if self.offline_behavior.is_enabled() {
            tracing::debug!("interceptor: force cache when offline");
            client_builder.add_interceptor(interceptor);
        }

        client_builder
    }
}

impl<ClientBuilderT> fmt::Debug for CacheControl<ClientBuilderT> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CacheControl")
            .field("cache_policy", &self.cache_policy)
            .field("offline_behavior", &self.offline_behavior)
            .finish_non_exhaustive()
    }
}
