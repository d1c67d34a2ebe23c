use {std::sync::*, tower::BoxError};

/// Common reference type for [NetworkStatus].
pub type NetworkStatusRef = Arc<dyn NetworkStatus>;

/// Common reference type for [MaxAgeSource].
pub type MaxAgeSourceRef = Arc<dyn MaxAgeSource>;

//
// NetworkStatus
//

/// Reports whether the network is currently available.
///
/// Called once per call attempt, possibly from many in-flight calls at the same time, so
/// implementations must be safe to call concurrently and should not block. An error aborts the
/// call it was queried for.
///
/// Implemented for any `Fn() -> bool`.
pub trait NetworkStatus
where
    Self: Send + Sync,
{
    /// Whether the network is available.
    fn is_online(&self) -> Result<bool, BoxError>;
}

impl<FunctionT> NetworkStatus for FunctionT
where
    FunctionT: Fn() -> bool + Send + Sync,
{
    fn is_online(&self) -> Result<bool, BoxError> {
        Ok(self())
    }
}

//
// MaxAgeSource
//

/// Supplies the max-age, in seconds, that overrides the server's cache policy.
///
/// Called for every rewritten response and never cached, possibly from many in-flight calls at
/// the same time, so implementations must be safe to call concurrently. Any value is accepted,
/// including 0 and negative values (both mark the response as already stale). An error aborts the
/// call it was queried for.
///
/// Implemented for any `Fn() -> i64`.
pub trait MaxAgeSource
where
    Self: Send + Sync,
{
    /// Max-age in seconds.
    fn max_age(&self) -> Result<i64, BoxError>;
}

impl<FunctionT> MaxAgeSource for FunctionT
where
    FunctionT: Fn() -> i64 + Send + Sync,
{
    fn max_age(&self) -> Result<i64, BoxError> {
        Ok(self())
    }
}

//
// FixedMaxAge
//

/// [MaxAgeSource] with a value fixed at configuration time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FixedMaxAge(pub i64);

impl MaxAgeSource for FixedMaxAge {
    fn max_age(&self) -> Result<i64, BoxError> {
        Ok(self.0)
    }
}
