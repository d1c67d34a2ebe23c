use super::{super::rewrite::*, source::*};

use std::{fmt, sync::*};

//
// CachePolicy
//

/// Max-age override policy.
#[derive(Clone, Default)]
pub enum CachePolicy {
    /// Keep the server's policy.
    #[default]
    Unset,

    /// Max-age in seconds, fixed at configuration time.
    Fixed(i64),

    /// Max-age queried for every response.
    Dynamic(MaxAgeSourceRef),
}

impl CachePolicy {
    /// Whether set.
    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Resolve into a [ResponseRewriter].
    pub fn response_rewriter(&self) -> ResponseRewriterRef {
        match self {
            Self::Unset => Arc::new(PassThrough),
            Self::Fixed(seconds) => Arc::new(OverrideMaxAge::new(Arc::new(FixedMaxAge(*seconds)))),
            Self::Dynamic(max_age) => Arc::new(OverrideMaxAge::new(max_age.clone())),
        }
    }
}

impl fmt::Debug for CachePolicy {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => formatter.write_str("Unset"),
            Self::Fixed(seconds) => formatter.debug_tuple("Fixed").field(seconds).finish(),
            Self::Dynamic(_) => formatter.write_str("Dynamic"),
        }
    }
}

//
// OfflineBehavior
//

/// Behavior while the network is unavailable.
#[derive(Clone, Default)]
pub enum OfflineBehavior {
    /// Let the cache apply its normal freshness rules.
    #[default]
    Disabled,

    /// Force use of the cache, even if stale, while offline.
    Enabled(NetworkStatusRef),
}

impl OfflineBehavior {
    /// Whether enabled.
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }

    /// Resolve into a [RequestRewriter].
    pub fn request_rewriter(&self) -> RequestRewriterRef {
        match self {
            Self::Disabled => Arc::new(PassThrough),
            Self::Enabled(network_status) => {
                Arc::new(ForceCacheWhenOffline::new(network_status.clone()))
            }
        }
    }
}

impl fmt::Debug for OfflineBehavior {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => formatter.write_str("Disabled"),
            Self::Enabled(_) => formatter.write_str("Enabled"),
        }
    }
}
