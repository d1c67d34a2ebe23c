use {http::header::*, std::fmt};

/// `max-stale` value meaning "accept any staleness".
///
/// Also what a bare `max-stale` (without a value) parses to.
pub const MAX_STALE_ANY: i64 = i32::MAX as i64;

//
// CacheControlDirectives
//

/// Parsed `Cache-Control` directives.
///
/// Covers both request and response directives. Seconds are kept signed and verbatim: a max-age
/// of 0 or below is meaningful to us (it marks a response as already stale), so we never clamp.
///
/// [Display](fmt::Display) renders the canonical header value.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CacheControlDirectives {
    /// `no-cache`. Also set by `Pragma: no-cache`.
    pub no_cache: bool,

    /// `no-store`.
    pub no_store: bool,

    /// `max-age` in seconds.
    pub max_age: Option<i64>,

    /// `s-maxage` in seconds.
    pub s_max_age: Option<i64>,

    /// `private`.
    pub private: bool,

    /// `public`.
    pub public: bool,

    /// `must-revalidate`.
    pub must_revalidate: bool,

    /// `max-stale` in seconds.
    pub max_stale: Option<i64>,

    /// `min-fresh` in seconds.
    pub min_fresh: Option<i64>,

    /// `only-if-cached`.
    pub only_if_cached: bool,

    /// `no-transform`.
    pub no_transform: bool,

    /// `immutable`.
    pub immutable: bool,
}

impl CacheControlDirectives {
    /// Prefer any cached response, however stale, over the network.
    ///
    /// `only-if-cached, max-stale=2147483647`.
    pub fn force_cache() -> Self {
        Self {
            only_if_cached: true,
            max_stale: Some(MAX_STALE_ANY),
            ..Default::default()
        }
    }

    /// Always validate with the network.
    ///
    /// `no-cache`.
    pub fn force_network() -> Self {
        Self {
            no_cache: true,
            ..Default::default()
        }
    }

    /// Just `max-age`.
    pub fn max_age(seconds: i64) -> Self {
        Self {
            max_age: Some(seconds),
            ..Default::default()
        }
    }

    /// Parse all `Cache-Control` values, as well as `Pragma: no-cache`.
    ///
    /// Unknown directives and malformed values are ignored.
    pub fn parse(headers: &HeaderMap) -> Self {
        let mut directives = Self::default();

        for value in headers.get_all(CACHE_CONTROL) {
            if let Ok(value) = value.to_str() {
                directives.parse_value(value);
            }
        }

        for value in headers.get_all(PRAGMA) {
            if let Ok(value) = value.to_str()
                && value
                    .split(',')
                    .any(|directive| directive.trim().eq_ignore_ascii_case("no-cache"))
            {
                directives.no_cache = true;
            }
        }

        directives
    }

    /// Whether no directive is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn parse_value(&mut self, value: &str) {
        for directive in value.split(',') {
            let (name, argument) = match directive.split_once('=') {
                Some((name, argument)) => (name.trim(), Some(argument.trim().trim_matches('"'))),
                None => (directive.trim(), None),
            };

            let seconds = argument.and_then(|argument| argument.parse::<i64>().ok());

            match name.to_ascii_lowercase().as_str() {
                "no-cache" => self.no_cache = true,
                "no-store" => self.no_store = true,
                "max-age" => set_seconds(&mut self.max_age, seconds),
                "s-maxage" => set_seconds(&mut self.s_max_age, seconds),
                "private" => self.private = true,
                "public" => self.public = true,
                "must-revalidate" => self.must_revalidate = true,
                "max-stale" => {
                    self.max_stale = match argument {
                        Some(_) => seconds.or(self.max_stale),
                        None => Some(MAX_STALE_ANY),
                    }
                }
                "min-fresh" => set_seconds(&mut self.min_fresh, seconds),
                "only-if-cached" => self.only_if_cached = true,
                "no-transform" => self.no_transform = true,
                "immutable" => self.immutable = true,
                _ => {}
            }
        }
    }
}

impl fmt::Display for CacheControlDirectives {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut directives: Vec<String> = Vec::new();

        if self.no_cache {
            directives.push("no-cache".into());
        }
        if self.no_store {
            directives.push("no-store".into());
        }
        if let Some(max_age) = self.max_age {
            directives.push(format!("max-age={}", max_age));
        }
        if let Some(s_max_age) = self.s_max_age {
            directives.push(format!("s-maxage={}", s_max_age));
        }
        if self.private {
            directives.push("private".into());
        }
        if self.public {
            directives.push("public".into());
        }
        if self.must_revalidate {
            directives.push("must-revalidate".into());
        }
        if let Some(max_stale) = self.max_stale {
            directives.push(format!("max-stale={}", max_stale));
        }
        if let Some(min_fresh) = self.min_fresh {
            directives.push(format!("min-fresh={}", min_fresh));
        }
        if self.only_if_cached {
            directives.push("only-if-cached".into());
        }
        if self.no_transform {
            directives.push("no-transform".into());
        }
        if self.immutable {
            directives.push("immutable".into());
        }

        formatter.write_str(&directives.join(", "))
    }
}

// The first valid value wins, as with duplicate directives elsewhere.
fn set_seconds(field: &mut Option<i64>, seconds: Option<i64>) {
    if field.is_none() {
        *field = seconds;
    }
}
