use super::directives::*;

use http::header::*;

//
// CacheControlHeaders
//

/// Access to the cache-control related headers of a [HeaderMap].
pub trait CacheControlHeaders {
    /// Parsed `Cache-Control` (and `Pragma`) directives.
    fn cache_control(&self) -> CacheControlDirectives;

    /// Replace all `Cache-Control` values with the rendered directives.
    ///
    /// If no directive is set the header is removed.
    fn set_cache_control(
        &mut self,
        directives: &CacheControlDirectives,
    ) -> Result<(), InvalidHeaderValue>;

    /// Remove all freshness headers: `Cache-Control` and `Pragma`.
    fn remove_freshness(&mut self);
}

impl CacheControlHeaders for HeaderMap {
    fn cache_control(&self) -> CacheControlDirectives {
        CacheControlDirectives::parse(self)
    }

    fn set_cache_control(
        &mut self,
        directives: &CacheControlDirectives,
    ) -> Result<(), InvalidHeaderValue> {
        if directives.is_empty() {
            self.remove(CACHE_CONTROL);
        } else {
            // `insert` replaces every existing value
            self.insert(CACHE_CONTROL, HeaderValue::try_from(directives.to_string())?);
        }
        Ok(())
    }

    fn remove_freshness(&mut self) {
        self.remove(PRAGMA);
        self.remove(CACHE_CONTROL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_every_value() {
        let mut headers = HeaderMap::new();
        headers.append(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.append(CACHE_CONTROL, HeaderValue::from_static("max-age=10"));

        headers
            .set_cache_control(&CacheControlDirectives::force_cache())
            .unwrap();

        let values: Vec<_> = headers.get_all(CACHE_CONTROL).iter().collect();
        assert_eq!(values, ["max-stale=2147483647, only-if-cached"]);
    }

    #[test]
    fn set_empty_removes() {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));

        headers
            .set_cache_control(&CacheControlDirectives::default())
            .unwrap();

        assert!(!headers.contains_key(CACHE_CONTROL));
    }

    #[test]
    fn remove_freshness_clears_pragma_too() {
        let mut headers = HeaderMap::new();
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        headers.insert(ETAG, HeaderValue::from_static("\"abc\""));

        headers.remove_freshness();

        assert!(headers.cache_control().is_empty());
        assert_eq!(headers.len(), 1);
    }
}
