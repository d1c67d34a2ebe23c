use {
    http::{header::*, *},
    std::{
        result::Result,
        sync::{atomic::*, *},
    },
    tower::{BoxError, service_fn},
    tower_http_cache_control::{client::*, control::*, headers::*},
    tracing_subscriber::{EnvFilter, fmt},
};

// Client with cache control over a fake origin
//
// Pay attention to the tracing log to see what the rewriters are doing!
//
//   cargo run --example basic
//
// Set RUST_LOG to change the log level (the default is "debug")

const MAX_AGE_MINUTES: i64 = 5;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    // In a real application this would be updated by a connectivity monitor

    let online = Arc::new(AtomicBool::new(true));

    // The origin insists on not being cached

    let origin = service_fn(|request: Request<String>| async move {
        let cache_control = request.headers().cache_control();
        tracing::info!("origin received: {} (cache-control: {})", request.uri(), cache_control);

        Response::builder()
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .body(String::from("Hello, world!\n"))
    });

    let client = CacheControl::on(ClientBuilder::new())
        .override_server_cache_policy_in(MAX_AGE_MINUTES, TimeUnit::Minutes)
        .force_cache_when_offline({
            let online = online.clone();
            move || online.load(Ordering::Relaxed)
        })
        .apply()
        .build(origin);

    let response = client
        .execute(Request::get("http://localhost/").body(String::new())?)
        .await?;
    tracing::info!("online response: {:?}", response.headers());

    online.store(false, Ordering::Relaxed);

    // Without a cache in the client the forced request reaches the origin, so we can see it

    let response = client
        .execute(Request::get("http://localhost/").body(String::new())?)
        .await?;
    tracing::info!("offline response: {:?}", response.headers());

    Ok(())
}
