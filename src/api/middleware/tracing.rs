//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// # Logging Behavior
///
/// Each request gets an `INFO` span carrying method, URI and HTTP version;
/// the response is logged at `INFO` with its status and latency in
/// milliseconds. Upstream calls made while handling the request are logged
/// inside that span.
///
/// 5xx responses are reported at `WARN` rather than `ERROR`: most of them
/// mirror an upstream outage, not a fault of this service.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/api/calendar/2024 version=HTTP/1.1}: finished processing request latency=412 ms status=200
/// WARN request{method=GET uri=/api/drivers/2024 version=HTTP/1.1}: response failed classification=Status code: 503 Service Unavailable latency=88 ms
/// ```
///
/// # Integration
///
/// ```rust,ignore
/// let app = Router::new()
///     .nest("/api", api::routes::routes())
///     .layer(tracing::layer());
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::WARN)
                .latency_unit(LatencyUnit::Millis),
        )
}
