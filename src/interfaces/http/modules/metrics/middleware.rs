//! HTTP request metrics middleware

use std::time::Instant;

use axum::{body::Body, extract::MatchedPath, http::Request, middleware::Next, response::Response};

pub const HTTP_REQUESTS_TOTAL: &str = "worker_admin_http_requests_total";
pub const HTTP_REQUEST_DURATION: &str = "worker_admin_http_request_duration_seconds";

/// Records a request counter (`method`, `path`, `status`) and a latency
/// histogram (`method`, `path`). The path label is the route template, so
/// `/api/v1/workers/17` is recorded as `/api/v1/workers/{user_id}`.
pub async fn http_metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let start = Instant::now();
    let response = next.run(request).await;
    let elapsed = start.elapsed().as_secs_f64();

    let status = response.status().as_u16().to_string();

    metrics::counter!(HTTP_REQUESTS_TOTAL, "method" => method.clone(), "path" => path.clone(), "status" => status)
        .increment(1);
    metrics::histogram!(HTTP_REQUEST_DURATION, "method" => method, "path" => path).record(elapsed);

    response
}
