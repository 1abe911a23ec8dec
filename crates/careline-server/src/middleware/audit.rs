use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Request audit middleware.
///
/// Logs every bot execution request as a structured tracing event. The
/// hosting platform ships these to CloudWatch.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    if path != "/health" {
        tracing::info!(
            method = %method,
            path = %path,
            status = response.status().as_u16(),
            "bot_request"
        );
    }

    response
}
