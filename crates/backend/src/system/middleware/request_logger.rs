use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::shared::format::format_number;

/// Middleware для логирования HTTP запросов
///
/// Пишет в tracing: метод, путь, статус, длительность и размер ответа
/// (по заголовку Content-Length, тело не буферизуется).
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let size = response
        .headers()
        .get(axum::http::header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok());
    let size = size.map(format_number).unwrap_or_else(|| "-".into());
    let elapsed_ms = start.elapsed().as_millis();

    if response.status().is_server_error() {
        tracing::error!("{:>5}ms | {:>12} | {} {:>6} {}", elapsed_ms, size, status, method, path);
    } else if response.status().is_client_error() {
        tracing::warn!("{:>5}ms | {:>12} | {} {:>6} {}", elapsed_ms, size, status, method, path);
    } else {
        tracing::info!("{:>5}ms | {:>12} | {} {:>6} {}", elapsed_ms, size, status, method, path);
    }

    response
}
