use std::{any::Any, net::SocketAddr};

use axum::{response::IntoResponse, response::Response, routing::get, Router};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::envelope::Envelope;
use crate::state::AppState;
use crate::{dashboard, example, leave, profile, travel, users};

pub fn build_app(state: AppState) -> Router {
    let routes = Router::new()
        .merge(dashboard::router())
        .merge(users::router())
        .merge(travel::router())
        .merge(example::router())
        .merge(profile::router())
        .merge(leave::router())
        .route("/health", get(|| async { "ok" }))
        .with_state(state);
    with_layers(routes)
}

/// Panic recovery, CORS and request tracing around `routes`.
fn with_layers(routes: Router) -> Router {
    routes
        .layer(CatchPanicLayer::custom(panic_to_envelope))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri, status = tracing::field::Empty)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &tracing::Span| {
                        let status = res.status();
                        span.record("status", tracing::field::display(status));
                        let latency_ms = latency.as_millis() as u64;
                        if status.is_server_error() {
                            tracing::error!(%status, latency_ms, "response");
                        } else {
                            tracing::info!(%status, latency_ms, "response");
                        }
                    },
                ),
        )
}

fn panic_to_envelope(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "handler panicked");
    Envelope::<()>::server_error().into_response()
}

pub async fn serve(app: Router, host: &str, port: u16) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
