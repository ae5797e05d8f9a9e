use axum::{
    Json, Router,
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use tokio::time::Instant;

use std::sync::Arc;

use crate::{accounts, expenses, statistics};
use api_types::Message;
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

/// Log every request with its outcome.
async fn trace_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis();
    if status.is_server_error() {
        tracing::warn!(%method, %path, %status, elapsed_ms, "request failed");
    } else {
        tracing::debug!(%method, %path, %status, elapsed_ms, "request served");
    }
    response
}

async fn home() -> Json<Message> {
    Json(Message::new("Welcome to the Finance Dashboard!"))
}

/// Build the application router over `engine`.
pub fn router(engine: Engine) -> Router {
    let state = ServerState {
        engine: Arc::new(engine),
    };

    Router::new()
        .route("/", get(home))
        .route("/register", post(accounts::register))
        .route("/login", post(accounts::login))
        .route("/expenses", post(expenses::create))
        // `GET` takes an account id, `PUT`/`DELETE` an expense id.
        .route(
            "/expenses/{id}",
            get(expenses::list)
                .put(expenses::update)
                .delete(expenses::delete),
        )
        .route("/visualize/{user_id}", get(statistics::visualize))
        .layer(middleware::from_fn(trace_request))
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(engine)).await
}
