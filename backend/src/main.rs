use std::net::SocketAddr;
use axum::body::Body;
use axum::extract::Path;
use axum::http::header::HeaderName;
use axum::http::{header, HeaderValue, Method, Response, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

mod games;
mod logging;

pub async fn health_check() -> impl IntoResponse {
    Response::builder().status(200).body(Body::from("OK")).unwrap()
}

async fn serve_file(
    relative_path: &str,
    content_type: &'static str,
    error_log_prefix: &str,
) -> Result<(StatusCode, [(HeaderName, &'static str); 2], Vec<u8>), (StatusCode, &'static str)> {
    let current_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            error!("Failed to get current directory: {}", e);
            return Err((StatusCode::INTERNAL_SERVER_ERROR, "Server Error"));
        }
    };

    let path = current_dir.join(relative_path);

    match tokio::fs::read(&path).await {
        Ok(data) => Ok((
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, content_type),
                (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            ],
            data,
        )),
        Err(e) => {
            error!(
                "{}: {} (attempted path: {:?}, working dir: {:?})",
                error_log_prefix, e, path, current_dir
            );
            Err((StatusCode::NOT_FOUND, "Not Found"))
        }
    }
}

// Serves the Trunk build of the frontend. The index references its assets as
// /js-<hash> and /wasm-<hash>, matching the route patterns below.
async fn serve_frontend_index(
) -> Result<(StatusCode, [(HeaderName, &'static str); 2], Vec<u8>), (StatusCode, &'static str)> {
    serve_file(
        "../frontend/dist/index.html",
        "text/html",
        "Error reading index.html",
    )
    .await
}

async fn serve_frontend_js(
    Path(js_hash): Path<String>,
) -> Result<(StatusCode, [(HeaderName, &'static str); 2], Vec<u8>), (StatusCode, &'static str)> {
    let clean_hash = js_hash.trim_end_matches(".js");

    serve_file(
        &format!("../frontend/dist/frontend-{}.js", clean_hash),
        "application/javascript; charset=utf-8",
        "Error reading JavaScript file",
    )
    .await
}

async fn serve_frontend_wasm(
    Path(wasm_hash): Path<String>,
) -> Result<(StatusCode, [(HeaderName, &'static str); 2], Vec<u8>), (StatusCode, &'static str)> {
    serve_file(
        &format!("../frontend/dist/frontend-{}_bg.wasm", wasm_hash),
        "application/wasm",
        "Error reading WebAssembly file",
    )
    .await
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::from_path(".env").ok();
    logging::setup();

    let cors = CorsLayer::new()
        .allow_origin(vec![
            "http://127.0.0.1:8080".parse::<HeaderValue>().unwrap(),
            "http://127.0.0.1:3000".parse::<HeaderValue>().unwrap(),
        ])
        .allow_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(vec![HeaderName::from_static("content-type")]);

    let app = Router::new()
        .route("/js-:js_hash", get(serve_frontend_js))
        .route("/wasm-:wasm_hash", get(serve_frontend_wasm))
        .route("/api/health_check", get(health_check))
        .nest("/api", games::backend_roulette_game::create_router())
        .layer(cors)
        .route("/", get(serve_frontend_index))
        .fallback(serve_frontend_index);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    info!("listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
