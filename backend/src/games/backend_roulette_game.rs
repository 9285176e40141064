use axum::{
    debug_handler,
    http::StatusCode,
    routing::post,
    Json,
    Router,
};
use rand::rngs::OsRng;
use shared::shared_roulette_game::{random_roulette_value, ApiError, RouletteRollResponse};

pub fn create_router() -> Router {
    Router::new().route("/roulette", post(roll_roulette).fallback(method_not_allowed))
}

/// The mock outcome service: picks a pocket uniformly at random. No request
/// body, no session, no fairness guarantees.
#[debug_handler]
async fn roll_roulette() -> Json<RouletteRollResponse> {
    let mut rng = OsRng;
    let value = random_roulette_value(&mut rng);

    tracing::info!(
        "🎲 ROULETTE ROLL: ball landed on {} ({})",
        value.number(),
        value.color().label()
    );

    Json(RouletteRollResponse { value })
}

/// Every method except POST gets the structured 405 body the frontend can
/// surface.
#[debug_handler]
async fn method_not_allowed() -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ApiError::method_not_allowed()),
    )
}
