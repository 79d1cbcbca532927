// 목적:
// - HTTP API 경계 모듈을 선언한다.
//
// 설명:
// - 엔드포인트별 핸들러를 분리하고 공유 상태/오류 매핑을 한곳에서 관리한다.
// - limit/page/size 범위 검증은 이 경계에서 끝낸다.
//
// 디자인 패턴:
// - 파사드(Facade) + 실패 빠르게(Fail Fast).
//
// 참조:
// - src/api/ingredients.rs
// - src/api/search.rs

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;

use crate::core::errors::CoreError;
use crate::core::search_engine_http::SearchEngineHttpClient;
use crate::index::postgres_repo::IngredientRepository;

pub mod ingredients;
pub mod search;

/// 프로세스 전역에서 공유되는 핸들. 기동 시 한 번만 생성한다.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<IngredientRepository>,
    pub engine: Arc<SearchEngineHttpClient>,
}

/// 전체 라우터를 구성한다.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/ingredients/search", get(ingredients::search_ingredients))
        .route("/search/ingredients", get(search::search_ingredients_ranked))
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// 경계 검증 실패(400) 응답을 만든다.
pub(crate) fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

/// 코어 오류를 HTTP 상태로 매핑한다.
pub(crate) fn error_response(error: CoreError) -> Response {
    let status = match &error {
        CoreError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        CoreError::Db(_) | CoreError::SearchEngine(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::warn!(%error, "백엔드 호출 실패");
    }

    (
        status,
        Json(ErrorBody {
            error: error.to_string(),
        }),
    )
        .into_response()
}
