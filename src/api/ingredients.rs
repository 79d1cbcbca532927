// 목적:
// - 관계형 커서 검색 엔드포인트를 제공한다.
//
// 설명:
// - GET /ingredients/search?q=&limit=&cursor= 를 커서 파이프라인에 연결한다.
// - limit 범위(1..=100)는 여기서 검증하고, 공백 검색어는 파이프라인이
//   빈 성공 응답으로 처리한다.
//
// 참조:
// - src/core/cursor_search.rs

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::api::{bad_request, error_response, AppState};
use crate::core::cursor_search::{execute_cursor_search, CursorSearchRequest};
use crate::core::model::MAX_PAGE_LIMIT;

const DEFAULT_LIMIT: usize = 20;

#[derive(Debug, Deserialize)]
pub struct CursorSearchParams {
    pub q: String,
    #[serde(default = "default_limit")]
    pub limit: usize,
    pub cursor: Option<i64>,
}

const fn default_limit() -> usize {
    DEFAULT_LIMIT
}

pub async fn search_ingredients(
    State(state): State<AppState>,
    Query(params): Query<CursorSearchParams>,
) -> Response {
    if params.limit < 1 || params.limit > MAX_PAGE_LIMIT {
        return bad_request(format!(
            "limit은 1..={} 범위여야 합니다: {}",
            MAX_PAGE_LIMIT, params.limit
        ));
    }

    let request = CursorSearchRequest {
        query: params.q,
        limit: params.limit,
        cursor: params.cursor,
    };

    match execute_cursor_search(state.store.as_ref(), &request).await {
        Ok(response) => Json(response).into_response(),
        Err(error) => error_response(error),
    }
}
