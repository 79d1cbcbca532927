// 목적:
// - 전문 검색엔진 랭킹 검색 엔드포인트를 제공한다.
//
// 설명:
// - GET /search/ingredients?q=&page=&size= 를 랭킹 파이프라인에 연결한다.
// - page(≥1)/size(1..=100) 범위는 여기서 검증하고, 공백 검색어 거부는
//   파이프라인이 엔진 호출 전에 수행한다.
//
// 참조:
// - src/core/ranked_search.rs

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::api::{bad_request, error_response, AppState};
use crate::core::model::MAX_PAGE_LIMIT;
use crate::core::ranked_search::{execute_ranked_search, RankedSearchRequest};

const DEFAULT_SIZE: usize = 10;

#[derive(Debug, Deserialize)]
pub struct RankedSearchParams {
    pub q: String,
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_size")]
    pub size: usize,
}

const fn default_page() -> usize {
    1
}

const fn default_size() -> usize {
    DEFAULT_SIZE
}

pub async fn search_ingredients_ranked(
    State(state): State<AppState>,
    Query(params): Query<RankedSearchParams>,
) -> Response {
    if params.page < 1 {
        return bad_request(format!("page는 1 이상이어야 합니다: {}", params.page));
    }

    if params.size < 1 || params.size > MAX_PAGE_LIMIT {
        return bad_request(format!(
            "size는 1..={} 범위여야 합니다: {}",
            MAX_PAGE_LIMIT, params.size
        ));
    }

    let request = RankedSearchRequest {
        query: params.q,
        page: params.page,
        size: params.size,
    };

    match execute_ranked_search(state.engine.as_ref(), &request).await {
        Ok(response) => Json(response).into_response(),
        Err(error) => error_response(error),
    }
}
