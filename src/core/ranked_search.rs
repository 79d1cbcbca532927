// 목적:
// - 전문 검색엔진 기반 랭킹 검색 파이프라인을 실행한다.
//
// 설명:
// - 질의 본문 생성 -> 엔진 호출 -> 결과/하이라이트 정형화 순서로 처리한다.
// - 결과 순서는 엔진의 관련도 순서를 그대로 신뢰한다(요청 단위로만 유효).
// - 엔진 통신 오류는 재시도 없이 단일 오류로 올린다.
//
// 디자인 패턴:
// - 파이프라인(Pipeline) + 어댑터 추상화(Engine Seam).
//
// 참조:
// - src/core/es_query.rs
// - src/core/search_engine_http.rs

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::core::errors::{CoreError, CoreResult};
use crate::core::es_query::build_ranked_query;
use crate::core::model::IngredientRecord;
use crate::core::search_engine_http::EngineSearchOutcome;

#[derive(Debug, Clone)]
pub struct RankedSearchRequest {
    pub query: String,
    pub page: usize,
    pub size: usize,
}

/// 랭킹 검색 응답의 개별 항목. score/highlight는 해당 응답 안에서만 유효하다.
#[derive(Debug, Clone, Serialize)]
pub struct RankedHit {
    #[serde(flatten)]
    pub record: IngredientRecord,
    pub score: Option<f64>,
    pub highlight: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedSearchResponse {
    pub total: u64,
    pub page: usize,
    pub size: usize,
    pub results: Vec<RankedHit>,
}

/// 랭킹 검색이 소비하는 엔진 계약이다. 본문은 불투명한 구조화 질의로 전달한다.
#[allow(async_fn_in_trait)]
pub trait SearchEngine {
    async fn search(&self, body: &Value) -> CoreResult<EngineSearchOutcome>;
}

/// 랭킹 검색 파이프라인을 실행한다. 공백 검색어는 엔진 호출 전에 거부한다.
pub async fn execute_ranked_search<E: SearchEngine>(
    engine: &E,
    request: &RankedSearchRequest,
) -> CoreResult<RankedSearchResponse> {
    let keyword = request.query.trim();
    if keyword.is_empty() {
        return Err(CoreError::InvalidInput(
            "검색어(q)는 비워둘 수 없습니다".to_string(),
        ));
    }

    let body = build_ranked_query(keyword, request.page, request.size);
    let outcome = engine.search(&body).await?;

    let results = outcome
        .hits
        .into_iter()
        .map(|hit| RankedHit {
            record: hit.record,
            score: hit.score,
            highlight: hit.highlight,
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        keyword,
        total = outcome.total,
        count = results.len(),
        "랭킹 검색: 엔진 응답 정형화 완료"
    );

    Ok(RankedSearchResponse {
        total: outcome.total,
        page: request.page,
        size: request.size,
        results,
    })
}
