// 목적:
// - 전문 검색엔진에 대한 HTTP 호출을 담당한다.
//
// 설명:
// - 구조화 질의 본문을 인덱스 _search 엔드포인트에 전달하고 히트를 파싱한다.
// - 비정상 상태 코드는 상태/본문을 담은 단일 엔진 오류로 올린다.
//
// 디자인 패턴:
// - 어댑터(Adapter).
//
// 참조:
// - src/core/ranked_search.rs

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::core::errors::{CoreError, CoreResult};
use crate::core::model::IngredientRecord;
use crate::core::ranked_search::SearchEngine;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchEngineConfigPayload {
    pub base_url: String,
    pub index: String,
    pub timeout_ms: u64,
    pub auth_token: Option<String>,
}

/// 엔진이 반환한 단일 히트. highlight는 필드명 -> 스니펫 목록이다.
#[derive(Debug, Clone)]
pub struct EngineHit {
    pub record: IngredientRecord,
    pub score: Option<f64>,
    pub highlight: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct EngineSearchOutcome {
    pub total: u64,
    pub hits: Vec<EngineHit>,
}

#[derive(Clone)]
pub struct SearchEngineHttpClient {
    client: Client,
    config: SearchEngineConfigPayload,
}

impl SearchEngineHttpClient {
    pub fn new(config: SearchEngineConfigPayload) -> CoreResult<Self> {
        if config.base_url.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "search_engine.base_url은 비어 있을 수 없습니다".to_string(),
            ));
        }

        if config.index.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "search_engine.index는 비어 있을 수 없습니다".to_string(),
            ));
        }

        if config.timeout_ms == 0 {
            return Err(CoreError::InvalidConfig(
                "search_engine.timeout_ms는 1 이상이어야 합니다".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|error| {
                CoreError::SearchEngine(format!("HTTP 클라이언트 생성 실패: {}", error))
            })?;

        Ok(Self { client, config })
    }

    /// 구성된 인덱스에 _search 요청을 보낸다.
    pub async fn search_index(&self, body: &Value) -> CoreResult<EngineSearchOutcome> {
        let url = format!(
            "{}/{}/_search",
            self.config.base_url.trim_end_matches('/'),
            self.config.index
        );

        let mut request_builder = self.client.post(&url).json(body);
        if let Some(token) = self.config.auth_token.as_ref() {
            request_builder = request_builder.bearer_auth(token);
        }

        let response = request_builder
            .send()
            .await
            .map_err(|error| CoreError::SearchEngine(format!("엔진 요청 실패: {}", error)))?;

        let status = response.status();
        let response_body = response
            .text()
            .await
            .map_err(|error| CoreError::SearchEngine(format!("엔진 본문 읽기 실패: {}", error)))?;

        if !status.is_success() {
            return Err(CoreError::SearchEngine(format!(
                "엔진 상태 오류: status={}, body={}",
                status, response_body
            )));
        }

        parse_search_response(&response_body)
    }
}

impl SearchEngine for SearchEngineHttpClient {
    async fn search(&self, body: &Value) -> CoreResult<EngineSearchOutcome> {
        self.search_index(body).await
    }
}

#[derive(Deserialize)]
struct RawSearchResponse {
    #[serde(default)]
    hits: RawHitsBlock,
}

#[derive(Deserialize, Default)]
struct RawHitsBlock {
    #[serde(default)]
    total: RawTotal,
    #[serde(default)]
    hits: Vec<RawHit>,
}

#[derive(Deserialize, Default)]
struct RawTotal {
    #[serde(default)]
    value: u64,
}

#[derive(Deserialize)]
struct RawHit {
    #[serde(rename = "_score")]
    score: Option<f64>,
    #[serde(rename = "_source", default)]
    source: RawSource,
    #[serde(default)]
    highlight: HashMap<String, Vec<String>>,
}

#[derive(Deserialize, Default)]
struct RawSource {
    id: Option<i64>,
    korean_name: Option<String>,
    english_name: Option<String>,
    description: Option<String>,
    caution_grade: Option<String>,
}

/// 엔진의 _search 응답 본문을 파싱한다.
pub fn parse_search_response(body: &str) -> CoreResult<EngineSearchOutcome> {
    let raw: RawSearchResponse = serde_json::from_str(body).map_err(|error| {
        CoreError::Serialization(format!("엔진 응답 파싱 실패: {}", error))
    })?;

    let hits = raw
        .hits
        .hits
        .into_iter()
        .map(|hit| {
            let id = hit.source.id.ok_or_else(|| {
                CoreError::Serialization("엔진 히트에 id 필드가 없습니다".to_string())
            })?;

            Ok(EngineHit {
                record: IngredientRecord {
                    id,
                    korean_name: hit.source.korean_name,
                    english_name: hit.source.english_name,
                    description: hit.source.description,
                    caution_grade: hit.source.caution_grade,
                },
                score: hit.score,
                highlight: hit.highlight,
            })
        })
        .collect::<CoreResult<Vec<_>>>()?;

    Ok(EngineSearchOutcome {
        total: raw.hits.total.value,
        hits,
    })
}
