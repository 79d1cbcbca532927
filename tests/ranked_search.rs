// 랭킹 검색 파이프라인의 입력 검증/결과 정형화와 엔진 응답 파싱을 검증한다.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use serde_json::{json, Value};

use ingredient_search::core::errors::{CoreError, CoreResult};
use ingredient_search::core::model::IngredientRecord;
use ingredient_search::core::ranked_search::{
    execute_ranked_search, RankedSearchRequest, SearchEngine,
};
use ingredient_search::core::search_engine_http::{
    parse_search_response, EngineHit, EngineSearchOutcome,
};

struct StubEngine {
    total: u64,
    hits: Vec<EngineHit>,
    fail: bool,
    calls: AtomicUsize,
    last_body: Mutex<Option<Value>>,
}

impl StubEngine {
    fn with_hits(total: u64, hits: Vec<EngineHit>) -> Self {
        Self {
            total,
            hits,
            fail: false,
            calls: AtomicUsize::new(0),
            last_body: Mutex::new(None),
        }
    }

    fn failing() -> Self {
        Self {
            total: 0,
            hits: Vec::new(),
            fail: true,
            calls: AtomicUsize::new(0),
            last_body: Mutex::new(None),
        }
    }
}

impl SearchEngine for StubEngine {
    async fn search(&self, body: &Value) -> CoreResult<EngineSearchOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_body.lock().unwrap() = Some(body.clone());

        if self.fail {
            return Err(CoreError::SearchEngine("엔진 중단".to_string()));
        }

        Ok(EngineSearchOutcome {
            total: self.total,
            hits: self.hits.clone(),
        })
    }
}

fn hit(id: i64, korean_name: &str, score: f64) -> EngineHit {
    EngineHit {
        record: IngredientRecord {
            id,
            korean_name: Some(korean_name.to_string()),
            english_name: None,
            description: None,
            caution_grade: Some("안전".to_string()),
        },
        score: Some(score),
        highlight: HashMap::from([(
            "korean_name".to_string(),
            vec![format!("<em>{}</em>", korean_name)],
        )]),
    }
}

fn request(query: &str, page: usize, size: usize) -> RankedSearchRequest {
    RankedSearchRequest {
        query: query.to_string(),
        page,
        size,
    }
}

#[tokio::test]
async fn blank_query_is_rejected_before_any_engine_call() {
    let engine = StubEngine::with_hits(0, vec![]);

    let error = execute_ranked_search(&engine, &request("   ", 1, 10))
        .await
        .expect_err("blank query must be rejected");

    assert!(matches!(error, CoreError::InvalidInput(_)));
    assert_eq!(engine.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn shapes_engine_hits_into_response() {
    let engine = StubEngine::with_hits(42, vec![hit(3, "나이아신아마이드", 12.5), hit(8, "레티놀", 4.0)]);

    let response = execute_ranked_search(&engine, &request("나이아신", 2, 5))
        .await
        .expect("search must succeed");

    assert_eq!(response.total, 42);
    assert_eq!(response.page, 2);
    assert_eq!(response.size, 5);
    assert_eq!(response.results.len(), 2);
    assert_eq!(response.results[0].record.id, 3);
    assert_eq!(response.results[0].score, Some(12.5));
    assert_eq!(
        response.results[0].highlight["korean_name"],
        vec!["<em>나이아신아마이드</em>".to_string()]
    );
}

#[tokio::test]
async fn ranked_hit_serializes_record_fields_at_top_level() {
    let engine = StubEngine::with_hits(1, vec![hit(3, "판테놀", 2.0)]);

    let response = execute_ranked_search(&engine, &request("판테놀", 1, 10))
        .await
        .expect("search must succeed");

    let serialized = serde_json::to_value(&response.results[0]).expect("must serialize");
    assert_eq!(serialized["id"], json!(3));
    assert_eq!(serialized["korean_name"], json!("판테놀"));
    assert_eq!(serialized["score"], json!(2.0));
    assert!(serialized["highlight"]["korean_name"].is_array());
}

#[tokio::test]
async fn request_body_uses_offset_pagination() {
    let engine = StubEngine::with_hits(0, vec![]);

    execute_ranked_search(&engine, &request("세라마이드", 3, 10))
        .await
        .expect("search must succeed");

    let body = engine.last_body.lock().unwrap().clone().expect("body must be sent");
    assert_eq!(body["from"], json!(20));
    assert_eq!(body["size"], json!(10));
}

#[tokio::test]
async fn engine_failure_surfaces_as_single_error() {
    let engine = StubEngine::failing();

    let error = execute_ranked_search(&engine, &request("레티놀", 1, 10))
        .await
        .expect_err("engine failure must propagate");

    assert!(matches!(error, CoreError::SearchEngine(_)));
    assert_eq!(engine.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn parses_engine_search_response_body() {
    let body = json!({
        "took": 4,
        "hits": {
            "total": { "value": 2, "relation": "eq" },
            "hits": [
                {
                    "_score": 14.2,
                    "_source": {
                        "id": 11,
                        "korean_name": "나이아신아마이드",
                        "english_name": "Niacinamide",
                        "description": "미백 기능성 고시 성분",
                        "caution_grade": "안전"
                    },
                    "highlight": {
                        "korean_name": ["<em>나이아신</em>아마이드"]
                    }
                },
                {
                    "_score": 3.1,
                    "_source": { "id": 12, "korean_name": "나이아신" }
                }
            ]
        }
    })
    .to_string();

    let outcome = parse_search_response(&body).expect("body must parse");

    assert_eq!(outcome.total, 2);
    assert_eq!(outcome.hits.len(), 2);
    assert_eq!(outcome.hits[0].record.id, 11);
    assert_eq!(
        outcome.hits[0].record.english_name.as_deref(),
        Some("Niacinamide")
    );
    assert_eq!(outcome.hits[0].score, Some(14.2));
    assert_eq!(
        outcome.hits[0].highlight["korean_name"],
        vec!["<em>나이아신</em>아마이드".to_string()]
    );
    assert!(outcome.hits[1].highlight.is_empty());
}

#[test]
fn engine_hit_without_id_is_a_parse_error() {
    let body = json!({
        "hits": {
            "total": { "value": 1 },
            "hits": [ { "_score": 1.0, "_source": { "korean_name": "미상" } } ]
        }
    })
    .to_string();

    let error = parse_search_response(&body).expect_err("missing id must fail");
    assert!(matches!(error, CoreError::Serialization(_)));
}
