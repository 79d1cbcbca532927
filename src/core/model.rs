// 목적:
// - 두 파이프라인이 공유하는 성분 데이터 모델을 정의한다.
//
// 설명:
// - id는 생성 시 단조 증가로 부여되는 유일 키이며 커서 정렬 키로도 사용한다.
// - caution_grade는 전문 검색에서 랭킹 신호로만 쓰이고 필터로는 쓰이지 않는다.
//
// 참조:
// - src/index/postgres_repo.rs
// - src/core/ranked_search.rs

use serde::{Deserialize, Serialize};

/// 안전 등급 문서에 더해지는 가산 가중치 판정 기준 값이다.
pub const SAFE_GRADE: &str = "안전";

/// 두 파이프라인 공통의 페이지당 최대 항목 수다.
pub const MAX_PAGE_LIMIT: usize = 100;

/// 성분 레코드. 두 파이프라인의 응답에 그대로 실린다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    pub id: i64,
    pub korean_name: Option<String>,
    pub english_name: Option<String>,
    pub description: Option<String>,
    pub caution_grade: Option<String>,
}
