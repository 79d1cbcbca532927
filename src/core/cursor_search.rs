// 목적:
// - 관계형 저장소 기반 커서 검색 파이프라인을 실행한다.
//
// 설명:
// - 1차 prefix 조회 -> 2차 substring 보강 조회 -> 병합/중복 제거 순서로 처리한다.
// - 페이지네이션은 id 오름차순 커서(id > cursor) 방식만 사용한다.
// - 2차 조회는 1차 결과의 id 집합을 제외 조건으로 받으므로 두 단계는 순차 실행한다.
//
// 디자인 패턴:
// - 파이프라인(Pipeline) + 저장소 추상화(Repository Seam).
//
// 참조:
// - src/index/postgres_repo.rs
// - src/api/ingredients.rs

use serde::Serialize;

use crate::core::errors::CoreResult;
use crate::core::model::IngredientRecord;

#[derive(Debug, Clone)]
pub struct CursorSearchRequest {
    pub query: String,
    pub limit: usize,
    pub cursor: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CursorSearchResponse {
    pub items: Vec<IngredientRecord>,
    pub next_cursor: Option<i64>,
    pub has_more: bool,
}

/// 커서 검색이 소비하는 저장소 계약이다.
///
/// - 두 조회 모두 id 오름차순으로 정렬된 결과를 반환해야 한다.
/// - cursor가 주어지면 id > cursor 범위만 포함해야 한다.
#[allow(async_fn_in_trait)]
pub trait IngredientStore {
    /// 1차 조회: korean_name/english_name prefix 매칭.
    async fn fetch_prefix_page(
        &self,
        keyword: &str,
        cursor: Option<i64>,
        limit: usize,
    ) -> CoreResult<Vec<IngredientRecord>>;

    /// 2차 조회: korean_name/english_name/description substring 매칭.
    /// exclude_ids에 포함된 id는 결과에서 제외해야 한다.
    async fn fetch_substring_page(
        &self,
        keyword: &str,
        cursor: Option<i64>,
        limit: usize,
        exclude_ids: &[i64],
    ) -> CoreResult<Vec<IngredientRecord>>;
}

/// 커서 검색 파이프라인을 실행한다.
///
/// - 공백 검색어는 오류가 아니라 빈 성공 응답으로 처리한다.
/// - limit 범위 검증(1..=100)은 API 경계에서 끝난 상태로 들어온다.
pub async fn execute_cursor_search<S: IngredientStore>(
    store: &S,
    request: &CursorSearchRequest,
) -> CoreResult<CursorSearchResponse> {
    let keyword = request.query.trim();
    if keyword.is_empty() {
        return Ok(CursorSearchResponse {
            items: Vec::new(),
            next_cursor: None,
            has_more: false,
        });
    }

    // 1차: prefix 매칭. description은 1차 조건에서 제외한다(응답에는 항상 포함).
    let mut phase1 = store
        .fetch_prefix_page(keyword, request.cursor, request.limit + 1)
        .await?;

    if phase1.len() > request.limit {
        phase1.truncate(request.limit);
        let next_cursor = phase1.last().map(|record| record.id);
        tracing::debug!(
            keyword,
            count = phase1.len(),
            "커서 검색: prefix 단계에서 페이지가 가득 참"
        );
        return Ok(CursorSearchResponse {
            items: phase1,
            next_cursor,
            has_more: true,
        });
    }

    // 2차: substring 보강. 1차에서 집계한 id 집합을 제외해 중복을 차단한다.
    let remaining = request.limit - phase1.len();
    let phase1_ids = phase1.iter().map(|record| record.id).collect::<Vec<_>>();
    let mut phase2 = if remaining > 0 {
        store
            .fetch_substring_page(keyword, request.cursor, remaining + 1, &phase1_ids)
            .await?
    } else {
        Vec::new()
    };

    let has_more = phase2.len() > remaining;
    phase2.truncate(remaining);

    let mut items = phase1;
    items.append(&mut phase2);

    let next_cursor = items.last().map(|record| record.id).or(request.cursor);

    tracing::debug!(
        keyword,
        count = items.len(),
        has_more,
        "커서 검색: 병합 완료"
    );

    Ok(CursorSearchResponse {
        items,
        next_cursor,
        has_more,
    })
}
