// 목적:
// - 성분(Ingredient) 검색 코어 런타임의 진입점을 제공한다.
//
// 설명:
// - 관계형 커서 검색과 전문(full-text) 랭킹 검색, 두 파이프라인을 제공한다.
// - 두 파이프라인은 데이터 모델과 응답 규약만 공유하고 상태는 공유하지 않는다.
//
// 디자인 패턴:
// - 계층형 모듈 구조(api/core/index).
//
// 참조:
// - src/core/cursor_search.rs
// - src/core/ranked_search.rs

pub mod api;
pub mod config;
pub mod core;
pub mod index;
