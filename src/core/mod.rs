// 목적:
// - 핵심 런타임 계층 모듈을 선언한다.
//
// 설명:
// - 두 검색 파이프라인과 공통 데이터 모델/오류 모델을 분리해 유지보수성을 높인다.
//
// 디자인 패턴:
// - 명시적 오류 모델(Explicit Error Model).
//
// 참조:
// - src/core/errors.rs
// - src/core/cursor_search.rs
// - src/core/ranked_search.rs

pub mod cursor_search;
pub mod errors;
pub mod es_query;
pub mod model;
pub mod ranked_search;
pub mod search_engine_http;
