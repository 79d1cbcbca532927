// 목적:
// - SQL 관련 공통 유틸리티를 제공한다.
//
// 설명:
// - 동적 테이블명 검증, LIKE 패턴 이스케이프 등 DB 안전성 경계를 담당한다.
//
// 디자인 패턴:
// - 가드 함수(Guard Function).
//
// 참조:
// - src/index/postgres_repo.rs

use crate::core::errors::{CoreError, CoreResult};

/// 테이블 식별자의 허용 문자를 검증한다.
pub fn validate_identifier(value: &str, field_name: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::InvalidConfig(format!(
            "{}는 비어 있을 수 없습니다",
            field_name
        )));
    }

    let valid = value
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '_');

    if !valid {
        return Err(CoreError::InvalidConfig(format!(
            "{}에는 영문/숫자/밑줄만 사용할 수 있습니다: {}",
            field_name, value
        )));
    }

    Ok(())
}

/// 검색어의 LIKE 메타문자(\, %, _)를 이스케이프한다.
/// 사용자 입력이 와일드카드로 동작하지 않게 한다.
pub fn escape_like_pattern(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for ch in keyword.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// prefix 매칭용 LIKE 패턴을 만든다.
pub fn prefix_pattern(keyword: &str) -> String {
    format!("{}%", escape_like_pattern(keyword))
}

/// substring 매칭용 LIKE 패턴을 만든다.
pub fn contains_pattern(keyword: &str) -> String {
    format!("%{}%", escape_like_pattern(keyword))
}
