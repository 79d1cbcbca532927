// 목적:
// - 환경변수 기반 서비스 설정을 적재한다.
//
// 설명:
// - DB/검색엔진 접속 정보와 바인딩 주소를 기동 시 한 번만 읽는다.
// - 잘못된 값은 InvalidConfig로 즉시 실패시킨다.
//
// 디자인 패턴:
// - 실패 빠르게(Fail Fast).
//
// 참조:
// - src/main.rs

use std::str::FromStr;

use crate::core::errors::{CoreError, CoreResult};
use crate::core::search_engine_http::SearchEngineConfigPayload;
use crate::index::sql::validate_identifier;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub database_url: String,
    pub ingredient_table: String,
    pub pool_min: u32,
    pub pool_max: u32,
    pub connect_timeout_ms: u64,
    pub statement_timeout_ms: u64,
    pub search_engine: SearchEngineConfigPayload,
}

impl AppConfig {
    /// 환경변수에서 설정을 읽는다. DATABASE_URL만 필수다.
    pub fn from_env() -> CoreResult<Self> {
        let database_url = required("DATABASE_URL")?;
        let ingredient_table = env_or("INGREDIENT_TABLE", "ingredients");
        validate_identifier(&ingredient_table, "INGREDIENT_TABLE")?;

        let config = Self {
            bind_addr: env_or("BIND_ADDR", "0.0.0.0:8000"),
            database_url,
            ingredient_table,
            pool_min: env_parse_or("DB_POOL_MIN", 1)?,
            pool_max: env_parse_or("DB_POOL_MAX", 10)?,
            connect_timeout_ms: env_parse_or("DB_CONNECT_TIMEOUT_MS", 3_000)?,
            statement_timeout_ms: env_parse_or("DB_STATEMENT_TIMEOUT_MS", 5_000)?,
            search_engine: SearchEngineConfigPayload {
                base_url: env_or("SEARCH_ENGINE_URL", "http://localhost:9200"),
                index: env_or("SEARCH_INDEX", "ingredients"),
                timeout_ms: env_parse_or("SEARCH_ENGINE_TIMEOUT_MS", 3_000)?,
                auth_token: std::env::var("SEARCH_ENGINE_TOKEN").ok(),
            },
        };

        Ok(config)
    }
}

fn required(name: &str) -> CoreResult<String> {
    std::env::var(name).map_err(|_| {
        CoreError::InvalidConfig(format!("{} 환경변수가 설정되어 있지 않습니다", name))
    })
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_parse_or<T: FromStr>(name: &str, default: T) -> CoreResult<T> {
    match std::env::var(name) {
        Ok(raw) => raw.parse::<T>().map_err(|_| {
            CoreError::InvalidConfig(format!("{} 값을 숫자로 해석할 수 없습니다: {}", name, raw))
        }),
        Err(_) => Ok(default),
    }
}
