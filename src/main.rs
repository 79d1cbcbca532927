// 목적:
// - 성분 검색 서버 프로세스의 진입점을 제공한다.
//
// 설명:
// - 설정 적재 -> 저장소/엔진 핸들 1회 생성 -> 라우터 기동 순서로 수행한다.
// - 저장소 풀과 엔진 클라이언트는 프로세스 전역에서 재사용한다.
//
// 참조:
// - src/api/mod.rs
// - src/config.rs

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use ingredient_search::api::{build_router, AppState};
use ingredient_search::config::AppConfig;
use ingredient_search::core::errors::{CoreError, CoreResult};
use ingredient_search::core::search_engine_http::SearchEngineHttpClient;
use ingredient_search::index::postgres_repo::IngredientRepository;

#[tokio::main]
async fn main() -> CoreResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;

    let store = IngredientRepository::new(
        &config.database_url,
        &config.ingredient_table,
        config.pool_min,
        config.pool_max,
        config.connect_timeout_ms,
        config.statement_timeout_ms,
    )
    .await?;

    let engine = SearchEngineHttpClient::new(config.search_engine.clone())?;

    let state = AppState {
        store: Arc::new(store),
        engine: Arc::new(engine),
    };

    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|error| {
            CoreError::InvalidConfig(format!("주소 바인딩 실패({}): {}", config.bind_addr, error))
        })?;

    tracing::info!(addr = %config.bind_addr, "성분 검색 서버 기동");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|error| CoreError::Runtime(format!("서버 실행 실패: {}", error)))?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("종료 시그널 핸들러 등록 실패");
    }
}
