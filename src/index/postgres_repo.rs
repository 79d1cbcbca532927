// 목적:
// - PostgreSQL 기반 성분 저장소 접근을 담당한다.
//
// 설명:
// - 커서 검색의 1차(prefix)/2차(substring) 페이지 조회를 제공한다.
// - 테이블명은 실행 시 검증해 SQL 주입 위험을 줄인다.
// - 두 조회 모두 id 오름차순 정렬이며, 커서는 id > cursor 범위로만 좁힌다.
//
// 디자인 패턴:
// - 저장소 패턴(Repository Pattern).
//
// 참조:
// - src/index/sql.rs
// - src/core/cursor_search.rs

use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use crate::core::cursor_search::IngredientStore;
use crate::core::errors::{CoreError, CoreResult};
use crate::core::model::IngredientRecord;
use crate::index::sql::{contains_pattern, prefix_pattern, validate_identifier};

const RECORD_COLUMNS: &str = "id, korean_name, english_name, description, caution_grade";

pub struct IngredientRepository {
    pool: PgPool,
    table: String,
}

impl IngredientRepository {
    pub async fn new(
        dsn: &str,
        table: &str,
        pool_min: u32,
        pool_max: u32,
        connect_timeout_ms: u64,
        statement_timeout_ms: u64,
    ) -> CoreResult<Self> {
        if dsn.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "postgres.dsn은 비어 있을 수 없습니다".to_string(),
            ));
        }

        validate_identifier(table, "postgres.ingredient_table")?;

        let pool = PgPoolOptions::new()
            .min_connections(pool_min)
            .max_connections(pool_max.max(pool_min))
            .acquire_timeout(std::time::Duration::from_millis(connect_timeout_ms.max(1)))
            .connect(dsn)
            .await
            .map_err(|error| CoreError::Db(format!("Postgres 연결 실패: {}", error)))?;

        let timeout_statement = format!("SET statement_timeout = {}", statement_timeout_ms.max(1));
        sqlx::query(&timeout_statement)
            .execute(&pool)
            .await
            .map_err(|error| CoreError::Db(format!("statement_timeout 설정 실패: {}", error)))?;

        Ok(Self {
            pool,
            table: table.to_string(),
        })
    }

    /// 1차 조회: 이름 필드 prefix 매칭. description은 조건에 포함하지 않는다.
    pub async fn fetch_prefix_matches(
        &self,
        keyword: &str,
        cursor: Option<i64>,
        limit: usize,
    ) -> CoreResult<Vec<IngredientRecord>> {
        let pattern = prefix_pattern(keyword);
        let sql = format!(
            "SELECT {} FROM {} \
             WHERE ($1::bigint IS NULL OR id > $1) \
             AND (korean_name LIKE $2 ESCAPE '\\' OR english_name LIKE $2 ESCAPE '\\') \
             ORDER BY id ASC LIMIT $3",
            RECORD_COLUMNS, self.table
        );

        let rows = sqlx::query(&sql)
            .bind(cursor)
            .bind(&pattern)
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|error| CoreError::Db(format!("prefix 조회 실패: {}", error)))?;

        rows.into_iter()
            .map(map_ingredient_row)
            .collect::<CoreResult<Vec<_>>>()
    }

    /// 2차 조회: 세 텍스트 필드 substring 매칭. exclude_ids는 결과에서 배제한다.
    pub async fn fetch_substring_matches(
        &self,
        keyword: &str,
        cursor: Option<i64>,
        limit: usize,
        exclude_ids: &[i64],
    ) -> CoreResult<Vec<IngredientRecord>> {
        let pattern = contains_pattern(keyword);
        let sql = format!(
            "SELECT {} FROM {} \
             WHERE ($1::bigint IS NULL OR id > $1) \
             AND (korean_name LIKE $2 ESCAPE '\\' OR english_name LIKE $2 ESCAPE '\\' \
                  OR description LIKE $2 ESCAPE '\\') \
             AND id <> ALL($3) \
             ORDER BY id ASC LIMIT $4",
            RECORD_COLUMNS, self.table
        );

        let rows = sqlx::query(&sql)
            .bind(cursor)
            .bind(&pattern)
            .bind(exclude_ids.to_vec())
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|error| CoreError::Db(format!("substring 조회 실패: {}", error)))?;

        rows.into_iter()
            .map(map_ingredient_row)
            .collect::<CoreResult<Vec<_>>>()
    }
}

impl IngredientStore for IngredientRepository {
    async fn fetch_prefix_page(
        &self,
        keyword: &str,
        cursor: Option<i64>,
        limit: usize,
    ) -> CoreResult<Vec<IngredientRecord>> {
        self.fetch_prefix_matches(keyword, cursor, limit).await
    }

    async fn fetch_substring_page(
        &self,
        keyword: &str,
        cursor: Option<i64>,
        limit: usize,
        exclude_ids: &[i64],
    ) -> CoreResult<Vec<IngredientRecord>> {
        self.fetch_substring_matches(keyword, cursor, limit, exclude_ids)
            .await
    }
}

fn map_ingredient_row(row: PgRow) -> CoreResult<IngredientRecord> {
    let id = row
        .try_get::<i64, _>("id")
        .map_err(|error| CoreError::Db(format!("ingredient.id 파싱 실패: {}", error)))?;
    let korean_name = row
        .try_get::<Option<String>, _>("korean_name")
        .map_err(|error| CoreError::Db(format!("ingredient.korean_name 파싱 실패: {}", error)))?;
    let english_name = row
        .try_get::<Option<String>, _>("english_name")
        .map_err(|error| CoreError::Db(format!("ingredient.english_name 파싱 실패: {}", error)))?;
    let description = row
        .try_get::<Option<String>, _>("description")
        .map_err(|error| CoreError::Db(format!("ingredient.description 파싱 실패: {}", error)))?;
    let caution_grade = row
        .try_get::<Option<String>, _>("caution_grade")
        .map_err(|error| CoreError::Db(format!("ingredient.caution_grade 파싱 실패: {}", error)))?;

    Ok(IngredientRecord {
        id,
        korean_name,
        english_name,
        description,
        caution_grade,
    })
}
