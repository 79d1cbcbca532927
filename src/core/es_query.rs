// 목적:
// - 전문 검색엔진에 전달할 랭킹 질의 본문을 생성한다.
//
// 설명:
// - phrase-prefix/초성/fuzzy 절을 가중치와 함께 하나의 bool should로 묶는다.
// - '안전' 등급 문서에는 function_score로 +2.0을 가산한다(boost_mode=sum).
// - 형태소/초성 분석기는 인덱스 측 설정이며 여기서는 필드 계약만 소비한다.
//
// 디자인 패턴:
// - 빌더 함수(Builder Function).
//
// 참조:
// - src/core/ranked_search.rs
// - src/core/search_engine_http.rs

use serde_json::{json, Value};

use crate::core::model::SAFE_GRADE;

/// korean_name phrase-prefix 절 가중치.
pub const KOREAN_NAME_PREFIX_BOOST: f64 = 10.0;
/// english_name phrase-prefix 절 가중치.
pub const ENGLISH_NAME_PREFIX_BOOST: f64 = 8.0;
/// korean_name_chosung phrase-prefix 절 가중치.
pub const CHOSUNG_PREFIX_BOOST: f64 = 9.0;
/// '안전' 등급 문서에 가산되는 점수.
pub const SAFE_GRADE_WEIGHT: f64 = 2.0;

/// 오프셋 페이지네이션의 from 값을 계산한다.
pub fn page_offset(page: usize, size: usize) -> usize {
    page.saturating_sub(1) * size
}

/// 랭킹 검색 질의 본문을 생성한다. 검색어는 trim이 끝난 상태여야 한다.
pub fn build_ranked_query(keyword: &str, page: usize, size: usize) -> Value {
    json!({
        "from": page_offset(page, size),
        "size": size,
        "query": {
            "function_score": {
                "query": {
                    "bool": {
                        "should": [
                            {
                                "match_phrase_prefix": {
                                    "korean_name": {
                                        "query": keyword,
                                        "boost": KOREAN_NAME_PREFIX_BOOST
                                    }
                                }
                            },
                            {
                                "match_phrase_prefix": {
                                    "english_name": {
                                        "query": keyword,
                                        "boost": ENGLISH_NAME_PREFIX_BOOST
                                    }
                                }
                            },
                            {
                                "match_phrase_prefix": {
                                    "korean_name_chosung": {
                                        "query": keyword,
                                        "boost": CHOSUNG_PREFIX_BOOST
                                    }
                                }
                            },
                            {
                                "multi_match": {
                                    "query": keyword,
                                    "fields": [
                                        "korean_name^3",
                                        "english_name^2",
                                        "description"
                                    ],
                                    "type": "best_fields",
                                    "fuzziness": "AUTO"
                                }
                            }
                        ],
                        "minimum_should_match": 1
                    }
                },
                "functions": [
                    {
                        "filter": { "term": { "caution_grade": SAFE_GRADE } },
                        "weight": SAFE_GRADE_WEIGHT
                    }
                ],
                "score_mode": "sum",
                "boost_mode": "sum"
            }
        },
        "highlight": {
            "pre_tags": ["<em>"],
            "post_tags": ["</em>"],
            "fields": {
                "korean_name": {},
                "english_name": {},
                "description": {}
            }
        }
    })
}
