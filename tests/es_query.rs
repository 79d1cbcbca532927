// 랭킹 질의 본문의 절 구성/가중치/가산 부스트 규칙을 검증한다.

use rstest::rstest;
use serde_json::{json, Value};

use ingredient_search::core::es_query::{build_ranked_query, page_offset};

fn should_clauses(body: &Value) -> &Vec<Value> {
    body["query"]["function_score"]["query"]["bool"]["should"]
        .as_array()
        .expect("should 절은 배열이어야 한다")
}

#[rstest]
#[case(1, 10, 0)]
#[case(2, 10, 10)]
#[case(3, 10, 20)]
#[case(2, 25, 25)]
#[case(1, 100, 0)]
fn offset_follows_page_arithmetic(#[case] page: usize, #[case] size: usize, #[case] expected: usize) {
    assert_eq!(page_offset(page, size), expected);
}

#[test]
fn body_carries_from_and_size() {
    let body = build_ranked_query("레티놀", 4, 25);
    assert_eq!(body["from"], json!(75));
    assert_eq!(body["size"], json!(25));
}

#[test]
fn phrase_prefix_clauses_carry_field_boosts() {
    let body = build_ranked_query("나이아신", 1, 10);
    let clauses = should_clauses(&body);
    assert_eq!(clauses.len(), 4);

    assert_eq!(
        clauses[0]["match_phrase_prefix"]["korean_name"]["boost"],
        json!(10.0)
    );
    assert_eq!(
        clauses[1]["match_phrase_prefix"]["english_name"]["boost"],
        json!(8.0)
    );
    assert_eq!(
        clauses[2]["match_phrase_prefix"]["korean_name_chosung"]["boost"],
        json!(9.0)
    );
    assert_eq!(
        clauses[0]["match_phrase_prefix"]["korean_name"]["query"],
        json!("나이아신")
    );
}

#[test]
fn fuzzy_clause_uses_weighted_best_fields() {
    let body = build_ranked_query("niacinamide", 1, 10);
    let fuzzy = &should_clauses(&body)[3]["multi_match"];

    assert_eq!(
        fuzzy["fields"],
        json!(["korean_name^3", "english_name^2", "description"])
    );
    assert_eq!(fuzzy["type"], json!("best_fields"));
    assert_eq!(fuzzy["fuzziness"], json!("AUTO"));
}

#[test]
fn at_least_one_should_clause_must_match() {
    let body = build_ranked_query("판테놀", 1, 10);
    assert_eq!(
        body["query"]["function_score"]["query"]["bool"]["minimum_should_match"],
        json!(1)
    );
}

#[test]
fn safe_grade_boost_is_additive() {
    // '안전' 등급은 곱이 아니라 +2.0 가산이어야 한다(boost_mode=sum).
    let body = build_ranked_query("세라마이드", 1, 10);
    let function_score = &body["query"]["function_score"];

    assert_eq!(
        function_score["functions"][0]["filter"]["term"]["caution_grade"],
        json!("안전")
    );
    assert_eq!(function_score["functions"][0]["weight"], json!(2.0));
    assert_eq!(function_score["score_mode"], json!("sum"));
    assert_eq!(function_score["boost_mode"], json!("sum"));
}

#[test]
fn highlight_covers_all_text_fields() {
    let body = build_ranked_query("히알루론산", 1, 10);
    let highlight = &body["highlight"];

    assert_eq!(highlight["pre_tags"], json!(["<em>"]));
    assert_eq!(highlight["post_tags"], json!(["</em>"]));
    for field in ["korean_name", "english_name", "description"] {
        assert!(highlight["fields"][field].is_object());
    }
}
