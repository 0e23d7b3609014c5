use super::*;

// =========================================================================
// parse_search_response
// =========================================================================

#[test]
fn search_parse_keeps_relayed_fields_only() {
    let json = serde_json::json!({
        "page": 1,
        "total_results": 1,
        "results": [{
            "id": 27205,
            "title": "Inception",
            "overview": "A thief who steals corporate secrets.",
            "poster_path": "/inception.jpg",
            "release_date": "2010-07-15",
            "vote_average": 8.4,
            "popularity": 92.1,
            "original_language": "en"
        }]
    })
    .to_string();
    let results = parse_search_response(&json).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 27205);
    assert_eq!(results[0].title, "Inception");
    assert_eq!(results[0].poster_path.as_deref(), Some("/inception.jpg"));
}

#[test]
fn search_parse_defaults_sparse_result() {
    let json = serde_json::json!({
        "results": [{ "id": 7, "title": "Obscure" }]
    })
    .to_string();
    let results = parse_search_response(&json).unwrap();
    assert_eq!(results[0].overview, "");
    assert_eq!(results[0].poster_path, None);
    assert_eq!(results[0].release_date, "");
    assert!(results[0].vote_average.abs() < f64::EPSILON);
}

#[test]
fn search_parse_missing_results_field_is_empty() {
    let results = parse_search_response(r#"{"page": 1}"#).unwrap();
    assert!(results.is_empty());
}

#[test]
fn search_parse_rejects_non_json() {
    let err = parse_search_response("<html>not json</html>").unwrap_err();
    assert!(matches!(err, TmdbError::ApiParse(_)));
}

// =========================================================================
// parse_detail_response
// =========================================================================

#[test]
fn detail_parse_reads_genres_and_runtime() {
    let json = serde_json::json!({
        "id": 27205,
        "title": "Inception",
        "overview": "A thief who steals corporate secrets.",
        "release_date": "2010-07-15",
        "vote_average": 8.4,
        "genres": [{ "id": 28, "name": "Action" }, { "id": 878, "name": "Science Fiction" }],
        "runtime": 148,
        "budget": 160_000_000
    })
    .to_string();
    let detail = parse_detail_response(&json).unwrap();
    assert_eq!(detail.genres.len(), 2);
    assert_eq!(detail.genres[1].name, "Science Fiction");
    assert_eq!(detail.runtime, Some(148));
}

#[test]
fn detail_parse_defaults_missing_runtime() {
    let detail = parse_detail_response(r#"{"id": 9, "title": "Announced"}"#).unwrap();
    assert_eq!(detail.runtime, None);
    assert!(detail.genres.is_empty());
}
