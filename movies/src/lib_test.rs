use super::*;

fn sample_summary() -> MovieSummary {
    MovieSummary {
        id: 27205,
        title: "Inception".to_owned(),
        overview: "A thief who steals corporate secrets.".to_owned(),
        poster_path: Some("/inception.jpg".to_owned()),
        release_date: "2010-07-15".to_owned(),
        vote_average: 8.4,
    }
}

#[test]
fn summary_round_trips_through_json() {
    let summary = sample_summary();
    let json = serde_json::to_string(&summary).expect("serialize");
    let back: MovieSummary = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, summary);
}

#[test]
fn summary_defaults_optional_fields() {
    let summary: MovieSummary =
        serde_json::from_str(r#"{"id": 1, "title": "Sparse"}"#).expect("deserialize");
    assert_eq!(summary.overview, "");
    assert_eq!(summary.poster_path, None);
    assert_eq!(summary.release_date, "");
    assert!(summary.vote_average.abs() < f64::EPSILON);
}

#[test]
fn search_response_defaults_missing_results_to_empty() {
    let response: SearchResponse = serde_json::from_str("{}").expect("deserialize");
    assert!(response.results.is_empty());
}

#[test]
fn detail_defaults_genres_and_runtime() {
    let detail: MovieDetail =
        serde_json::from_str(r#"{"id": 2, "title": "Unreleased"}"#).expect("deserialize");
    assert!(detail.genres.is_empty());
    assert_eq!(detail.runtime, None);
}

#[test]
fn chat_request_wire_shape_is_exact() {
    let request = ChatRequest { movie_id: 42, user_message: "Who directed this?".to_owned() };
    let value = serde_json::to_value(&request).expect("serialize");
    assert_eq!(
        value,
        serde_json::json!({ "movie_id": 42, "user_message": "Who directed this?" })
    );
}

#[test]
fn chat_request_defaults_missing_fields() {
    let request: ChatRequest = serde_json::from_str("{}").expect("deserialize");
    assert_eq!(request.movie_id, 0);
    assert_eq!(request.user_message, "");
}

#[test]
fn poster_thumb_url_uses_small_variant() {
    let url = poster_thumb_url(Some("/abc.jpg")).expect("url");
    assert_eq!(url, "https://image.tmdb.org/t/p/w200/abc.jpg");
}

#[test]
fn poster_large_url_uses_large_variant() {
    let url = poster_large_url(Some("/abc.jpg")).expect("url");
    assert_eq!(url, "https://image.tmdb.org/t/p/w500/abc.jpg");
}

#[test]
fn poster_url_absent_path_yields_none() {
    assert_eq!(poster_thumb_url(None), None);
    assert_eq!(poster_large_url(Some("")), None);
    assert_eq!(poster_large_url(Some("   ")), None);
}
