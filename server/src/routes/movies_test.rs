use super::*;
use crate::state::test_helpers::{dummy_detail, dummy_summary, state_with, MockMovieDb};

// =========================================================================
// search_movie
// =========================================================================

#[tokio::test]
async fn search_returns_results_envelope() {
    let state = state_with(
        MockMovieDb::with_results(vec![dummy_summary(1, "Alien"), dummy_summary(2, "Aliens")]),
        None,
    );
    let params = SearchParams { query: "alien".to_owned() };
    let Json(body) = search_movie(State(state), Query(params)).await.unwrap();
    assert_eq!(body.results.len(), 2);
    assert_eq!(body.results[1].title, "Aliens");
}

#[tokio::test]
async fn search_empty_query_is_bad_request() {
    let state = state_with(MockMovieDb::with_results(Vec::new()), None);
    let params = SearchParams { query: "   ".to_owned() };
    let (status, Json(body)) = search_movie(State(state), Query(params)).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error, "Query parameter is required");
}

#[tokio::test]
async fn search_upstream_failure_is_internal_error() {
    let state = state_with(MockMovieDb::failing(503), None);
    let params = SearchParams { query: "alien".to_owned() };
    let (status, Json(body)) = search_movie(State(state), Query(params)).await.unwrap_err();
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.error, "Failed to fetch data from TMDB");
}

#[tokio::test]
async fn search_no_matches_is_empty_list_not_error() {
    let state = state_with(MockMovieDb::with_results(Vec::new()), None);
    let params = SearchParams { query: "zzzzz".to_owned() };
    let Json(body) = search_movie(State(state), Query(params)).await.unwrap();
    assert!(body.results.is_empty());
}

// =========================================================================
// movie_details
// =========================================================================

#[tokio::test]
async fn detail_returns_full_record() {
    let state = state_with(MockMovieDb::with_detail(dummy_detail()), None);
    let Json(body) = movie_details(State(state), Path(27205)).await.unwrap();
    assert_eq!(body.id, 27205);
    assert_eq!(body.runtime, Some(148));
}

#[tokio::test]
async fn detail_upstream_failure_is_internal_error() {
    let state = state_with(MockMovieDb::failing(404), None);
    let (status, Json(body)) = movie_details(State(state), Path(999)).await.unwrap_err();
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.error, "Failed to fetch movie details from TMDB");
}
