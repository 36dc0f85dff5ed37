use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Value};
use trivia_catalog::api::extract::IdPath;
use trivia_catalog::api::payloads::{PageParams, QuestionsPostBody, QuizRequest};
use trivia_catalog::api::routes::{
    create_or_search_questions, delete_question, play_quiz, retrieve_categories,
    retrieve_questions, retrieve_questions_by_category, route_not_found,
};
use trivia_catalog::api::AppState;
use trivia_catalog::infrastructure::seed_store;
use trivia_catalog::models::load_seed_catalog;
use trivia_catalog::{CatalogFlow, MemoryStore, QuestionStore};

async fn seeded_state() -> (Arc<MemoryStore>, AppState) {
    let catalog = load_seed_catalog(std::path::Path::new("data/trivia_seed.toml"))
        .await
        .expect("加载初始题库失败");
    let store = Arc::new(MemoryStore::new());
    seed_store(store.as_ref(), &catalog).unwrap();
    let state = AppState::new(CatalogFlow::new(store.clone()));
    (store, state)
}

fn page(n: &str) -> Query<PageParams> {
    Query(PageParams {
        page: Some(n.to_string()),
    })
}

fn body<T: serde::de::DeserializeOwned>(value: Value) -> Option<Json<T>> {
    Some(Json(serde_json::from_value(value).unwrap()))
}

async fn into_json(response: impl IntoResponse) -> (StatusCode, Value) {
    let response = response.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_retrieve_categories() {
    let (_, state) = seeded_state().await;
    let (status, data) = into_json(retrieve_categories(State(state)).await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["categories"]["1"], "Science");
    assert_eq!(data["categories"].as_object().unwrap().len(), 6);
}

#[tokio::test]
async fn test_retrieve_categories_empty_catalog() {
    let state = AppState::new(CatalogFlow::new(Arc::new(MemoryStore::new())));
    let (status, data) = into_json(retrieve_categories(State(state)).await).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        data,
        json!({"success": false, "error": 404, "message": "resource not found"})
    );
}

#[tokio::test]
async fn test_retrieve_questions() {
    let (_, state) = seeded_state().await;
    let (status, data) =
        into_json(retrieve_questions(State(state), Query(PageParams::default())).await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["totalQuestions"], 19);
    assert_eq!(data["questions"].as_array().unwrap().len(), 10);
    assert_eq!(data["currentCategory"], "");
    assert!(data["categories"].is_object());
}

#[tokio::test]
async fn test_retrieve_questions_paginated() {
    let (_, state) = seeded_state().await;
    let (status, data) = into_json(retrieve_questions(State(state), page("2")).await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["questions"].as_array().unwrap().len(), 9);
    assert_eq!(data["questions"][0]["id"], 11);
}

#[tokio::test]
async fn test_retrieve_questions_paginated_oob() {
    let (_, state) = seeded_state().await;
    let (status, data) = into_json(retrieve_questions(State(state), page("182")).await).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(data["success"], false);
}

#[tokio::test]
async fn test_non_numeric_page_falls_back_to_first() {
    let (_, state) = seeded_state().await;
    let (status, data) = into_json(retrieve_questions(State(state), page("abc")).await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["questions"][0]["id"], 1);
}

#[tokio::test]
async fn test_create_question() {
    let (store, state) = seeded_state().await;
    let request = body(json!({
        "question": "What's my age again?",
        "answer": "23",
        "difficulty": 1,
        "category": "5"
    }));
    let (status, data) = into_json(
        create_or_search_questions(State(state), Query(PageParams::default()), request).await,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data, json!({}));

    let created = store.all_questions().unwrap().pop().unwrap();
    assert_eq!(created.question, "What's my age again?");
    assert_eq!(created.category, 5);
}

#[tokio::test]
async fn test_create_question_error() {
    let (store, state) = seeded_state().await;
    let request = body(json!({
        "question": "What's my age again?",
        "difficulty": 1,
        "category": 5
    }));
    let (status, data) = into_json(
        create_or_search_questions(State(state), Query(PageParams::default()), request).await,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(data["message"], "bad request");
    assert_eq!(store.all_questions().unwrap().len(), 19);
}

#[tokio::test]
async fn test_create_question_invalid_difficulty() {
    let (_, state) = seeded_state().await;
    let request = body(json!({
        "question": "What's my age again?",
        "answer": "23",
        "difficulty": 0,
        "category": 5
    }));
    let (status, _) = into_json(
        create_or_search_questions(State(state), Query(PageParams::default()), request).await,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_post_questions_without_body() {
    let (_, state) = seeded_state().await;
    let (status, _) = into_json(
        create_or_search_questions(State(state), Query(PageParams::default()), None).await,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_question() {
    let (_, state) = seeded_state().await;
    let request = body::<QuestionsPostBody>(json!({"searchTerm": "TITLE"}));
    let (status, data) = into_json(
        create_or_search_questions(State(state), Query(PageParams::default()), request).await,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["totalQuestions"], 3);
    assert_eq!(data["currentCategory"], "");
    let ids: Vec<i64> = data["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![14, 16, 18]);
}

#[tokio::test]
async fn test_search_question_no_results() {
    let (_, state) = seeded_state().await;
    let request = body::<QuestionsPostBody>(json!({"searchTerm": "xyzzy"}));
    let (status, _) = into_json(
        create_or_search_questions(State(state), Query(PageParams::default()), request).await,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_question() {
    let (store, state) = seeded_state().await;
    let (status, data) = into_json(
        delete_question(State(state), IdPath(4), Query(PageParams::default())).await,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["deleted"], 4);
    assert_eq!(data["totalQuestions"], 18);
    assert_eq!(store.question(4).unwrap(), None);
}

#[tokio::test]
async fn test_delete_question_not_found() {
    let (_, state) = seeded_state().await;
    let (status, data) = into_json(
        delete_question(State(state), IdPath(1000), Query(PageParams::default())).await,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(data["error"], 404);
}

#[tokio::test]
async fn test_retrieve_questions_by_category() {
    let (_, state) = seeded_state().await;
    let (status, data) = into_json(
        retrieve_questions_by_category(State(state), IdPath(2), Query(PageParams::default())).await,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["currentCategory"], "Art");
    assert_eq!(data["totalQuestions"], 3);
    assert!(data["questions"]
        .as_array()
        .unwrap()
        .iter()
        .all(|q| q["category"] == 2));
}

#[tokio::test]
async fn test_retrieve_questions_by_unknown_category() {
    let (_, state) = seeded_state().await;
    let (status, _) = into_json(
        retrieve_questions_by_category(State(state), IdPath(42), Query(PageParams::default()))
            .await,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_play_quiz() {
    let (store, state) = seeded_state().await;
    let art: Vec<i64> = store
        .questions_in_category(2)
        .unwrap()
        .iter()
        .map(|q| q.id)
        .collect();
    let request = body::<QuizRequest>(json!({
        "previous_questions": [art[0], art[1]],
        "quiz_category": {"type": "Art", "id": "2"}
    }));
    let (status, data) = into_json(play_quiz(State(state), request).await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["question"]["id"], art[2]);
}

#[tokio::test]
async fn test_play_quiz_exhausted() {
    let (store, state) = seeded_state().await;
    let art: Vec<i64> = store
        .questions_in_category(2)
        .unwrap()
        .iter()
        .map(|q| q.id)
        .collect();
    let request = body::<QuizRequest>(json!({
        "previous_questions": art,
        "quiz_category": {"type": "Art", "id": 2}
    }));
    let (status, data) = into_json(play_quiz(State(state), request).await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data, json!({}));
}

#[tokio::test]
async fn test_play_quiz_all_categories() {
    let (_, state) = seeded_state().await;
    let request = body::<QuizRequest>(json!({
        "previous_questions": [],
        "quiz_category": {"type": "click", "id": 0}
    }));
    let (status, data) = into_json(play_quiz(State(state), request).await).await;
    assert_eq!(status, StatusCode::OK);
    assert!(data["question"]["id"].is_i64());
}

#[tokio::test]
async fn test_play_quiz_error() {
    let (_, state) = seeded_state().await;
    let missing_category = body::<QuizRequest>(json!({"previous_questions": []}));
    let (status, _) = into_json(play_quiz(State(state.clone()), missing_category).await).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = into_json(play_quiz(State(state), None).await).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, data) = into_json(route_not_found(Uri::from_static("/nope")).await).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(data["message"], "resource not found");
}
