//! HTTP 路由与处理函数
//!
//! 只负责解析请求和组装响应，业务判断全部交给 `CatalogFlow`

use axum::extract::{Query, State};
use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;

use crate::api::extract::IdPath;
use crate::api::payloads::{
    CategoriesResponse, PageParams, QuestionsPostBody, QuizRequest, QuizResponse,
};
use crate::error::{AppError, AppResult, NotFoundError, RequestError};
use crate::services::page_from_param;
use crate::workflow::{CatalogFlow, DeletionResult, QuestionListing};

/// 路由共享状态
#[derive(Clone)]
pub struct AppState {
    flow: Arc<CatalogFlow>,
}

impl AppState {
    pub fn new(flow: CatalogFlow) -> Self {
        Self {
            flow: Arc::new(flow),
        }
    }

    /// 在阻塞线程池上执行一次题库操作
    async fn run<T, F>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&CatalogFlow) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let flow = Arc::clone(&self.flow);
        tokio::task::spawn_blocking(move || f(flow.as_ref())).await?
    }
}

/// 构建完整路由
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(retrieve_categories))
        .route(
            "/categories/:category_id/questions",
            get(retrieve_questions_by_category),
        )
        .route(
            "/questions",
            get(retrieve_questions).post(create_or_search_questions),
        )
        .route("/questions/:question_id", delete(delete_question))
        .route("/quizzes", post(play_quiz))
        .fallback(route_not_found)
        .with_state(state)
}

/// `GET /categories`
pub async fn retrieve_categories(
    State(state): State<AppState>,
) -> AppResult<Json<CategoriesResponse>> {
    let categories = state.run(|flow| flow.categories()).await?;
    Ok(Json(CategoriesResponse { categories }))
}

/// `GET /questions?page=n`
pub async fn retrieve_questions(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<QuestionListing>> {
    let page = page_from_param(params.page.as_deref());
    let listing = state.run(move |flow| flow.list_questions(page)).await?;
    Ok(Json(listing))
}

/// `DELETE /questions/<id>`
pub async fn delete_question(
    State(state): State<AppState>,
    IdPath(question_id): IdPath,
    Query(params): Query<PageParams>,
) -> AppResult<Json<DeletionResult>> {
    let page = page_from_param(params.page.as_deref());
    let result = state
        .run(move |flow| flow.delete_question(question_id, page))
        .await?;
    Ok(Json(result))
}

/// `POST /questions`
///
/// 带非空 `searchTerm` 时执行搜索，否则按请求体新增题目
pub async fn create_or_search_questions(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
    body: Option<Json<QuestionsPostBody>>,
) -> AppResult<Response> {
    let Json(body) = body.ok_or(RequestError::MissingBody)?;

    if let Some(term) = body.search_term().map(str::to_string) {
        let page = page_from_param(params.page.as_deref());
        let listing = state
            .run(move |flow| flow.search_questions(&term, page))
            .await?;
        return Ok(Json(listing).into_response());
    }

    let new_question = body.into_new_question()?;
    state
        .run(move |flow| flow.create_question(new_question))
        .await?;
    Ok(Json(json!({})).into_response())
}

/// `GET /categories/<id>/questions?page=n`
pub async fn retrieve_questions_by_category(
    State(state): State<AppState>,
    IdPath(category_id): IdPath,
    Query(params): Query<PageParams>,
) -> AppResult<Json<QuestionListing>> {
    let page = page_from_param(params.page.as_deref());
    let listing = state
        .run(move |flow| flow.questions_for_category(category_id, page))
        .await?;
    Ok(Json(listing))
}

/// `POST /quizzes`
///
/// 题目出完时返回 `{}`
pub async fn play_quiz(
    State(state): State<AppState>,
    body: Option<Json<QuizRequest>>,
) -> AppResult<Json<QuizResponse>> {
    let Json(request) = body.ok_or(RequestError::MissingBody)?;
    let (scope, previous_questions) = request.into_parts()?;
    let question = state
        .run(move |flow| flow.play_quiz(scope, &previous_questions))
        .await?;
    Ok(Json(QuizResponse { question }))
}

/// 未匹配的路径
pub async fn route_not_found(uri: Uri) -> AppError {
    NotFoundError::Route {
        path: uri.path().to_string(),
    }
    .into()
}
