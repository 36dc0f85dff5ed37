//! 题库请求流程 - 流程层
//!
//! 核心职责：把一次请求拆成 取题 → 分页 / 出题，并决定何时视为 404
//!
//! 流程：
//! 1. 列表 / 搜索 / 分类：查询 → 分页 → 空页即 404
//! 2. 删除：删除 → 不存在即 404 → 返回刷新后的当前页
//! 3. 出题：范围取题 → 排除已出 → 随机抽取（无题可出不是错误）

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use tracing::info;

use crate::error::{AppError, AppResult, NotFoundError};
use crate::infrastructure::QuestionStore;
use crate::models::{CategoryScope, NewQuestion, Question};
use crate::services::{paginate, CategoryIndex, QuestionQuery, QuizSelector, QUESTIONS_PER_PAGE};
use crate::utils::truncate_text;

/// 分页后的题目列表
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionListing {
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
    pub categories: BTreeMap<i64, String>,
    #[serde(rename = "currentCategory")]
    pub current_category: String,
}

/// 删除后的刷新结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeletionResult {
    pub deleted: i64,
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
}

/// 题库请求流程
///
/// - 编排分类索引、题目查询、分页和出题
/// - 不持有请求状态
/// - 存储通过构造参数注入
#[derive(Clone)]
pub struct CatalogFlow {
    store: Arc<dyn QuestionStore>,
    categories: CategoryIndex,
    query: QuestionQuery,
    selector: QuizSelector,
}

impl CatalogFlow {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        let query = QuestionQuery::new(Arc::clone(&store));
        Self {
            categories: CategoryIndex::new(Arc::clone(&store)),
            selector: QuizSelector::new(query.clone()),
            query,
            store,
        }
    }

    /// 全部分类，目录为空时返回 404
    pub fn categories(&self) -> AppResult<BTreeMap<i64, String>> {
        let categories = self.categories.list_categories()?;
        if categories.is_empty() {
            return Err(NotFoundError::EmptyCatalog.into());
        }
        Ok(categories)
    }

    /// 全部题目的第 `page` 页
    pub fn list_questions(&self, page: usize) -> AppResult<QuestionListing> {
        let selection = self.query.all_questions()?;
        self.listing(&selection, page, String::new())
    }

    /// 题干包含 `search_term` 的题目的第 `page` 页，无结果时返回 404
    pub fn search_questions(&self, search_term: &str, page: usize) -> AppResult<QuestionListing> {
        let selection = self.query.questions_matching(search_term)?;
        if selection.is_empty() {
            return Err(NotFoundError::NoMatches {
                term: search_term.to_string(),
            }
            .into());
        }
        self.listing(&selection, page, String::new())
    }

    /// 指定分类的题目的第 `page` 页
    ///
    /// 分类不存在或当前页为空时返回 404
    pub fn questions_for_category(
        &self,
        category_id: i64,
        page: usize,
    ) -> AppResult<QuestionListing> {
        let name = self
            .categories
            .category_name(category_id)?
            .ok_or_else(|| AppError::category_not_found(category_id))?;
        let selection = self.query.questions_by_category(category_id)?;
        self.listing(&selection, page, name)
    }

    /// 新增题目
    pub fn create_question(&self, question: NewQuestion) -> AppResult<Question> {
        question.validate()?;
        let created = self.store.insert_question(&question)?;
        info!(
            "✓ 新增题目 #{} (分类 {}): {}",
            created.id,
            created.category,
            truncate_text(&created.question, 60)
        );
        Ok(created)
    }

    /// 删除题目并返回刷新后的第 `page` 页
    pub fn delete_question(&self, id: i64, page: usize) -> AppResult<DeletionResult> {
        if !self.store.delete_question(id)? {
            return Err(AppError::question_not_found(id));
        }
        info!("🗑️ 已删除题目 #{}", id);

        let selection = self.query.all_questions()?;
        Ok(DeletionResult {
            deleted: id,
            questions: paginate(&selection, page, QUESTIONS_PER_PAGE).to_vec(),
            total_questions: selection.len(),
        })
    }

    /// 出下一道题，`None` 表示本轮题目已出完
    pub fn play_quiz(
        &self,
        scope: CategoryScope,
        previous_questions: &HashSet<i64>,
    ) -> AppResult<Option<Question>> {
        self.selector.next_question(scope, previous_questions)
    }

    fn listing(
        &self,
        selection: &[Question],
        page: usize,
        current_category: String,
    ) -> AppResult<QuestionListing> {
        let current = paginate(selection, page, QUESTIONS_PER_PAGE);
        if current.is_empty() {
            return Err(AppError::page_out_of_range(page));
        }
        Ok(QuestionListing {
            questions: current.to_vec(),
            total_questions: selection.len(),
            categories: self.categories.list_categories()?,
            current_category,
        })
    }
}
