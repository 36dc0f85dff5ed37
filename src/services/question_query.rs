//! 题目查询 - 业务能力层
//!
//! 只负责"按模式取题"，不关心分页和出题

use crate::error::AppResult;
use crate::infrastructure::QuestionStore;
use crate::models::{CategoryScope, Question};
use std::sync::Arc;
use tracing::debug;

/// 题目查询服务
///
/// 职责：
/// - 提供 全部 / 按分类 / 按题干子串 三种取题方式
/// - 结果按 ID 升序
/// - 只读，不修改题库
#[derive(Clone)]
pub struct QuestionQuery {
    store: Arc<dyn QuestionStore>,
}

impl QuestionQuery {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    pub fn all_questions(&self) -> AppResult<Vec<Question>> {
        Ok(self.store.all_questions()?)
    }

    /// 分类不存在或没有题目时返回空列表
    pub fn questions_by_category(&self, category_id: i64) -> AppResult<Vec<Question>> {
        Ok(self.store.questions_in_category(category_id)?)
    }

    /// 题干包含搜索词的题目（忽略大小写）
    ///
    /// 空白搜索词由调用方处理，这里按字面匹配
    pub fn questions_matching(&self, search_term: &str) -> AppResult<Vec<Question>> {
        let matches = self.store.questions_containing(search_term)?;
        debug!("搜索 '{}' 命中 {} 道题目", search_term, matches.len());
        Ok(matches)
    }

    /// 按范围取题
    pub fn questions_in_scope(&self, scope: CategoryScope) -> AppResult<Vec<Question>> {
        match scope {
            CategoryScope::AllCategories => self.all_questions(),
            CategoryScope::Category(id) => self.questions_by_category(id),
        }
    }
}
