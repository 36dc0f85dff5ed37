//! 出题服务 - 业务能力层
//!
//! 只负责"从剩余题目中随机挑一道"，不保存答题进度

use crate::error::AppResult;
use crate::models::{CategoryScope, Question};
use crate::services::question_query::QuestionQuery;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

/// 出题服务
///
/// 职责：
/// - 按范围取候选题目
/// - 排除已出过的题目
/// - 在剩余题目中等概率抽取一道
#[derive(Clone)]
pub struct QuizSelector {
    query: QuestionQuery,
}

impl QuizSelector {
    pub fn new(query: QuestionQuery) -> Self {
        Self { query }
    }

    /// 挑选下一道题
    ///
    /// 返回 `None` 表示该范围内的题目已全部出过
    pub fn next_question(
        &self,
        scope: CategoryScope,
        already_asked: &HashSet<i64>,
    ) -> AppResult<Option<Question>> {
        self.next_question_with_rng(scope, already_asked, &mut rand::thread_rng())
    }

    /// 使用指定随机源挑选下一道题
    pub fn next_question_with_rng<R: Rng + ?Sized>(
        &self,
        scope: CategoryScope,
        already_asked: &HashSet<i64>,
        rng: &mut R,
    ) -> AppResult<Option<Question>> {
        let candidates = self.query.questions_in_scope(scope)?;
        let total = candidates.len();
        let picked = pick_unasked(candidates, already_asked, rng);

        debug!(
            "{}: 候选 {} 道, 已出 {} 道, 抽中 {:?}",
            scope,
            total,
            already_asked.len(),
            picked.as_ref().map(|q| q.id)
        );

        Ok(picked)
    }
}

/// 从候选中剔除已出题目后等概率抽取
fn pick_unasked<R: Rng + ?Sized>(
    candidates: Vec<Question>,
    already_asked: &HashSet<i64>,
    rng: &mut R,
) -> Option<Question> {
    let eligible: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !already_asked.contains(&q.id))
        .collect();
    eligible.choose(rng).cloned()
}
