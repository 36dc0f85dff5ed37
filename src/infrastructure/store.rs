//! 题库存储能力 - 基础设施层
//!
//! 只定义"读写题库"的能力，不关心分页、搜索策略和出题流程

use crate::error::{AppResult, StoreResult};
use crate::models::{Category, NewQuestion, Question, SeedCatalog};

/// 题库存储
///
/// 职责：
/// - 持有题目与分类数据
/// - 所有列表按 ID 升序返回
/// - 不处理分页，不决定 404
pub trait QuestionStore: Send + Sync {
    /// 全部分类
    fn categories(&self) -> StoreResult<Vec<Category>>;

    /// 按 ID 查找分类
    fn category(&self, id: i64) -> StoreResult<Option<Category>>;

    /// 全部题目
    fn all_questions(&self) -> StoreResult<Vec<Question>>;

    /// 属于指定分类的题目
    fn questions_in_category(&self, category_id: i64) -> StoreResult<Vec<Question>>;

    /// 题干包含 `term` 的题目（忽略大小写）
    fn questions_containing(&self, term: &str) -> StoreResult<Vec<Question>>;

    /// 按 ID 查找题目
    fn question(&self, id: i64) -> StoreResult<Option<Question>>;

    /// 新增题目，返回分配了 ID 的题目
    fn insert_question(&self, question: &NewQuestion) -> StoreResult<Question>;

    /// 删除题目，返回是否确实删除了记录
    fn delete_question(&self, id: i64) -> StoreResult<bool>;

    /// 新增分类（ID 由调用方指定）
    fn insert_category(&self, category: &Category) -> StoreResult<()>;
}

/// 将初始题库写入存储
///
/// 先校验全部题目，任一题目非法时不写入任何数据。
/// 返回写入的 (分类数, 题目数)
pub fn seed_store(store: &dyn QuestionStore, catalog: &SeedCatalog) -> AppResult<(usize, usize)> {
    for question in &catalog.questions {
        question.validate()?;
    }
    for category in &catalog.categories {
        store.insert_category(category)?;
    }
    for question in &catalog.questions {
        store.insert_question(question)?;
    }
    Ok((catalog.categories.len(), catalog.questions.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, ValidationError};
    use crate::infrastructure::MemoryStore;

    fn seed_question(text: &str, difficulty: i64) -> NewQuestion {
        NewQuestion {
            question: text.to_string(),
            answer: "answer".to_string(),
            category: 1,
            difficulty,
        }
    }

    #[test]
    fn invalid_seed_row_writes_nothing() {
        let store = MemoryStore::new();
        let catalog = SeedCatalog {
            categories: vec![Category {
                id: 1,
                name: "Science".to_string(),
            }],
            questions: vec![seed_question("valid", 2), seed_question("broken", 0)],
        };

        let err = seed_store(&store, &catalog).unwrap_err();
        assert!(matches!(
            err,
            AppError::Unprocessable(ValidationError::InvalidDifficulty { value: 0 })
        ));
        assert!(store.categories().unwrap().is_empty());
        assert!(store.all_questions().unwrap().is_empty());
    }

    #[test]
    fn valid_seed_is_written() {
        let store = MemoryStore::new();
        let catalog = SeedCatalog {
            categories: vec![Category {
                id: 1,
                name: "Science".to_string(),
            }],
            questions: vec![seed_question("first", 1), seed_question("second", 3)],
        };

        assert_eq!(seed_store(&store, &catalog).unwrap(), (1, 2));
        assert_eq!(store.all_questions().unwrap().len(), 2);
    }
}
