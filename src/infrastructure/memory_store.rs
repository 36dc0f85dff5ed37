//! 内存题库存储
//!
//! 用于测试和嵌入场景，数据不落盘

use crate::error::{StoreError, StoreResult};
use crate::infrastructure::store::QuestionStore;
use crate::models::{Category, NewQuestion, Question};
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct MemoryCatalog {
    categories: BTreeMap<i64, Category>,
    questions: BTreeMap<i64, Question>,
    last_id: i64,
}

/// 内存存储
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<MemoryCatalog>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, MemoryCatalog>> {
        self.inner
            .read()
            .map_err(|_| StoreError::poisoned("memory catalog"))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, MemoryCatalog>> {
        self.inner
            .write()
            .map_err(|_| StoreError::poisoned("memory catalog"))
    }

    fn select(&self, keep: impl Fn(&Question) -> bool) -> StoreResult<Vec<Question>> {
        let catalog = self.read()?;
        Ok(catalog
            .questions
            .values()
            .filter(|q| keep(*q))
            .cloned()
            .collect())
    }
}

impl QuestionStore for MemoryStore {
    fn categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.read()?.categories.values().cloned().collect())
    }

    fn category(&self, id: i64) -> StoreResult<Option<Category>> {
        Ok(self.read()?.categories.get(&id).cloned())
    }

    fn all_questions(&self) -> StoreResult<Vec<Question>> {
        self.select(|_| true)
    }

    fn questions_in_category(&self, category_id: i64) -> StoreResult<Vec<Question>> {
        self.select(|q| q.category == category_id)
    }

    fn questions_containing(&self, term: &str) -> StoreResult<Vec<Question>> {
        let needle = term.to_lowercase();
        self.select(|q| q.question.to_lowercase().contains(&needle))
    }

    fn question(&self, id: i64) -> StoreResult<Option<Question>> {
        Ok(self.read()?.questions.get(&id).cloned())
    }

    fn insert_question(&self, question: &NewQuestion) -> StoreResult<Question> {
        let mut catalog = self.write()?;
        catalog.last_id += 1;
        let stored = question.clone().with_id(catalog.last_id);
        catalog.questions.insert(stored.id, stored.clone());
        Ok(stored)
    }

    fn delete_question(&self, id: i64) -> StoreResult<bool> {
        Ok(self.write()?.questions.remove(&id).is_some())
    }

    fn insert_category(&self, category: &Category) -> StoreResult<()> {
        self.write()?
            .categories
            .insert(category.id, category.clone());
        Ok(())
    }
}
