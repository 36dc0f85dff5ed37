//! 分类索引 - 业务能力层

use crate::error::AppResult;
use crate::infrastructure::QuestionStore;
use std::collections::BTreeMap;
use std::sync::Arc;

/// 分类索引
///
/// 将分类 ID 解析为显示名称，分类数据只读
#[derive(Clone)]
pub struct CategoryIndex {
    store: Arc<dyn QuestionStore>,
}

impl CategoryIndex {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    /// 按 ID 升序列出 分类 ID → 名称
    ///
    /// 没有分类时返回空映射，由调用方决定是否视为 404
    pub fn list_categories(&self) -> AppResult<BTreeMap<i64, String>> {
        Ok(self
            .store
            .categories()?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect())
    }

    /// 查找分类名称
    pub fn category_name(&self, id: i64) -> AppResult<Option<String>> {
        Ok(self.store.category(id)?.map(|c| c.name))
    }
}
