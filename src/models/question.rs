use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// 题目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// 待创建的题目（尚未分配 ID）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl NewQuestion {
    /// 校验字段取值
    ///
    /// 题干和答案不能为空白，难度必须为正整数
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.question.trim().is_empty() {
            return Err(ValidationError::BlankField { field: "question" });
        }
        if self.answer.trim().is_empty() {
            return Err(ValidationError::BlankField { field: "answer" });
        }
        if self.difficulty < 1 {
            return Err(ValidationError::InvalidDifficulty {
                value: self.difficulty,
            });
        }
        Ok(())
    }

    /// 附加存储分配的 ID
    pub fn with_id(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// 分类
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    /// 分类显示名称
    #[serde(rename = "type")]
    pub name: String,
}

/// 查询范围：全部分类或单个分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryScope {
    AllCategories,
    Category(i64),
}

impl std::fmt::Display for CategoryScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryScope::AllCategories => write!(f, "全部分类"),
            CategoryScope::Category(id) => write!(f, "分类 #{}", id),
        }
    }
}
