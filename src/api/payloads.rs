//! 请求与响应体

use crate::error::{AppError, AppResult};
use crate::models::{CategoryScope, NewQuestion, Question};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// 可以是整数也可以是数字字符串的 ID
///
/// 前端在分类 ID 上两种写法都会出现
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlexibleId(pub i64);

impl<'de> Deserialize<'de> for FlexibleId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Visitor;
        use std::fmt;

        struct IdVisitor;

        impl<'de> Visitor<'de> for IdVisitor {
            type Value = FlexibleId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or a string containing an integer")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value
                    .trim()
                    .parse()
                    .map(FlexibleId)
                    .map_err(|_| E::invalid_value(serde::de::Unexpected::Str(value), &self))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(FlexibleId(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                i64::try_from(value)
                    .map(FlexibleId)
                    .map_err(|_| E::invalid_value(serde::de::Unexpected::Unsigned(value), &self))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// 页码查询参数
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

/// `POST /questions` 请求体：新增题目或搜索
#[derive(Debug, Default, Deserialize)]
pub struct QuestionsPostBody {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<FlexibleId>,
    pub category: Option<FlexibleId>,
}

impl QuestionsPostBody {
    /// 非空白的搜索词；空白视为没有搜索
    pub fn search_term(&self) -> Option<&str> {
        self.search_term
            .as_deref()
            .filter(|term| !term.trim().is_empty())
    }

    /// 转换为待创建题目，任一字段缺失即为错误请求
    pub fn into_new_question(self) -> AppResult<NewQuestion> {
        let question = self.question.ok_or_else(|| AppError::missing_field("question"))?;
        let answer = self.answer.ok_or_else(|| AppError::missing_field("answer"))?;
        let difficulty = self
            .difficulty
            .ok_or_else(|| AppError::missing_field("difficulty"))?;
        let category = self
            .category
            .ok_or_else(|| AppError::missing_field("category"))?;

        Ok(NewQuestion {
            question,
            answer,
            category: category.0,
            difficulty: difficulty.0,
        })
    }
}

/// 出题时选择的分类
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: FlexibleId,
    #[serde(default, rename = "type")]
    pub name: Option<String>,
}

impl QuizCategory {
    /// ID 为 0 表示全部分类
    pub fn scope(&self) -> CategoryScope {
        match self.id.0 {
            0 => CategoryScope::AllCategories,
            id => CategoryScope::Category(id),
        }
    }
}

/// `POST /quizzes` 请求体
#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<i64>>,
    pub quiz_category: Option<QuizCategory>,
}

impl QuizRequest {
    /// 拆出出题范围和已出题目，任一缺失即为错误请求
    pub fn into_parts(self) -> AppResult<(CategoryScope, HashSet<i64>)> {
        let previous = self
            .previous_questions
            .ok_or_else(|| AppError::missing_field("previous_questions"))?;
        let category = self
            .quiz_category
            .ok_or_else(|| AppError::missing_field("quiz_category"))?;
        Ok((category.scope(), previous.into_iter().collect()))
    }
}

/// `GET /categories` 响应体
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: BTreeMap<i64, String>,
}

/// `POST /quizzes` 响应体，题目出完时序列化为 `{}`
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
}
