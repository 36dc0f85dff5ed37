//! # Trivia Catalog
//!
//! 一个提供问答题库 JSON/HTTP 接口的 Rust 服务
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有题库数据，只暴露读写能力
//! - `QuestionStore` - 存储能力接口，`SqliteStore` / `MemoryStore` 两种实现
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `CategoryIndex` - 分类 ID → 名称
//! - `QuestionQuery` - 全部 / 按分类 / 按题干子串取题
//! - `paginate` - 每页 10 题的分页
//! - `QuizSelector` - 排除已出题目后随机出题
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次请求"的完整处理流程，决定何时返回 404
//!
//! ### ④ 接口层（API）
//! - `api/` - axum 路由、请求体解析、错误响应
//! - `app` - 应用初始化与启动

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{MemoryStore, QuestionStore, SqliteStore};
pub use models::{Category, CategoryScope, NewQuestion, Question};
pub use workflow::CatalogFlow;
