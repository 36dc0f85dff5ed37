//! API 模块
//!
//! 负责对外的 JSON/HTTP 接口

pub mod error_response;
pub mod extract;
pub mod payloads;
pub mod routes;

// 重新导出常用类型
pub use routes::{router, AppState};
