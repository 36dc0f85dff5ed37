//! 自定义提取器

use axum::async_trait;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use tracing::debug;

use crate::error::{AppError, NotFoundError};

/// 路径中的整数 ID
///
/// 无法解析为整数时按未匹配路由处理，返回 JSON 404
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i64>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(IdPath(id)),
            Err(rejection) => {
                debug!("路径参数无效: {}", rejection);
                Err(NotFoundError::Route {
                    path: parts.uri.path().to_string(),
                }
                .into())
            }
        }
    }
}
