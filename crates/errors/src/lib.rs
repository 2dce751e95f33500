//! catalog-errors - 统一错误处理

use async_graphql::ErrorExtensions;
use thiserror::Error;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// 转换为 HTTP 状态码
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::Database(_) => 500,
            Self::Config(_) => 500,
            Self::Internal(_) => 500,
        }
    }
}

/// 转换为 GraphQL 错误，状态码放入 extensions
impl From<AppError> for async_graphql::Error {
    fn from(err: AppError) -> Self {
        let status = err.status_code();
        async_graphql::Error::new(err.to_string()).extend_with(|_, e| e.set("status", status))
    }
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::not_found("x").status_code(), 404);
        assert_eq!(AppError::validation("x").status_code(), 400);
        assert_eq!(AppError::database("x").status_code(), 500);
        assert_eq!(AppError::internal("x").status_code(), 500);
    }

    #[test]
    fn test_graphql_error_carries_status() {
        let err: async_graphql::Error = AppError::database("connection refused").into();
        assert!(err.message.contains("connection refused"));
        let extensions = err.extensions.expect("extensions set");
        assert!(format!("{:?}", extensions).contains("status"));
    }

    #[test]
    fn test_display_format() {
        let err = AppError::not_found("product 42");
        assert_eq!(err.to_string(), "Not found: product 42");
    }
}
