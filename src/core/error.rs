//! 错误处理体系 (Error Handling System)
//!
//! 定义抓取流程中的领域错误类型以及全局 Result 别名。

use reqwest::StatusCode;
use thiserror::Error;

/// 全局错误定义 (Scrape Domain Errors)
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// 请求既没有 `url` 也没有 `s`
    #[error("missing parameter")]
    MissingParameter,

    /// 上游对帖子页返回 404
    #[error("post not found")]
    PostNotFound,

    /// 帖子页中缺少正文容器
    #[error("could not find post content")]
    ContentNotFound,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 全局 Result 别名
pub type Result<T> = std::result::Result<T, ScrapeError>;

impl ScrapeError {
    /// 映射到对外的 HTTP 状态码
    pub fn status(&self) -> StatusCode {
        match self {
            ScrapeError::MissingParameter => StatusCode::BAD_REQUEST,
            ScrapeError::PostNotFound | ScrapeError::ContentNotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 是否属于可预期的业务结果 (400/404)，而非底层故障
    pub fn is_expected(&self) -> bool {
        !self.status().is_server_error()
    }

    /// 底层故障的原始信息，不带本层前缀
    ///
    /// 中间件错误会先解包到内部的 reqwest 错误。
    pub fn cause(&self) -> String {
        match self {
            ScrapeError::Network(e) => e.to_string(),
            ScrapeError::Middleware(reqwest_middleware::Error::Reqwest(e)) => e.to_string(),
            ScrapeError::Middleware(reqwest_middleware::Error::Middleware(e)) => e.to_string(),
            ScrapeError::Url(e) => e.to_string(),
            ScrapeError::Config(e) => e.to_string(),
            ScrapeError::Serialization(e) => e.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_business_errors_to_client_statuses() {
        assert_eq!(ScrapeError::MissingParameter.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ScrapeError::PostNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ScrapeError::ContentNotFound.status(), StatusCode::NOT_FOUND);
        assert!(ScrapeError::ContentNotFound.is_expected());
    }

    #[test]
    fn infrastructure_errors_are_server_errors() {
        let err = ScrapeError::from(url::Url::parse("not a url").unwrap_err());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.is_expected());
        assert_eq!(err.cause(), "relative URL without a base");
    }

    #[test]
    fn serialization_failures_are_server_errors() {
        let err = ScrapeError::from(serde_json::from_str::<u8>("x").unwrap_err());
        assert!(matches!(err, ScrapeError::Serialization(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
