//! JSON 响应封装
//!
//! 所有响应统一为 2 空格缩进的 JSON，错误在这里一次性映射为状态码与错误体。

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{error, warn};

use crate::core::error::{Result, ScrapeError};
use crate::core::model::ErrorPayload;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// 触发错误的操作，用于区分 500 错误信息前缀
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Dispatch,
    Search,
    Detail,
}

impl Operation {
    fn failure_prefix(self) -> &'static str {
        match self {
            Operation::Dispatch | Operation::Search => "connection error",
            Operation::Detail => "error fetching post details",
        }
    }
}

/// 序列化为美化后的 JSON 文本
pub fn to_json_text<T: Serialize>(body: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(body)?)
}

/// 构建 JSON 响应
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match to_json_text(body) {
        Ok(text) => (
            status,
            [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
            text,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "failed to serialize response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// 将错误映射为 (状态码, 错误体)
pub fn error_payload(op: Operation, err: &ScrapeError) -> (StatusCode, ErrorPayload) {
    let status = err.status();
    let message = if err.is_expected() {
        err.to_string()
    } else {
        format!("{}: {}", op.failure_prefix(), err.cause())
    };
    (status, ErrorPayload::new(message))
}

pub fn error_response(op: Operation, err: &ScrapeError) -> Response {
    let (status, payload) = error_payload(op, err);
    if err.is_expected() {
        warn!(status = status.as_u16(), error = %payload.error, "request rejected");
    } else {
        error!(status = status.as_u16(), error = %payload.error, "request failed");
    }
    json_response(status, &payload)
}
