//! HTTP 接入层
//!
//! 单一兜底路由：所有路径与方法都交给分发器处理。

mod dispatch;
mod response;

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::Response;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::core::config::AppConfig;
use crate::core::error::Result;
use crate::core::model::HomePayload;
use crate::interfaces::ImageSite;
use crate::sites::TopAnh;

use self::dispatch::{ApiRequest, resolve};
use self::response::{error_response, json_response};

pub use self::response::{Operation, error_payload, to_json_text};

/// 共享状态
#[derive(Clone)]
pub struct AppState {
    pub site: Arc<dyn ImageSite>,
}

impl AppState {
    pub fn new(site: Arc<dyn ImageSite>) -> Self {
        Self { site }
    }
}

/// 构建路由
pub fn router(state: AppState) -> Router {
    Router::new()
        .fallback(handle)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// 执行一次已解析的请求并生成响应
pub async fn execute(site: &dyn ImageSite, request: ApiRequest) -> Response {
    match request {
        ApiRequest::Home => json_response(
            StatusCode::OK,
            &HomePayload::new(chrono::Utc::now().to_rfc3339()),
        ),
        ApiRequest::Detail { url } => match site.post(&url).await {
            Ok(detail) => json_response(StatusCode::OK, &detail),
            Err(e) => error_response(Operation::Detail, &e),
        },
        ApiRequest::Search { keyword, page } => match site.search(&keyword, page).await {
            Ok(items) => json_response(StatusCode::OK, &items),
            Err(e) => error_response(Operation::Search, &e),
        },
    }
}

async fn handle(State(state): State<AppState>, uri: Uri) -> Response {
    match resolve(uri.path(), uri.query()) {
        Ok(request) => execute(state.site.as_ref(), request).await,
        Err(e) => error_response(Operation::Dispatch, &e),
    }
}

/// 启动 HTTP 服务，Ctrl-C 时优雅退出
pub async fn serve(config: &AppConfig) -> anyhow::Result<()> {
    let site = build_site(config)?;
    let app = router(AppState::new(site.clone()));

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    info!(
        "Serving {} ({}) on {}",
        site.id(),
        site.base_url(),
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Shutdown signal received");
            }
        })
        .await?;

    Ok(())
}

/// 构建站点实例 (供 CLI 一次性调用)
pub fn build_site(config: &AppConfig) -> Result<Arc<dyn ImageSite>> {
    Ok(Arc::new(TopAnh::new(&config.site)?))
}
