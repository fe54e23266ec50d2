use std::time::Instant;

use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};
use tracing::{debug, warn};

/// 出站请求追踪中间件
/// 负责记录每次请求的方法、地址、状态码与耗时
pub struct TraceMiddleware;

#[async_trait::async_trait]
impl Middleware for TraceMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut http::Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        let method = req.method().clone();
        let url = req.url().to_string();
        let started = Instant::now();

        let result = next.run(req, extensions).await;
        let elapsed_ms = started.elapsed().as_millis();

        match &result {
            Ok(resp) => debug!(%method, %url, status = resp.status().as_u16(), elapsed_ms, "upstream response"),
            Err(e) => warn!(%method, %url, elapsed_ms, error = %e, "upstream request failed"),
        }

        result
    }
}
