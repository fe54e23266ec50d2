//! 站点 HTTP 客户端 (HTML Fetcher)
//!
//! 固定 User-Agent、超时与追踪中间件，单次 GET，无重试。

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};

use crate::core::config::SiteConfig;
use crate::core::error::{Result, ScrapeError};
use crate::network::middleware::TraceMiddleware;

/// 单次抓取的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched {
    /// 响应正文 (除 404 外的任意状态码)
    Page(String),
    /// 上游返回 404
    NotFound,
}

/// 面向站点的 HTTP 客户端封装
#[derive(Clone)]
pub struct SiteClient {
    client: ClientWithMiddleware,
}

impl SiteClient {
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Ok(ua) = HeaderValue::from_str(&config.user_agent) {
            headers.insert(USER_AGENT, ua);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .tcp_nodelay(true)
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()
            .map_err(ScrapeError::Network)?;

        Ok(Self {
            client: ClientBuilder::new(client).with(TraceMiddleware).build(),
        })
    }

    /// 执行 GET 并读取完整正文
    pub async fn fetch(&self, url: &str) -> Result<Fetched> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ScrapeError::Middleware)?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(Fetched::NotFound);
        }

        let text = resp.text().await.map_err(ScrapeError::Network)?;
        Ok(Fetched::Page(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{DEFAULT_USER_AGENT, SiteConfig};

    fn client() -> SiteClient {
        SiteClient::new(&SiteConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn sends_fixed_user_agent_and_returns_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/post")
            .match_header("user-agent", DEFAULT_USER_AGENT)
            .with_status(200)
            .with_body("<html><body>ok</body></html>")
            .create_async()
            .await;

        let fetched = client().fetch(&format!("{}/post", server.url())).await.unwrap();
        assert_eq!(fetched, Fetched::Page("<html><body>ok</body></html>".into()));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn upstream_404_is_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/missing")
            .with_status(404)
            .with_body("gone")
            .create_async()
            .await;

        let fetched = client().fetch(&format!("{}/missing", server.url())).await.unwrap();
        assert_eq!(fetched, Fetched::NotFound);
    }

    #[tokio::test]
    async fn other_error_statuses_still_return_body() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/broken")
            .with_status(500)
            .with_body("<p>oops</p>")
            .create_async()
            .await;

        let fetched = client().fetch(&format!("{}/broken", server.url())).await.unwrap();
        assert_eq!(fetched, Fetched::Page("<p>oops</p>".into()));
    }

    /// 接受连接但从不响应的上游，返回其根地址
    async fn silent_upstream() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(std::time::Duration::from_secs(30)).await;
        });
        format!("http://{}/", addr)
    }

    #[tokio::test]
    async fn silent_upstream_is_cut_off_by_timeout() {
        let url = silent_upstream().await;
        let client = SiteClient::new(&SiteConfig::builder().timeout_secs(1).build()).unwrap();

        let started = std::time::Instant::now();
        let err = client.fetch(&url).await.unwrap_err();
        assert!(started.elapsed() < std::time::Duration::from_secs(3));
        assert!(!err.is_expected());
    }

    #[tokio::test]
    async fn refused_connection_is_a_server_error() {
        let err = client().fetch("http://127.0.0.1:1/").await.unwrap_err();
        assert!(!err.is_expected());
        assert!(!err.cause().is_empty());
    }

    #[tokio::test]
    async fn malformed_url_fails_at_fetch() {
        let err = client().fetch("not a url").await.unwrap_err();
        assert!(!err.is_expected());
    }
}
