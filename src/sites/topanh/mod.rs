//! TopAnh 站点模块
//!
//! 搜索与详情两条抓取流水线：抓取 → 解析 → 提取

mod detail;
mod search;
mod selectors;

use async_trait::async_trait;
use tracing::warn;
use url::Url;

use crate::core::config::SiteConfig;
use crate::core::error::{Result, ScrapeError};
use crate::core::model::{PostDetail, SearchResultItem};
use crate::interfaces::ImageSite;
use crate::network::{Fetched, SiteClient};

use self::detail::parse_detail_html;
use self::search::{build_search_url, parse_search_html};
use self::selectors::SiteSelectors;

/// TopAnhAnime 站点实现
pub struct TopAnh {
    base: String,
    client: SiteClient,
}

impl TopAnh {
    /// 创建新的站点实例
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url)?;

        Ok(Self {
            base: base.as_str().trim_end_matches('/').to_string(),
            client: SiteClient::new(config)?,
        })
    }
}

#[async_trait]
impl ImageSite for TopAnh {
    fn id(&self) -> &str {
        "topanh"
    }

    fn base_url(&self) -> &str {
        &self.base
    }

    fn search_url(&self, keyword: &str, page: u32) -> String {
        build_search_url(&self.base, keyword, page)
    }

    async fn search(&self, keyword: &str, page: u32) -> Result<Vec<SearchResultItem>> {
        let url = self.search_url(keyword, page);
        match self.client.fetch(&url).await? {
            Fetched::Page(html) => Ok(parse_search_html(&html)),
            Fetched::NotFound => {
                warn!(%url, "search page not found, returning empty result");
                Ok(Vec::new())
            }
        }
    }

    async fn post(&self, url: &str) -> Result<PostDetail> {
        match self.client.fetch(url).await? {
            Fetched::Page(html) => parse_detail_html(&html),
            Fetched::NotFound => Err(ScrapeError::PostNotFound),
        }
    }
}
