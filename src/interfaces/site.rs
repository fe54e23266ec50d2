//! 站点定义
//!
//! 图片站点需要实现的核心接口：关键字搜索与帖子详情。

use async_trait::async_trait;

use crate::core::error::Result;
use crate::core::model::{PostDetail, SearchResultItem};

/// 站点定义 Trait
///
/// 每个图片站点需要实现此 Trait，提供：
/// - 站点标识与根地址
/// - 搜索页 URL 构建
/// - 搜索与详情两种抓取
#[async_trait]
pub trait ImageSite: Send + Sync {
    /// 站点唯一标识
    fn id(&self) -> &str;

    /// 站点根地址 (不含末尾斜杠)
    fn base_url(&self) -> &str;

    /// 构建搜索页 URL
    fn search_url(&self, keyword: &str, page: u32) -> String;

    /// 搜索帖子；上游 404 视为空结果
    async fn search(&self, keyword: &str, page: u32) -> Result<Vec<SearchResultItem>>;

    /// 获取帖子标题与正文图片
    async fn post(&self, url: &str) -> Result<PostDetail>;
}
