use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 搜索结果条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub title: String,
    /// 缩略图 `src`，原样透传
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// 帖子链接 `href`，原样透传
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_link: Option<String>,
}

/// 帖子详情
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDetail {
    pub title: String,
    /// 正文中的图片地址，保持文档顺序，不去重
    pub images: Vec<String>,
    pub image_count: usize,
}

impl PostDetail {
    pub fn new(title: String, images: Vec<String>) -> Self {
        Self {
            title,
            image_count: images.len(),
            images,
        }
    }
}

/// 错误响应体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
}

impl ErrorPayload {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// `/home` 帮助文档
#[derive(Debug, Clone, Serialize)]
pub struct HomePayload {
    pub project: &'static str,
    pub author: &'static str,
    pub version: &'static str,
    pub updated: String,
    pub description: &'static str,
    pub usage: BTreeMap<&'static str, &'static str>,
    pub parameters: BTreeMap<&'static str, &'static str>,
    pub examples: BTreeMap<&'static str, &'static str>,
    pub response_format: BTreeMap<&'static str, &'static str>,
    pub message: &'static str,
}

impl HomePayload {
    pub fn new(updated: String) -> Self {
        Self {
            project: "TopAnhAnime API",
            author: "truyentranh210",
            version: env!("CARGO_PKG_VERSION"),
            updated,
            description: "Search posts and list every image of a post on TopAnhAnime.",
            usage: BTreeMap::from([
                ("/home", "Show this help document"),
                ("/anh?s=<keyword>", "Search posts by keyword"),
                ("/anh/page/<n>?s=<keyword>", "Search posts by keyword, page n"),
                ("/anh?url=<post-url>", "List every image of the given post"),
            ]),
            parameters: BTreeMap::from([
                ("s", "Search keyword (e.g. one piece, naruto, anime girl)"),
                ("url", "Absolute post URL (e.g. https://topanhanime.com/abc)"),
            ]),
            examples: BTreeMap::from([
                ("search", "/anh?s=anime"),
                ("search_page", "/anh/page/2?s=anime"),
                ("get_details", "/anh?url=https://topanhanime.com/truyen-tranh-sexy-001"),
            ]),
            response_format: BTreeMap::from([
                ("title", "Post or album title"),
                ("image_url", "Thumbnail URL (search results)"),
                ("post_link", "Post detail link (search results)"),
                ("images", "Image URLs in document order (post detail)"),
                ("image_count", "Number of images (post detail)"),
            ]),
            message: "API is up. Try /anh?s=anime or /anh?url=<post-url>.",
        }
    }
}
