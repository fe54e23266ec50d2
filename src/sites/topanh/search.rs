//! TopAnh 搜索解析
//!
//! 负责搜索 URL 构建与结果列表提取

use tracing::debug;

use crate::core::markup::{Node, Page};
use crate::core::model::SearchResultItem;
use crate::utils::encode_component;

use super::SiteSelectors;

/// 缺少标题时的占位符
pub const NO_TITLE: &str = "no title";

/// 构建搜索页 URL；第一页不带 `/page/1/` 段
pub fn build_search_url(base: &str, keyword: &str, page: u32) -> String {
    let keyword = encode_component(keyword);
    if page > 1 {
        format!("{}/page/{}/?s={}", base, page, keyword)
    } else {
        format!("{}/?s={}", base, keyword)
    }
}

/// 拼接所有匹配元素的文本并去除首尾空白，空串视为缺失
fn joined_text<'a>(nodes: impl Iterator<Item = Node<'a>>) -> Option<String> {
    let text: String = nodes.map(|n| n.text()).collect();
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// 解析搜索结果页
pub fn parse_search_html(html: &str) -> Vec<SearchResultItem> {
    let page = Page::parse(html);
    let s = SiteSelectors::get();

    let candidates: Vec<Node> = page.find(&s.result_item).collect();
    debug!(candidates = candidates.len(), "search candidates matched");

    candidates
        .into_iter()
        .filter_map(|item| {
            let link = item.first(&s.anchor)?;
            let image = item.first(&s.image)?;

            let title = link
                .attr("title")
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .or_else(|| joined_text(item.find(&s.result_title)))
                .unwrap_or_else(|| NO_TITLE.to_string());

            Some(SearchResultItem {
                title,
                image_url: image.attr("src").map(str::to_string),
                post_link: link.attr("href").map(str::to_string),
            })
        })
        .collect()
}
