//! TopAnh 帖子详情解析
//!
//! 负责标题与正文图片列表的提取

use crate::core::error::{Result, ScrapeError};
use crate::core::markup::Page;
use crate::core::model::PostDetail;

use super::SiteSelectors;

/// 缺少标题时的占位符
pub const TITLE_NOT_FOUND: &str = "title not found";

/// 解析帖子详情页
pub fn parse_detail_html(html: &str) -> Result<PostDetail> {
    let page = Page::parse(html);
    let s = SiteSelectors::get();

    let title = page
        .first(&s.entry_title)
        .and_then(|h1| h1.trimmed_text())
        .unwrap_or_else(|| TITLE_NOT_FOUND.to_string());

    if !page.contains(&s.entry_content) {
        return Err(ScrapeError::ContentNotFound);
    }

    let images = page
        .find(&s.content_image)
        .filter_map(|img| img.attr("src"))
        .filter(|src| !src.is_empty())
        .map(str::to_string)
        .collect();

    Ok(PostDetail::new(title, images))
}
