//! TopAnh 选择器
//!
//! 预编译的 CSS 选择器，与站点现网标记一一对应

use std::sync::OnceLock;

use scraper::Selector;

/// 站点选择器集合
pub struct SiteSelectors {
    /// 搜索结果条目 (三种列表布局)
    pub result_item: Selector,
    pub anchor: Selector,
    pub image: Selector,
    pub result_title: Selector,
    pub entry_title: Selector,
    pub entry_content: Selector,
    /// 正文容器内的图片
    pub content_image: Selector,
}

static SELECTORS: OnceLock<SiteSelectors> = OnceLock::new();

fn compile(css: &str) -> Selector {
    // 常量选择器，解析失败属于编码错误
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e}"))
}

impl SiteSelectors {
    /// 获取全局选择器实例
    pub fn get() -> &'static SiteSelectors {
        SELECTORS.get_or_init(|| SiteSelectors {
            result_item: compile("div.bs, div.utao, div.post-item"),
            anchor: compile("a"),
            image: compile("img"),
            result_title: compile("h5.post-title"),
            entry_title: compile("h1.entry-title"),
            entry_content: compile("div.entry-content"),
            content_image: compile("div.entry-content img"),
        })
    }
}
