//! 标记解析层 (Markup Parser)
//!
//! 对 `scraper` 的薄封装，只暴露按选择器查找、读取属性与文本三种能力。
//! `Html` 不是 `Send`，解析必须发生在最后一个 `.await` 之后。

use scraper::{ElementRef, Html, Selector};

/// 已解析的 HTML 文档
pub struct Page {
    html: Html,
}

impl Page {
    pub fn parse(text: &str) -> Self {
        Self {
            html: Html::parse_document(text),
        }
    }

    /// 按文档顺序返回所有匹配元素
    pub fn find<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = Node<'a>> + 'a {
        self.html.select(selector).map(Node)
    }

    /// 第一个匹配元素
    pub fn first<'a>(&'a self, selector: &'a Selector) -> Option<Node<'a>> {
        self.find(selector).next()
    }

    pub fn contains(&self, selector: &Selector) -> bool {
        self.html.select(selector).next().is_some()
    }
}

/// 文档中的单个元素
#[derive(Clone, Copy)]
pub struct Node<'a>(ElementRef<'a>);

impl<'a> Node<'a> {
    /// 后代元素 (不含自身)
    pub fn find(&self, selector: &'a Selector) -> impl Iterator<Item = Node<'a>> + use<'a> {
        self.0.select(selector).map(Node)
    }

    pub fn first(&self, selector: &'a Selector) -> Option<Node<'a>> {
        self.find(selector).next()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }

    /// 所有后代文本节点拼接后的内容
    pub fn text(&self) -> String {
        self.0.text().collect()
    }

    /// 去除首尾空白后的文本，空串视为缺失
    pub fn trimmed_text(&self) -> Option<String> {
        let text = self.text();
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}
