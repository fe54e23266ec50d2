//! 请求解析 (Request Dispatcher)
//!
//! 根据路径与查询参数决定本次请求走哪条流水线。

use std::sync::OnceLock;

use regex::Regex;

use crate::core::error::{Result, ScrapeError};

/// 帮助文档路径
const HOME_PATHS: [&str; 2] = ["/home", "/anh/home"];

/// 解析后的请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    Home,
    Detail { url: String },
    Search { keyword: String, page: u32 },
}

static PAGE_RE: OnceLock<Regex> = OnceLock::new();

fn page_re() -> &'static Regex {
    PAGE_RE.get_or_init(|| Regex::new(r"page/(\d+)").expect("page pattern"))
}

/// 从路径中提取页码，缺失或溢出时为 1
pub fn page_number(path: &str) -> u32 {
    page_re()
        .captures(path)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(1)
}

/// 取查询参数的第一个非空值
fn first_param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .filter(|v| !v.is_empty())
}

/// 解析请求：帮助页 > `url` > `s` > 缺参
pub fn resolve(path: &str, query: Option<&str>) -> Result<ApiRequest> {
    if HOME_PATHS.contains(&path) {
        return Ok(ApiRequest::Home);
    }

    let pairs: Vec<(String, String)> = query
        .map(|q| serde_urlencoded::from_str(q).unwrap_or_default())
        .unwrap_or_default();

    if let Some(url) = first_param(&pairs, "url") {
        return Ok(ApiRequest::Detail {
            url: url.to_string(),
        });
    }

    if let Some(keyword) = first_param(&pairs, "s") {
        return Ok(ApiRequest::Search {
            keyword: keyword.to_string(),
            page: page_number(path),
        });
    }

    Err(ScrapeError::MissingParameter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_number_from_path() {
        assert_eq!(page_number("/anh/page/3"), 3);
        assert_eq!(page_number("/.netlify/functions/anh/page/12/"), 12);
        assert_eq!(page_number("/anh"), 1);
        assert_eq!(page_number("/anh/page/"), 1);
        assert_eq!(page_number("/anh/page/99999999999999"), 1);
    }

    #[test]
    fn search_with_page_segment() {
        assert_eq!(
            resolve("/anh/page/3", Some("s=x")).unwrap(),
            ApiRequest::Search {
                keyword: "x".into(),
                page: 3
            }
        );
        assert_eq!(
            resolve("/anh", Some("s=one+piece")).unwrap(),
            ApiRequest::Search {
                keyword: "one piece".into(),
                page: 1
            }
        );
    }

    #[test]
    fn url_takes_precedence_over_search() {
        let req = resolve(
            "/anh/page/4",
            Some("s=x&url=https%3A%2F%2Ftopanhanime.com%2Fabc"),
        )
        .unwrap();
        assert_eq!(
            req,
            ApiRequest::Detail {
                url: "https://topanhanime.com/abc".into()
            }
        );
    }

    #[test]
    fn first_occurrence_wins() {
        assert_eq!(
            resolve("/anh", Some("s=first&s=second")).unwrap(),
            ApiRequest::Search {
                keyword: "first".into(),
                page: 1
            }
        );
    }

    #[test]
    fn missing_or_empty_parameters() {
        assert!(matches!(resolve("/anh", None), Err(ScrapeError::MissingParameter)));
        assert!(matches!(
            resolve("/anh", Some("s=&url=")),
            Err(ScrapeError::MissingParameter)
        ));
        assert!(matches!(
            resolve("/anh", Some("q=x")),
            Err(ScrapeError::MissingParameter)
        ));
    }

    #[test]
    fn empty_url_falls_back_to_search() {
        assert_eq!(
            resolve("/anh", Some("url=&s=x")).unwrap(),
            ApiRequest::Search {
                keyword: "x".into(),
                page: 1
            }
        );
    }

    #[test]
    fn home_paths() {
        assert_eq!(resolve("/home", None).unwrap(), ApiRequest::Home);
        assert_eq!(resolve("/anh/home", Some("s=x")).unwrap(), ApiRequest::Home);
        assert!(resolve("/anh/home/extra", None).is_err());
    }
}
