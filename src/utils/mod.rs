use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// 与 `encodeURIComponent` 一致的保留字符集
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// 对查询参数值做百分号编码
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode_component("one piece"), "one%20piece");
        assert_eq!(encode_component("a&b=c/d?"), "a%26b%3Dc%2Fd%3F");
        assert_eq!(encode_component("it's-(ok)_~*!."), "it's-(ok)_~*!.");
        assert_eq!(encode_component("ảnh"), "%E1%BA%A3nh");
    }
}
