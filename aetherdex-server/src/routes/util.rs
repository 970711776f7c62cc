//! Shared URL/form parsing and HTML helpers for route handlers.

/// Parse URL-encoded form body into key-value pairs.
/// Handles `key=value&key2=value2` format (from HTMX POST bodies).
pub fn parse_form_body(body: &str) -> Vec<(String, String)> {
    if body.is_empty() {
        return Vec::new();
    }
    body.split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next()?;
            let val = parts.next().unwrap_or("");
            Some((percent_decode(key), percent_decode(val)))
        })
        .collect()
}

/// Percent-decode a URL-encoded value. Decoded bytes are read as UTF-8;
/// malformed escapes pass through literally.
pub fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => match bytes.get(i + 1..i + 3).and_then(hex_byte) {
                Some(val) => {
                    out.push(val);
                    i += 3;
                    continue;
                }
                None => out.push(b'%'),
            },
            b'+' => out.push(b' '),
            b => out.push(b),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_byte(pair: &[u8]) -> Option<u8> {
    let s = core::str::from_utf8(pair).ok()?;
    u8::from_str_radix(s, 16).ok()
}

/// Percent-encode a value for use in a query string.
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for b in input.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

/// Join pairs into `k=v&k2=v2`, encoding values.
pub fn encode_query(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{k}={}", percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Parse a query string into key-value pairs.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    let q = query.strip_prefix('?').unwrap_or(query);
    parse_form_body(q)
}

/// Helper to get a value by key from a list of key-value pairs.
pub fn get_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// `true` only for `"true"` or `"1"`.
pub fn get_flag(params: &[(String, String)], key: &str) -> bool {
    matches!(get_param(params, key), Some("true" | "1"))
}

/// Escape text for HTML element content and quoted attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// A double-quoted JavaScript string literal safe to embed in `<script>`.
pub fn js_string(input: &str) -> String {
    serde_json::Value::String(input.to_string())
        .to_string()
        .replace("</", "<\\/")
}

/// Error span rendered into the swap target.
pub fn error_fragment(message: &str) -> String {
    format!(
        r#"<span class="text-red-600">{}</span>"#,
        escape_html(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_form_body_works() {
        let pairs = parse_form_body("action=select&id=jotunn&slot=2");
        assert_eq!(pairs.len(), 3);
        assert_eq!(get_param(&pairs, "id"), Some("jotunn"));
        assert_eq!(get_param(&pairs, "slot"), Some("2"));
    }

    #[test]
    fn parse_form_body_empty() {
        assert!(parse_form_body("").is_empty());
        assert!(parse_form_body("&&").is_empty());
    }

    #[test]
    fn percent_decode_plus_as_space() {
        assert_eq!(percent_decode("shifted+jot"), "shifted jot");
    }

    #[test]
    fn percent_decode_hex() {
        assert_eq!(percent_decode("hello%20world"), "hello world");
        assert_eq!(percent_decode("a%2Cb"), "a,b");
    }

    #[test]
    fn percent_decode_multibyte_utf8() {
        assert_eq!(percent_decode("J%C3%B6tunn"), "Jötunn");
    }

    #[test]
    fn percent_decode_leaves_bad_escapes() {
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
    }

    #[test]
    fn percent_encode_round_trips() {
        let raw = r#"{"a": "b&c"} ö"#;
        assert_eq!(percent_decode(&percent_encode(raw)), raw);
        assert_eq!(percent_encode("shifted jot"), "shifted+jot");
    }

    #[test]
    fn encode_query_joins_pairs() {
        let query = encode_query(&[("search", "shifted jot".into()), ("page", "2".into())]);
        assert_eq!(query, "search=shifted+jot&page=2");
        assert_eq!(encode_query(&[]), "");
    }

    #[test]
    fn parse_query_strips_prefix() {
        let pairs = parse_query("?show=collected");
        assert_eq!(get_param(&pairs, "show"), Some("collected"));
    }

    #[test]
    fn flags() {
        let pairs = parse_query("?a=true&b=1&c=yes");
        assert!(get_flag(&pairs, "a"));
        assert!(get_flag(&pairs, "b"));
        assert!(!get_flag(&pairs, "c"));
        assert!(!get_flag(&pairs, "d"));
    }

    #[test]
    fn escape_html_escapes_markup() {
        assert_eq!(escape_html(r#"<b x="1">&'"#), "&lt;b x=&quot;1&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn js_string_is_quoted_and_script_safe() {
        assert_eq!(js_string("a\"b\n"), r#""a\"b\n""#);
        assert!(!js_string("</script>").contains("</"));
    }
}
