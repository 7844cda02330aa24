//! Shop-search URL construction
//!
//! Each supported platform has a fixed search template that takes the
//! URL-encoded "title author" query. Unrecognized platform keys fall
//! back to a generic Google search, so a stale selector value can never
//! break the link.

/// Selector entries as (value, visible label) pairs. The label's
/// parenthetical is informational; [`short_label`] strips it for the
/// link text.
pub const PLATFORMS: &[(&str, &str)] = &[
    ("dangdang", "Dangdang (当当)"),
    ("jd", "JD (京东)"),
    ("wechat", "WeRead (微信读书)"),
    ("baidu", "Baidu Yuedu (百度阅读)"),
    ("amazon", "Amazon"),
    ("google", "Google Books"),
    ("apple", "Apple Books"),
];

/// Build the search URL for `platform` from a book's title and author.
///
/// Apple has no public search endpoint, so it uses a Google
/// site-restricted query.
pub fn search_url(platform: &str, title: &str, author: &str) -> String {
    let query = urlencoding::encode(&format!("{title} {author}")).into_owned();
    match platform {
        "dangdang" => format!("http://search.dangdang.com/?key={query}"),
        "jd" => format!("https://search.jd.com/Search?keyword={query}"),
        "wechat" => format!("https://weread.qq.com/web/search/global?keyword={query}"),
        "baidu" => format!("https://yuedu.baidu.com/search?word={query}"),
        "amazon" => format!("https://www.amazon.com/s?k={query}"),
        "google" => format!("https://www.google.com/search?tbm=bks&q={query}"),
        "apple" => format!("https://www.google.com/search?q=site:books.apple.com+{query}"),
        _ => format!("https://www.google.com/search?q={query}"),
    }
}

/// Visible label for `platform`, or `None` for unknown keys.
pub fn platform_label(platform: &str) -> Option<&'static str> {
    PLATFORMS
        .iter()
        .find(|(value, _)| *value == platform)
        .map(|(_, label)| *label)
}

/// Label text before any parenthetical annotation, trimmed.
pub fn short_label(label: &str) -> &str {
    label.split('(').next().unwrap_or(label).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jd_url_encodes_title_and_author() {
        let url = search_url("jd", "Charlotte's Web", "E. B. White");
        assert_eq!(
            url,
            "https://search.jd.com/Search?keyword=Charlotte%27s%20Web%20E.%20B.%20White"
        );
    }

    #[test]
    fn test_unknown_platform_falls_back_to_google() {
        let url = search_url("taobao", "Holes", "Louis Sachar");
        assert_eq!(
            url,
            "https://www.google.com/search?q=Holes%20Louis%20Sachar"
        );
    }

    #[test]
    fn test_apple_uses_site_restricted_google() {
        let url = search_url("apple", "Matilda", "Roald Dahl");
        assert!(url.starts_with("https://www.google.com/search?q=site:books.apple.com+"));
    }

    #[test]
    fn test_every_platform_has_a_distinct_template() {
        let urls: Vec<String> = PLATFORMS
            .iter()
            .map(|(value, _)| search_url(value, "t", "a"))
            .collect();
        for (i, url) in urls.iter().enumerate() {
            assert!(urls.iter().skip(i + 1).all(|other| other != url));
        }
    }

    #[test]
    fn test_short_label_strips_parenthetical() {
        assert_eq!(short_label("JD (京东)"), "JD");
        assert_eq!(short_label("Amazon"), "Amazon");
        assert_eq!(short_label("  Baidu Yuedu  "), "Baidu Yuedu");
    }

    #[test]
    fn test_platform_label_lookup() {
        assert_eq!(platform_label("wechat"), Some("WeRead (微信读书)"));
        assert_eq!(platform_label("nope"), None);
    }
}
