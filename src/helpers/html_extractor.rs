use once_cell::sync::Lazy;
use regex::Regex;
use crate::structs::form_field::FormField;
use crate::structs::form_info::FormInfo;

static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<title\b[^>]*>(.*?)</title>").expect("invalid regex"));
static META_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<meta\b[^>]*>").expect("invalid regex"));
static ANCHOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<a\b[^>]*>").expect("invalid regex"));
static FORM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)(<form\b[^>]*>)(.*?)</form>").expect("invalid regex"));
static INPUT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<input\b[^>]*>").expect("invalid regex"));
static NON_CONTENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<script\b.*?</script>|<style\b.*?</style>|<noscript\b.*?</noscript>")
        .expect("invalid regex")
});
static COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("invalid regex"));
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").expect("invalid regex"));
static BODY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<body\b[^>]*>(.*?)</body>").expect("invalid regex"));
static ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\s(content|href|action|method|type|name|placeholder)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>]+))"#)
        .expect("invalid regex")
});

/// Field extraction from raw HTML by pattern scanning. Deliberately
/// approximate: phishing pages are rarely well-formed, and the
/// analyzers only need signals, not a faithful DOM.
pub struct HtmlExtractor;

impl HtmlExtractor {
    pub fn title(html: &str) -> Option<String> {
        TITLE_RE.captures(html).map(|caps| {
            collapse_whitespace(&decode_entities(&caps[1]))
        }).filter(|t| !t.is_empty())
    }

    pub fn meta_description(html: &str) -> Option<String> {
        Self::meta_content(html, "description")
    }

    pub fn meta_keywords(html: &str) -> Vec<String> {
        Self::meta_content(html, "keywords")
            .map(|content| {
                content
                    .split(',')
                    .map(|kw| kw.trim().to_string())
                    .filter(|kw| !kw.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn links(html: &str, max: usize) -> Vec<String> {
        ANCHOR_RE
            .find_iter(html)
            .filter_map(|m| tag_attr(m.as_str(), "href"))
            .filter(|href| !href.is_empty())
            .take(max)
            .collect()
    }

    pub fn forms(html: &str) -> Vec<FormInfo> {
        FORM_RE
            .captures_iter(html)
            .map(|caps| {
                let open_tag = &caps[1];
                let body = &caps[2];

                let fields = INPUT_RE
                    .find_iter(body)
                    .map(|m| {
                        let tag = m.as_str();
                        FormField::new(
                            &tag_attr(tag, "type").unwrap_or_else(|| "text".to_string()),
                            &tag_attr(tag, "name").unwrap_or_default(),
                            &tag_attr(tag, "placeholder").unwrap_or_default(),
                        )
                    })
                    .collect();

                FormInfo {
                    action: tag_attr(open_tag, "action").unwrap_or_default(),
                    method: tag_attr(open_tag, "method")
                        .unwrap_or_else(|| "get".to_string())
                        .to_lowercase(),
                    fields,
                }
            })
            .collect()
    }

    pub fn visible_text(html: &str, max_chars: usize) -> String {
        // Body only when the page declares one; head titles and meta
        // noise would otherwise leak into the analyzed text.
        let scope = BODY_RE
            .captures(html)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .unwrap_or(html);

        let without_comments = COMMENT_RE.replace_all(scope, " ");
        let without_scripts = NON_CONTENT_RE.replace_all(&without_comments, " ");
        let without_tags = TAG_RE.replace_all(&without_scripts, " ");
        let text = collapse_whitespace(&decode_entities(&without_tags));
        truncate_chars(&text, max_chars)
    }

    fn meta_content(html: &str, meta_name: &str) -> Option<String> {
        META_RE
            .find_iter(html)
            .map(|m| m.as_str())
            .find(|tag| {
                tag_attr(tag, "name")
                    .map(|n| n.eq_ignore_ascii_case(meta_name))
                    .unwrap_or(false)
            })
            .and_then(|tag| tag_attr(tag, "content"))
            .map(|content| collapse_whitespace(&decode_entities(&content)))
            .filter(|content| !content.is_empty())
    }
}

fn tag_attr(tag: &str, name: &str) -> Option<String> {
    ATTR_RE.captures_iter(tag).find_map(|caps| {
        if !caps[1].eq_ignore_ascii_case(name) {
            return None;
        }
        caps.get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map(|m| m.as_str().to_string())
    })
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>
    Secure   Login &amp; Verification
  </title>
  <meta content="Verify your account now" name="description">
  <meta name="keywords" content="banking, login , secure">
  <script>var tracked = "<div>not text</div>";</script>
  <style>.hidden { display: none; }</style>
</head>
<body>
  <!-- promo block -->
  <p>Your account has been suspended.&nbsp;Act now.</p>
  <a href="https://evil.example/login">Sign in</a>
  <a href='/reset'>Reset password</a>
  <a name="anchor-without-href">skip me</a>
  <form action="/login" method="POST">
    <input type="text" name="user" placeholder="Email">
    <input type="password" name="pass">
  </form>
</body>
</html>"#;

    #[test]
    fn test_title_is_decoded_and_collapsed() {
        assert_eq!(
            HtmlExtractor::title(PAGE),
            Some("Secure Login & Verification".to_string())
        );
    }

    #[test]
    fn test_meta_extraction_ignores_attribute_order() {
        assert_eq!(
            HtmlExtractor::meta_description(PAGE),
            Some("Verify your account now".to_string())
        );
        assert_eq!(
            HtmlExtractor::meta_keywords(PAGE),
            vec!["banking".to_string(), "login".to_string(), "secure".to_string()]
        );
    }

    #[test]
    fn test_links_respect_cap_and_skip_anchors_without_href() {
        let links = HtmlExtractor::links(PAGE, 50);
        assert_eq!(links, vec!["https://evil.example/login", "/reset"]);

        let capped = HtmlExtractor::links(PAGE, 1);
        assert_eq!(capped.len(), 1);
    }

    #[test]
    fn test_form_fields_are_extracted_with_defaults() {
        let forms = HtmlExtractor::forms(PAGE);
        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].action, "/login");
        assert_eq!(forms[0].method, "post");
        assert_eq!(forms[0].fields.len(), 2);
        assert_eq!(forms[0].fields[0].field_type, "text");
        assert_eq!(forms[0].fields[0].placeholder, "Email");
        assert!(forms[0].has_password_field());
    }

    #[test]
    fn test_visible_text_drops_scripts_styles_and_comments() {
        let text = HtmlExtractor::visible_text(PAGE, 10_000);
        assert!(text.contains("Your account has been suspended. Act now."));
        assert!(!text.contains("tracked"));
        assert!(!text.contains("display: none"));
        assert!(!text.contains("promo block"));
    }

    #[test]
    fn test_visible_text_is_scoped_to_body_and_capped() {
        let text = HtmlExtractor::visible_text(PAGE, 10_000);
        assert!(!text.contains("Secure Login"));

        let capped = HtmlExtractor::visible_text(PAGE, 12);
        assert_eq!(capped, "Your account");
    }
}
