//! External link rendering
//!
//! Renders anchor fragments that open in a new tab without handing the
//! opener window to the target page. Translated variants look their
//! visible text up through the [`Translate`] trait.

/// Contract with the translation backend.
///
/// Given a translation key, return the display text for the active
/// locale. Everything else about the backend is out of scope here.
pub trait Translate {
    fn translate(&self, key: &str) -> String;
}

/// An anchor pointing at an external destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLink {
    text: String,
    href: String,
    id: Option<String>,
    title: Option<String>,
    class: String,
}

impl ExternalLink {
    /// Creates a link with the default styling class.
    pub fn new<T: Into<String>, H: Into<String>>(text: T, href: H) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
            id: None,
            title: None,
            class: "text-light".to_string(),
        }
    }

    /// Sets the element id.
    pub fn with_id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the hover title.
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the styling class.
    pub fn with_class<S: Into<String>>(mut self, class: S) -> Self {
        self.class = class.into();
        self
    }

    /// Renders the anchor as an HTML fragment.
    ///
    /// Attribute values and the visible text are escaped, so untrusted
    /// input cannot break out of the fragment.
    pub fn to_html(&self) -> String {
        let mut html = format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\"",
            escape_html(&self.href)
        );
        if let Some(id) = &self.id {
            html.push_str(&format!(" id=\"{}\"", escape_html(id)));
        }
        html.push_str(&format!(" class=\"{}\"", escape_html(&self.class)));
        if let Some(title) = &self.title {
            html.push_str(&format!(" title=\"{}\"", escape_html(title)));
        }
        html.push_str(" dir=\"auto\">");
        html.push_str(&escape_html(&self.text));
        html.push_str("</a>");
        html
    }
}

/// An external link whose visible text comes from a translation key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedExternalLink {
    i18n_key: String,
    href: String,
}

impl TranslatedExternalLink {
    pub fn new<K: Into<String>, H: Into<String>>(i18n_key: K, href: H) -> Self {
        Self {
            i18n_key: i18n_key.into(),
            href: href.into(),
        }
    }

    /// The translation key looked up for the visible text.
    pub fn i18n_key(&self) -> &str {
        &self.i18n_key
    }

    /// The destination URL.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Resolves the key through the backend and renders the anchor.
    pub fn to_html<T: Translate>(&self, translator: &T) -> String {
        ExternalLink::new(translator.translate(&self.i18n_key), &self.href).to_html()
    }
}

/// Escapes text for use in a double-quoted attribute or element body.
fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stand-in backend that hands the key back as display text.
    struct KeyEcho;

    impl Translate for KeyEcho {
        fn translate(&self, key: &str) -> String {
            key.to_string()
        }
    }

    #[test]
    fn test_renders_basic_anchor() {
        let html = ExternalLink::new("Release notes", "https://example.com").to_html();
        assert_eq!(
            html,
            "<a href=\"https://example.com\" target=\"_blank\" \
             rel=\"noopener noreferrer\" class=\"text-light\" \
             dir=\"auto\">Release notes</a>"
        );
    }

    #[test]
    fn test_renders_optional_attributes() {
        let html = ExternalLink::new("Release notes", "https://example.com")
            .with_id("release-link")
            .with_title("What changed")
            .to_html();
        assert_eq!(
            html,
            "<a href=\"https://example.com\" target=\"_blank\" \
             rel=\"noopener noreferrer\" id=\"release-link\" \
             class=\"text-light\" title=\"What changed\" \
             dir=\"auto\">Release notes</a>"
        );
    }

    #[test]
    fn test_replaced_class_renders_instead_of_default() {
        let html = ExternalLink::new("Release notes", "https://example.com")
            .with_class("card-link")
            .to_html();
        assert_eq!(
            html,
            "<a href=\"https://example.com\" target=\"_blank\" \
             rel=\"noopener noreferrer\" class=\"card-link\" \
             dir=\"auto\">Release notes</a>"
        );
    }

    #[test]
    fn test_escapes_text_and_attributes() {
        let html = ExternalLink::new("Tom & Jerry <3", "https://example.com/?a=1&b=2").to_html();
        assert!(html.contains("href=\"https://example.com/?a=1&amp;b=2\""));
        assert!(html.contains(">Tom &amp; Jerry &lt;3</a>"));
    }

    #[test]
    fn test_escapes_quotes_in_attributes() {
        let html = ExternalLink::new("x", "https://example.com")
            .with_title("say \"hi\"")
            .to_html();
        assert!(html.contains("title=\"say &quot;hi&quot;\""));
    }

    #[test]
    fn test_translated_link_renders_with_i18n_key() {
        let link = TranslatedExternalLink::new("testi18nKey", "https://example.com");
        assert_eq!(link.i18n_key(), "testi18nKey");
        assert_eq!(link.href(), "https://example.com");
        assert_eq!(
            link.to_html(&KeyEcho),
            "<a href=\"https://example.com\" target=\"_blank\" \
             rel=\"noopener noreferrer\" class=\"text-light\" \
             dir=\"auto\">testi18nKey</a>"
        );
    }

    #[test]
    fn test_translated_link_uses_backend_text() {
        struct FixedText;
        impl Translate for FixedText {
            fn translate(&self, _key: &str) -> String {
                "Read the docs".to_string()
            }
        }
        let link = TranslatedExternalLink::new("landing.docs", "https://docs.example.com");
        let html = link.to_html(&FixedText);
        assert!(html.contains(">Read the docs</a>"));
        assert!(!html.contains("landing.docs"));
    }
}
