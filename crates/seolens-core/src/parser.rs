//! HTML parsing into a structural snapshot, and optional page fetching

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

#[cfg(feature = "fetch")]
use anyhow::{Context, Result, anyhow};

use crate::snapshot::{ImageRef, PageSnapshot};
use crate::text::clean_text;

/// Fetch HTML content from a URL.
///
/// Requires the `fetch` feature (needs reqwest). Redirects are followed by
/// the client; anything that is not a success status or not an HTML
/// document is rejected here so the audit only ever sees page markup.
#[cfg(feature = "fetch")]
pub async fn fetch_html(url: &str) -> Result<String> {
    let client = reqwest::Client::builder()
        .user_agent(format!(
            "Mozilla/5.0 (compatible; seolens/{})",
            env!("CARGO_PKG_VERSION")
        ))
        .timeout(std::time::Duration::from_secs(10))
        .build()?;

    let response = client.get(url).send().await.context("failed to fetch URL")?;

    let status = response.status();
    if !status.is_success() {
        return Err(anyhow!("unexpected HTTP status {status}"));
    }

    if let Some(content_type) = response.headers().get(reqwest::header::CONTENT_TYPE) {
        let content_type = content_type.to_str().unwrap_or_default();
        if !content_type.contains("html") {
            return Err(anyhow!("not an HTML document: {content_type}"));
        }
    }

    response
        .text()
        .await
        .context("failed to read response body")
}

/// Strip script, style, and other non-content blocks plus comments, so
/// their text can never leak into extracted paragraphs.
fn sanitize_html(html: &str) -> String {
    static RE_TAG_BLOCKS: Lazy<Vec<Regex>> = Lazy::new(|| {
        [
            r"(?is)<script[^>]*?>[\s\S]*?</script>",
            r"(?is)<style[^>]*?>[\s\S]*?</style>",
            r"(?is)<noscript[^>]*?>[\s\S]*?</noscript>",
            r"(?is)<template[^>]*?>[\s\S]*?</template>",
        ]
        .into_iter()
        .map(|pattern| Regex::new(pattern).expect("invalid block regex"))
        .collect()
    });
    static RE_COMMENT: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?is)<!--.*?-->").expect("invalid comment regex"));

    let mut clean = html.to_string();
    for re in RE_TAG_BLOCKS.iter() {
        clean = re.replace_all(&clean, "").into_owned();
    }

    RE_COMMENT.replace_all(&clean, "").into_owned()
}

/// Parse an HTML document into the plain structural facts the audit
/// consumes. Total: malformed markup simply yields fewer facts.
pub fn parse_snapshot(html: &str) -> PageSnapshot {
    let document = Html::parse_document(&sanitize_html(html));

    PageSnapshot {
        title: first_text(&document, "title"),
        meta_description: first_attr(&document, "meta[name='description']", "content"),
        h1s: all_text(&document, "h1"),
        h2s: all_text(&document, "h2"),
        paragraphs: all_text(&document, "p"),
        images: images(&document),
    }
}

fn first_text(document: &Html, selector_str: &str) -> String {
    match Selector::parse(selector_str) {
        Ok(selector) => document
            .select(&selector)
            .next()
            .map(|element| clean_text(&element.text().collect::<String>()))
            .unwrap_or_default(),
        Err(_) => String::new(),
    }
}

fn first_attr(document: &Html, selector_str: &str, attr: &str) -> String {
    match Selector::parse(selector_str) {
        Ok(selector) => document
            .select(&selector)
            .next()
            .and_then(|element| element.value().attr(attr))
            .map(clean_text)
            .unwrap_or_default(),
        Err(_) => String::new(),
    }
}

fn all_text(document: &Html, selector_str: &str) -> Vec<String> {
    match Selector::parse(selector_str) {
        Ok(selector) => document
            .select(&selector)
            .map(|element| clean_text(&element.text().collect::<String>()))
            .collect(),
        Err(_) => Vec::new(),
    }
}

fn images(document: &Html) -> Vec<ImageRef> {
    match Selector::parse("img") {
        Ok(selector) => document
            .select(&selector)
            .map(|element| ImageRef {
                src: element.value().attr("src").unwrap_or_default().to_string(),
                alt: clean_text(element.value().attr("alt").unwrap_or_default()),
            })
            .collect(),
        Err(_) => Vec::new(),
    }
}
