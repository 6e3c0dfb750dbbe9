use scraper::{Html, Selector};
use tracing::{debug, error};

/// Returns the `href` value of every anchor element in `markup`, in
/// document order.
///
/// Anchors without an `href` attribute are skipped. Any parse trouble is
/// logged and yields an empty vector; this function never fails.
pub fn extract_links(markup: &str) -> Vec<String> {
    let selector = match Selector::parse("a") {
        Ok(selector) => selector,
        Err(err) => {
            error!(error = %err, "failed to build anchor selector");
            return Vec::new();
        }
    };

    let fragment = Html::parse_fragment(markup);
    let links: Vec<String> = fragment
        .select(&selector)
        .filter_map(|anchor| anchor.value().attr("href"))
        .map(str::to_string)
        .collect();

    debug!(count = links.len(), "extracted anchor links");
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_come_back_in_document_order() {
        let markup = r#"<p><a href="http://a">1</a> text <a href="http://b">2</a></p><a href="http://c">3</a>"#;
        assert_eq!(extract_links(markup), vec!["http://a", "http://b", "http://c"]);
    }

    #[test]
    fn anchors_without_href_are_skipped() {
        let markup = r#"<a name="top">no target</a><a href="http://x">ok</a>"#;
        assert_eq!(extract_links(markup), vec!["http://x"]);
    }

    #[test]
    fn plain_text_yields_no_links() {
        assert!(extract_links("just some prose, no markup").is_empty());
    }

    #[test]
    fn broken_markup_yields_no_links_instead_of_failing() {
        assert!(extract_links("<<< not => markup, just noise >>>").is_empty());
    }

    #[test]
    fn empty_input_yields_no_links() {
        assert!(extract_links("").is_empty());
    }
}
