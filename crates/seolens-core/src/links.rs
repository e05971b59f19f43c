//! Internal vs. external anchor classification

use crate::document::Element;
use tracing::debug;
use url::Url;

/// Anchor counts for one page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkCounts {
    pub internal: usize,
    pub external: usize,
}

/// Resolve an anchor's `href` against the page URL.
///
/// Returns `None` for anchors that do not point anywhere else: missing or
/// empty `href`, same-page fragments, and hrefs the URL parser rejects.
pub fn resolve_href(page: &Url, anchor: &Element) -> Option<Url> {
    let href = anchor.attr("href")?;
    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    match page.join(href) {
        Ok(resolved) => Some(resolved),
        Err(err) => {
            debug!("Skipping anchor with unresolvable href {:?}: {}", href, err);
            None
        }
    }
}

/// Split anchors into links to the page's own host and links elsewhere.
///
/// Hosts are compared as exact strings, so `www.example.com` and
/// `example.com` are different sites. Resolved URLs without a host (e.g.
/// `mailto:`) count as external.
pub fn classify_links(page: &Url, anchors: &[Element]) -> LinkCounts {
    let page_host = page.host_str().unwrap_or_default();

    anchors
        .iter()
        .filter_map(|anchor| resolve_href(page, anchor))
        .fold(LinkCounts::default(), |mut counts, target| {
            if target.host_str().unwrap_or_default() == page_host {
                counts.internal += 1;
            } else {
                counts.external += 1;
            }
            counts
        })
}
