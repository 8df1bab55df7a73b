//! Search console actions that are announced but not performed.
//!
//! Submitting the sitemap and asking for (re)indexing need an authenticated
//! console API that seoprobe does not talk to. Both functions only log what
//! would be sent and return it, so callers and tests can see the intent.

use crate::site::SiteConfig;

/// Announces the sitemap submission and returns the sitemap URL.
pub fn submit_sitemap(site: &SiteConfig) -> String {
    let sitemap_url = site.sitemap_url();
    log::info!("Sitemap submission (not sent): {}", sitemap_url);
    sitemap_url
}

/// Announces indexing requests for `urls`, or for every priority page when
/// `urls` is `None`. Returns the URLs that would have been submitted.
pub fn request_indexing(site: &SiteConfig, urls: Option<&[String]>) -> Vec<String> {
    let urls = urls.unwrap_or(&site.pages).to_vec();
    for url in &urls {
        log::info!("Indexing request (not sent): {}", url);
    }
    urls
}
