// src/core/net.rs
// Blocking HTTP GET with a bounded timeout and redirect policy.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::redirect::Policy;

use crate::config::consts::{BASE_URL, MAX_REDIRECTS, REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Result, ScrapeError, TransportKind};

/// Source of page text. The driver only ever needs a body or an error.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .redirect(Policy::limited(MAX_REDIRECTS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ScrapeError::transport(BASE_URL, classify(&e)))?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String> {
        let t = std::time::Instant::now();
        let body = self
            .client
            .get(url)
            .send()
            .and_then(|res| res.error_for_status())
            .and_then(|res| res.text())
            .map_err(|e| ScrapeError::transport(url, classify(&e)))?;
        logd!("GET {url}: {} bytes in {:?}", body.len(), t.elapsed());
        Ok(body)
    }
}

fn classify(e: &reqwest::Error) -> TransportKind {
    if e.is_timeout() {
        TransportKind::Timeout
    } else if e.is_redirect() {
        TransportKind::TooManyRedirects
    } else if let Some(status) = e.status() {
        TransportKind::Status(status.as_u16())
    } else {
        TransportKind::Request(e.to_string())
    }
}

/// Body text, or an empty page when the request fails for any reason.
/// The failure is logged with the URL; nothing is raised past this point.
pub fn fetch_or_empty(fetcher: &dyn Fetch, url: &str) -> String {
    match fetcher.get(url) {
        Ok(body) => body,
        Err(e) => {
            loge!("Failed to make request to url {url}: {e}");
            s!()
        }
    }
}

/// Absolute URL for an href scraped off a hockey-reference page.
pub fn absolute_url(href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return s!(href);
    }
    let path = href.trim_start_matches("www.hockey-reference.com").trim_start_matches('/');
    join!(BASE_URL, "/", path)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Down;
    impl Fetch for Down {
        fn get(&self, url: &str) -> Result<String> {
            Err(ScrapeError::transport(url, TransportKind::Timeout))
        }
    }

    #[test]
    fn failures_degrade_to_empty_text() {
        assert_eq!(fetch_or_empty(&Down, "https://example.invalid/"), "");
    }

    #[test]
    fn absolute_url_variants() {
        assert_eq!(absolute_url("/boxscores/201705120ANA.html"), "https://www.hockey-reference.com/boxscores/201705120ANA.html");
        assert_eq!(absolute_url("boxscores/x.html"), "https://www.hockey-reference.com/boxscores/x.html");
        assert_eq!(absolute_url("www.hockey-reference.com/boxscores/x.html"), "https://www.hockey-reference.com/boxscores/x.html");
        assert_eq!(absolute_url("https://a.b/c"), "https://a.b/c");
    }
}
