use crate::config::ScanConfig;
use crate::constants;
use crate::models::ProbeResult;
use anyhow::{Context, Result};
use reqwest::blocking::{Client, ClientBuilder};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

/// Decides whether a single target is a WordPress installation.
#[derive(Clone)]
pub struct Detector {
    client: Client,
}

impl Detector {
    pub fn new(config: &ScanConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Detector { client })
    }

    /// Probes one target and returns a verdict.
    ///
    /// Header inspection runs first (one request, high confidence); path
    /// probing is the fallback for installations that suppress identifying
    /// headers. A transport failure on the primary request is terminal for
    /// the target; failures on individual path probes are treated as "not
    /// found on this path".
    pub fn probe(&self, target: &str) -> ProbeResult {
        let url = normalize_target(target);

        let response = match self.client.get(&url).send() {
            Ok(response) => response,
            Err(e) => return ProbeResult::Error(e.to_string()),
        };

        let detected = headers_indicate_wordpress(response.headers());
        // Release the connection before issuing any follow-up requests
        drop(response);

        if detected {
            return ProbeResult::Detected;
        }

        for path in constants::WORDPRESS_PATHS {
            let probe_url = format!("{}{}", url.trim_end_matches('/'), path);
            if let Ok(response) = self.client.get(&probe_url).send() {
                if response.status() == StatusCode::OK {
                    return ProbeResult::Detected;
                }
            }
        }

        ProbeResult::NotDetected
    }
}

/// Prefixes `http://` when the target carries no scheme. Idempotent.
pub fn normalize_target(target: &str) -> String {
    if target.starts_with("http://") || target.starts_with("https://") {
        target.to_string()
    } else {
        format!("http://{}", target)
    }
}

fn headers_indicate_wordpress(headers: &HeaderMap) -> bool {
    for (name, value) in headers {
        let Ok(value) = value.to_str() else {
            continue;
        };
        let value = value.to_ascii_lowercase();
        // Header names from reqwest are already lowercase
        match name.as_str() {
            "x-powered-by" if value.contains("wordpress") => return true,
            "link" if value.contains("https://api.w.org/") => return true,
            _ => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderName, HeaderValue};

    #[test]
    fn normalize_prefixes_missing_scheme() {
        assert_eq!(normalize_target("example.com"), "http://example.com");
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize_target("example.com");
        assert_eq!(normalize_target(&once), once);
    }

    #[test]
    fn normalize_leaves_https_alone() {
        assert_eq!(
            normalize_target("https://example.com"),
            "https://example.com"
        );
    }

    fn header_map(name: &str, value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            name.parse::<HeaderName>().unwrap(),
            HeaderValue::from_str(value).unwrap(),
        );
        headers
    }

    #[test]
    fn powered_by_header_matches_case_insensitively() {
        let headers = header_map("X-Powered-By", "PHP/7.4, WordPress");
        assert!(headers_indicate_wordpress(&headers));
    }

    #[test]
    fn link_header_matches_rest_api_hint() {
        let headers = header_map("Link", "<https://api.w.org/>; rel=\"https://api.w.org/\"");
        assert!(headers_indicate_wordpress(&headers));
    }

    #[test]
    fn unrelated_headers_do_not_match() {
        let headers = header_map("X-Powered-By", "PHP/8.1");
        assert!(!headers_indicate_wordpress(&headers));
    }
}
