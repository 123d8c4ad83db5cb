// src/checker/http.rs
// =============================================================================
// This module checks if a single URL is alive by making an HTTP HEAD request.
//
// Key functionality:
// - Makes HTTP HEAD requests (lightweight, no body download)
// - 404 means the page is gone, any other response means the site is up
// - Network errors, bad URLs and timeouts all become "Failed to check"
//
// Certificate validation is switched off for these probes: old bookmarks
// often point at sites with self-signed or expired certificates, and all we
// want to know is whether something answers.
//
// Rust concepts:
// - async/await: For concurrent network I/O
// - Enums: To represent the three possible outcomes
// - Display/FromStr: To turn a status into CSV text and back
// =============================================================================

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

// Chrome on Windows - some sites reject requests without a browser User-Agent
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/78.0.3904.87 Safari/537.36";

// Represents the status of a link after checking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkStatus {
    /// The server answered with anything other than 404
    Online,
    /// The server answered 404 Not Found
    NotFound,
    /// No answer: DNS failure, refused connection, bad URL, timeout, ...
    FailedToCheck,
}

impl LinkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkStatus::Online => "Online",
            LinkStatus::NotFound => "Not found",
            LinkStatus::FailedToCheck => "Failed to check",
        }
    }
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Online" => Ok(LinkStatus::Online),
            "Not found" => Ok(LinkStatus::NotFound),
            "Failed to check" => Ok(LinkStatus::FailedToCheck),
            other => Err(anyhow::anyhow!("unknown link status: {:?}", other)),
        }
    }
}

// Creates the HTTP client used for probing
//
// Parameters:
//   timeout: per-request timeout, or None when the caller enforces its own
//            deadline (the concurrent strategy does)
pub fn build_client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder()
        .user_agent(USER_AGENT)
        .danger_accept_invalid_certs(true)
        .redirect(reqwest::redirect::Policy::limited(10));

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder.build().context("failed to create HTTP client")
}

// Checks a single link
//
// Never fails: every kind of error is folded into FailedToCheck
pub async fn probe(client: &Client, url: &str) -> LinkStatus {
    match client.head(url).send().await {
        Ok(response) => status_for(response.status()),
        Err(e) => {
            debug!(url, error = %e, "link check failed");
            LinkStatus::FailedToCheck
        }
    }
}

fn status_for(code: StatusCode) -> LinkStatus {
    if code == StatusCode::NOT_FOUND {
        LinkStatus::NotFound
    } else {
        LinkStatus::Online
    }
}
