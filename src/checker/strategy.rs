// src/checker/strategy.rs
// =============================================================================
// Runs the liveness check over a whole list of bookmarks.
//
// There are two ways to do it:
// - Concurrent: keep up to `max_in_flight` HEAD requests going at once on
//   one shared client until every link is done. A single batch deadline caps
//   the whole run; anything still waiting when it passes is marked
//   "Failed to check".
// - Sequential: one request at a time, each with its own timeout. This is
//   slow for big bookmark collections, so we ask before starting.
//
// The strategy is picked once, up front (CheckStrategy::detect), and handed
// to the Checker. The checking code never has to ask "which mode am I in?"
// halfway through.
//
// Rust concepts:
// - StreamExt::buffered(n): run up to n futures at once, results in input order
// - tokio::time::timeout_at: give up on a future at a fixed point in time
// =============================================================================

use super::http::{build_client, probe, LinkStatus};
use super::progress::Progress;
use crate::bookmarks::BookmarkRecord;
use crate::prompt::Confirm;
use anyhow::Result;
use futures::stream::{self, StreamExt};
use std::time::Duration;
use tokio::runtime::{Handle, RuntimeFlavor};
use tokio::time::{timeout_at, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStrategy {
    /// All requests in flight at once, joined at the end
    Concurrent,
    /// One request at a time
    Sequential,
}

impl CheckStrategy {
    /// Picks the strategy the current environment can support.
    ///
    /// Fanning out hundreds of requests only pays off on a multi-threaded
    /// tokio runtime. Anywhere else we fall back to one at a time.
    pub fn detect() -> Self {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                CheckStrategy::Concurrent
            }
            _ => CheckStrategy::Sequential,
        }
    }
}

/// Timeouts and display settings for a check run
#[derive(Debug, Clone)]
pub struct CheckSettings {
    /// Per-request limit for the sequential strategy
    pub request_timeout: Duration,
    /// Deadline for the whole concurrent batch
    pub batch_timeout: Duration,
    /// How many requests the concurrent strategy keeps open at once
    pub max_in_flight: usize,
    pub show_progress: bool,
}

impl Default for CheckSettings {
    fn default() -> Self {
        CheckSettings {
            request_timeout: Duration::from_secs(5),
            batch_timeout: Duration::from_secs(30),
            max_in_flight: 50,
            show_progress: true,
        }
    }
}

const SEQUENTIAL_WARNING: &str = "Concurrent link checking isn't available here, so each link \
will be checked one at a time.\nThis may take a few minutes for a large bookmark collection.\n\
Do you want to proceed [Y/n]? ";

/// The records coming out of a check run
#[derive(Debug)]
pub struct Checked {
    pub records: Vec<BookmarkRecord>,
    /// false when the user declined the check and no status was attached
    pub annotated: bool,
}

pub struct Checker {
    strategy: CheckStrategy,
    settings: CheckSettings,
}

impl Checker {
    pub fn new(strategy: CheckStrategy, settings: CheckSettings) -> Self {
        Checker { strategy, settings }
    }

    pub fn strategy(&self) -> CheckStrategy {
        self.strategy
    }

    // Checks every record and returns them with a status attached
    //
    // Returns the records untouched (no status) if the user declines the
    // sequential fallback.
    pub async fn check(
        &self,
        records: Vec<BookmarkRecord>,
        confirm: &mut dyn Confirm,
    ) -> Result<Checked> {
        info!(strategy = ?self.strategy, links = records.len(), "checking links");

        let checked = match self.strategy {
            CheckStrategy::Concurrent => self.check_concurrent(records).await?,
            CheckStrategy::Sequential => {
                if !confirm.confirm(SEQUENTIAL_WARNING)? {
                    info!("sequential link check declined");
                    return Ok(Checked {
                        records,
                        annotated: false,
                    });
                }
                self.check_sequential(records).await?
            }
        };

        let not_found = count_not_found(&checked);
        println!(
            "{} links returned \"404 Not Found\" and therefore may be dead.",
            not_found
        );
        Ok(Checked {
            records: checked,
            annotated: true,
        })
    }

    async fn check_concurrent(&self, records: Vec<BookmarkRecord>) -> Result<Vec<BookmarkRecord>> {
        // No per-request timeout: the batch deadline below covers everything
        let client = build_client(None)?;
        let deadline = Instant::now() + self.settings.batch_timeout;
        let progress = Progress::new(records.len(), self.settings.show_progress);
        progress.start();

        let checks = records.into_iter().map(|record| {
            let client = &client;
            let progress = &progress;
            async move {
                let status = match timeout_at(deadline, probe(client, &record.url)).await {
                    Ok(status) => status,
                    Err(_) => {
                        debug!(url = %record.url, "batch deadline passed before the link answered");
                        LinkStatus::FailedToCheck
                    }
                };
                progress.tick();
                record.with_status(status)
            }
        });

        // buffered() keeps the input order no matter which check finishes
        // first, and never opens more than max_in_flight connections
        Ok(stream::iter(checks)
            .buffered(self.settings.max_in_flight.max(1))
            .collect()
            .await)
    }

    async fn check_sequential(&self, records: Vec<BookmarkRecord>) -> Result<Vec<BookmarkRecord>> {
        let client = build_client(Some(self.settings.request_timeout))?;
        let progress = Progress::new(records.len(), self.settings.show_progress);
        progress.start();

        let mut checked = Vec::with_capacity(records.len());
        for record in records {
            let status = probe(&client, &record.url).await;
            progress.tick();
            checked.push(record.with_status(status));
        }
        Ok(checked)
    }
}

pub fn count_not_found(records: &[BookmarkRecord]) -> usize {
    records
        .iter()
        .filter(|r| r.status == Some(LinkStatus::NotFound))
        .count()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why borrow the client inside the async blocks?
//    - buffered() polls every future on this task; nothing is spawned
//    - So the futures can simply borrow `client` and `progress`, which live
//      until the stream is collected. No Arc or clone() needed.
//
// 2. Why cap the number of requests in flight?
//    - Every open request holds a socket (a file descriptor)
//    - A few thousand bookmarks at once would hit the process's open-file
//      limit, and links that are fine would come back "Failed to check"
//
// 3. Why timeout_at instead of timeout?
//    - timeout(d) would give every request its own d seconds
//    - timeout_at(deadline) gives all of them the same finishing line
// -----------------------------------------------------------------------------
