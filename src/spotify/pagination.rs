use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{error::FetchError, info, types::Page};

use super::SpotifyClient;

/// Lets a progress line through at most once per `interval`.
#[derive(Debug, Clone)]
pub struct ProgressThrottle {
    interval: Duration,
    last: Instant,
}

impl ProgressThrottle {
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            last: start,
        }
    }

    /// Whether a line may be logged at `now`. Resets the window when it may.
    pub fn ready(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) > self.interval {
            self.last = now;
            true
        } else {
            false
        }
    }
}

impl SpotifyClient {
    /// Walks a paging object from `url` to its last page and returns every item
    /// in server order.
    ///
    /// `params` only go on the first request; `next` cursors are complete URLs.
    /// There is no page limit. Any page failing after its retries fails the
    /// whole listing.
    pub async fn list<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<T>, FetchError> {
        let mut throttle = ProgressThrottle::new(self.progress_interval, Instant::now());

        let first: Page<T> = self.get_page(url, params).await?;
        let mut items = first.items;
        let mut total = first.total;
        let mut next = first.next;

        while let Some(cursor) = next {
            if throttle.ready(Instant::now()) {
                info!("Loaded {}/{} items", items.len(), total);
            }

            let page: Page<T> = self.get_page(&cursor, &[]).await?;
            items.extend(page.items);
            total = page.total;
            next = page.next;
        }

        Ok(items)
    }

    /// [`SpotifyClient::list`] with untyped items.
    pub async fn list_values(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<Value>, FetchError> {
        self.list(url, params).await
    }

    async fn get_page<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<Page<T>, FetchError> {
        self.get_json(url, params).await
    }
}
