use std::time::Duration;

use futures::Stream;
use futures::stream::unfold;
use tokio::time::MissedTickBehavior;

use crate::core::{MergedResult, NewsClient};
use crate::source::Source;

/// Default refresh cadence of the feed.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(15);

/// Re-runs [`fetch_all`](super::fetch_all) on a fixed interval, yielding one
/// [`MergedResult`] per tick.
///
/// The first item is produced immediately; each subsequent tick reruns the
/// whole pipeline from scratch with no carried state, so a failed cycle is
/// simply retried by the next one. Dropping the stream stops the polling.
pub fn poll(
    client: NewsClient,
    sources: Vec<Source>,
    every: Duration,
) -> impl Stream<Item = MergedResult> {
    let mut ticker = tokio::time::interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    unfold(
        (client, sources, ticker),
        |(client, sources, mut ticker)| async move {
            ticker.tick().await;
            let merged = super::fetch_all(&client, &sources).await;
            Some((merged, (client, sources, ticker)))
        },
    )
}
